use crate::app::prompt::Prompt;
use crate::app::report;
use crate::core::engine::IntegrationEngine;
use crate::domain::ports::RecordSource;
use crate::utils::error::{ErrorCategory, Result};
use std::io::{BufRead, Write};

/// Interactive menu loop. A failed check (unknown id, unreachable service,
/// inconsistent data) ends that pair only; terminal I/O failures end the
/// session.
pub async fn run_interactive<S, R, W>(
    engine: &IntegrationEngine<S>,
    prompt: &mut Prompt<R, W>,
) -> Result<()>
where
    S: RecordSource,
    R: BufRead,
    W: Write,
{
    loop {
        let (user_id, product_id) = prompt.ask_ids()?;
        match engine.run(user_id, product_id).await {
            Ok(outcome) => prompt.say(&report::render(&outcome))?,
            Err(e) if e.category() == ErrorCategory::Io => return Err(e),
            Err(e) => {
                tracing::error!(
                    user_id,
                    product_id,
                    "❌ Check failed: {} (Category: {:?})",
                    e,
                    e.category()
                );
                prompt.say(&format!("❌ {}", e.user_friendly_message()))?;
            }
        }

        if !prompt.confirm_another()? {
            prompt.say("\nShutting down. Goodbye!")?;
            tracing::info!("✅ Session finished");
            return Ok(());
        }
    }
}
