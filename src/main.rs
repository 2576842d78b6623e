use clap::Parser;
use integration_guard::app::prompt::Prompt;
use integration_guard::app::{report, session};
use integration_guard::utils::{logger, validation::Validate};
use integration_guard::{CliConfig, HttpRecordSource, IntegrationEngine, IntegrationError};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting integration-guard CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(config).await {
        tracing::error!("❌ Run aborted: {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}

async fn run(config: CliConfig) -> Result<(), IntegrationError> {
    config.validate()?;

    let source = HttpRecordSource::new(&config)?;
    let engine = IntegrationEngine::new(source);

    println!(
        "{}",
        report::banner(&config.users_endpoint, &config.products_endpoint)
    );

    if let Some((user_id, product_id)) = config.preset_ids() {
        let outcome = engine.run(user_id, product_id).await?;
        println!("{}", report::render(&outcome));
        return Ok(());
    }

    let stdin = std::io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), std::io::stdout());
    session::run_interactive(&engine, &mut prompt).await
}
