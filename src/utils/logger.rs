use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Overrides the built-in directives when set, e.g. `integration_guard=trace`.
pub const LOG_ENV_VAR: &str = "INTEGRATION_GUARD_LOG";

/// Verbose mode also surfaces reqwest's request logging so slow or failing
/// lookups can be traced; hyper's connection chatter stays at warn.
fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "warn,integration_guard=debug,reqwest=debug"
    } else {
        "warn,integration_guard=info"
    }
}

/// Logs go to stderr so stdout only carries the banner, prompts and report.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_parse() {
        for verbose in [false, true] {
            assert!(EnvFilter::try_new(default_directives(verbose)).is_ok());
        }
        assert!(default_directives(true).contains("reqwest=debug"));
        assert!(!default_directives(false).contains("reqwest"));
    }
}
