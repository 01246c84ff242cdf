use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, filter::Targets, fmt, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt,
};

/// Filter used when `RUST_LOG` is unset. Verbose mode also shows the HTTP
/// client's request lines for the rate fetch.
fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "won2real=debug,reqwest=info"
    } else {
        "off"
    }
}

/// Installs the global subscriber on stderr so stdout only carries results.
/// A second call is a no-op.
pub fn init_logging(verbose: bool) {
    let app_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let app_filter = Targets::new()
        .with_target("won2real", app_level)
        .with_target("reqwest", LevelFilter::INFO);
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .pretty()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(app_filter)
        .with(env_filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(default_directives(false), "off");
        assert!(default_directives(true).contains("won2real=debug"));
    }

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        init_logging(false);
        init_logging(true);
    }
}
