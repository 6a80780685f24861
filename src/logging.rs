use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize diagnostics on stderr.
///
/// Default level is `warn`; `verbose` raises it to `debug` and `quiet`
/// lowers it to `error`. A non-empty `RUST_LOG` replaces all of this.
pub fn init_logging(verbose: bool, quiet: bool) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new(default_directive(verbose, quiet)),
    };

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .try_init();
}

fn default_directive(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "ethics_monitor=error"
    } else if verbose {
        "ethics_monitor=debug"
    } else {
        "ethics_monitor=warn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(default_directive(true, true), "ethics_monitor=error");
        assert_eq!(default_directive(true, false), "ethics_monitor=debug");
        assert_eq!(default_directive(false, false), "ethics_monitor=warn");
    }
}
