use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::prelude::*;

/// Installs a compact global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the filter is `stochastic=info`
/// (`stochastic=debug` when `verbose`). Fails if a global subscriber is
/// already set.
pub fn try_init_logger(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| StochasticError::InvalidInput(format!("logger already initialised: {e}")))
}

fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "stochastic=debug"
    } else {
        "stochastic=info"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_only_targets_this_crate() {
        assert_eq!(default_filter(true), "stochastic=debug");
        assert_eq!(default_filter(false), "stochastic=info");
    }

    #[test]
    fn test_second_init_is_an_error() {
        // only the second call is guaranteed to fail
        let _ = try_init_logger(true);
        let err = try_init_logger(false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
