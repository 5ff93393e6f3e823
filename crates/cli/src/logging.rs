use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install the stderr tracing subscriber.
///
/// Reads `BIDEVAL_LOG` for per-target levels, e.g.
/// `BIDEVAL_LOG=bideval_evaluator=debug`. Falls back to `info` for the
/// bideval crates, or `warn` when `quiet` is set. Stdout stays reserved for
/// `--json` and table output.
pub fn init(quiet: bool) {
    INIT.call_once(|| {
        let default = if quiet {
            "bideval_cli=warn,bideval_evaluator=warn"
        } else {
            "bideval_cli=info,bideval_evaluator=info"
        };
        let filter =
            EnvFilter::try_from_env("BIDEVAL_LOG").unwrap_or_else(|_| EnvFilter::new(default));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .with(filter)
            .init();
    });
}
