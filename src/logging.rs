use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize structured logging for callers embedding the library.
///
/// `level` is a tracing directive (e.g. "debug" or "tangle=trace"); when
/// `None` the default is `tangle=warn`. The `TANGLE_LOG` environment variable
/// overrides either.
pub fn init_tracing(
    level: Option<&str>,
    log_json: bool,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let level = level.unwrap_or("warn");

    // Support TANGLE_LOG environment variable override
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("TANGLE_LOG"))
        .unwrap_or_else(|_| {
            EnvFilter::new(if level.contains('=') {
                level.to_string()
            } else {
                format!("tangle={}", level)
            })
        });

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
