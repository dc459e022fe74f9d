use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::logging::LogFormat;

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install the global subscriber. Logs go to stderr so command output on
/// stdout stays clean. Only the first call has any effect.
pub fn init_tracing(format: LogFormat) {
    INITIALIZED.get_or_init(|| install(format));
}

fn install(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_file(false)
                .with_line_number(false)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_ansi(false)
                .json();
            registry.with(fmt_layer).try_init().ok();
        }
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact();
            registry.with(fmt_layer).try_init().ok();
        }
    }
}
