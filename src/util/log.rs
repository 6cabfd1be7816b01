use std::{fs, path::Path, sync::Mutex};

use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV: &str = "GRACELYRICS_LOGLEVEL";
pub const LOG_FILE: &str = "gracelyrics.log";

/// Logs go to a file in the data dir; stdout belongs to the terminal UI.
pub fn initialize_logging(data_dir: &Path) -> color_eyre::Result<()> {
    fs::create_dir_all(data_dir)?;
    let log_file = fs::File::create(data_dir.join(LOG_FILE))?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_CRATE_NAME"))));

    let file_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(Mutex::new(log_file))
        .with_target(false)
        .with_ansi(false)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(())
}
