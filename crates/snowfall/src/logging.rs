//! Optional file logging.
//!
//! The screen belongs to the animation, so log records go to a file and
//! only when one is configured. `RUST_LOG` controls the filter.

use std::fs::OpenOptions;
use std::path::Path;

use color_eyre::eyre::WrapErr;
use env_logger::{Env, Target};

/// Install a logger writing to `log_file`; does nothing when `None`.
pub fn init(log_file: Option<&Path>) -> color_eyre::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .wrap_err("failed to install logger")?;
    Ok(())
}
