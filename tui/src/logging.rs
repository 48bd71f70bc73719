//! File logging.
//!
//! The terminal belongs to the UI, so log records go to a file.

use env_logger::{Env, Target};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use crate::preferences::data_dir;

/// Default log location (`~/.flashdeck/flashdeck.log`).
pub fn default_log_path() -> Option<PathBuf> {
    data_dir().ok().map(|dir| dir.join("flashdeck.log"))
}

/// Install the global logger, appending to `path`.
///
/// `level` is the default filter; `RUST_LOG` takes precedence.
pub fn init(level: &str, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .init();
    Ok(())
}
