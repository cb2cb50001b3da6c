use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use directories::ProjectDirs;

/// Default log location, `<data_local_dir>/radarloop.log`.
pub(crate) fn default_log_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("com", "radarloop", "Radarloop")?;
    let dir = proj.data_local_dir().to_path_buf();
    fs::create_dir_all(&dir).ok();
    Some(dir.join("radarloop.log"))
}

/// The terminal belongs to the UI, so logs go to a file. `RUST_LOG`
/// overrides the `info` default. Logging is skipped if the file can't be opened.
pub(crate) fn init_tracing(path: Option<&Path>) {
    let Some(path) = path else {
        return;
    };
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
}
