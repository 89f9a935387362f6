use std::env;
use std::ffi::OsStr;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

/// Names the file diagnostics are appended to. Stdout belongs to the image stream.
pub const LOG_PATH_VAR: &str = "TERMBROT_LOG";
const DEFAULT_FILTER: &str = "info";

/// Installs a file-backed subscriber when `TERMBROT_LOG` is set.
///
/// Returns whether a subscriber was installed. The level comes from
/// `RUST_LOG` and defaults to `info`.
pub fn init() -> anyhow::Result<bool> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    init_with(env::var_os(LOG_PATH_VAR).as_deref(), filter)
}

fn init_with(path: Option<&OsStr>, filter: EnvFilter) -> anyhow::Result<bool> {
    let Some(path) = path else {
        return Ok(false);
    };

    let file = open_log(Path::new(path))
        .with_context(|| format!("open log file {}", path.to_string_lossy()))?;

    file_subscriber(file, filter)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
        .context("install tracing subscriber")?;

    Ok(true)
}

fn open_log(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

fn file_subscriber(file: File, filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_unset_path_installs_nothing() {
        let installed = init_with(None, EnvFilter::new(DEFAULT_FILTER)).unwrap();

        assert!(!installed);
    }

    #[test]
    fn test_log_file_is_appended_to() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("termbrot.log");
        fs::write(&path, "earlier session\n").unwrap();

        let subscriber = file_subscriber(open_log(&path).unwrap(), EnvFilter::new("info"));
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(depth = 256, "frame presented");
            tracing::debug!("below the filter");
        });

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("earlier session\n"));
        assert!(contents.contains("frame presented"));
        assert!(contents.contains("depth=256"));
        assert!(!contents.contains("below the filter"));
    }

    #[test]
    fn test_missing_log_directory_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent").join("termbrot.log");

        let err = init_with(Some(path.as_os_str()), EnvFilter::new(DEFAULT_FILTER)).unwrap_err();

        assert!(err.to_string().starts_with("open log file"));
    }
}
