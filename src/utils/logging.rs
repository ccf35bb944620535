use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::error::Result;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise `--verbose` means debug, a log file
/// gets info, and the console alone only shows warnings so the spinner and
/// report stay readable.
pub fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let default_level = match (verbose, log_file.is_some()) {
        (true, _) => "debug",
        (false, true) => "info",
        (false, false) => "warn",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    // A second init (e.g. from tests) keeps the first subscriber
    if let Err(e) = installed {
        debug!("Keeping the existing tracing subscriber: {}", e);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_repeated_init_keeps_first_subscriber() -> Result<()> {
        let dir = TempDir::new()?;
        let log_path = dir.path().join("run.log");

        init_logging(false, None)?;
        init_logging(true, Some(&log_path))?;

        // The file is still created even though the subscriber is not replaced
        assert!(log_path.exists());
        Ok(())
    }
}
