//! Input and output stream setup.
//!
//! Domains are read from a file or stdin; the CSV report is written to a file
//! or stdout.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tokio::io::{AsyncBufRead, BufReader};

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Line source for domains.
pub type InputReader = Box<dyn AsyncBufRead + Unpin + Send>;

/// Sink for CSV rows.
pub type OutputWriter = Box<dyn Write + Send>;

/// Opens the configured input: stdin for `-`, otherwise the named file.
///
/// # Errors
///
/// Returns `InitializationError::StreamError` if the file cannot be opened.
pub async fn open_input(config: &Config) -> Result<InputReader, InitializationError> {
    if config.reads_stdin() {
        log::debug!("Reading domains from stdin");
        return Ok(Box::new(BufReader::new(tokio::io::stdin())));
    }

    let file = tokio::fs::File::open(&config.file)
        .await
        .map_err(|source| stream_error(&config.file, source))?;
    log::debug!("Reading domains from {}", config.file.display());
    Ok(Box::new(BufReader::new(file)))
}

/// Opens the configured output: the named file (truncated) or stdout.
///
/// # Errors
///
/// Returns `InitializationError::StreamError` if the file cannot be created.
pub fn open_output(config: &Config) -> Result<OutputWriter, InitializationError> {
    match &config.output {
        Some(path) => {
            let file = File::create(path).map_err(|source| stream_error(path, source))?;
            log::debug!("Writing CSV to {}", path.display());
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

fn stream_error(path: &Path, source: io::Error) -> InitializationError {
    InitializationError::StreamError {
        path: path.display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tokio::io::AsyncBufReadExt;

    #[tokio::test]
    async fn test_open_input_missing_file() {
        let config = Config {
            file: PathBuf::from("/definitely/not/here/domains.txt"),
            ..Default::default()
        };
        let err = match open_input(&config).await {
            Ok(_) => panic!("opening a missing file should fail"),
            Err(e) => e,
        };
        assert!(err.to_string().contains("/definitely/not/here/domains.txt"));
    }

    #[tokio::test]
    async fn test_open_input_reads_file_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("domains.txt");
        std::fs::write(&path, "example.com\nexample.org\n").unwrap();

        let config = Config {
            file: path,
            ..Default::default()
        };
        let mut lines = open_input(&config).await.unwrap().lines();
        assert_eq!(lines.next_line().await.unwrap().as_deref(), Some("example.com"));
        assert_eq!(lines.next_line().await.unwrap().as_deref(), Some("example.org"));
        assert_eq!(lines.next_line().await.unwrap(), None);
    }

    #[test]
    fn test_open_output_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        let config = Config {
            output: Some(path.clone()),
            ..Default::default()
        };

        let mut out = open_output(&config).unwrap();
        writeln!(out, "hello").unwrap();
        out.flush().unwrap();
        drop(out);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
    }
}
