//! Tests for loading the config file from disk.

use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use clap::Parser;
use tempfile::{NamedTempFile, TempDir};
use tictactoe_core::{JumpPolicy, SortOrder};
use tictactoe_tui::{Cli, TuiConfig};
use tracing_subscriber::fmt::MakeWriter;

/// Log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLog {
    type Writer = CapturedLog;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn load_with_logging(cli: &Cli) -> (TuiConfig, String) {
    let log = CapturedLog::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(log.clone())
        .with_ansi(false)
        .finish();
    let config = tracing::subscriber::with_default(subscriber, || cli.load_config().unwrap());
    (config, log.contents())
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Create temp file");
    file.write_all(contents.as_bytes()).expect("Write config");
    file
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = TuiConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, TuiConfig::default());
}

#[test]
fn test_file_values_are_loaded() {
    let file = write_config(
        r#"
        sort = "descending"
        jump_policy = "reevaluate"

        [sound]
        click_volume = 0.0
        "#,
    );

    let config = TuiConfig::load_or_default(file.path()).unwrap();

    assert_eq!(*config.sort(), SortOrder::Descending);
    assert_eq!(*config.jump_policy(), JumpPolicy::Reevaluate);
    assert_eq!(*config.sound().click_volume(), 0.0);
    assert!(config.sound().enabled());
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = write_config("sort = [");
    let err = TuiConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_cli_flags_override_file() {
    let file = write_config("log_file = \"from_file.log\"\n");
    let path = file.path().to_string_lossy().into_owned();
    let cli = Cli::parse_from([
        "tictactoe_tui",
        "--config",
        path.as_str(),
        "--log-file",
        "from_cli.log",
        "--mute",
    ]);

    let config = cli.apply_overrides(TuiConfig::load_or_default(&cli.config).unwrap());

    assert_eq!(config.log_file(), &PathBuf::from("from_cli.log"));
    assert!(!config.sound().enabled());
}

#[test]
fn test_load_reports_missing_file_to_logger() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    let path = path.to_string_lossy().into_owned();
    let cli = Cli::parse_from(["tictactoe_tui", "--config", path.as_str()]);

    let (config, log) = load_with_logging(&cli);

    assert_eq!(config, TuiConfig::default());
    assert!(log.contains("Config file not found, using defaults"));
}

#[test]
fn test_load_reports_found_file_to_logger() {
    let file = write_config("sort = \"descending\"\n");
    let path = file.path().to_string_lossy().into_owned();
    let cli = Cli::parse_from(["tictactoe_tui", "--config", path.as_str(), "--mute"]);

    let (config, log) = load_with_logging(&cli);

    assert_eq!(*config.sort(), SortOrder::Descending);
    assert!(!config.sound().enabled());
    assert!(log.contains("Config loaded successfully"));
}
