//! keybridge: drives the keyboard module over newline-delimited JSON.
//!
//! Reads one request per line on stdin and writes one reply per line on
//! stdout.  Logs go to stderr.
//!
//! # Usage
//!
//! ```text
//! keybridge [OPTIONS]
//!
//! Options:
//!   --config      <PATH>     Config file [default: platform config dir]
//!   --log-level   <LEVEL>    Overrides [logging] log_level
//!   --api-version <VERSION>  Scripting API level: 5.1 to 5.4 [default: 5.4]
//!   --write-default-config   Write a default config file and exit
//! ```
//!
//! ```text
//! $ echo '{"op":"press","scancode":"a"}
//! {"op":"call","function":"isDown","args":["a"]}' | keybridge
//! {"ok":true,"results":[]}
//! {"ok":true,"results":[true]}
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use keybridge_host::infrastructure::session::KeyboardSession;
use keybridge_host::infrastructure::storage::config::{
    config_file_path, load_config, load_config_from, save_config_to, ConfigError,
    KeybridgeConfig,
};
use keybridge_script::application::script_session::ScriptSession;
use keybridge_script::ApiVersion;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Keyboard module driver over JSON lines.
#[derive(Debug, Parser)]
#[command(name = "keybridge", about = "Keyboard module driver over JSON lines", version)]
struct Cli {
    /// Config file to load instead of the platform default.
    #[arg(long, env = "KEYBRIDGE_CONFIG")]
    config: Option<PathBuf>,

    /// Log level used when `RUST_LOG` is unset; overrides the config file.
    #[arg(long)]
    log_level: Option<String>,

    /// Scripting API level the module is registered for.
    #[arg(long, default_value = "5.4")]
    api_version: ApiVersion,

    /// Writes a default config to `--config` (or the platform default) and exits.
    #[arg(long)]
    write_default_config: bool,
}

impl Cli {
    /// Loads the config named by `--config`, or the platform default.
    ///
    /// A platform without a config directory falls back to defaults.
    fn load_config(&self) -> anyhow::Result<KeybridgeConfig> {
        match &self.config {
            Some(path) => load_config_from(path)
                .with_context(|| format!("loading config from {}", path.display())),
            None => match load_config() {
                Err(ConfigError::NoPlatformConfigDir) => Ok(KeybridgeConfig::default()),
                other => other.context("loading config"),
            },
        }
    }

    /// Saves a default config to the `--config` path or the platform default,
    /// returning where it was written.
    fn save_default_config(&self) -> anyhow::Result<PathBuf> {
        let path = match &self.config {
            Some(path) => path.clone(),
            None => config_file_path().context("resolving config path")?,
        };
        save_config_to(&path, &KeybridgeConfig::default())
            .with_context(|| format!("writing config to {}", path.display()))?;
        Ok(path)
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.write_default_config {
        init_tracing(cli.log_level.clone().unwrap_or_else(|| "info".to_string()));
        let path = cli.save_default_config()?;
        info!(path = %path.display(), "wrote default config");
        return Ok(());
    }

    let config = cli.load_config()?;

    init_tracing(
        cli.log_level
            .clone()
            .unwrap_or_else(|| config.logging.log_level.clone()),
    );

    info!(api_version = %cli.api_version, "keybridge starting");

    let mut script = ScriptSession::new(KeyboardSession::from_config(&config), cli.api_version)
        .context("registering keyboard module")?;

    run(&mut script, io::stdin().lock(), io::stdout().lock())?;

    info!("keybridge stopped");
    Ok(())
}

/// Logs to stderr; `RUST_LOG` takes precedence over `level`.
fn init_tracing(level: String) {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();
}

/// Answers each non-blank input line with one JSON reply line.
fn run(script: &mut ScriptSession, input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line.context("reading request")?;
        if line.trim().is_empty() {
            continue;
        }
        let reply = script.handle_line(&line);
        serde_json::to_writer(&mut output, &reply).context("writing reply")?;
        writeln!(output).context("writing reply")?;
        output.flush().context("flushing reply")?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        // Arrange: parse with no arguments (all defaults apply)
        let cli = Cli::parse_from(["keybridge"]);

        // Assert
        assert_eq!(cli.api_version, ApiVersion::V5_4);
        assert_eq!(cli.log_level, None);
        assert!(!cli.write_default_config);
    }

    #[test]
    fn test_cli_api_version_override() {
        let cli = Cli::parse_from(["keybridge", "--api-version", "5.1"]);
        assert_eq!(cli.api_version, ApiVersion::V5_1);
    }

    #[test]
    fn test_cli_rejects_unknown_api_version() {
        let result = Cli::try_parse_from(["keybridge", "--api-version", "6.0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_config_path_is_loaded() {
        // Arrange
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[keyboard]\nkey_repeat = true\n").expect("write");
        let cli = Cli::parse_from(["keybridge", "--config", path.to_str().expect("utf-8 path")]);

        // Act
        let config = cli.load_config().expect("load");

        // Assert
        assert!(config.keyboard.key_repeat);
    }

    #[test]
    fn test_write_default_config_round_trips() {
        // Arrange
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");
        let cli = Cli::parse_from([
            "keybridge",
            "--write-default-config",
            "--config",
            path.to_str().expect("utf-8 path"),
        ]);

        // Act
        let written = cli.save_default_config().expect("write");
        let loaded = cli.load_config().expect("load");

        // Assert
        assert!(cli.write_default_config);
        assert_eq!(written, path);
        assert!(path.exists());
        assert_eq!(loaded, KeybridgeConfig::default());
    }

    #[test]
    fn test_run_answers_each_line_and_skips_blanks() {
        // Arrange
        let mut script =
            ScriptSession::new(KeyboardSession::default(), ApiVersion::V5_4).expect("session");
        let input = "{\"op\":\"press\",\"scancode\":\"a\"}\n\n{\"op\":\"call\",\"function\":\"isDown\",\"args\":[\"a\"]}\n";
        let mut output = Vec::new();

        // Act
        run(&mut script, input.as_bytes(), &mut output).expect("run");

        // Assert
        let text = String::from_utf8(output).expect("utf-8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec![r#"{"ok":true,"results":[]}"#, r#"{"ok":true,"results":[true]}"#]);
    }
}
