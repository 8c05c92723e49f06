//! TOML-based configuration for the keyboard module.
//!
//! Reads and writes [`KeybridgeConfig`] to the platform-appropriate file:
//! - Windows:  `%APPDATA%\Keybridge\config.toml`
//! - Linux:    `~/.config/keybridge/config.toml`
//! - macOS:    `~/Library/Application Support/Keybridge/config.toml`
//!
//! Example:
//!
//! ```toml
//! [keyboard]
//! key_repeat = true
//! text_input = false
//!
//! [window]
//! pixel_density = 2.0
//!
//! [[layout.remap]]
//! scancode = "q"
//! key = "a"
//! ```
//!
//! Every field has a serde default, so a partial file (or no file at all)
//! still loads.  Keys and scancodes are written by their script names.

use std::path::{Path, PathBuf};

use keybridge_core::{Key, Scancode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level keyboard module configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct KeybridgeConfig {
    #[serde(default)]
    pub keyboard: KeyboardSettings,
    #[serde(default)]
    pub window: WindowSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub layout: LayoutSettings,
}

/// Initial keyboard module state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyboardSettings {
    /// Whether held keys generate repeated key-pressed events.
    #[serde(default)]
    pub key_repeat: bool,
    /// Whether text input starts enabled.
    #[serde(default)]
    pub text_input: bool,
    /// Whether the headless host reports an on-screen keyboard.
    #[serde(default)]
    pub screen_keyboard: bool,
}

/// Window parameters used for text-input region conversion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowSettings {
    /// Pixels per window coordinate.
    #[serde(default = "default_pixel_density")]
    pub pixel_density: f64,
}

/// Logging parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    /// `tracing` level used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Per-scancode layout overrides for the headless host.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LayoutSettings {
    #[serde(default)]
    pub remap: Vec<RemapEntry>,
}

/// Makes the key at `scancode` produce `key`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemapEntry {
    pub scancode: Scancode,
    pub key: Key,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_pixel_density() -> f64 {
    1.0
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for KeyboardSettings {
    fn default() -> Self {
        Self {
            key_repeat: false,
            text_input: false,
            screen_keyboard: false,
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            pixel_density: default_pixel_density(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the default config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads the config from the default location.
///
/// # Errors
///
/// See [`load_config_from`].
pub fn load_config() -> Result<KeybridgeConfig, ConfigError> {
    load_config_from(&config_file_path()?)
}

/// Loads the config from `path`, returning defaults if the file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed or names an unknown
/// key or scancode.
pub fn load_config_from(path: &Path) -> Result<KeybridgeConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(KeybridgeConfig::default()),
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Persists `config` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config_to(path: &Path, config: &KeybridgeConfig) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolves the platform config base directory including the `Keybridge` subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("Keybridge"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("keybridge"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("Keybridge")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        // Arrange / Act
        let cfg = KeybridgeConfig::default();

        // Assert
        assert!(!cfg.keyboard.key_repeat);
        assert!(!cfg.keyboard.text_input);
        assert!(!cfg.keyboard.screen_keyboard);
        assert_eq!(cfg.window.pixel_density, 1.0);
        assert_eq!(cfg.logging.log_level, "info");
        assert!(cfg.layout.remap.is_empty());
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let cfg: KeybridgeConfig = toml::from_str("").expect("empty config must parse");
        assert_eq!(cfg, KeybridgeConfig::default());
    }

    #[test]
    fn test_partial_section_fills_missing_fields() {
        let cfg: KeybridgeConfig =
            toml::from_str("[keyboard]\nkey_repeat = true\n").expect("parse");
        assert!(cfg.keyboard.key_repeat);
        assert!(!cfg.keyboard.text_input);
        assert_eq!(cfg.window.pixel_density, 1.0);
    }

    #[test]
    fn test_remap_entries_use_script_names() {
        // Arrange
        let text = r#"
            [[layout.remap]]
            scancode = "q"
            key = "a"

            [[layout.remap]]
            scancode = "capslock"
            key = "escape"
        "#;

        // Act
        let cfg: KeybridgeConfig = toml::from_str(text).expect("parse");

        // Assert
        assert_eq!(
            cfg.layout.remap,
            vec![
                RemapEntry { scancode: Scancode::Q, key: Key::A },
                RemapEntry { scancode: Scancode::CapsLock, key: Key::Escape },
            ]
        );
    }

    #[test]
    fn test_unknown_key_name_is_a_parse_error() {
        let text = "[[layout.remap]]\nscancode = \"q\"\nkey = \"hyper\"\n";
        let result: Result<KeybridgeConfig, _> = toml::from_str(text);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        // Arrange
        let mut cfg = KeybridgeConfig::default();
        cfg.keyboard.key_repeat = true;
        cfg.window.pixel_density = 2.0;
        cfg.layout.remap.push(RemapEntry { scancode: Scancode::Z, key: Key::Y });

        // Act
        let text = toml::to_string_pretty(&cfg).expect("serialize");
        let restored: KeybridgeConfig = toml::from_str(&text).expect("deserialize");

        // Assert
        assert_eq!(cfg, restored);
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = load_config_from(&dir.path().join("absent.toml")).expect("load");
        assert_eq!(cfg, KeybridgeConfig::default());
    }

    #[test]
    fn test_save_then_load_from_nested_path() {
        // Arrange
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");
        let mut cfg = KeybridgeConfig::default();
        cfg.logging.log_level = "debug".to_string();

        // Act
        save_config_to(&path, &cfg).expect("save");
        let loaded = load_config_from(&path).expect("load");

        // Assert
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn test_load_malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[keyboard\nkey_repeat = ").expect("write");

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "unexpected error: {err}");
    }
}
