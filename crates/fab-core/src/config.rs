//! Configuration types for fab.
//!
//! [`Config::load`] reads `~/.config/fab/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[dataset]
path = "cookbook.csv"

[ui]
show_models = true

[keybindings]
toggle_focus  = "Tab"
search_focus  = "/"
scroll_to_top = "g"
scroll_to_end = "G"
help          = "?"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/fab/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

/// `[dataset]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    /// Default cookbook location; the CLI positional argument overrides it.
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("cookbook.csv")
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self { path: default_dataset_path() }
    }
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Show the per-record Model/Station lines in group details.
    #[serde(default = "default_show_models")]
    pub show_models: bool,
}

fn default_show_models() -> bool { true }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_models: default_show_models(),
        }
    }
}

/// `[keybindings]` section of `config.toml`.
///
/// Documents the bindings; the event mapper currently hardcodes the same
/// defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct KeybindingsConfig {
    #[serde(default = "default_toggle_focus")]
    pub toggle_focus: String,
    #[serde(default = "default_search_focus")]
    pub search_focus: String,
    #[serde(default = "default_scroll_to_top")]
    pub scroll_to_top: String,
    #[serde(default = "default_scroll_to_end")]
    pub scroll_to_end: String,
    #[serde(default = "default_help")]
    pub help: String,
}

fn default_toggle_focus() -> String { "Tab".to_string() }
fn default_search_focus() -> String { "/".to_string() }
fn default_scroll_to_top() -> String { "g".to_string() }
fn default_scroll_to_end() -> String { "G".to_string() }
fn default_help() -> String { "?".to_string() }

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            toggle_focus: default_toggle_focus(),
            search_focus: default_search_focus(),
            scroll_to_top: default_scroll_to_top(),
            scroll_to_end: default_scroll_to_end(),
            help: default_help(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/fab/config.toml`, layered on top of the built-in
    /// defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("fab")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
