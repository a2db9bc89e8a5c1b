//! External configuration loader.
//!
//! Reads `config.toml` from the working directory and falls back to
//! defaults when the file is missing or incomplete. The key table is the
//! whole input mapping: the engine itself never sees a key, only the
//! directions and commands the front-end resolves here.

use serde::Deserialize;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub keys: KeyConfig,
    pub levels_dir: PathBuf,
}

/// Key names are lowercase: single characters ("w") or the tokens "up",
/// "down", "left", "right", "esc", "backspace".
#[derive(Clone, Debug)]
pub struct KeyConfig {
    pub up: Vec<String>,
    pub down: Vec<String>,
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub undo: Vec<String>,
    pub reset: Vec<String>,
    pub quit: Vec<String>,
}

// ── TOML schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    keys: TomlKeys,
    #[serde(default)]
    general: TomlGeneral,
}

#[derive(Deserialize, Debug)]
struct TomlKeys {
    #[serde(default = "default_up")]
    up: Vec<String>,
    #[serde(default = "default_down")]
    down: Vec<String>,
    #[serde(default = "default_left")]
    left: Vec<String>,
    #[serde(default = "default_right")]
    right: Vec<String>,
    #[serde(default = "default_undo")]
    undo: Vec<String>,
    #[serde(default = "default_reset")]
    reset: Vec<String>,
    #[serde(default = "default_quit")]
    quit: Vec<String>,
}

#[derive(Deserialize, Debug)]
struct TomlGeneral {
    #[serde(default = "default_levels_dir")]
    levels_dir: String,
}

// ── Defaults ──

fn default_up() -> Vec<String> {
    vec!["w".into(), "up".into()]
}
fn default_down() -> Vec<String> {
    vec!["s".into(), "down".into()]
}
fn default_left() -> Vec<String> {
    vec!["a".into(), "left".into()]
}
fn default_right() -> Vec<String> {
    vec!["d".into(), "right".into()]
}
fn default_undo() -> Vec<String> {
    vec!["u".into(), "backspace".into()]
}
fn default_reset() -> Vec<String> {
    vec!["r".into()]
}
fn default_quit() -> Vec<String> {
    vec!["q".into(), "esc".into()]
}
fn default_levels_dir() -> String {
    "levels".into()
}

impl Default for TomlKeys {
    fn default() -> Self {
        TomlKeys {
            up: default_up(),
            down: default_down(),
            left: default_left(),
            right: default_right(),
            undo: default_undo(),
            reset: default_reset(),
            quit: default_quit(),
        }
    }
}

impl Default for TomlGeneral {
    fn default() -> Self {
        TomlGeneral {
            levels_dir: default_levels_dir(),
        }
    }
}

// ── Loading ──

impl GameConfig {
    /// Load `config.toml` from the current directory. A missing file or
    /// missing keys fall back to defaults; a malformed file is reported
    /// and ignored.
    pub fn load() -> Self {
        let toml_cfg = match std::fs::read_to_string("config.toml") {
            Ok(contents) => match toml::from_str::<TomlConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    log::warn!("config.toml ignored: {err}");
                    TomlConfig::default()
                }
            },
            Err(_) => TomlConfig::default(),
        };

        Self::from_toml(toml_cfg)
    }

    fn from_toml(toml_cfg: TomlConfig) -> Self {
        GameConfig {
            keys: KeyConfig {
                up: toml_cfg.keys.up,
                down: toml_cfg.keys.down,
                left: toml_cfg.keys.left,
                right: toml_cfg.keys.right,
                undo: toml_cfg.keys.undo,
                reset: toml_cfg.keys.reset,
                quit: toml_cfg.keys.quit,
            },
            levels_dir: PathBuf::from(toml_cfg.general.levels_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let cfg: TomlConfig = toml::from_str("").unwrap();
        let config = GameConfig::from_toml(cfg);
        assert_eq!(config.keys.up, vec!["w".to_string(), "up".to_string()]);
        assert_eq!(config.levels_dir, PathBuf::from("levels"));
    }

    #[test]
    fn partial_file_merges_with_defaults() {
        let cfg: TomlConfig = toml::from_str(
            r#"
[keys]
undo = ["z"]

[general]
levels_dir = "campaign"
"#,
        )
        .unwrap();
        let config = GameConfig::from_toml(cfg);
        assert_eq!(config.keys.undo, vec!["z".to_string()]);
        // Untouched bindings keep their defaults.
        assert_eq!(config.keys.quit, vec!["q".to_string(), "esc".to_string()]);
        assert_eq!(config.levels_dir, PathBuf::from("campaign"));
    }
}
