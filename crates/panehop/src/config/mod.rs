//! Configuration loading and merging.
//!
//! Three layers, last value wins per key:
//! 1. Built-in defaults
//! 2. User-level file: `~/.config/panehop/config.toml`
//!    (`PANEHOP_CONFIG` overrides the path)
//! 3. Programmatic overrides passed to `load_config`
//!
//! Raw TOML types are separate from the resolved `Config`; validation
//! happens once here, so the picker always works from a valid alphabet
//! and cancel chord.

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::keymap::{parse_key_chord, KeyChord};
use crate::labels::{Alphabet, InvalidAlphabet};

#[cfg(test)]
mod tests;

const DEFAULT_CHARS: &str = "fjdkslaghrueiwoqptyvncmxbz";
const DEFAULT_CANCEL: &str = "esc";
const DEFAULT_BACKGROUND_HL: &str = "black";
const DEFAULT_TEXT_HL: &str = "white";
const DEFAULT_BORDER_STYLE: &str = "single";
const DEFAULT_FLOAT_WIDTH: u16 = 5;
const DEFAULT_FLOAT_HEIGHT: u16 = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid label characters: {0}")]
    InvalidChars(#[from] InvalidAlphabet),
    #[error("invalid cancel key chord '{0}'")]
    InvalidCancelKey(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub alphabet: Alphabet,
    pub cancel: KeyChord,
    /// Declared for config compatibility; the pick path does not read it.
    #[allow(dead_code)]
    pub skip_if_two: bool,
    pub overlay: OverlayConfig,
    pub tmux: TmuxConfig,
}

#[derive(Debug, Clone)]
pub struct OverlayConfig {
    pub background_hl: String,
    pub text_hl: String,
    pub border_style: String,
    pub float_width: u16,
    pub float_height: u16,
    pub show_uppercase: bool,
}

#[derive(Debug, Clone)]
pub struct TmuxConfig {
    pub command: Option<String>,
    pub args: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawConfig {
    pub chars: Option<String>,
    pub cancel: Option<String>,
    #[serde(alias = "skipIfTwo")]
    pub skip_if_two: Option<bool>,
    pub overlay: Option<RawOverlay>,
    pub tmux: Option<RawTmux>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawOverlay {
    #[serde(alias = "backgroundHl")]
    pub background_hl: Option<String>,
    #[serde(alias = "textHl")]
    pub text_hl: Option<String>,
    #[serde(alias = "borderStyle")]
    pub border_style: Option<String>,
    #[serde(alias = "floatWidth")]
    pub float_width: Option<u16>,
    #[serde(alias = "floatHeight")]
    pub float_height: Option<u16>,
    #[serde(alias = "showUppercase")]
    pub show_uppercase: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawTmux {
    pub command: Option<String>,
    pub args: Option<Vec<String>>,
}

fn read_toml(path: &Path) -> Option<RawConfig> {
    let contents = fs::read_to_string(path).ok()?;
    if contents.trim().is_empty() {
        return None;
    }
    toml::from_str::<RawConfig>(&contents).ok()
}

pub fn resolve_config(
    user: Option<RawConfig>,
    overrides: Option<RawConfig>,
) -> Result<Config, ConfigError> {
    let user = user.unwrap_or_default();
    let overrides = overrides.unwrap_or_default();

    let chars = overrides
        .chars
        .or(user.chars)
        .unwrap_or_else(|| DEFAULT_CHARS.to_string());
    let alphabet = Alphabet::new(&chars)?;

    let cancel_text = overrides
        .cancel
        .or(user.cancel)
        .unwrap_or_else(|| DEFAULT_CANCEL.to_string());
    let cancel =
        parse_key_chord(&cancel_text).ok_or(ConfigError::InvalidCancelKey(cancel_text))?;

    let skip_if_two = overrides.skip_if_two.or(user.skip_if_two).unwrap_or(false);

    let user_overlay = user.overlay.unwrap_or_default();
    let override_overlay = overrides.overlay.unwrap_or_default();
    let overlay = OverlayConfig {
        background_hl: override_overlay
            .background_hl
            .or(user_overlay.background_hl)
            .unwrap_or_else(|| DEFAULT_BACKGROUND_HL.to_string()),
        text_hl: override_overlay
            .text_hl
            .or(user_overlay.text_hl)
            .unwrap_or_else(|| DEFAULT_TEXT_HL.to_string()),
        border_style: override_overlay
            .border_style
            .or(user_overlay.border_style)
            .unwrap_or_else(|| DEFAULT_BORDER_STYLE.to_string()),
        float_width: override_overlay
            .float_width
            .or(user_overlay.float_width)
            .unwrap_or(DEFAULT_FLOAT_WIDTH),
        float_height: override_overlay
            .float_height
            .or(user_overlay.float_height)
            .unwrap_or(DEFAULT_FLOAT_HEIGHT),
        show_uppercase: override_overlay
            .show_uppercase
            .or(user_overlay.show_uppercase)
            .unwrap_or(false),
    };

    let user_tmux = user.tmux.unwrap_or_default();
    let override_tmux = overrides.tmux.unwrap_or_default();
    let tmux = TmuxConfig {
        command: override_tmux.command.or(user_tmux.command),
        args: override_tmux.args.or(user_tmux.args).unwrap_or_default(),
    };

    Ok(Config {
        alphabet,
        cancel,
        skip_if_two,
        overlay,
        tmux,
    })
}

fn user_config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var("PANEHOP_CONFIG") {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    let home = dirs::home_dir()?;
    Some(home.join(".config").join("panehop").join("config.toml"))
}

/// Load and validate the effective configuration. This is the one-time
/// setup step; `pick` receives the result by reference.
pub fn load_config(overrides: Option<RawConfig>) -> Result<Config, ConfigError> {
    let user = user_config_path().and_then(|path| read_toml(&path));
    resolve_config(user, overrides)
}
