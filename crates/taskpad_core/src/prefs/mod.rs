//! Theme and accent-color preference records.
//!
//! # Responsibility
//! - Round-trip the two UI preference records through key-value storage.
//!
//! # Invariants
//! - A stored value outside the expected shape reads back as `None`,
//!   never as an error.
//! - Writes are best-effort; failures are logged and swallowed.

use crate::storage::{KvStore, ACCENT_COLOR_KEY, THEME_KEY};
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

static ACCENT_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("valid accent color regex"));

/// UI theme preference, stored as a plain string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Persists the theme preference. Best-effort.
pub fn save_theme<S: KvStore>(kv: &S, mode: ThemeMode) {
    if let Err(err) = kv.set(THEME_KEY, mode.as_str()) {
        warn!("event=save_theme module=prefs status=error error={err}");
    }
}

/// Reads the theme preference; anything but a known mode string is `None`.
pub fn load_theme<S: KvStore>(kv: &S) -> Option<ThemeMode> {
    match kv.get(THEME_KEY) {
        Ok(Some(value)) => ThemeMode::parse(&value),
        Ok(None) => None,
        Err(err) => {
            warn!("event=load_theme module=prefs status=error error={err}");
            None
        }
    }
}

/// Persists the accent color when it matches `#RRGGBB` (6 hex digits).
///
/// Returns whether the value was accepted; rejection is silent beyond the
/// return value.
pub fn save_accent_color<S: KvStore>(kv: &S, color: &str) -> bool {
    if !ACCENT_COLOR_RE.is_match(color) {
        return false;
    }
    if let Err(err) = kv.set(ACCENT_COLOR_KEY, color) {
        warn!("event=save_accent_color module=prefs status=error error={err}");
    }
    true
}

/// Reads the accent color; a malformed stored value is `None`.
pub fn load_accent_color<S: KvStore>(kv: &S) -> Option<String> {
    match kv.get(ACCENT_COLOR_KEY) {
        Ok(Some(value)) if ACCENT_COLOR_RE.is_match(&value) => Some(value),
        Ok(_) => None,
        Err(err) => {
            warn!("event=load_accent_color module=prefs status=error error={err}");
            None
        }
    }
}
