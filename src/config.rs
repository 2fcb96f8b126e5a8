use clap::ValueEnum;
use serde::Deserialize;
use std::fs;
use std::io::IsTerminal;
use std::path::Path;
use thiserror::Error;

/// Filter string variable
pub const DEBUG_VAR: &str = "DEBUG";
/// Any non-empty value disables colour (see no-color.org)
pub const NO_COLOR_VAR: &str = "NO_COLOR";
/// Any non-empty value makes `Debugger::panic` unwind instead of exiting
pub const PANIC_THROWS_VAR: &str = "NSDEBUG_PANIC_THROWS";
/// Older name for [`PANIC_THROWS_VAR`], still honoured
pub const PANIC_THROWS_ALIAS_VAR: &str = "W_PANIC_THROWS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read settings file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse settings file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// When to colour terminal output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Colour when stderr is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn resolve(self, stderr_is_terminal: bool) -> bool {
        match self {
            ColorMode::Auto => stderr_is_terminal,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Whether stderr is attached to a terminal
pub fn stderr_is_terminal() -> bool {
    std::io::stderr().is_terminal()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Filter string, e.g. "app:*,-app:secret"
    pub debug: String,
    pub color: ColorMode,
    /// Emit `%c` styled lines instead of ANSI text
    pub styled: bool,
    /// Unwind on `panic` instead of exiting the process
    pub panic_throws: bool,
}

impl Settings {
    /// Defaults overlaid with the process environment
    pub fn from_env() -> Self {
        Settings::default().with_env(|name| std::env::var(name).ok())
    }

    /// Overlay environment variables read through `lookup`.
    ///
    /// Empty values are treated as unset.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.is_empty());

        if let Some(debug) = get(DEBUG_VAR) {
            self.debug = debug;
        }
        if get(NO_COLOR_VAR).is_some() {
            self.color = ColorMode::Never;
        }
        if get(PANIC_THROWS_VAR).is_some() || get(PANIC_THROWS_ALIAS_VAR).is_some() {
            self.panic_throws = true;
        }
        self
    }

    /// Resolve the colour mode against the current stderr
    pub fn use_colour(&self) -> bool {
        self.color.resolve(stderr_is_terminal())
    }
}

pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    if let Some(path) = path {
        load_settings_from_path(path)
    } else {
        Ok(Settings::default())
    }
}

pub fn load_settings_from_path(path: &Path) -> Result<Settings, ConfigError> {
    let path_display = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path_display.clone(),
        source,
    })?;

    toml::from_str::<Settings>(&raw).map_err(|source| ConfigError::Parse {
        path: path_display,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_env_overlay() {
        let settings = Settings::default().with_env(env_of(&[
            ("DEBUG", "app:*"),
            ("NO_COLOR", "1"),
            ("NSDEBUG_PANIC_THROWS", "yes"),
        ]));
        assert_eq!(settings.debug, "app:*");
        assert_eq!(settings.color, ColorMode::Never);
        assert!(settings.panic_throws);
    }

    #[test]
    fn test_empty_env_values_are_unset() {
        let base = Settings {
            debug: "keep".to_string(),
            color: ColorMode::Always,
            ..Settings::default()
        };
        let settings = base
            .clone()
            .with_env(env_of(&[("DEBUG", ""), ("NO_COLOR", ""), ("NSDEBUG_PANIC_THROWS", "")]));
        assert_eq!(settings, base);
    }

    #[test]
    fn test_legacy_panic_variable_is_honoured() {
        let settings = Settings::default().with_env(env_of(&[("W_PANIC_THROWS", "1")]));
        assert!(settings.panic_throws);

        let settings = Settings::default().with_env(env_of(&[("W_PANIC_THROWS", "")]));
        assert!(!settings.panic_throws);
    }

    #[test]
    fn test_color_mode_resolution() {
        assert!(ColorMode::Auto.resolve(true));
        assert!(!ColorMode::Auto.resolve(false));
        assert!(ColorMode::Always.resolve(false));
        assert!(!ColorMode::Never.resolve(true));
    }
}
