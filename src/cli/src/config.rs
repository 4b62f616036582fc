use std::{
    fs,
    path::{Path, PathBuf},
};

use bitcube_core::Color;
use color_eyre::eyre::{Result, WrapErr};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Global configuration, read from a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Move sequence applied to the solved cube before anything else.
    pub start: String,
    pub display: DisplayConfig,
    pub palette: Palette,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// What to print for each facelet when printing in color.
    pub glyph: String,
    /// Print colored glyphs. When false, each facelet is its color's letter.
    pub color: bool,
    pub show_history: bool,
}

/// RGB triple for each color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    pub yellow: [u8; 3],
    pub green: [u8; 3],
    pub orange: [u8; 3],
    pub blue: [u8; 3],
    pub red: [u8; 3],
    pub white: [u8; 3],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            glyph: "■".to_owned(),
            color: true,
            show_history: true,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            yellow: [255, 255, 51],
            green: [153, 255, 51],
            orange: [255, 153, 51],
            blue: [0, 51, 255],
            red: [255, 51, 51],
            white: [204, 204, 204],
        }
    }
}

impl Palette {
    pub fn rgb(&self, color: Color) -> [u8; 3] {
        match color {
            Color::Yellow => self.yellow,
            Color::Green => self.green,
            Color::Orange => self.orange,
            Color::Blue => self.blue,
            Color::Red => self.red,
            Color::White => self.white,
        }
    }
}

/// `bitcube/config.toml` inside the user's configuration directory.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bitcube").join("config.toml"))
}

/// Load the configuration. An explicitly given file must exist; the default
/// file is optional and the built-in defaults apply without it.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_path() {
            Some(path) if path.is_file() => path,
            _ => {
                debug!(target: "config", "No configuration file found, using defaults");
                return Ok(Config::default());
            }
        },
    };

    info!(target: "config", "Reading configuration from {}", path.display());
    let text = fs::read_to_string(&path)
        .wrap_err_with(|| format!("Failed to read configuration file {}", path.display()))?;
    toml::from_str(&text)
        .wrap_err_with(|| format!("Failed to parse configuration file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(toml::from_str::<Config>("").unwrap(), Config::default());
    }

    #[test]
    fn defaults_survive_a_round_trip() {
        let text = toml::to_string(&Config::default()).unwrap();
        assert_eq!(toml::from_str::<Config>(&text).unwrap(), Config::default());
    }

    #[test]
    fn partial_overrides() {
        let config = toml::from_str::<Config>(
            r#"
            start = "R U R' U'"

            [display]
            color = false

            [palette]
            white = [255, 255, 255]
            "#,
        )
        .unwrap();

        assert_eq!(config.start, "R U R' U'");
        assert!(!config.display.color);
        assert!(config.display.show_history);
        assert_eq!(config.display.glyph, "■");
        assert_eq!(config.palette.rgb(Color::White), [255, 255, 255]);
        assert_eq!(config.palette.rgb(Color::Blue), [0, 51, 255]);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(toml::from_str::<Config>("colour = true").is_err());
        assert!(toml::from_str::<Config>("[palette]\npink = [1, 2, 3]").is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = load(Some(Path::new("/definitely/not/here/bitcube.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read configuration file"));
    }
}
