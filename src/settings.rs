use crate::config::LifeConfig;
use crate::error::AppError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub life: LifeConfig,
    #[serde(default)]
    pub terminal: TerminalLayout,
}

/// Grid spacing for the interactive session, where one screen unit is a
/// character cell rather than a pixel
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TerminalLayout {
    pub cell_pitch: i32,
    pub padding: i32,
}

impl Default for TerminalLayout {
    fn default() -> Self {
        Self {
            cell_pitch: 1,
            padding: 1,
        }
    }
}

impl Settings {
    /// Load from an explicit path, or from the default location if none is
    /// given. A missing default file means defaults; a missing explicit file
    /// is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::config_path(), false),
        };
        if !explicit && !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let settings = Self::parse(&content).map_err(|source| AppError::Settings {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// `[life]` with pitch and padding taken from `[terminal]`
    pub fn terminal_config(&self) -> LifeConfig {
        LifeConfig {
            cell_pitch: self.terminal.cell_pitch,
            padding: self.terminal.padding,
            ..self.life.clone()
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lifegrid")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let settings = Settings::parse("").unwrap();
        assert_eq!(settings.life, LifeConfig::default());
    }

    #[test]
    fn partial_table_keeps_other_defaults() {
        let settings = Settings::parse("[life]\ncell_pitch = 4\nmax_population = 50\n").unwrap();
        assert_eq!(settings.life.cell_pitch, 4);
        assert_eq!(settings.life.max_population, 50);
        assert_eq!(settings.life.padding, LifeConfig::default().padding);
    }

    #[test]
    fn negative_pitch_parses_and_fails_validation() {
        let settings = Settings::parse("[life]\ncell_pitch = -2\n").unwrap();
        assert!(settings.life.validate().is_err());
    }

    #[test]
    fn wrong_type_is_an_error() {
        assert!(Settings::parse("[life]\ncell_pitch = \"big\"\n").is_err());
    }

    #[test]
    fn terminal_layout_defaults_to_character_cells() {
        let config = Settings::parse("[life]\ncell_pitch = 10\nmax_population = 50\n")
            .unwrap()
            .terminal_config();
        assert_eq!(config.cell_pitch, 1);
        assert_eq!(config.padding, 1);
        assert_eq!(config.max_population, 50);
    }

    #[test]
    fn terminal_table_overrides_layout() {
        let settings = Settings::parse("[terminal]\ncell_pitch = 2\n").unwrap();
        let config = settings.terminal_config();
        assert_eq!(config.cell_pitch, 2);
        assert_eq!(config.padding, 1);
        assert_eq!(settings.life.cell_pitch, LifeConfig::default().cell_pitch);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = Settings::load(Some(Path::new("/nonexistent/lifegrid/config.toml")));
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
