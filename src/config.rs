use crate::error::ConfigError;
use serde::Deserialize;

/// Grid and timing configuration, supplied once at construction
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    pub screen_width: i32,
    pub screen_height: i32,
    pub cell_pitch: i32,
    pub padding: i32,
    pub max_population: usize,
    pub ticks_per_second: u32,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 600,
            cell_pitch: 10,
            padding: 10,
            max_population: 400,
            ticks_per_second: 10,
        }
    }
}

impl LifeConfig {
    /// Check everything that can be checked without building the grid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_pitch <= 0 {
            return Err(ConfigError::NonPositivePitch(self.cell_pitch));
        }
        if self.screen_width <= 0 || self.screen_height <= 0 {
            return Err(ConfigError::NonPositiveScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if self.padding < 0 {
            return Err(ConfigError::NegativePadding(self.padding));
        }
        let inset = i64::from(self.padding) * 2;
        if inset > i64::from(self.screen_width) || inset > i64::from(self.screen_height) {
            return Err(ConfigError::PaddingTooLarge {
                padding: self.padding,
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if self.ticks_per_second == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(())
    }

    /// Seconds between generations for the driving loop
    pub fn tick_interval(&self) -> f32 {
        1.0 / self.ticks_per_second.max(1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(LifeConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_and_negative_pitch() {
        let mut config = LifeConfig { cell_pitch: 0, ..LifeConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::NonPositivePitch(0)));
        config.cell_pitch = -4;
        assert_eq!(config.validate(), Err(ConfigError::NonPositivePitch(-4)));
    }

    #[test]
    fn rejects_non_positive_screen() {
        let config = LifeConfig { screen_height: 0, ..LifeConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::NonPositiveScreen { .. })));
    }

    #[test]
    fn rejects_padding_over_half_screen() {
        let config = LifeConfig {
            screen_width: 100,
            screen_height: 40,
            padding: 21,
            ..LifeConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::PaddingTooLarge { .. })));

        let config = LifeConfig { padding: 20, ..config };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn huge_padding_is_too_large() {
        let config = LifeConfig { padding: i32::MAX / 2 + 1, ..LifeConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::PaddingTooLarge { .. })));

        let config = LifeConfig {
            screen_width: i32::MAX,
            screen_height: i32::MAX,
            padding: i32::MAX,
            ..LifeConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::PaddingTooLarge { .. })));
    }

    #[test]
    fn rejects_negative_padding() {
        let config = LifeConfig { padding: -1, ..LifeConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::NegativePadding(-1)));
    }

    #[test]
    fn rejects_zero_tick_rate() {
        let config = LifeConfig { ticks_per_second: 0, ..LifeConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTickRate));
    }

    #[test]
    fn tick_interval_follows_rate() {
        let config = LifeConfig { ticks_per_second: 4, ..LifeConfig::default() };
        assert!((config.tick_interval() - 0.25).abs() < f32::EPSILON);
    }
}
