//! Game configuration.

use miette::{IntoDiagnostic, Result, WrapErr};
use serde::Deserialize;

/// Initial game configuration passed to [`crate::Runtime::new`].
///
/// There's three ways to initialize the config:
///
/// # Example
///
/// ```
/// # use arcade_samples::Config;
/// Config {
///     title: "My Game".to_owned(),
///     ..Default::default()
/// };
/// ```
///
/// # Example
///
/// ```
/// # use arcade_samples::Config;
/// Config::default().with_title("My Game");
/// ```
///
/// # Example
///
/// ```
/// # use arcade_samples::Config;
/// # fn try_main() -> miette::Result<()> {
/// Config::from_toml(r#"title = "My Game""#)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Amount of horizontal pixels of the drawable area.
    ///
    /// Defaults to `1500.0`.
    pub buffer_width: f32,
    /// Amount of vertical pixels of the drawable area.
    ///
    /// Defaults to `800.0`.
    pub buffer_height: f32,
    /// Name in the title bar.
    ///
    /// Defaults to `"Arcade Sample"`.
    pub title: String,
    /// Amount of seconds a single update tick takes.
    ///
    /// Defaults to `1.0 / 60.0`.
    pub update_delta_time: f32,
    /// Maximum amount of seconds a single frame may take before update ticks are dropped.
    ///
    /// Prevents the game from trying to catch up indefinitely after a stall.
    ///
    /// Defaults to `1.0 / 4.0`.
    pub max_frame_time_secs: f32,
}

impl Config {
    /// Set the amount of pixels of the drawable area.
    #[inline]
    #[must_use]
    pub fn with_buffer_size(mut self, width: f32, height: f32) -> Self {
        self.buffer_width = width;
        self.buffer_height = height;

        self
    }

    /// Make the drawable area square, using the current height for the width.
    #[inline]
    #[must_use]
    pub fn with_square_buffer(mut self) -> Self {
        self.buffer_width = self.buffer_height;

        self
    }

    /// Set the name in the title bar.
    #[inline]
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();

        self
    }

    /// Set the amount of seconds a single update tick takes.
    #[inline]
    #[must_use]
    pub fn with_update_delta_time(mut self, update_delta_time: f32) -> Self {
        self.update_delta_time = update_delta_time;

        self
    }

    /// Set the maximum amount of seconds a single frame may take.
    #[inline]
    #[must_use]
    pub fn with_max_frame_time(mut self, max_frame_time_secs: f32) -> Self {
        self.max_frame_time_secs = max_frame_time_secs;

        self
    }

    /// Parse a configuration from TOML, missing fields use their defaults.
    ///
    /// # Errors
    ///
    /// - When the TOML is malformed or contains unknown fields.
    /// - When the update rate is not a positive amount of seconds.
    pub fn from_toml(source: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(source)
            .into_diagnostic()
            .wrap_err("Error parsing game configuration")?;

        if config.update_delta_time <= 0.0 {
            miette::bail!(
                "Update delta time must be positive, got {}",
                config.update_delta_time
            );
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            buffer_width: 1500.0,
            buffer_height: 800.0,
            title: "Arcade Sample".to_owned(),
            update_delta_time: 1.0 / 60.0,
            max_frame_time_secs: 1.0 / 4.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn toml_uses_defaults_for_missing_fields() {
        let config = Config::from_toml(
            r#"
            title = "Sounds"
            buffer_width = 900.0
            buffer_height = 600.0
            "#,
        )
        .unwrap();

        assert_eq!(
            config,
            Config::default()
                .with_title("Sounds")
                .with_buffer_size(900.0, 600.0)
        );
    }

    #[test]
    fn toml_rejects_unknown_fields() {
        assert!(Config::from_toml("fullscreen = true").is_err());
    }

    #[test]
    fn toml_rejects_non_positive_update_rate() {
        assert!(Config::from_toml("update_delta_time = 0.0").is_err());
    }

    #[test]
    fn square_buffer() {
        let config = Config::default().with_square_buffer();

        assert_eq!(config.buffer_width, config.buffer_height);
    }
}
