//! Configuration types for PolyQR rendering.
//!
//! This module provides configuration structures controlling how rendered
//! codes are styled. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources.
//!
//! # Example
//!
//! ```
//! # use polyqr::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.style().fill().is_ok());
//! ```

use serde::Deserialize;

use crate::color::Color;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified style configuration.
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Visual styling configuration for rendered codes.
///
/// Fields that are not set fall back to renderer defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Fill [`Color`] for SVG output, as a CSS color string. TikZ output
    /// is unaffected: TikZ color expressions are not CSS, so its fill
    /// stays `black` with caller style text appended.
    #[serde(default)]
    fill: Option<String>,
}

impl StyleConfig {
    /// Creates a new [`StyleConfig`] with the specified fill color string.
    pub fn new(fill: Option<String>) -> Self {
        Self { fill }
    }

    /// Returns the parsed fill [`Color`], or `None` if no fill is
    /// configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn fill(&self) -> Result<Option<Color>, String> {
        self.fill
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid fill color in config: {err}"))
    }
}
