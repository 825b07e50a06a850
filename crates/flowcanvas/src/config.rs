//! Configuration types for canvas styling.
//!
//! [`StyleConfig`] controls visual options of the drawing surface. All
//! fields are optional and fall back to renderer defaults, so the type
//! deserializes cleanly from a partial TOML or JSON document.

use serde::Deserialize;

use crate::color::Color;

/// Visual styling configuration for the drawing surface.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background color of the surface, as a CSS color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` when no color is
    /// configured and the renderer default applies.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}
