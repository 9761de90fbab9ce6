use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::Result;
use crate::responsive::Breakpoint;
use crate::types::{Color, Length};

/// A theme resolves spacing-scale tokens, breakpoint widths and named
/// color variables.
pub trait Theme: Send + Sync {
    /// Resolve a spacing-scale token to a concrete length.
    fn space(&self, units: f32) -> Length;

    /// Minimum viewport width at which `bp` applies, as a CSS length.
    /// `None` for the base breakpoint (no media query).
    fn breakpoint(&self, bp: Breakpoint) -> Option<&str>;

    /// Resolve a color variable name. Returns None if not defined.
    fn color(&self, name: &str) -> Option<&Color>;
}

/// Spacing unit of 0.25rem, breakpoints at 30/48/62/80/96em.
#[derive(Debug, Clone)]
pub struct DefaultTheme {
    pub space_unit_rem: f32,
    pub breakpoints: BTreeMap<Breakpoint, String>,
    pub colors: BTreeMap<String, Color>,
}

impl DefaultTheme {
    pub fn new() -> Self {
        let breakpoints = [
            (Breakpoint::Sm, "30em"),
            (Breakpoint::Md, "48em"),
            (Breakpoint::Lg, "62em"),
            (Breakpoint::Xl, "80em"),
            (Breakpoint::Xxl, "96em"),
        ]
        .into_iter()
        .map(|(bp, width)| (bp, width.to_string()))
        .collect();

        let colors = [
            ("background", Color::oklch(1.0, 0.0, 0.0)),
            ("foreground", Color::oklch(0.2, 0.0, 0.0)),
            ("border", Color::oklch(0.9, 0.0, 0.0)),
        ]
        .into_iter()
        .map(|(name, color)| (name.to_string(), color))
        .collect();

        Self {
            space_unit_rem: 0.25,
            breakpoints,
            colors,
        }
    }

    /// Defaults overridden by whatever `config` sets.
    pub fn from_config(config: ThemeConfig) -> Result<Self> {
        let mut theme = Self::new();

        if let Some(unit) = config.space_unit_rem {
            theme.space_unit_rem = unit;
        }
        for (name, width) in config.breakpoints {
            let bp: Breakpoint = name.parse()?;
            theme.breakpoints.insert(bp, width);
        }
        for (name, hex) in config.colors {
            theme.colors.insert(name, Color::parse_hex(&hex)?);
        }

        log::debug!(
            "[theme] loaded: space unit {}rem, {} breakpoints, {} colors",
            theme.space_unit_rem,
            theme.breakpoints.len(),
            theme.colors.len()
        );
        Ok(theme)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: ThemeConfig = serde_json::from_str(json)?;
        Self::from_config(config)
    }
}

impl Default for DefaultTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for DefaultTheme {
    fn space(&self, units: f32) -> Length {
        if units == 0.0 {
            return Length::ZERO;
        }
        Length::Rem(units * self.space_unit_rem)
    }

    fn breakpoint(&self, bp: Breakpoint) -> Option<&str> {
        if bp == Breakpoint::Base {
            return None;
        }
        self.breakpoints.get(&bp).map(String::as_str)
    }

    fn color(&self, name: &str) -> Option<&Color> {
        self.colors.get(name)
    }
}

/// Theme overrides as read from a JSON config file. Every field is
/// optional; unset fields keep the [`DefaultTheme`] values.
///
/// ```json
/// { "space_unit_rem": 0.5, "breakpoints": { "md": "40em" }, "colors": { "border": "#ccc" } }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub space_unit_rem: Option<f32>,
    pub breakpoints: BTreeMap<String, String>,
    pub colors: BTreeMap<String, String>,
}
