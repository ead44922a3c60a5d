//! Construction with optional inputs.
//!
//! Any of the four components may be left out. Omitted components fall back
//! to the defaults below, which together describe a fully saturated, opaque,
//! mid-lightness red: `hsla(0, 100%, 50%, 1)`.

use crate::color::Hsla;

/// Hue used when none is given, in degrees.
pub const DEFAULT_HUE: f64 = 0.0;

/// Saturation used when none is given, in percent.
pub const DEFAULT_SATURATION: f64 = 100.0;

/// Lightness used when none is given, in percent.
pub const DEFAULT_LIGHTNESS: f64 = 50.0;

/// Alpha used when none is given.
pub const DEFAULT_ALPHA: f64 = 1.0;

/// Raw, possibly incomplete inputs for building an [`Hsla`].
///
/// Fields are plain `Option<f64>` so callers can fill them from any source;
/// the chainable setters are a shorthand for the common case.
///
/// ```
/// use hsla::HslaOptions;
///
/// let color = HslaOptions::new().hue(60.0).saturation(25.0).build();
/// assert_eq!(color.to_string(), "hsla(60, 25%, 50%, 1)");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HslaOptions {
    /// Hue in degrees. Falls back to [`DEFAULT_HUE`].
    pub hue: Option<f64>,
    /// Saturation in percent. Falls back to [`DEFAULT_SATURATION`].
    pub saturation: Option<f64>,
    /// Lightness in percent. Falls back to [`DEFAULT_LIGHTNESS`].
    pub lightness: Option<f64>,
    /// Opacity. Falls back to [`DEFAULT_ALPHA`].
    pub alpha: Option<f64>,
}

impl HslaOptions {
    /// Options with every component omitted.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hue: None,
            saturation: None,
            lightness: None,
            alpha: None,
        }
    }

    /// Set the hue.
    #[must_use]
    pub const fn hue(self, hue: f64) -> Self {
        Self {
            hue: Some(hue),
            ..self
        }
    }

    /// Set the saturation.
    #[must_use]
    pub const fn saturation(self, saturation: f64) -> Self {
        Self {
            saturation: Some(saturation),
            ..self
        }
    }

    /// Set the lightness.
    #[must_use]
    pub const fn lightness(self, lightness: f64) -> Self {
        Self {
            lightness: Some(lightness),
            ..self
        }
    }

    /// Set the alpha.
    #[must_use]
    pub const fn alpha(self, alpha: f64) -> Self {
        Self {
            alpha: Some(alpha),
            ..self
        }
    }

    /// Fill in defaults, then round and clamp into a valid color.
    #[must_use]
    pub fn build(self) -> Hsla {
        Hsla::new(
            self.hue.unwrap_or(DEFAULT_HUE),
            self.saturation.unwrap_or(DEFAULT_SATURATION),
            self.lightness.unwrap_or(DEFAULT_LIGHTNESS),
            self.alpha.unwrap_or(DEFAULT_ALPHA),
        )
    }
}

impl From<HslaOptions> for Hsla {
    fn from(options: HslaOptions) -> Self {
        options.build()
    }
}
