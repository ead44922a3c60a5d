//! Structured export.
//!
//! [`HslaJson`] is a plain, owned snapshot of a color's four components.
//! Changing it never affects the color it came from; turning it back into
//! an [`Hsla`] goes through the normal constructor, so a hand-edited
//! snapshot is clamped like any other input.
//!
//! With the `serde` feature enabled, `HslaJson` (and `Hsla`, which
//! serializes through it) maps to an object with exactly the keys `hue`,
//! `saturation`, `lightness` and `alpha`.

use crate::color::Hsla;

/// The four components of an [`Hsla`], as plain public fields.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HslaJson {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl Hsla {
    /// Snapshot this color's components.
    ///
    /// ```
    /// use hsla::Hsla;
    ///
    /// let color = Hsla::new(60.0, 25.0, 80.0, 0.5);
    /// let json = color.to_json();
    /// assert_eq!(json.hue, 60.0);
    /// assert_eq!(Hsla::from(json), color);
    /// ```
    #[must_use]
    pub fn to_json(self) -> HslaJson {
        HslaJson {
            hue: f64::from(self.hue()),
            saturation: f64::from(self.saturation()),
            lightness: f64::from(self.lightness()),
            alpha: self.alpha(),
        }
    }
}

impl From<HslaJson> for Hsla {
    fn from(json: HslaJson) -> Self {
        Self::new(json.hue, json.saturation, json.lightness, json.alpha)
    }
}

impl From<Hsla> for HslaJson {
    fn from(color: Hsla) -> Self {
        color.to_json()
    }
}
