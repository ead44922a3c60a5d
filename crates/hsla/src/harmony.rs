//! Color-harmony schemes built from hue rotation.
//!
//! Each scheme returns the base color together with colors whose hues sit at
//! fixed angular relationships to it. Only hue changes; saturation,
//! lightness and alpha carry over from the base.

use std::fmt;

use crate::color::Hsla;

/// Default triadic spread, in degrees either side of the complement.
pub const TRIADIC_SPREAD: f64 = 60.0;

/// Largest accepted triadic spread.
pub const TRIADIC_MAX_SPREAD: f64 = 60.0;

/// Default analogous spread, in degrees either side of the base.
pub const ANALOGOUS_SPREAD: f64 = 15.0;

/// Largest accepted analogous spread.
pub const ANALOGOUS_MAX_SPREAD: f64 = 120.0;

impl Hsla {
    /// Triadic scheme with the default 60° spread.
    ///
    /// ```
    /// use hsla::Hsla;
    ///
    /// let [left, base, right] = Hsla::new(60.0, 80.0, 50.0, 1.0).triadic();
    /// assert_eq!((left.hue(), base.hue(), right.hue()), (180, 60, 300));
    /// ```
    #[must_use]
    pub fn triadic(self) -> [Self; 3] {
        self.triadic_by(TRIADIC_SPREAD)
    }

    /// Triadic scheme: `[complement - d, self, complement + d]`.
    ///
    /// `degrees` is clamped to `0..=60`; NaN falls back to 60.
    #[must_use]
    pub fn triadic_by(self, degrees: f64) -> [Self; 3] {
        let spread = spread(degrees, TRIADIC_SPREAD, TRIADIC_MAX_SPREAD);
        let opposite = self.opposite();
        [opposite.rotate(-spread), self, opposite.rotate(spread)]
    }

    /// Analogous scheme with the default 15° spread.
    ///
    /// ```
    /// use hsla::Hsla;
    ///
    /// let [left, base, right] = Hsla::new(60.0, 80.0, 50.0, 1.0).analogous();
    /// assert_eq!((left.hue(), base.hue(), right.hue()), (45, 60, 75));
    /// ```
    #[must_use]
    pub fn analogous(self) -> [Self; 3] {
        self.analogous_by(ANALOGOUS_SPREAD)
    }

    /// Analogous scheme: `[self - d, self, self + d]`.
    ///
    /// `degrees` is clamped to `0..=120`; NaN falls back to 15.
    #[must_use]
    pub fn analogous_by(self, degrees: f64) -> [Self; 3] {
        let spread = spread(degrees, ANALOGOUS_SPREAD, ANALOGOUS_MAX_SPREAD);
        [self.rotate(-spread), self, self.rotate(spread)]
    }
}

fn spread(degrees: f64, default: f64, max: f64) -> f64 {
    if degrees.is_nan() {
        default
    } else {
        degrees.clamp(0.0, max)
    }
}

// ─── Harmony ─────────────────────────────────────────────────────────────────

/// A named color scheme, for callers that pick one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Harmony {
    /// Complement ± 60°, base in the middle (3 colors).
    Triadic,
    /// Base ± 15°, base in the middle (3 colors).
    Analogous,
}

impl Harmony {
    /// Generate this scheme from `base` using default spreads.
    #[must_use]
    pub fn apply(self, base: Hsla) -> [Hsla; 3] {
        match self {
            Self::Triadic => base.triadic(),
            Self::Analogous => base.analogous(),
        }
    }

    /// Lowercase name of this scheme.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Triadic => "triadic",
            Self::Analogous => "analogous",
        }
    }

    /// Look a scheme up by name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .find(|h| h.name().eq_ignore_ascii_case(name))
            .copied()
    }

    /// Every scheme.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Triadic, Self::Analogous]
    }
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn base() -> Hsla {
        Hsla::new(60.0, 80.0, 50.0, 1.0)
    }

    fn strings(colors: &[Hsla]) -> Vec<String> {
        colors.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn triadic_default() {
        assert_eq!(
            strings(&base().triadic()),
            [
                "hsla(180, 80%, 50%, 1)",
                "hsla(60, 80%, 50%, 1)",
                "hsla(300, 80%, 50%, 1)",
            ]
        );
    }

    #[test]
    fn triadic_custom_spread() {
        let hues = base().triadic_by(30.0).map(Hsla::hue);
        assert_eq!(hues, [210, 60, 270]);
    }

    #[test]
    fn triadic_spread_is_clamped() {
        assert_eq!(base().triadic_by(90.0), base().triadic_by(60.0));
        assert_eq!(base().triadic_by(-10.0), base().triadic_by(0.0));
        assert_eq!(base().triadic_by(f64::NAN), base().triadic());
    }

    /// With zero spread both outer colors collapse onto the complement.
    #[test]
    fn triadic_zero_spread() {
        let [left, _, right] = base().triadic_by(0.0);
        assert_eq!(left, base().opposite());
        assert_eq!(right, base().opposite());
    }

    #[test]
    fn analogous_default() {
        assert_eq!(
            strings(&base().analogous()),
            [
                "hsla(45, 80%, 50%, 1)",
                "hsla(60, 80%, 50%, 1)",
                "hsla(75, 80%, 50%, 1)",
            ]
        );
    }

    #[test]
    fn analogous_spread_is_clamped() {
        assert_eq!(base().analogous_by(200.0).map(Hsla::hue), [300, 60, 180]);
        assert_eq!(base().analogous_by(f64::NAN), base().analogous());
    }

    #[test]
    fn analogous_wraps_around_zero() {
        let hues = Hsla::new(5.0, 100.0, 50.0, 1.0).analogous().map(Hsla::hue);
        assert_eq!(hues, [350, 5, 20]);
    }

    #[test]
    fn middle_is_base() {
        let color = Hsla::new(123.0, 45.0, 67.0, 0.8);
        assert_eq!(color.triadic()[1], color);
        assert_eq!(color.analogous()[1], color);
    }

    #[test]
    fn schemes_keep_saturation_lightness_alpha() {
        let color = Hsla::new(200.0, 30.0, 40.0, 0.25);
        for c in color.triadic().into_iter().chain(color.analogous()) {
            assert_eq!(c.saturation(), 30);
            assert_eq!(c.lightness(), 40);
            assert!((c.alpha() - 0.25).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn harmony_apply_matches_methods() {
        assert_eq!(Harmony::Triadic.apply(base()), base().triadic());
        assert_eq!(Harmony::Analogous.apply(base()), base().analogous());
    }

    #[test]
    fn harmony_name_roundtrip() {
        for &h in Harmony::all() {
            assert_eq!(Harmony::from_name(h.name()), Some(h));
            assert_eq!(h.to_string(), h.name());
        }
        assert_eq!(Harmony::from_name("TRIADIC"), Some(Harmony::Triadic));
        assert_eq!(Harmony::from_name("tetradic"), None);
    }
}
