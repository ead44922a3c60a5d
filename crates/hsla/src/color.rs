// SPDX-License-Identifier: MIT
//
// The HSLA color value and its single-color transformations.
//
// All inputs arrive as f64 and are normalized in one place, `Hsla::new`:
//
//   NaN        → component default (same as "not given")
//   hue/s/l    → round half-up, then clamp (0..=360, 0..=100, 0..=100)
//   alpha      → clamp to 0.0..=1.0, no rounding
//
// Transformations compute one new component from the current ones and send
// all four back through `new`, so clamping rules live in exactly one spot.

use std::fmt;
use std::hash::{Hash, Hasher};

use log::trace;

use crate::options::{DEFAULT_ALPHA, DEFAULT_HUE, DEFAULT_LIGHTNESS, DEFAULT_SATURATION};

/// Largest stored hue, in degrees.
pub const MAX_HUE: u16 = 360;

/// Largest stored saturation, in percent.
pub const MAX_SATURATION: u8 = 100;

/// Largest stored lightness, in percent.
pub const MAX_LIGHTNESS: u8 = 100;

// ─── Hsla ────────────────────────────────────────────────────────────────────

/// An immutable color in hue / saturation / lightness / alpha form.
///
/// Hue, saturation and lightness are stored as integers; alpha stays a real
/// number. Every constructor rounds and clamps its inputs, so an `Hsla` in
/// hand always satisfies:
///
/// - `0 <= hue <= 360`
/// - `0 <= saturation <= 100`
/// - `0 <= lightness <= 100`
/// - `0.0 <= alpha <= 1.0`
///
/// # Examples
///
/// ```
/// use hsla::Hsla;
///
/// let base = Hsla::new(60.0, 80.0, 50.0, 1.0);
///
/// assert_eq!(base.lighten(20.0).to_string(), "hsla(60, 80%, 70%, 1)");
/// assert_eq!(base.saturate(20.0).to_string(), "hsla(60, 100%, 50%, 1)");
/// assert_eq!(base.rotate(-90.0).hue(), 330);
/// assert_eq!(base.opposite().hue(), 240);
///
/// // The receiver is never touched.
/// assert_eq!(base.to_string(), "hsla(60, 80%, 50%, 1)");
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "crate::export::HslaJson", into = "crate::export::HslaJson")
)]
pub struct Hsla {
    hue: u16,
    saturation: u8,
    lightness: u8,
    alpha: f64,
}

impl Hsla {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Build a color from raw components.
    ///
    /// Never fails. NaN components take their default, fractional
    /// hue/saturation/lightness round half-up, and everything is clamped.
    ///
    /// Use [`HslaOptions`](crate::HslaOptions) when some components should
    /// be left at their defaults.
    #[must_use]
    pub fn new(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        Self {
            hue: normalize_component("hue", hue, DEFAULT_HUE, f64::from(MAX_HUE)) as u16,
            saturation: normalize_component(
                "saturation",
                saturation,
                DEFAULT_SATURATION,
                f64::from(MAX_SATURATION),
            ) as u8,
            lightness: normalize_component(
                "lightness",
                lightness,
                DEFAULT_LIGHTNESS,
                f64::from(MAX_LIGHTNESS),
            ) as u8,
            alpha: normalize_alpha(alpha),
        }
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    /// Hue in degrees, `0..=360`.
    #[inline]
    #[must_use]
    pub const fn hue(self) -> u16 {
        self.hue
    }

    /// Saturation in percent, `0..=100`.
    #[inline]
    #[must_use]
    pub const fn saturation(self) -> u8 {
        self.saturation
    }

    /// Lightness in percent, `0..=100`.
    #[inline]
    #[must_use]
    pub const fn lightness(self) -> u8 {
        self.lightness
    }

    /// Opacity, `0.0..=1.0`.
    #[inline]
    #[must_use]
    pub const fn alpha(self) -> f64 {
        self.alpha
    }

    /// Components widened back to constructor inputs.
    fn parts(self) -> (f64, f64, f64, f64) {
        (
            f64::from(self.hue),
            f64::from(self.saturation),
            f64::from(self.lightness),
            self.alpha,
        )
    }

    // ─── Alpha ───────────────────────────────────────────────────────────

    /// Return a copy with alpha replaced (clamped to `0.0..=1.0`).
    ///
    /// NaN behaves like an omitted alpha and gives the default, `1`.
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        let (h, s, l, _) = self.parts();
        Self::new(h, s, l, alpha)
    }

    // ─── Lightness / Saturation ──────────────────────────────────────────

    /// Raise lightness by `percent` points (clamped to 100).
    #[must_use]
    pub fn lighten(self, percent: f64) -> Self {
        let (h, s, l, a) = self.parts();
        Self::new(h, s, offset(l, percent), a)
    }

    /// Lower lightness by `percent` points (clamped to 0).
    #[must_use]
    pub fn darken(self, percent: f64) -> Self {
        let (h, s, l, a) = self.parts();
        Self::new(h, s, offset(l, -percent), a)
    }

    /// Raise saturation by `percent` points (clamped to 100).
    #[must_use]
    pub fn saturate(self, percent: f64) -> Self {
        let (h, s, l, a) = self.parts();
        Self::new(h, offset(s, percent), l, a)
    }

    /// Lower saturation by `percent` points (clamped to 0).
    #[must_use]
    pub fn desaturate(self, percent: f64) -> Self {
        let (h, s, l, a) = self.parts();
        Self::new(h, offset(s, -percent), l, a)
    }

    // ─── Hue ─────────────────────────────────────────────────────────────

    /// Turn the hue by `degrees`, wrapping around the wheel.
    ///
    /// Positive and negative turns of any size land in `0..360`. A
    /// non-finite turn leaves the color unchanged.
    #[must_use]
    pub fn rotate(self, degrees: f64) -> Self {
        if !degrees.is_finite() {
            return self;
        }
        let (h, s, l, a) = self.parts();
        let turned = (h + degrees) % 360.0;
        let turned = if turned < 0.0 { turned + 360.0 } else { turned };
        Self::new(turned, s, l, a)
    }

    /// The complementary color: hue turned by 180°.
    #[inline]
    #[must_use]
    pub fn opposite(self) -> Self {
        self.rotate(180.0)
    }
}

impl Default for Hsla {
    /// `hsla(0, 100%, 50%, 1)`.
    fn default() -> Self {
        Self::new(
            DEFAULT_HUE,
            DEFAULT_SATURATION,
            DEFAULT_LIGHTNESS,
            DEFAULT_ALPHA,
        )
    }
}

// Alpha is never NaN and never -0.0 (see `normalize_alpha`), so bitwise
// comparison is a total, hash-consistent equality.
impl PartialEq for Hsla {
    fn eq(&self, other: &Self) -> bool {
        self.hue == other.hue
            && self.saturation == other.saturation
            && self.lightness == other.lightness
            && self.alpha.to_bits() == other.alpha.to_bits()
    }
}

impl Eq for Hsla {}

impl Hash for Hsla {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hue.hash(state);
        self.saturation.hash(state);
        self.lightness.hash(state);
        self.alpha.to_bits().hash(state);
    }
}

impl fmt::Display for Hsla {
    /// `hsla(H, S%, L%, A)`; alpha uses the shortest form (`1`, `0.5`, `0`).
    ///
    /// Alpha is always positional, never exponent notation: `1e-7` prints
    /// as `0.0000001`. It still parses back to the same value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

// ─── Normalization ───────────────────────────────────────────────────────────

/// Round half-up (`2.5 → 3`, `-2.5 → -2`).
fn round_half_up(value: f64) -> f64 {
    // `value - floor` is exact, so values just below .5 never round up.
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Default NaN, round, then clamp into `0..=max`.
fn normalize_component(name: &str, raw: f64, default: f64, max: f64) -> f64 {
    if raw.is_nan() {
        trace!("{name} is NaN, using default {default}");
        return default;
    }
    let rounded = round_half_up(raw);
    let value = rounded.clamp(0.0, max);
    if !(0.0..=max).contains(&rounded) {
        trace!("{name} {raw} clamped to {value}");
    }
    value
}

/// Default NaN, then clamp into `0.0..=1.0`.
fn normalize_alpha(raw: f64) -> f64 {
    if raw.is_nan() {
        trace!("alpha is NaN, using default {DEFAULT_ALPHA}");
        return DEFAULT_ALPHA;
    }
    let value = raw.clamp(0.0, 1.0);
    if !(0.0..=1.0).contains(&raw) {
        trace!("alpha {raw} clamped to {value}");
    }
    // -0.0 + 0.0 is +0.0; Display would otherwise print "-0".
    value + 0.0
}

/// `base + delta`, where a NaN delta means "no change".
fn offset(base: f64, delta: f64) -> f64 {
    if delta.is_nan() { base } else { base + delta }
}
