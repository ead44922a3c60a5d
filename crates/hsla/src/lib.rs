// SPDX-License-Identifier: MIT
//
// hsla — immutable HSLA color values.
//
// A color is four numbers: hue (degrees on the wheel), saturation and
// lightness (percent), and alpha (opacity). Construction is total: missing
// inputs take defaults, fractional hue/saturation/lightness are rounded,
// and everything is clamped into range. Nothing here can fail except
// reading a string back in.
//
// Module layout:
//
//   options  → HslaOptions: optional inputs with documented fallbacks
//   color    → Hsla: normalization, single-color transformations, Display
//   harmony  → triadic / analogous schemes and the Harmony selector
//   export   → HslaJson structured snapshot (+ serde behind a feature)
//   parse    → FromStr for the canonical "hsla(H, S%, L%, A)" form
//
// Every operation takes `self` by value and returns a fresh `Hsla`. There
// are no `&mut self` methods, so a value that passed the constructor stays
// valid for its whole life.

// Rounded, clamped f64 → u8/u16 casts are the whole point of construction.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Hue/saturation/lightness parameter names are inherently similar.
#![allow(clippy::similar_names)]

pub mod color;
pub mod export;
pub mod harmony;
pub mod options;
pub mod parse;

pub use color::Hsla;
pub use export::HslaJson;
pub use harmony::Harmony;
pub use options::HslaOptions;
pub use parse::ParseHslaError;
