// SPDX-License-Identifier: MIT
//
// Reading the canonical string form back in.
//
// This is the inverse of `Display` and nothing more: it accepts
// `hsla(H, S%, L%, A)` with optional whitespace around tokens and a
// case-insensitive function name. Hex, `rgb()`, `hsl()` and named colors are
// rejected. Numbers that parse but fall outside the legal ranges are clamped
// by the constructor rather than reported.

use std::str::FromStr;

use log::debug;
use thiserror::Error;

use crate::color::Hsla;

/// Why a string is not a canonical `hsla(...)` color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseHslaError {
    #[error("expected a string starting with `hsla(`")]
    MissingPrefix,

    #[error("missing closing `)`")]
    Unterminated,

    #[error("expected 4 components, found {0}")]
    ComponentCount(usize),

    #[error("{0} must end with `%`")]
    MissingPercent(&'static str),

    #[error("invalid {component} `{value}`")]
    InvalidNumber {
        component: &'static str,
        value: String,
    },
}

impl FromStr for Hsla {
    type Err = ParseHslaError;

    /// Parse `hsla(H, S%, L%, A)`.
    ///
    /// ```
    /// use hsla::Hsla;
    ///
    /// let color: Hsla = "hsla(60, 25%, 80%, 0.5)".parse().unwrap();
    /// assert_eq!(color, Hsla::new(60.0, 25.0, 80.0, 0.5));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).inspect_err(|err| debug!("rejected color {s:?}: {err}"))
    }
}

fn parse(s: &str) -> Result<Hsla, ParseHslaError> {
    let s = s.trim();
    let body = s
        .get(..4)
        .filter(|name| name.eq_ignore_ascii_case("hsla"))
        .and_then(|_| s[4..].trim_start().strip_prefix('('))
        .ok_or(ParseHslaError::MissingPrefix)?;
    let body = body.strip_suffix(')').ok_or(ParseHslaError::Unterminated)?;

    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let [hue, saturation, lightness, alpha] = parts.as_slice() else {
        return Err(ParseHslaError::ComponentCount(parts.len()));
    };

    Ok(Hsla::new(
        number("hue", hue)?,
        number("saturation", percent("saturation", saturation)?)?,
        number("lightness", percent("lightness", lightness)?)?,
        number("alpha", alpha)?,
    ))
}

fn percent<'a>(component: &'static str, token: &'a str) -> Result<&'a str, ParseHslaError> {
    token
        .strip_suffix('%')
        .map(str::trim_end)
        .ok_or(ParseHslaError::MissingPercent(component))
}

fn number(component: &'static str, token: &str) -> Result<f64, ParseHslaError> {
    token
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ParseHslaError::InvalidNumber {
            component,
            value: token.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_canonical_form() {
        let color: Hsla = "hsla(60, 25%, 80%, 0.5)".parse().unwrap();
        assert_eq!(color, Hsla::new(60.0, 25.0, 80.0, 0.5));
    }

    #[test]
    fn display_roundtrip() {
        let colors = [
            Hsla::default(),
            Hsla::new(360.0, 0.0, 100.0, 0.0),
            Hsla::new(123.0, 45.0, 67.0, 0.1),
            Hsla::new(60.0, 80.0, 50.0, 1.0).analogous()[0],
            Hsla::new(1.0, 2.0, 3.0, 1.0 / 3.0),
        ];
        for color in colors {
            let parsed: Hsla = color.to_string().parse().unwrap();
            assert_eq!(parsed, color);
        }
    }

    #[test]
    fn whitespace_and_case_are_lenient() {
        let color: Hsla = "  HSLA ( 60 ,25 % ,  80%,1 )  ".parse().unwrap();
        assert_eq!(color.to_string(), "hsla(60, 25%, 80%, 1)");
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let color: Hsla = "hsla(-20, 120%, 49.5%, 4)".parse().unwrap();
        assert_eq!(color.to_string(), "hsla(0, 100%, 50%, 1)");
    }

    #[test]
    fn rejects_other_notations() {
        for input in ["#ff0000", "rgb(255, 0, 0)", "hsl(0, 100%, 50%)", "red", ""] {
            assert_eq!(
                input.parse::<Hsla>(),
                Err(ParseHslaError::MissingPrefix),
                "{input:?}"
            );
        }
    }

    #[test]
    fn rejects_unterminated() {
        assert_eq!(
            "hsla(0, 100%, 50%, 1".parse::<Hsla>(),
            Err(ParseHslaError::Unterminated)
        );
    }

    #[test]
    fn rejects_wrong_component_count() {
        assert_eq!(
            "hsla(0, 100%, 50%)".parse::<Hsla>(),
            Err(ParseHslaError::ComponentCount(3))
        );
        assert_eq!(
            "hsla(0, 100%, 50%, 1, 2)".parse::<Hsla>(),
            Err(ParseHslaError::ComponentCount(5))
        );
        assert_eq!("hsla()".parse::<Hsla>(), Err(ParseHslaError::ComponentCount(1)));
    }

    #[test]
    fn rejects_missing_percent() {
        assert_eq!(
            "hsla(0, 100, 50%, 1)".parse::<Hsla>(),
            Err(ParseHslaError::MissingPercent("saturation"))
        );
        assert_eq!(
            "hsla(0, 100%, 50, 1)".parse::<Hsla>(),
            Err(ParseHslaError::MissingPercent("lightness"))
        );
    }

    #[test]
    fn rejects_bad_numbers() {
        assert_eq!(
            "hsla(abc, 100%, 50%, 1)".parse::<Hsla>(),
            Err(ParseHslaError::InvalidNumber {
                component: "hue",
                value: "abc".to_owned(),
            })
        );
        assert_eq!(
            "hsla(0, 100%, 50%, 50%)".parse::<Hsla>(),
            Err(ParseHslaError::InvalidNumber {
                component: "alpha",
                value: "50%".to_owned(),
            })
        );
        assert_eq!(
            "hsla(NaN, 100%, 50%, 1)".parse::<Hsla>(),
            Err(ParseHslaError::InvalidNumber {
                component: "hue",
                value: "NaN".to_owned(),
            })
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ParseHslaError::ComponentCount(2).to_string(),
            "expected 4 components, found 2"
        );
        assert_eq!(
            ParseHslaError::MissingPercent("lightness").to_string(),
            "lightness must end with `%`"
        );
    }
}
