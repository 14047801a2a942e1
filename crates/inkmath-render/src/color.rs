use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An sRGB color with 8-bit alpha.
///
/// Parses any SVG/CSS color notation (`red`, `#f00`, `rgba(255, 0, 0, 0.1)`, ...) and prints
/// itself back as CSS text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 255)
    }

    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub fn is_opaque(&self) -> bool {
        self.alpha == 255
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let c = svgtypes::Color::from_str(s.trim()).map_err(|e| Error::InvalidColor {
            value: s.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self::rgba(c.red, c.green, c.blue, c.alpha))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            return write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue);
        }
        let alpha = css_opacity(self.alpha);
        write!(
            f,
            "rgba({}, {}, {}, {alpha})",
            self.red, self.green, self.blue
        )
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_string()
    }
}

/// Shortest decimal opacity that parses back to `alpha`.
///
/// CSS parsing scales the opacity by 255 and truncates, so each 8-bit alpha owns the range
/// `[alpha / 255, (alpha + 1) / 255)`; the search starts from its midpoint.
fn css_opacity(alpha: u8) -> f64 {
    let mid = (f64::from(alpha) + 0.5) / 255.0;
    for places in 1..=4 {
        let scale = 10f64.powi(places);
        let candidate = (mid * scale).round() / scale;
        if (candidate.clamp(0.0, 1.0) * 255.0) as u8 == alpha {
            return candidate;
        }
    }
    mid
}
