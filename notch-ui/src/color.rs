//! Colors for widget tints.

use thiserror::Error;

/// A color with an alpha component.
///
/// Values are stored as `f32`s, typically in the range `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

/// Errors produced by [`Color::from_hex`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The string does not start with `#`.
    #[error("color `{0}` must start with '#'")]
    MissingHash(String),
    /// The string has a length other than `#rgb`, `#rrggbb` or `#rrggbbaa`.
    #[error("color `{0}` must have 3, 6 or 8 hex digits")]
    InvalidLength(String),
    /// The string contains a non-hex digit.
    #[error("color `{0}` contains a non-hex digit")]
    InvalidDigit(String),
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    /// Opaque black.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque green.
    pub const GREEN: Color = Color::new(0.0, 128.0 / 255.0, 0.0, 1.0);
    /// Opaque orange.
    pub const ORANGE: Color = Color::new(1.0, 165.0 / 255.0, 0.0, 1.0);

    /// Creates a new `Color` from four `f32` values (red, green, blue, alpha).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new opaque `Color` from three `f32` values.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a new `Color` from four `u8` values (red, green, blue, alpha).
    #[inline]
    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Creates a new opaque `Color` from three `u8` values.
    #[inline]
    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`.
    ///
    /// ```
    /// use notch_ui::Color;
    ///
    /// assert_eq!(Color::from_hex("#ff0000"), Ok(Color::from_rgb_u8(255, 0, 0)));
    /// assert!(Color::from_hex("red").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let Some(digits) = hex.strip_prefix('#') else {
            return Err(ColorParseError::MissingHash(hex.to_string()));
        };
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::InvalidDigit(hex.to_string()))
        };

        match digits.len() {
            3 => {
                let short = |i: usize| channel(i..i + 1).map(|v| v * 17);
                Ok(Self::from_rgb_u8(short(0)?, short(1)?, short(2)?))
            }
            6 => Ok(Self::from_rgb_u8(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Self::from_rgba_u8(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(ColorParseError::InvalidLength(hex.to_string())),
        }
    }

    /// Returns the same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Linearly interpolates from `self` to `other`; `t` is clamped to
    /// `[0.0, 1.0]`.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Converts the color to an array of `[f32; 4]`.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// The default color is fully transparent.
impl Default for Color {
    #[inline]
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl From<[f32; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for [f32; 4] {
    #[inline]
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

impl From<[u8; 3]> for Color {
    #[inline]
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::from_rgb_u8(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_forms() {
        assert_eq!(Color::from_hex("#343434"), Ok(Color::from_rgb_u8(0x34, 0x34, 0x34)));
        assert_eq!(Color::from_hex("#fff"), Ok(Color::WHITE));
        assert_eq!(Color::from_hex("#00000080"), Ok(Color::from_rgba_u8(0, 0, 0, 0x80)));
    }

    #[test]
    fn test_from_hex_errors() {
        assert_eq!(
            Color::from_hex("343434"),
            Err(ColorParseError::MissingHash("343434".to_string()))
        );
        assert_eq!(
            Color::from_hex("#12345"),
            Err(ColorParseError::InvalidLength("#12345".to_string()))
        );
        assert_eq!(
            Color::from_hex("#zz0000"),
            Err(ColorParseError::InvalidDigit("#zz0000".to_string()))
        );
    }

    #[test]
    fn test_lerp_endpoints_and_clamp() {
        let a = Color::BLACK;
        let b = Color::WHITE;
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 2.0), b);
        assert_eq!(a.lerp(b, f32::NAN), a);
        assert_eq!(a.lerp(b, 0.5), Color::new(0.5, 0.5, 0.5, 1.0));
    }
}
