//! RGB colour type with hex parsing and exponential easing
//!
//! Colours are plain f32 triples in [0, 1], converted from `#RRGGBB`
//! literals. The easing step is the piece the render loop leans on every
//! frame: an exponential approach toward a target that converges at the same
//! visible speed regardless of frame rate.

use thiserror::Error;

/// Errors produced when a colour literal cannot be parsed
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    /// Literal is not shaped like `#RRGGBB`
    #[error("colour literal must look like #RRGGBB, got {0:?}")]
    Format(String),
    /// Literal has the right shape but a non-hex digit
    #[error("invalid hex digit in colour literal {0:?}")]
    Digit(String),
}

/// An RGB colour with f32 channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Creates a colour from 8-bit channel values
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Parses a `#RRGGBB` literal (case-insensitive, leading `#` required)
    pub fn from_hex(literal: &str) -> Result<Self, ColorParseError> {
        let digits = literal
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::Format(literal.to_string()))?;

        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorParseError::Format(literal.to_string()));
        }

        // from_str_radix tolerates a leading '+', which is not a hex digit
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::Digit(literal.to_string()));
        }

        let channel = |range| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::Digit(literal.to_string()))
        };

        Ok(Self::rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// RGBA array for material base colours (alpha fixed at 1.0)
    pub fn to_array4(self) -> [f32; 4] {
        [self.r, self.g, self.b, 1.0]
    }

    /// Largest per-channel distance to another colour
    pub fn distance(self, other: Color) -> f32 {
        (self.r - other.r)
            .abs()
            .max((self.g - other.g).abs())
            .max((self.b - other.b).abs())
    }

    /// Eases this colour toward `target` by one frame step
    ///
    /// Exponential (critically-damped style) approach: each channel covers
    /// the fraction `1 - 0.5^(delta / half_life)` of its remaining distance,
    /// so the step never overshoots and a long frame converges further than
    /// a short one. A non-positive `delta` leaves the colour unchanged.
    pub fn damp_toward(self, target: Color, half_life: f32, delta: f32) -> Color {
        if !(delta > 0.0) || !(half_life > 0.0) {
            return self;
        }

        let t = 1.0 - 0.5f32.powf(delta / half_life);
        Color {
            r: self.r + (target.r - self.r) * t,
            g: self.g + (target.g - self.g) * t,
            b: self.b + (target.b - self.b) * t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_swatch_literals() {
        assert_eq!(
            Color::from_hex("#FF69B4"),
            Ok(Color::rgb8(0xFF, 0x69, 0xB4))
        );
        assert_eq!(
            Color::from_hex("#af2b1e"),
            Ok(Color::rgb8(0xAF, 0x2B, 0x1E))
        );
        assert_eq!(
            Color::from_hex("#212121"),
            Ok(Color::rgb8(0x21, 0x21, 0x21))
        );
    }

    #[test]
    fn rejects_malformed_literals() {
        assert!(matches!(
            Color::from_hex("FF69B4"),
            Err(ColorParseError::Format(_))
        ));
        assert!(matches!(
            Color::from_hex("#FF69B"),
            Err(ColorParseError::Format(_))
        ));
        assert!(matches!(
            Color::from_hex("#GG69B4"),
            Err(ColorParseError::Digit(_))
        ));
    }

    #[test]
    fn damp_never_overshoots() {
        let target = Color::rgb8(0xAF, 0x2B, 0x1E);
        let mut current = Color::WHITE;
        let mut last_distance = current.distance(target);

        // Wildly uneven frame times; distance must still shrink monotonically.
        for delta in [0.001, 0.016, 0.3, 0.008, 1.0, 0.05] {
            current = current.damp_toward(target, 0.05, delta);
            let distance = current.distance(target);
            assert!(distance <= last_distance);
            last_distance = distance;
        }
    }

    #[test]
    fn damp_converges_to_target() {
        let target = Color::rgb8(0xAF, 0x2B, 0x1E);
        let mut current = Color::WHITE;

        for _ in 0..240 {
            current = current.damp_toward(target, 0.05, 1.0 / 60.0);
        }

        assert!(current.distance(target) < 1e-4);
    }

    #[test]
    fn damp_scales_with_delta() {
        let target = Color::rgb8(0x21, 0x21, 0x21);
        let short = Color::WHITE.damp_toward(target, 0.05, 0.01);
        let long = Color::WHITE.damp_toward(target, 0.05, 0.1);

        assert!(long.distance(target) < short.distance(target));
    }

    #[test]
    fn zero_delta_is_a_no_op() {
        let target = Color::rgb8(0x21, 0x21, 0x21);
        assert_eq!(Color::WHITE.damp_toward(target, 0.05, 0.0), Color::WHITE);
    }
}
