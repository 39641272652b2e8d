//! Star colors
//!
//! Colors are configured as `#RRGGBB` (or bare `RRGGBB`) strings. Anything
//! else is rejected by [`parse_hex_color`].

/// An opaque 8-bit RGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale every channel by `factor` and floor to an integer
    ///
    /// `factor` is clamped to [0, 1]; a NaN factor yields black.
    pub fn scaled(self, factor: f32) -> Self {
        let factor = if factor.is_nan() { 0.0 } else { factor.clamp(0.0, 1.0) };
        let scale = |c: u8| (c as f32 * factor).floor() as u8;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
        }
    }

    /// Attach an alpha value
    pub fn with_alpha(self, a: f32) -> Rgba {
        Rgba { rgb: self, a }
    }
}

/// An RGB color with a floating point alpha in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub a: f32,
}

/// Parse `#RRGGBB` or `RRGGBB` (case-insensitive)
///
/// Returns `None` for anything else, including 3-digit shorthand.
pub fn parse_hex_color(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_hash() {
        assert_eq!(parse_hex_color("#ff8000"), Some(Rgb::new(255, 128, 0)));
    }

    #[test]
    fn test_parse_without_hash() {
        assert_eq!(parse_hex_color("0a0b0c"), Some(Rgb::new(10, 11, 12)));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(parse_hex_color("#ABCDEF"), parse_hex_color("#abcdef"));
    }

    #[test]
    fn test_parse_matches_literal_pairs() {
        for (hex, expected) in [
            ("#000000", Rgb::BLACK),
            ("#ffffff", Rgb::WHITE),
            ("#123456", Rgb::new(0x12, 0x34, 0x56)),
            ("#fedcba", Rgb::new(0xfe, 0xdc, 0xba)),
            ("7f0001", Rgb::new(0x7f, 0x00, 0x01)),
        ] {
            assert_eq!(parse_hex_color(hex), Some(expected), "hex {}", hex);
        }
    }

    #[test]
    fn test_malformed_rejected() {
        for bad in ["notacolor", "#12", "", "#", "#fff", "#gggggg", "#1234567", "##123456", "+12345"] {
            assert_eq!(parse_hex_color(bad), None, "input {:?}", bad);
        }
    }

    #[test]
    fn test_multibyte_input_rejected() {
        // Six bytes but not six hex digits
        assert_eq!(parse_hex_color("ééé"), None);
    }

    #[test]
    fn test_scaled_floors_channels() {
        let c = Rgb::new(255, 100, 3).scaled(0.5);
        assert_eq!(c, Rgb::new(127, 50, 1));
    }

    #[test]
    fn test_scaled_clamps_factor() {
        assert_eq!(Rgb::WHITE.scaled(2.0), Rgb::WHITE);
        assert_eq!(Rgb::WHITE.scaled(-1.0), Rgb::BLACK);
        assert_eq!(Rgb::WHITE.scaled(f32::NAN), Rgb::BLACK);
    }
}
