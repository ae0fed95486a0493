//! A module for the color type that flows through surfaces and pixel effects.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rgb::ComponentMap;

use crate::error::ColorParseError;

/// Mask that keeps the upper 7 bits of every byte, so that shifting a packed color right by one can not move a bit from
/// one channel into the next.
const HALF_MASK: u32 = 0b01111111_01111111_01111111_01111111;

/// An opaque 24-bit RGB color.
///
/// The color packs into a `u32` ("dword") as `0x00RRGGBB`. Some effects work directly on the packed form to process all
/// channels in one operation.
#[cfg_attr(
    feature = "serde_support",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Color(rgb::RGB8);

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const GRAY: Color = Color::new(128, 128, 128);
    pub const LIGHT_GRAY: Color = Color::new(192, 192, 192);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const YELLOW: Color = Color::new(255, 255, 0);
    pub const CYAN: Color = Color::new(0, 255, 255);
    /// The conventional chroma key.
    pub const MAGENTA: Color = Color::new(255, 0, 255);

    /// Creates a new instance.
    ///
    /// # Parameters
    /// * `r`: The red component.
    /// * `g`: The green component.
    /// * `b`: The blue component.
    #[inline(always)]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(rgb::RGB8 { r, g, b })
    }

    /// Creates a gray color with all channels set to `value`.
    #[inline(always)]
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Creates a color from its packed form (`0x00RRGGBB`). The upper byte is ignored.
    #[inline(always)]
    pub const fn from_dword(dword: u32) -> Self {
        Self::new((dword >> 16) as u8, (dword >> 8) as u8, dword as u8)
    }

    /// Retrieves the packed form (`0x00RRGGBB`).
    #[inline(always)]
    pub const fn dword(&self) -> u32 {
        (self.0.r as u32) << 16 | (self.0.g as u32) << 8 | self.0.b as u32
    }

    #[inline(always)]
    pub const fn r(&self) -> u8 {
        self.0.r
    }

    #[inline(always)]
    pub const fn g(&self) -> u8 {
        self.0.g
    }

    #[inline(always)]
    pub const fn b(&self) -> u8 {
        self.0.b
    }

    /// Retrieves the underlying [`rgb::RGB8`].
    #[inline(always)]
    pub fn rgb(&self) -> rgb::RGB8 {
        self.0
    }

    /// Halves every channel with a single shift on the packed form.
    #[inline(always)]
    pub const fn halved(&self) -> Self {
        Self::from_dword((self.dword() >> 1) & HALF_MASK)
    }

    /// The per-channel average of two colors, truncated.
    #[inline(always)]
    pub fn average(&self, other: Color) -> Self {
        let avg = |a: u8, b: u8| ((u16::from(a) + u16::from(b)) / 2) as u8;
        Self::new(avg(self.r(), other.r()), avg(self.g(), other.g()), avg(self.b(), other.b()))
    }

    /// The color with every channel replaced by `255 - channel`.
    #[inline(always)]
    pub fn inverted(&self) -> Self {
        Self(self.0.map(|c| u8::MAX - c))
    }

    /// The perceptual brightness: `0.30 r + 0.59 g + 0.11 b`, rounded.
    #[inline(always)]
    pub fn luma(&self) -> u8 {
        let value = f32::from(self.r()) * 0.3 + f32::from(self.g()) * 0.59 + f32::from(self.b()) * 0.11;
        value.round() as u8
    }

    /// Blends `over` on top of this color.
    ///
    /// # Parameters
    /// * `over`: The color on top.
    /// * `opacity`: The opacity of `over`, clamped to `[0, 1]`. At `0` the result is this color, at `1` it is `over`.
    pub fn blend(&self, over: Color, opacity: f32) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        let mix = |under: u8, over: u8| (f32::from(over) * opacity + f32::from(under) * (1.0 - opacity)) as u8;
        Self::new(mix(self.r(), over.r()), mix(self.g(), over.g()), mix(self.b(), over.b()))
    }
}

impl From<rgb::RGB8> for Color {
    #[inline(always)]
    fn from(value: rgb::RGB8) -> Self {
        Self(value)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06X}", self.dword())
    }
}

/// Parses `RRGGBB` hex notation, optionally prefixed with `#`.
impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 {
            return Err(ColorParseError::InvalidLength(digits.len()));
        }
        // from_str_radix would also accept a sign
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigits(digits.to_string()));
        }
        let dword = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError::InvalidDigits(digits.to_string()))?;
        Ok(Self::from_dword(dword))
    }
}

#[cfg(test)]
mod test_color {
    use super::Color;
    use crate::error::ColorParseError;

    #[test]
    fn test_dword() {
        let color = Color::new(0x12, 0x34, 0x56);
        assert_eq!(0x00123456, color.dword());
        assert_eq!(color, Color::from_dword(0x00123456));
        // The upper byte does not matter
        assert_eq!(color, Color::from_dword(0xFF123456));
    }

    #[test]
    fn test_halved() {
        assert_eq!(Color::new(127, 0, 127), Color::MAGENTA.halved());
        // Odd channels must not bleed their low bit into the neighbouring channel
        assert_eq!(Color::new(0, 0, 0), Color::new(1, 1, 1).halved());
        assert_eq!(Color::new(0x7F, 0x40, 0x1A), Color::new(0xFF, 0x81, 0x35).halved());
    }

    #[test]
    fn test_average() {
        assert_eq!(Color::new(127, 127, 127), Color::WHITE.average(Color::BLACK));
        assert_eq!(Color::new(100, 50, 20), Color::new(150, 0, 40).average(Color::new(50, 100, 0)));
    }

    #[test]
    fn test_inverted() {
        assert_eq!(Color::CYAN, Color::RED.inverted());
        assert_eq!(Color::new(155, 55, 0), Color::new(100, 200, 255).inverted());
    }

    #[test]
    fn test_luma() {
        assert_eq!(77, Color::RED.luma());
        assert_eq!(150, Color::GREEN.luma());
        assert_eq!(28, Color::BLUE.luma());
        assert_eq!(255, Color::WHITE.luma());
        assert_eq!(0, Color::BLACK.luma());
    }

    #[test]
    fn test_blend() {
        let under = Color::new(200, 0, 100);
        assert_eq!(under, under.blend(Color::WHITE, 0.0));
        assert_eq!(Color::WHITE, under.blend(Color::WHITE, 1.0));
        assert_eq!(Color::new(100, 50, 75), under.blend(Color::new(0, 100, 50), 0.5));
        // Clamped
        assert_eq!(Color::WHITE, under.blend(Color::WHITE, 7.0));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Ok(Color::MAGENTA), "ff00ff".parse::<Color>());
        assert_eq!(Ok(Color::new(0x12, 0xAB, 0x0C)), "#12AB0C".parse::<Color>());
        assert_eq!(Err(ColorParseError::InvalidLength(3)), "#fff".parse::<Color>());
        assert_eq!(Err(ColorParseError::InvalidDigits("12345g".to_string())), "12345g".parse::<Color>());
        assert_eq!(Err(ColorParseError::InvalidDigits("+12345".to_string())), "+12345".parse::<Color>());
    }

    #[test]
    fn test_display() {
        assert_eq!("#FF00FF", Color::MAGENTA.to_string());
        assert_eq!("#00000A", Color::new(0, 0, 10).to_string());
    }
}
