use super::{PixelFormat, RgbColor};

/// A packed RGB565 value: red in bits 11..16, green in 5..11, blue in 0..5.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb565Color(pub u16);

impl Rgb565Color {
    /// Pack raw 5/6/5-bit channel values. Excess high bits are dropped.
    #[inline(always)]
    pub const fn from_channels(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u16 & 0x1f) << 11) | ((g as u16 & 0x3f) << 5) | (b as u16 & 0x1f))
    }

    /// Red channel, `0..=31`.
    #[inline(always)]
    pub const fn red(self) -> u8 {
        ((self.0 >> 11) & 0x1f) as u8
    }

    /// Green channel, `0..=63`.
    #[inline(always)]
    pub const fn green(self) -> u8 {
        ((self.0 >> 5) & 0x3f) as u8
    }

    /// Blue channel, `0..=31`.
    #[inline(always)]
    pub const fn blue(self) -> u8 {
        (self.0 & 0x1f) as u8
    }
}

/// 16-bit RGB565, little-endian in memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb565;

impl PixelFormat for Rgb565 {
    type Color = Rgb565Color;
    type Channel = u8;
    type Integer = u16;

    const NAME: &'static str = "rgb565";
    const BYTES_PER_PIXEL: usize = 2;

    #[inline(always)]
    fn decode(bytes: &[u8]) -> Rgb565Color {
        Rgb565Color(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    #[inline(always)]
    fn encode(c: Rgb565Color, bytes: &mut [u8]) {
        bytes.copy_from_slice(&c.0.to_le_bytes());
    }

    #[inline(always)]
    fn to_integer(c: Rgb565Color) -> u16 {
        c.0
    }

    #[inline(always)]
    fn from_integer(x: u16) -> Rgb565Color {
        Rgb565Color(x)
    }

    #[inline(always)]
    fn transform_channels(x: Rgb565Color, f: impl Fn(u8) -> u8) -> Rgb565Color {
        Rgb565Color::from_channels(f(x.red()), f(x.green()), f(x.blue()))
    }

    #[inline(always)]
    fn transform_channels2(
        a: Rgb565Color,
        b: Rgb565Color,
        f: impl Fn(u8, u8) -> u8,
    ) -> Rgb565Color {
        Rgb565Color::from_channels(
            f(a.red(), b.red()),
            f(a.green(), b.green()),
            f(a.blue(), b.blue()),
        )
    }

    #[inline(always)]
    fn is_black(c: Rgb565Color) -> bool {
        c.0 == 0
    }
}

impl RgbColor for Rgb565 {
    fn from_rgb(r: u8, g: u8, b: u8) -> Rgb565Color {
        Rgb565Color::from_channels(r >> 3, g >> 2, b >> 3)
    }

    fn to_rgba(c: Rgb565Color) -> [u8; 4] {
        let (r, g, b) = (c.red(), c.green(), c.blue());
        [(r << 3) | (r >> 2), (g << 2) | (g >> 4), (b << 3) | (b >> 2), 0xff]
    }
}
