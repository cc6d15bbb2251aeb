use super::{PixelFormat, RgbColor};

/// One 8-bit luminosity (or coverage) sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Luminosity8(pub u8);

impl Luminosity8 {
    /// Black / zero coverage.
    pub const BLACK: Self = Self(0);
    /// White / full coverage.
    pub const WHITE: Self = Self(0xff);

    /// Raw sample value.
    #[inline(always)]
    pub const fn luminosity(self) -> u8 {
        self.0
    }
}

impl From<u8> for Luminosity8 {
    fn from(v: u8) -> Self {
        Self(v)
    }
}

/// Anti-aliasing coverage sample: 0 is no contribution, 255 is full.
pub type Coverage = Luminosity8;

/// 8-bit grayscale, one byte per pixel.
///
/// Also the source format for coverage masks and monochrome glyph bitmaps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Gray8;

impl PixelFormat for Gray8 {
    type Color = Luminosity8;
    type Channel = u8;
    type Integer = u8;

    const NAME: &'static str = "gray8";
    const BYTES_PER_PIXEL: usize = 1;

    #[inline(always)]
    fn decode(bytes: &[u8]) -> Luminosity8 {
        Luminosity8(bytes[0])
    }

    #[inline(always)]
    fn encode(c: Luminosity8, bytes: &mut [u8]) {
        bytes[0] = c.0;
    }

    #[inline(always)]
    fn to_integer(c: Luminosity8) -> u8 {
        c.0
    }

    #[inline(always)]
    fn from_integer(x: u8) -> Luminosity8 {
        Luminosity8(x)
    }

    #[inline(always)]
    fn transform_channels(x: Luminosity8, f: impl Fn(u8) -> u8) -> Luminosity8 {
        Luminosity8(f(x.0))
    }

    #[inline(always)]
    fn transform_channels2(
        a: Luminosity8,
        b: Luminosity8,
        f: impl Fn(u8, u8) -> u8,
    ) -> Luminosity8 {
        Luminosity8(f(a.0, b.0))
    }

    #[inline(always)]
    fn is_black(c: Luminosity8) -> bool {
        c.0 == 0
    }
}

impl RgbColor for Gray8 {
    fn from_rgb(r: u8, g: u8, b: u8) -> Luminosity8 {
        // Rec. 601 weights scaled to 256.
        let y = 77 * u32::from(r) + 150 * u32::from(g) + 29 * u32::from(b);
        Luminosity8((y >> 8) as u8)
    }

    fn to_rgba(c: Luminosity8) -> [u8; 4] {
        [c.0, c.0, c.0, 0xff]
    }
}
