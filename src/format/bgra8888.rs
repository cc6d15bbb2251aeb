use super::{PixelFormat, RgbColor};

/// 32-bit color stored as B, G, R, A bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bgra8 {
    /// Blue.
    pub b: u8,
    /// Green.
    pub g: u8,
    /// Red.
    pub r: u8,
    /// Alpha.
    pub a: u8,
}

impl Bgra8 {
    /// Opaque color from RGB.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { b, g, r, a: 0xff }
    }
}

/// 32-bit BGRA, one byte per channel.
///
/// The packed integer is the little-endian reading of the four bytes, so
/// blue sits in the low byte and alpha in the high byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bgra8888;

impl PixelFormat for Bgra8888 {
    type Color = Bgra8;
    type Channel = u8;
    type Integer = u32;

    const NAME: &'static str = "bgra8888";
    const BYTES_PER_PIXEL: usize = 4;

    #[inline(always)]
    fn decode(bytes: &[u8]) -> Bgra8 {
        Bgra8 {
            b: bytes[0],
            g: bytes[1],
            r: bytes[2],
            a: bytes[3],
        }
    }

    #[inline(always)]
    fn encode(c: Bgra8, bytes: &mut [u8]) {
        bytes.copy_from_slice(&[c.b, c.g, c.r, c.a]);
    }

    #[inline(always)]
    fn to_integer(c: Bgra8) -> u32 {
        u32::from_le_bytes([c.b, c.g, c.r, c.a])
    }

    #[inline(always)]
    fn from_integer(x: u32) -> Bgra8 {
        let [b, g, r, a] = x.to_le_bytes();
        Bgra8 { b, g, r, a }
    }

    #[inline(always)]
    fn transform_channels(x: Bgra8, f: impl Fn(u8) -> u8) -> Bgra8 {
        Bgra8 {
            b: f(x.b),
            g: f(x.g),
            r: f(x.r),
            a: f(x.a),
        }
    }

    #[inline(always)]
    fn transform_channels2(a: Bgra8, b: Bgra8, f: impl Fn(u8, u8) -> u8) -> Bgra8 {
        Bgra8 {
            b: f(a.b, b.b),
            g: f(a.g, b.g),
            r: f(a.r, b.r),
            a: f(a.a, b.a),
        }
    }

    #[inline(always)]
    fn is_black(c: Bgra8) -> bool {
        c.r == 0 && c.g == 0 && c.b == 0
    }
}

impl RgbColor for Bgra8888 {
    fn from_rgb(r: u8, g: u8, b: u8) -> Bgra8 {
        Bgra8::opaque(r, g, b)
    }

    fn to_rgba(c: Bgra8) -> [u8; 4] {
        [c.r, c.g, c.b, c.a]
    }
}
