//! Pixel format descriptors.
//!
//! A [`PixelFormat`] is a zero-sized, type-level description of how one pixel
//! is laid out in memory. The engine never looks at bytes directly; everything
//! it needs (read, write, span iteration, per-channel and whole-word
//! transforms, the "black" test used for glyph recoloring) comes from here.

use std::fmt::Debug;
use std::ops::{BitAnd, BitOr, Not};

use crate::foundation::core::Location;

/// 32-bit BGRA.
pub mod bgra8888;
/// 8-bit grayscale and coverage samples.
pub mod gray8;
/// 16-bit RGB565.
pub mod rgb565;

pub use bgra8888::{Bgra8, Bgra8888};
pub use gray8::{Coverage, Gray8, Luminosity8};
pub use rgb565::{Rgb565, Rgb565Color};

/// One scalar color component.
///
/// Blend arithmetic widens channels to `i32`, works there, and narrows only
/// once the final shift has brought the value back between its endpoints.
pub trait Channel: Copy + Eq + Debug + Send + Sync + 'static {
    /// Widen to the arithmetic type used by blends.
    fn widen(self) -> i32;

    /// Narrow a value that is already inside this channel's range.
    fn narrow(v: i32) -> Self;
}

impl Channel for u8 {
    #[inline(always)]
    fn widen(self) -> i32 {
        i32::from(self)
    }

    #[inline(always)]
    fn narrow(v: i32) -> Self {
        debug_assert!((0..=0xff).contains(&v), "u8 channel out of range: {v}");
        v as u8
    }
}

/// Fixed-width unsigned word holding a whole packed pixel.
pub trait PackedInt:
    Copy
    + Eq
    + Debug
    + Not<Output = Self>
    + BitOr<Output = Self>
    + BitAnd<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// All bits clear.
    const ZERO: Self;
    /// All bits set.
    const ALL_ONES: Self;
}

macro_rules! packed_int {
    ($($t:ty),*) => {
        $(
            impl PackedInt for $t {
                const ZERO: Self = 0;
                const ALL_ONES: Self = <$t>::MAX;
            }
        )*
    };
}

packed_int!(u8, u16, u32);

/// Format descriptor contract consumed by the engine.
///
/// Implementations are stateless marker types. Bounds are never validated at
/// this level: reading or writing outside the buffer panics through slice
/// indexing, and keeping locations in range is the caller's job.
pub trait PixelFormat: Copy + Debug + Default + Send + Sync + 'static {
    /// Decoded pixel value.
    type Color: Copy + PartialEq + Debug + Send + Sync + 'static;
    /// Smallest addressable color component.
    type Channel: Channel;
    /// Whole pixel packed into one unsigned word, for bitwise operations.
    type Integer: PackedInt;

    /// Short stable name (logs, CLI, bench reports).
    const NAME: &'static str;
    /// Bytes occupied by one pixel in memory.
    const BYTES_PER_PIXEL: usize;

    /// Decode exactly `BYTES_PER_PIXEL` bytes.
    fn decode(bytes: &[u8]) -> Self::Color;

    /// Encode into exactly `BYTES_PER_PIXEL` bytes.
    fn encode(c: Self::Color, bytes: &mut [u8]);

    /// Packed-integer view of a color.
    fn to_integer(c: Self::Color) -> Self::Integer;

    /// Inverse of [`PixelFormat::to_integer`].
    fn from_integer(x: Self::Integer) -> Self::Color;

    /// Apply `f` to every channel of `x` and reassemble.
    fn transform_channels(x: Self::Color, f: impl Fn(Self::Channel) -> Self::Channel)
    -> Self::Color;

    /// Apply `f` pairwise to the channels of `a` and `b` and reassemble.
    fn transform_channels2(
        a: Self::Color,
        b: Self::Color,
        f: impl Fn(Self::Channel, Self::Channel) -> Self::Channel,
    ) -> Self::Color;

    /// `true` for the pixel value a monochrome glyph uses as its "off" ink.
    fn is_black(c: Self::Color) -> bool;

    /// Read the pixel at `at`.
    #[inline(always)]
    fn read_pixel(buf: &[u8], at: Location) -> Self::Color {
        Self::decode(&buf[at.byte_range(Self::BYTES_PER_PIXEL)])
    }

    /// Overwrite the pixel at `at`.
    #[inline(always)]
    fn write_pixel(buf: &mut [u8], at: Location, c: Self::Color) {
        Self::encode(c, &mut buf[at.byte_range(Self::BYTES_PER_PIXEL)]);
    }

    /// Call `f` exactly `n` times, once per span position starting at `at`,
    /// in span order.
    #[inline(always)]
    fn for_horizontal(at: Location, n: usize, mut f: impl FnMut(Location)) {
        for i in 0..n {
            f(at.advance(i));
        }
    }

    /// Apply `f` to the packed-integer form of `x`.
    #[inline(always)]
    fn transform_integer(
        x: Self::Color,
        f: impl Fn(Self::Integer) -> Self::Integer,
    ) -> Self::Color {
        Self::from_integer(f(Self::to_integer(x)))
    }

    /// Apply `f` to the packed-integer forms of `a` and `b`.
    #[inline(always)]
    fn transform_integer2(
        a: Self::Color,
        b: Self::Color,
        f: impl Fn(Self::Integer, Self::Integer) -> Self::Integer,
    ) -> Self::Color {
        Self::from_integer(f(Self::to_integer(a), Self::to_integer(b)))
    }
}

/// Conversion to and from 8-bit RGB, used for PNG export and test cards.
pub trait RgbColor: PixelFormat {
    /// Nearest representable color for an opaque 8-bit RGB triple.
    fn from_rgb(r: u8, g: u8, b: u8) -> Self::Color;

    /// Expand to straight RGBA8.
    fn to_rgba(c: Self::Color) -> [u8; 4];
}

#[cfg(test)]
#[path = "../../tests/unit/format/mod.rs"]
mod tests;
