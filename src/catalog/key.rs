use std::fmt;

use crate::catalog::bitwise::BitNot;
use crate::engine::adapter::{PerInteger, Predicate, UnaryOp};
use crate::engine::write::WritePixel;
use crate::foundation::core::Location;
use crate::format::PixelFormat;

/// Accepts every color except the key.
pub struct ColorKey<F: PixelFormat> {
    key: F::Color,
}

impl<F: PixelFormat> ColorKey<F> {
    /// Treat `key` as transparent.
    pub const fn new(key: F::Color) -> Self {
        Self { key }
    }

    /// The transparent color.
    pub fn key(&self) -> F::Color {
        self.key
    }
}

impl<F: PixelFormat> Predicate<F::Color> for ColorKey<F> {
    #[inline(always)]
    fn test(&self, c: F::Color) -> bool {
        c != self.key
    }
}

/// Write strategy that inverts every non-key source pixel into the
/// destination and leaves key-colored positions untouched.
pub struct TransparentInvertWrite<F: PixelFormat> {
    key: ColorKey<F>,
    invert: PerInteger<F, BitNot>,
}

impl<F: PixelFormat> TransparentInvertWrite<F> {
    /// Skip pixels equal to `key`; invert the rest.
    pub const fn new(key: F::Color) -> Self {
        Self {
            key: ColorKey::new(key),
            invert: PerInteger::new(BitNot),
        }
    }

    /// The transparent color.
    pub fn key(&self) -> F::Color {
        self.key.key()
    }
}

impl<F: PixelFormat> WritePixel<F, F> for TransparentInvertWrite<F> {
    #[inline(always)]
    fn write_pixel(&self, buf: &mut [u8], at: Location, c: F::Color) {
        if self.key.test(c) {
            F::write_pixel(buf, at, self.invert.apply(c));
        }
    }
}

impl<F: PixelFormat> Clone for ColorKey<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: PixelFormat> Copy for ColorKey<F> {}

impl<F: PixelFormat> fmt::Debug for ColorKey<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorKey").field("key", &self.key).finish()
    }
}

impl<F: PixelFormat> Clone for TransparentInvertWrite<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: PixelFormat> Copy for TransparentInvertWrite<F> {}

impl<F: PixelFormat> fmt::Debug for TransparentInvertWrite<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransparentInvertWrite")
            .field("key", &self.key.key)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/key.rs"]
mod tests;
