use std::fmt;
use std::marker::PhantomData;

use crate::engine::adapter::UnaryOp;
use crate::format::PixelFormat;

/// Recolors a monochrome glyph: "black" source pixels become the background,
/// everything else becomes the text color.
///
/// `F` is the destination format, `S` the glyph bitmap's format.
pub struct OpaqueText<F: PixelFormat, S: PixelFormat> {
    background: F::Color,
    text: F::Color,
    _source: PhantomData<fn() -> S>,
}

impl<F: PixelFormat, S: PixelFormat> OpaqueText<F, S> {
    /// Paint glyph "off" pixels with `background` and "on" pixels with `text`.
    pub const fn new(background: F::Color, text: F::Color) -> Self {
        Self {
            background,
            text,
            _source: PhantomData,
        }
    }

    /// Color used for black source pixels.
    pub fn background(&self) -> F::Color {
        self.background
    }

    /// Color used for every other source pixel.
    pub fn text(&self) -> F::Color {
        self.text
    }
}

impl<F: PixelFormat, S: PixelFormat> UnaryOp<S::Color> for OpaqueText<F, S> {
    type Output = F::Color;

    #[inline(always)]
    fn apply(&self, x: S::Color) -> F::Color {
        if S::is_black(x) {
            self.background
        } else {
            self.text
        }
    }
}

impl<F: PixelFormat, S: PixelFormat> Clone for OpaqueText<F, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: PixelFormat, S: PixelFormat> Copy for OpaqueText<F, S> {}

impl<F: PixelFormat, S: PixelFormat> fmt::Debug for OpaqueText<F, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpaqueText")
            .field("background", &self.background)
            .field("text", &self.text)
            .field("source", &S::NAME)
            .finish()
    }
}
