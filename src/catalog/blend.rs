//! Shift-based blends.
//!
//! All of these compute `a + ((b - a) * s) >> 8` per channel: the weight is
//! divided by 256, not 255, so full weight lands one step short of `b`.
//! Rendered output depends on this exact rounding.

use crate::engine::adapter::{BinaryOp, BinaryScalarOp, UnaryOp};
use crate::foundation::math::lerp_shift8;
use crate::format::{Channel, Coverage, PixelFormat};

/// Constant-alpha blend from the destination channel toward the source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlphaBlend {
    alpha: u8,
}

impl AlphaBlend {
    /// Blend with weight `alpha` (0 keeps the destination).
    pub const fn new(alpha: u8) -> Self {
        Self { alpha }
    }

    /// The blend weight.
    pub const fn alpha(self) -> u8 {
        self.alpha
    }
}

impl<C: Channel> BinaryScalarOp<C> for AlphaBlend {
    #[inline(always)]
    fn combine(&self, a: C, b: C) -> C {
        C::narrow(lerp_shift8(a.widen(), b.widen(), i32::from(self.alpha)))
    }
}

/// Blends the existing pixel toward a fixed ink color by a per-pixel
/// coverage sample (anti-aliased glyph painting).
pub struct ColoredAlpha<F: PixelFormat> {
    color: F::Color,
}

impl<F: PixelFormat> ColoredAlpha<F> {
    /// Ink color blended in proportionally to coverage.
    pub const fn new(color: F::Color) -> Self {
        Self { color }
    }

    /// The ink color.
    pub fn color(&self) -> F::Color {
        self.color
    }
}

impl<F: PixelFormat> BinaryOp<F::Color, Coverage> for ColoredAlpha<F> {
    type Output = F::Color;

    #[inline(always)]
    fn combine(&self, a: F::Color, coverage: Coverage) -> F::Color {
        let s = i32::from(coverage.luminosity());
        F::transform_channels2(a, self.color, |a, ink| {
            F::Channel::narrow(lerp_shift8(a.widen(), ink.widen(), s))
        })
    }
}

/// Maps a coverage sample onto the gradient between two colors, ignoring the
/// destination.
pub struct OpaqueAlpha<F: PixelFormat> {
    a: F::Color,
    b: F::Color,
}

impl<F: PixelFormat> OpaqueAlpha<F> {
    /// Coverage 0 yields `a`; coverage 255 yields just short of `b`.
    pub const fn new(a: F::Color, b: F::Color) -> Self {
        Self { a, b }
    }

    /// The two gradient endpoints.
    pub fn endpoints(&self) -> (F::Color, F::Color) {
        (self.a, self.b)
    }
}

impl<F: PixelFormat> UnaryOp<Coverage> for OpaqueAlpha<F> {
    type Output = F::Color;

    #[inline(always)]
    fn apply(&self, coverage: Coverage) -> F::Color {
        let s = i32::from(coverage.luminosity());
        F::transform_channels2(self.a, self.b, |a, b| {
            F::Channel::narrow(lerp_shift8(a.widen(), b.widen(), s))
        })
    }
}

impl<F: PixelFormat> Clone for ColoredAlpha<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: PixelFormat> Copy for ColoredAlpha<F> {}

impl<F: PixelFormat> std::fmt::Debug for ColoredAlpha<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColoredAlpha")
            .field("color", &self.color)
            .finish()
    }
}

impl<F: PixelFormat> Clone for OpaqueAlpha<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: PixelFormat> Copy for OpaqueAlpha<F> {}

impl<F: PixelFormat> std::fmt::Debug for OpaqueAlpha<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpaqueAlpha")
            .field("a", &self.a)
            .field("b", &self.b)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/blend.rs"]
mod tests;
