use std::fmt;
use std::marker::PhantomData;

use crate::engine::write::WritePixel;
use crate::foundation::core::Location;
use crate::format::PixelFormat;

/// Span-level pixel engine for destination format `F`, write strategy `W`
/// and source format `S`.
///
/// The engine owns nothing but its strategy. All three entry points are
/// monomorphized over the format and strategy, so the per-pixel call chain
/// (engine, strategy, operation, format) inlines into one loop body.
///
/// Preconditions on every call: each location touched must lie inside the
/// buffer it is used with. Out-of-range access panics; it is never reported
/// as an error.
pub struct PixelOps<F, W, S = F> {
    write: W,
    _formats: PhantomData<fn() -> (F, S)>,
}

impl<F, W, S> PixelOps<F, W, S> {
    /// Build an engine around `write`.
    pub const fn new(write: W) -> Self {
        Self {
            write,
            _formats: PhantomData,
        }
    }

    /// The active write strategy.
    pub fn strategy(&self) -> &W {
        &self.write
    }
}

impl<F, W, S> PixelOps<F, W, S>
where
    F: PixelFormat,
    S: PixelFormat,
    W: WritePixel<F, S>,
{
    /// Commit `c` to the pixel at `at` through the active strategy.
    #[inline(always)]
    pub fn write_pixel(&self, buf: &mut [u8], at: Location, c: S::Color) {
        WritePixel::<F, S>::write_pixel(&self.write, buf, at, c);
    }

    /// Write `c` at each of `n` consecutive span positions starting at `at`.
    #[inline]
    pub fn fill_pixels(&self, buf: &mut [u8], at: Location, n: usize, c: S::Color) {
        F::for_horizontal(at, n, |p| self.write_pixel(buf, p, c));
    }

    /// Copy `n` pixels from `src` (starting at `from`) to `dst` (starting at
    /// `at`), routing every pixel through the active strategy.
    ///
    /// Exactly `n` source pixels are read and `n` destination positions are
    /// handed to the strategy, in increasing span order.
    #[inline]
    pub fn copy_pixels(
        &self,
        dst: &mut [u8],
        at: Location,
        src: &[u8],
        from: Location,
        n: usize,
    ) {
        for i in 0..n {
            let c = S::read_pixel(src, from.advance(i));
            self.write_pixel(dst, at.advance(i), c);
        }
    }

    /// Like [`PixelOps::copy_pixels`] with source and destination in the same
    /// buffer.
    ///
    /// Positions are processed strictly front to back, each source pixel read
    /// right before its destination is written. Overlapping ranges therefore
    /// behave like a `memmove` only when the destination starts at or before
    /// the source (or the ranges are disjoint); otherwise already-written
    /// pixels are read back as source.
    #[inline]
    pub fn copy_pixels_within(&self, buf: &mut [u8], at: Location, from: Location, n: usize) {
        for i in 0..n {
            let c = S::read_pixel(buf, from.advance(i));
            self.write_pixel(buf, at.advance(i), c);
        }
    }
}

impl<F, W: Clone, S> Clone for PixelOps<F, W, S> {
    fn clone(&self) -> Self {
        Self::new(self.write.clone())
    }
}

impl<F, W: Copy, S> Copy for PixelOps<F, W, S> {}

impl<F, W: Default, S> Default for PixelOps<F, W, S> {
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<F: PixelFormat, W: fmt::Debug, S: PixelFormat> fmt::Debug for PixelOps<F, W, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelOps")
            .field("format", &F::NAME)
            .field("source", &S::NAME)
            .field("write", &self.write)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/pixel_ops.rs"]
mod tests;
