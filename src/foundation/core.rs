use std::ops::Range;

/// Pixel address inside a caller-owned byte buffer.
///
/// A location is a pixel index plus the signed distance (in pixels) between
/// consecutive positions of a span. Forward rows use a step of `1`; a
/// reversed row uses `-1`; a column of a row-major buffer uses `+width`.
///
/// Whether a location is read-only or writable is decided by the buffer it is
/// used with (`&[u8]` vs `&mut [u8]`), not by the location itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    index: usize,
    step: isize,
}

impl Location {
    /// Forward location at pixel `index`.
    pub const fn new(index: usize) -> Self {
        Self { index, step: 1 }
    }

    /// Location at `index` whose span advances by `step` pixels per position.
    pub const fn with_step(index: usize, step: isize) -> Self {
        Self { index, step }
    }

    /// Location at `index` whose span walks toward lower addresses.
    pub const fn reversed(index: usize) -> Self {
        Self { index, step: -1 }
    }

    /// Pixel index of this position.
    pub const fn index(self) -> usize {
        self.index
    }

    /// Signed pixel distance to the next span position.
    pub const fn step(self) -> isize {
        self.step
    }

    /// Location `n` span positions further along.
    ///
    /// Moving before the start of the buffer yields an index that fails the
    /// subsequent slice access instead of wrapping onto valid memory.
    #[inline(always)]
    pub fn advance(self, n: usize) -> Self {
        let delta = self.step.wrapping_mul(n as isize);
        Self {
            index: self.index.wrapping_add_signed(delta),
            step: self.step,
        }
    }

    /// Byte range covered by this pixel for a format of `bpp` bytes per pixel.
    #[inline(always)]
    pub fn byte_range(self, bpp: usize) -> Range<usize> {
        let start = self.index.wrapping_mul(bpp);
        start..start.wrapping_add(bpp)
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
