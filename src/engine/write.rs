//! Write strategies: how an operation's result is committed to a pixel.

use crate::engine::adapter::{BinaryOp, Predicate, UnaryOp};
use crate::foundation::core::Location;
use crate::format::PixelFormat;

/// Commits one source color of format `S` to a destination pixel of format
/// `F`.
pub trait WritePixel<F: PixelFormat, S: PixelFormat = F> {
    /// Write `c` at `at` in `buf`.
    fn write_pixel(&self, buf: &mut [u8], at: Location, c: S::Color);
}

/// Writes `op(source)`, ignoring whatever the destination holds.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectWrite<Op> {
    op: Op,
}

impl<Op> DirectWrite<Op> {
    /// Wrap `op`.
    pub const fn new(op: Op) -> Self {
        Self { op }
    }

    /// The wrapped operation.
    pub fn op(&self) -> &Op {
        &self.op
    }
}

impl<F: PixelFormat, S: PixelFormat, Op> WritePixel<F, S> for DirectWrite<Op>
where
    Op: UnaryOp<S::Color, Output = F::Color>,
{
    #[inline(always)]
    fn write_pixel(&self, buf: &mut [u8], at: Location, c: S::Color) {
        F::write_pixel(buf, at, self.op.apply(c));
    }
}

/// Read-modify-write: writes `op(destination, source)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlendWrite<Op> {
    op: Op,
}

impl<Op> BlendWrite<Op> {
    /// Wrap `op`.
    pub const fn new(op: Op) -> Self {
        Self { op }
    }

    /// The wrapped operation.
    pub fn op(&self) -> &Op {
        &self.op
    }
}

impl<F: PixelFormat, S: PixelFormat, Op> WritePixel<F, S> for BlendWrite<Op>
where
    Op: BinaryOp<F::Color, S::Color, Output = F::Color>,
{
    #[inline(always)]
    fn write_pixel(&self, buf: &mut [u8], at: Location, c: S::Color) {
        let old = F::read_pixel(buf, at);
        F::write_pixel(buf, at, self.op.combine(old, c));
    }
}

/// Writes the source color unchanged when the predicate accepts it.
///
/// A rejected pixel causes neither a read nor a write, so the destination
/// bytes stay exactly as they were.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConditionalWrite<P> {
    check: P,
}

impl<P> ConditionalWrite<P> {
    /// Wrap `check`.
    pub const fn new(check: P) -> Self {
        Self { check }
    }

    /// The wrapped predicate.
    pub fn check(&self) -> &P {
        &self.check
    }
}

impl<F: PixelFormat, P> WritePixel<F, F> for ConditionalWrite<P>
where
    P: Predicate<F::Color>,
{
    #[inline(always)]
    fn write_pixel(&self, buf: &mut [u8], at: Location, c: F::Color) {
        if self.check.test(c) {
            F::write_pixel(buf, at, c);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/write.rs"]
mod tests;
