use std::fmt;
use std::marker::PhantomData;

use crate::format::PixelFormat;

/// Function of one pixel-level value.
pub trait UnaryOp<T> {
    /// Result type (usually the destination color).
    type Output;

    /// Compute the result for `x`.
    fn apply(&self, x: T) -> Self::Output;
}

/// Function of the current destination value `a` and a source value `b`.
pub trait BinaryOp<A, B> {
    /// Result type (usually the destination color).
    type Output;

    /// Combine `a` (destination) with `b` (source).
    fn combine(&self, a: A, b: B) -> Self::Output;
}

/// Yes/no test on a source color, used by conditional writes.
pub trait Predicate<T> {
    /// `true` if the pixel should be written.
    fn test(&self, x: T) -> bool;
}

/// Unary function over one scalar (a channel or a packed integer).
pub trait ScalarOp<T> {
    /// Map one scalar.
    fn map(&self, x: T) -> T;
}

/// Binary function over two scalars of the same kind.
pub trait BinaryScalarOp<T> {
    /// Combine destination scalar `a` with source scalar `b`.
    fn combine(&self, a: T, b: T) -> T;
}

/// Lifts a per-channel scalar function to whole colors of format `F`.
///
/// Every channel is processed independently through
/// [`PixelFormat::transform_channels`]; channel order and count are whatever
/// the format defines.
pub struct PerChannel<F, Op> {
    op: Op,
    _format: PhantomData<fn() -> F>,
}

impl<F, Op> PerChannel<F, Op> {
    /// Wrap `op`.
    pub const fn new(op: Op) -> Self {
        Self {
            op,
            _format: PhantomData,
        }
    }

    /// The wrapped scalar function.
    pub fn op(&self) -> &Op {
        &self.op
    }
}

impl<F: PixelFormat, Op> UnaryOp<F::Color> for PerChannel<F, Op>
where
    Op: ScalarOp<F::Channel>,
{
    type Output = F::Color;

    #[inline(always)]
    fn apply(&self, x: F::Color) -> F::Color {
        F::transform_channels(x, |c| self.op.map(c))
    }
}

impl<F: PixelFormat, Op> BinaryOp<F::Color, F::Color> for PerChannel<F, Op>
where
    Op: BinaryScalarOp<F::Channel>,
{
    type Output = F::Color;

    #[inline(always)]
    fn combine(&self, a: F::Color, b: F::Color) -> F::Color {
        F::transform_channels2(a, b, |a, b| self.op.combine(a, b))
    }
}

/// Lifts a scalar function over the packed-integer form to whole colors of
/// format `F`.
pub struct PerInteger<F, Op> {
    op: Op,
    _format: PhantomData<fn() -> F>,
}

impl<F, Op> PerInteger<F, Op> {
    /// Wrap `op`.
    pub const fn new(op: Op) -> Self {
        Self {
            op,
            _format: PhantomData,
        }
    }

    /// The wrapped scalar function.
    pub fn op(&self) -> &Op {
        &self.op
    }
}

impl<F: PixelFormat, Op> UnaryOp<F::Color> for PerInteger<F, Op>
where
    Op: ScalarOp<F::Integer>,
{
    type Output = F::Color;

    #[inline(always)]
    fn apply(&self, x: F::Color) -> F::Color {
        F::transform_integer(x, |v| self.op.map(v))
    }
}

impl<F: PixelFormat, Op> BinaryOp<F::Color, F::Color> for PerInteger<F, Op>
where
    Op: BinaryScalarOp<F::Integer>,
{
    type Output = F::Color;

    #[inline(always)]
    fn combine(&self, a: F::Color, b: F::Color) -> F::Color {
        F::transform_integer2(a, b, |a, b| self.op.combine(a, b))
    }
}

// Bounded on `Op` only; `F` is a marker.
macro_rules! adapter_impls {
    ($name:ident) => {
        impl<F, Op: Clone> Clone for $name<F, Op> {
            fn clone(&self) -> Self {
                Self::new(self.op.clone())
            }
        }

        impl<F, Op: Copy> Copy for $name<F, Op> {}

        impl<F, Op: fmt::Debug> fmt::Debug for $name<F, Op> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("op", &self.op)
                    .finish()
            }
        }

        impl<F, Op: Default> Default for $name<F, Op> {
            fn default() -> Self {
                Self::new(Op::default())
            }
        }
    };
}

adapter_impls!(PerChannel);
adapter_impls!(PerInteger);

#[cfg(test)]
#[path = "../../tests/unit/engine/adapter.rs"]
mod tests;
