use crate::engine::adapter::{BinaryScalarOp, ScalarOp};
use crate::format::PackedInt;

/// `!x`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BitNot;

impl<I: PackedInt> ScalarOp<I> for BitNot {
    #[inline(always)]
    fn map(&self, x: I) -> I {
        !x
    }
}

/// `a | b`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BitOr;

impl<I: PackedInt> BinaryScalarOp<I> for BitOr {
    #[inline(always)]
    fn combine(&self, a: I, b: I) -> I {
        a | b
    }
}

/// `a & b`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BitAnd;

impl<I: PackedInt> BinaryScalarOp<I> for BitAnd {
    #[inline(always)]
    fn combine(&self, a: I, b: I) -> I {
        a & b
    }
}

/// `a | !b`: destination ORed with the inverted source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BitNotOr;

impl<I: PackedInt> BinaryScalarOp<I> for BitNotOr {
    #[inline(always)]
    fn combine(&self, a: I, b: I) -> I {
        a | !b
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/bitwise.rs"]
mod tests;
