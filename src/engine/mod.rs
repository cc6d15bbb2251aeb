//! The compositing engine: write strategies, scalar adapters and the
//! span-level entry points that tie them to a pixel format.

/// Operation traits and the channel / packed-integer adapters.
pub mod adapter;
/// The span engine.
pub mod pixel_ops;
pub mod write;

pub use adapter::{BinaryOp, BinaryScalarOp, PerChannel, PerInteger, Predicate, ScalarOp, UnaryOp};
pub use pixel_ops::PixelOps;
pub use write::{BlendWrite, ConditionalWrite, DirectWrite, WritePixel};
