//! Caller-side framebuffer abstraction and row-batched execution.

/// Owned framebuffer with checked span entry points.
pub mod framebuffer;
/// Row-batched fills and copies, optionally on a rayon pool.
pub mod parallel;

pub use framebuffer::{Framebuffer, RowOrder};
pub use parallel::{BlitThreading, RowBand, copy_rows, fill_rows};
