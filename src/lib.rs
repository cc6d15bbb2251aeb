//! memblit is a software pixel-compositing engine for in-memory framebuffers.
//!
//! It provides the per-pixel primitives that fills, copies, alpha blends,
//! glyph painting and color-key transparency are built from, for targets
//! where no graphics accelerator can be assumed.
//!
//! # Composition
//!
//! One engine is the product of four independent choices, all fixed at
//! compile time:
//!
//! 1. **Pixel format** ([`PixelFormat`]): memory layout, channel access and
//!    packed-integer view.
//! 2. **Write strategy** ([`engine::DirectWrite`], [`engine::BlendWrite`],
//!    [`engine::ConditionalWrite`]): unconditional, read-modify-write or
//!    predicate-gated commit.
//! 3. **Operation** ([`catalog`]): the blend or transform function.
//! 4. **Granularity** ([`engine::PerChannel`], [`engine::PerInteger`]): apply
//!    a scalar function to each channel or to the whole packed pixel.
//!
//! [`PixelOps`] holds the strategy, the strategy holds the operation, and
//! every call is forwarded explicitly, so the whole chain monomorphizes into
//! a plain loop with no dynamic dispatch.
//!
//! ```
//! use memblit::{Gray8, Location, Luminosity8, catalog};
//!
//! let src = [10u8, 200, 10, 250];
//! let mut dst = [5u8; 4];
//! catalog::transparent::<Gray8>(Luminosity8(10)).copy_pixels(
//!     &mut dst,
//!     Location::new(0),
//!     &src,
//!     Location::new(0),
//!     4,
//! );
//! assert_eq!(dst, [5, 200, 5, 250]);
//! ```
//!
//! The engine never fails and never validates bounds; an out-of-range
//! location panics on slice access. [`Framebuffer`] and the row-batch helpers
//! in [`surface`] add checked entry points that report [`BlitError`]s.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Operation catalog and engine aliases.
pub mod catalog;
/// Write strategies, adapters and the span engine.
pub mod engine;
/// Pixel format descriptors.
pub mod format;
/// Framebuffers and row-batched execution.
pub mod surface;

pub use crate::engine::PixelOps;
pub use crate::format::{
    Bgra8, Bgra8888, Coverage, Gray8, Luminosity8, PixelFormat, Rgb565, Rgb565Color, RgbColor,
};
pub use crate::foundation::core::Location;
pub use crate::foundation::error::{BlitError, BlitResult};
pub use crate::surface::{BlitThreading, Framebuffer, RowBand, RowOrder, copy_rows, fill_rows};
