//! Operation catalog: the concrete blend/transform functions and the engine
//! types they are normally paired with.
//!
//! Each alias fixes one combination of write strategy, adapter and
//! operation. The constructor functions build a ready-to-use engine for one
//! call site (one alpha level, one key color, one pair of endpoint colors).

use crate::engine::adapter::{PerChannel, PerInteger, UnaryOp};
use crate::engine::pixel_ops::PixelOps;
use crate::engine::write::{BlendWrite, ConditionalWrite, DirectWrite};
use crate::format::{Gray8, PixelFormat};

/// Packed-integer bitwise operations.
pub mod bitwise;
pub mod blend;
/// Color-key transparency.
pub mod key;
/// Monochrome glyph recoloring.
pub mod text;

pub use bitwise::{BitAnd, BitNot, BitNotOr, BitOr};
pub use blend::{AlphaBlend, ColoredAlpha, OpaqueAlpha};
pub use key::{ColorKey, TransparentInvertWrite};
pub use text::OpaqueText;

/// Passes the source color through unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Identity;

impl<T> UnaryOp<T> for Identity {
    type Output = T;

    #[inline(always)]
    fn apply(&self, x: T) -> T {
        x
    }
}

/// Plain fill / copy.
pub type CopyOps<F> = PixelOps<F, DirectWrite<Identity>>;

/// Writes the bitwise inverse of the source.
pub type BitNotOps<F> = PixelOps<F, DirectWrite<PerInteger<F, BitNot>>>;

/// Destination `|` source.
pub type BitOrOps<F> = PixelOps<F, BlendWrite<PerInteger<F, BitOr>>>;

/// Destination `&` source.
pub type BitAndOps<F> = PixelOps<F, BlendWrite<PerInteger<F, BitAnd>>>;

/// Destination `|` `!source`.
pub type BitNotOrOps<F> = PixelOps<F, BlendWrite<PerInteger<F, BitNotOr>>>;

/// Constant-alpha blend of source over destination.
pub type AlphaOps<F> = PixelOps<F, BlendWrite<PerChannel<F, AlphaBlend>>>;

/// Coverage mask (gray8) blended onto the destination in a fixed ink color.
pub type ColoredAlphaOps<F> = PixelOps<F, BlendWrite<ColoredAlpha<F>>, Gray8>;

/// Coverage mask (gray8) mapped onto a two-color gradient.
pub type OpaqueAlphaOps<F> = PixelOps<F, DirectWrite<OpaqueAlpha<F>>, Gray8>;

/// Monochrome glyph bitmap in format `S` recolored into format `F`.
pub type OpaqueTextOps<F, S = Gray8> = PixelOps<F, DirectWrite<OpaqueText<F, S>>, S>;

/// Color-keyed copy: source pixels equal to the key are skipped.
pub type TransparentOps<F> = PixelOps<F, ConditionalWrite<ColorKey<F>>>;

/// Color-keyed inverting copy.
pub type TransparentInvertOps<F> = PixelOps<F, TransparentInvertWrite<F>>;

/// Plain fill / copy engine.
pub const fn copy<F: PixelFormat>() -> CopyOps<F> {
    PixelOps::new(DirectWrite::new(Identity))
}

/// Bit inversion engine.
pub const fn bit_not<F: PixelFormat>() -> BitNotOps<F> {
    PixelOps::new(DirectWrite::new(PerInteger::new(BitNot)))
}

/// Bitwise-or engine.
pub const fn bit_or<F: PixelFormat>() -> BitOrOps<F> {
    PixelOps::new(BlendWrite::new(PerInteger::new(BitOr)))
}

/// Bitwise-and engine.
pub const fn bit_and<F: PixelFormat>() -> BitAndOps<F> {
    PixelOps::new(BlendWrite::new(PerInteger::new(BitAnd)))
}

/// Destination-or-inverted-source engine.
pub const fn bit_not_or<F: PixelFormat>() -> BitNotOrOps<F> {
    PixelOps::new(BlendWrite::new(PerInteger::new(BitNotOr)))
}

/// Constant-alpha blend engine.
pub const fn alpha<F: PixelFormat>(alpha: u8) -> AlphaOps<F> {
    PixelOps::new(BlendWrite::new(PerChannel::new(AlphaBlend::new(alpha))))
}

/// Coverage-driven ink engine.
pub const fn colored_alpha<F: PixelFormat>(color: F::Color) -> ColoredAlphaOps<F> {
    PixelOps::new(BlendWrite::new(ColoredAlpha::new(color)))
}

/// Two-endpoint coverage engine.
pub const fn opaque_alpha<F: PixelFormat>(a: F::Color, b: F::Color) -> OpaqueAlphaOps<F> {
    PixelOps::new(DirectWrite::new(OpaqueAlpha::new(a, b)))
}

/// Monochrome glyph recolor engine.
pub const fn opaque_text<F: PixelFormat, S: PixelFormat>(
    background: F::Color,
    text: F::Color,
) -> OpaqueTextOps<F, S> {
    PixelOps::new(DirectWrite::new(OpaqueText::new(background, text)))
}

/// Color-keyed copy engine.
pub const fn transparent<F: PixelFormat>(key: F::Color) -> TransparentOps<F> {
    PixelOps::new(ConditionalWrite::new(ColorKey::new(key)))
}

/// Color-keyed inverting copy engine.
pub const fn transparent_invert<F: PixelFormat>(key: F::Color) -> TransparentInvertOps<F> {
    PixelOps::new(TransparentInvertWrite::new(key))
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/mod.rs"]
mod tests;
