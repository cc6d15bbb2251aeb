use super::*;
use crate::catalog::{AlphaBlend, ColorKey, Identity};
use crate::engine::adapter::PerChannel;
use crate::format::{Gray8, Luminosity8};

fn at(i: usize) -> Location {
    Location::new(i)
}

#[test]
fn direct_write_ignores_destination() {
    let mut buf = [9u8, 9, 9];
    let w = DirectWrite::new(Identity);
    WritePixel::<Gray8, Gray8>::write_pixel(&w, &mut buf, at(1), Luminosity8(42));
    assert_eq!(buf, [9, 42, 9]);
}

#[test]
fn blend_write_reads_destination_first() {
    let mut buf = [0u8, 200];
    let w = BlendWrite::new(PerChannel::<Gray8, _>::new(AlphaBlend::new(128)));
    WritePixel::<Gray8, Gray8>::write_pixel(&w, &mut buf, at(0), Luminosity8(100));
    WritePixel::<Gray8, Gray8>::write_pixel(&w, &mut buf, at(1), Luminosity8(100));
    assert_eq!(buf, [50, 150]);
}

#[test]
fn conditional_write_skips_rejected_pixels() {
    let mut buf = [5u8, 5];
    let w = ConditionalWrite::new(ColorKey::<Gray8>::new(Luminosity8(10)));
    WritePixel::<Gray8, Gray8>::write_pixel(&w, &mut buf, at(0), Luminosity8(10));
    WritePixel::<Gray8, Gray8>::write_pixel(&w, &mut buf, at(1), Luminosity8(11));
    assert_eq!(buf, [5, 11]);
}

#[test]
fn conditional_write_never_touches_out_of_range_when_rejected() {
    // A rejected pixel performs no access at all, even at a bogus location.
    let mut buf = [0u8; 1];
    let w = ConditionalWrite::new(ColorKey::<Gray8>::new(Luminosity8(10)));
    WritePixel::<Gray8, Gray8>::write_pixel(&w, &mut buf, at(1000), Luminosity8(10));
    assert_eq!(buf, [0]);
}
