use std::cell::Cell;

use super::*;
use crate::catalog::{self, Identity};
use crate::engine::write::DirectWrite;
use crate::format::{Bgra8, Bgra8888, Gray8, Luminosity8};

thread_local! {
    static READS: Cell<usize> = const { Cell::new(0) };
    static WRITES: Cell<usize> = const { Cell::new(0) };
}

/// Gray8 that counts every decode and encode on the current thread.
#[derive(Clone, Copy, Debug, Default)]
struct Counting;

impl PixelFormat for Counting {
    type Color = Luminosity8;
    type Channel = u8;
    type Integer = u8;

    const NAME: &'static str = "counting";
    const BYTES_PER_PIXEL: usize = 1;

    fn decode(bytes: &[u8]) -> Luminosity8 {
        READS.with(|r| r.set(r.get() + 1));
        Gray8::decode(bytes)
    }

    fn encode(c: Luminosity8, bytes: &mut [u8]) {
        WRITES.with(|w| w.set(w.get() + 1));
        Gray8::encode(c, bytes);
    }

    fn to_integer(c: Luminosity8) -> u8 {
        c.0
    }

    fn from_integer(x: u8) -> Luminosity8 {
        Luminosity8(x)
    }

    fn transform_channels(x: Luminosity8, f: impl Fn(u8) -> u8) -> Luminosity8 {
        Luminosity8(f(x.0))
    }

    fn transform_channels2(
        a: Luminosity8,
        b: Luminosity8,
        f: impl Fn(u8, u8) -> u8,
    ) -> Luminosity8 {
        Luminosity8(f(a.0, b.0))
    }

    fn is_black(c: Luminosity8) -> bool {
        c.0 == 0
    }
}

fn reset_counters() {
    READS.with(|r| r.set(0));
    WRITES.with(|w| w.set(0));
}

fn counters() -> (usize, usize) {
    (READS.with(Cell::get), WRITES.with(Cell::get))
}

#[test]
fn fill_writes_exactly_n() {
    let mut buf = [0u8; 8];
    let ops = catalog::copy::<Gray8>();
    ops.fill_pixels(&mut buf, Location::new(2), 3, Luminosity8(7));
    assert_eq!(buf, [0, 0, 7, 7, 7, 0, 0, 0]);
}

#[test]
fn fill_twice_is_idempotent() {
    let ops = catalog::copy::<Bgra8888>();
    let c = Bgra8::opaque(1, 2, 3);
    let mut once = vec![0u8; 4 * 6];
    ops.fill_pixels(&mut once, Location::new(1), 4, c);
    let mut twice = once.clone();
    ops.fill_pixels(&mut twice, Location::new(1), 4, c);
    assert_eq!(once, twice);
}

#[test]
fn copy_reads_and_writes_exactly_n() {
    let ops: PixelOps<Counting, DirectWrite<Identity>> = PixelOps::new(DirectWrite::new(Identity));
    let src = [1u8, 2, 3, 4, 5];
    let mut dst = [0u8; 5];

    reset_counters();
    ops.copy_pixels(&mut dst, Location::new(0), &src, Location::new(1), 3);
    assert_eq!(counters(), (3, 3));
    assert_eq!(dst, [2, 3, 4, 0, 0]);

    reset_counters();
    ops.copy_pixels(&mut dst, Location::new(0), &src, Location::new(0), 0);
    assert_eq!(counters(), (0, 0));
    assert_eq!(dst, [2, 3, 4, 0, 0]);
}

#[test]
fn fill_of_zero_touches_nothing() {
    let ops: PixelOps<Counting, DirectWrite<Identity>> = PixelOps::new(DirectWrite::new(Identity));
    let mut buf = [0u8; 2];
    reset_counters();
    ops.fill_pixels(&mut buf, Location::new(0), 0, Luminosity8(1));
    assert_eq!(counters(), (0, 0));
}

#[test]
fn copy_follows_reversed_locations() {
    let ops = catalog::copy::<Gray8>();
    let src = [1u8, 2, 3, 4];
    let mut dst = [0u8; 4];
    ops.copy_pixels(&mut dst, Location::new(0), &src, Location::reversed(3), 4);
    assert_eq!(dst, [4, 3, 2, 1]);
}

#[test]
fn copy_within_forward_overlap_is_safe_when_dest_leads() {
    let ops = catalog::copy::<Gray8>();
    let mut buf = [1u8, 2, 3, 4, 5, 6];
    ops.copy_pixels_within(&mut buf, Location::new(0), Location::new(2), 4);
    assert_eq!(buf, [3, 4, 5, 6, 5, 6]);
}

#[test]
fn copy_within_dest_after_source_smears() {
    let ops = catalog::copy::<Gray8>();
    let mut buf = [1u8, 2, 3, 4, 5, 6];
    ops.copy_pixels_within(&mut buf, Location::new(1), Location::new(0), 4);
    // Each write is read back as the next source pixel.
    assert_eq!(buf, [1, 1, 1, 1, 1, 6]);
}

#[test]
fn source_format_may_differ_from_destination() {
    let white = Bgra8::opaque(255, 255, 255);
    let black = Bgra8::opaque(0, 0, 0);
    let ops = catalog::opaque_text::<Bgra8888, Gray8>(black, white);
    let glyph = [0u8, 9, 0];
    let mut dst = vec![0u8; 12];
    ops.copy_pixels(&mut dst, Location::new(0), &glyph, Location::new(0), 3);
    assert_eq!(Bgra8888::read_pixel(&dst, Location::new(0)), black);
    assert_eq!(Bgra8888::read_pixel(&dst, Location::new(1)), white);
    assert_eq!(Bgra8888::read_pixel(&dst, Location::new(2)), black);
}

#[test]
#[should_panic]
fn out_of_range_span_panics() {
    let ops = catalog::copy::<Gray8>();
    let mut buf = [0u8; 2];
    ops.fill_pixels(&mut buf, Location::new(1), 2, Luminosity8(1));
}

#[test]
fn debug_names_formats() {
    let ops = catalog::alpha::<Bgra8888>(10);
    let s = format!("{ops:?}");
    assert!(s.contains("bgra8888"));
    assert!(s.contains("AlphaBlend"));
}
