use super::*;
use crate::format::{Bgra8, Bgra8888, Gray8, Luminosity8, Rgb565, Rgb565Color};

#[test]
fn alpha_blend_half_way() {
    let op = AlphaBlend::new(128);
    assert_eq!(BinaryScalarOp::<u8>::combine(&op, 0, 100), 50);
}

#[test]
fn alpha_blend_endpoints() {
    for a in (0..=255u8).step_by(3) {
        for b in (0..=255u8).step_by(5) {
            assert_eq!(BinaryScalarOp::<u8>::combine(&AlphaBlend::new(0), a, b), a);
            let expect = i32::from(a) + ((i32::from(b) - i32::from(a)) * 255 >> 8);
            assert_eq!(
                i32::from(BinaryScalarOp::<u8>::combine(&AlphaBlend::new(255), a, b)),
                expect
            );
        }
    }
}

#[test]
fn alpha_blend_stays_within_bounds() {
    for a in (0..=255u8).step_by(7) {
        for b in (0..=255u8).step_by(11) {
            for alpha in [0u8, 1, 17, 127, 128, 200, 255] {
                let r = BinaryScalarOp::<u8>::combine(&AlphaBlend::new(alpha), a, b);
                assert!(r >= a.min(b) && r <= a.max(b), "a={a} b={b} alpha={alpha}");
            }
        }
    }
}

#[test]
fn alpha_blend_full_weight_falls_short_of_source() {
    assert_eq!(BinaryScalarOp::<u8>::combine(&AlphaBlend::new(255), 0, 255), 254);
}

#[test]
fn colored_alpha_moves_background_toward_ink() {
    let ink = Bgra8::opaque(255, 0, 0);
    let op = ColoredAlpha::<Bgra8888>::new(ink);
    let bg = Bgra8::opaque(0, 0, 255);

    assert_eq!(op.combine(bg, Luminosity8(0)), bg);
    let half = op.combine(bg, Luminosity8(128));
    assert_eq!((half.r, half.g, half.b, half.a), (127, 0, 127, 255));
}

#[test]
fn colored_alpha_on_gray() {
    let op = ColoredAlpha::<Gray8>::new(Luminosity8(200));
    assert_eq!(op.combine(Luminosity8(0), Luminosity8(128)), Luminosity8(100));
}

#[test]
fn opaque_alpha_ignores_destination_and_interpolates() {
    let a = Rgb565Color::from_channels(0, 0, 0);
    let b = Rgb565Color::from_channels(31, 63, 31);
    let op = OpaqueAlpha::<Rgb565>::new(a, b);
    assert_eq!(op.apply(Luminosity8(0)), a);
    // 31 * 128 >> 8 = 15, 63 * 128 >> 8 = 31
    assert_eq!(
        op.apply(Luminosity8(128)),
        Rgb565Color::from_channels(15, 31, 15)
    );
    // 31 * 255 >> 8 = 30, 63 * 255 >> 8 = 62
    assert_eq!(
        op.apply(Luminosity8(255)),
        Rgb565Color::from_channels(30, 62, 30)
    );
}
