use super::*;

#[test]
fn lerp_shift8_endpoints() {
    assert_eq!(lerp_shift8(10, 200, 0), 10);
    // 255/256 of the way, not all the way.
    assert_eq!(lerp_shift8(0, 255, 255), 254);
    assert_eq!(lerp_shift8(0, 100, 128), 50);
}

#[test]
fn lerp_shift8_negative_delta_floors() {
    // (0 - 1) * 1 >> 8 == -1 with an arithmetic shift.
    assert_eq!(lerp_shift8(1, 0, 1), 0);
    assert_eq!(lerp_shift8(200, 100, 128), 150);
}

#[test]
fn lerp_shift8_stays_between_endpoints() {
    for a in (0..=255).step_by(5) {
        for b in (0..=255).step_by(7) {
            for s in [0, 1, 64, 127, 128, 200, 254, 255] {
                let r = lerp_shift8(a, b, s);
                assert!(r >= a.min(b) && r <= a.max(b), "a={a} b={b} s={s} r={r}");
            }
        }
    }
}
