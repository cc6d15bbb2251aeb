use super::*;

#[test]
fn bit_not_is_an_involution() {
    for x in 0..=u8::MAX {
        assert_eq!(BitNot.map(BitNot.map(x)), x);
    }
    for x in [0u32, 1, 0xdead_beef, u32::MAX] {
        assert_eq!(BitNot.map(BitNot.map(x)), x);
    }
}

#[test]
fn bit_or_and_identities() {
    for x in [0u16, 1, 0x1234, 0xf81f, u16::MAX] {
        assert_eq!(BitOr.combine(x, u16::ZERO), x);
        assert_eq!(BitAnd.combine(x, u16::ALL_ONES), x);
    }
}

#[test]
fn bit_not_or_inverts_only_the_source() {
    assert_eq!(BitNotOr.combine(0b0000_0001u8, 0b1111_0000), 0b0000_1111);
    assert_eq!(BitNotOr.combine(0u8, u8::MAX), 0);
}
