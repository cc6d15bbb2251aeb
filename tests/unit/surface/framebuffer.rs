use super::*;
use crate::catalog;
use crate::format::{Bgra8, Bgra8888, Gray8, Luminosity8, Rgb565};

#[test]
fn new_allocates_width_height_bpp() {
    let fb = Framebuffer::<Rgb565>::new(3, 2).unwrap();
    assert_eq!(fb.as_bytes().len(), 12);
    assert_eq!(fb.pitch(), 6);
}

#[test]
fn from_bytes_rejects_wrong_length() {
    let err = Framebuffer::<Gray8>::from_bytes(2, 2, RowOrder::TopDown, vec![0; 3]).unwrap_err();
    assert!(matches!(err, BlitError::Validation(_)));
}

#[test]
fn span_rejects_out_of_range() {
    let fb = Framebuffer::<Gray8>::new(4, 2).unwrap();
    assert!(fb.span(0, 0, 4).is_ok());
    assert!(fb.span(0, 0, 0).is_ok());
    assert!(matches!(fb.span(1, 0, 4), Err(BlitError::Bounds(_))));
    assert!(matches!(fb.span(0, 2, 1), Err(BlitError::Bounds(_))));
    assert!(matches!(fb.span(u32::MAX, 0, 2), Err(BlitError::Bounds(_))));
}

#[test]
fn bottom_up_rows_are_stored_last_first() {
    let mut fb = Framebuffer::<Gray8>::with_row_order(2, 3, RowOrder::BottomUp).unwrap();
    fb.fill_span(&catalog::copy(), 0, 0, 2, Luminosity8(9)).unwrap();
    assert_eq!(fb.as_bytes(), &[0, 0, 0, 0, 9, 9]);
    assert_eq!(fb.pixel(1, 0), Some(Luminosity8(9)));
    assert_eq!(fb.row_bytes(0), &[9, 9]);
}

#[test]
fn column_walks_down_in_both_orders() {
    for order in [RowOrder::TopDown, RowOrder::BottomUp] {
        let mut fb = Framebuffer::<Gray8>::with_row_order(3, 3, order).unwrap();
        let at = fb.column_span(1, 0, 3).unwrap();
        catalog::copy::<Gray8>().fill_pixels(fb.as_bytes_mut(), at, 3, Luminosity8(1));
        for y in 0..3 {
            assert_eq!(fb.pixel(1, y), Some(Luminosity8(1)));
            assert_eq!(fb.pixel(0, y), Some(Luminosity8(0)));
        }
    }
}

#[test]
fn copy_span_between_framebuffers() {
    let mut src = Framebuffer::<Gray8>::new(4, 1).unwrap();
    src.as_bytes_mut().copy_from_slice(&[10, 200, 10, 250]);
    let mut dst = Framebuffer::<Gray8>::new(4, 1).unwrap();
    dst.fill_span(&catalog::copy(), 0, 0, 4, Luminosity8(5)).unwrap();

    dst.copy_span(&catalog::transparent(Luminosity8(10)), 0, 0, &src, 0, 0, 4)
        .unwrap();
    assert_eq!(dst.as_bytes(), &[5, 200, 5, 250]);
}

#[test]
fn copy_span_checks_source_bounds() {
    let src = Framebuffer::<Gray8>::new(2, 1).unwrap();
    let mut dst = Framebuffer::<Gray8>::new(4, 1).unwrap();
    let err = dst
        .copy_span(&catalog::copy(), 0, 0, &src, 0, 0, 3)
        .unwrap_err();
    assert!(matches!(err, BlitError::Bounds(_)));
}

#[test]
fn copy_span_within_shifts_left() {
    let mut fb = Framebuffer::<Gray8>::from_bytes(5, 1, RowOrder::TopDown, vec![1, 2, 3, 4, 5])
        .unwrap();
    fb.copy_span_within(&catalog::copy(), (0, 0), (1, 0), 4).unwrap();
    assert_eq!(fb.as_bytes(), &[2, 3, 4, 5, 5]);
}

#[test]
fn rgba_export_is_top_down() {
    let mut fb = Framebuffer::<Bgra8888>::with_row_order(1, 2, RowOrder::BottomUp).unwrap();
    fb.fill_span(&catalog::copy(), 0, 0, 1, Bgra8::opaque(255, 0, 0))
        .unwrap();
    let img = fb.to_rgba_image();
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(0, 1).0, [0, 0, 0, 0]);
}

#[test]
fn save_png_writes_a_file() {
    let fb = Framebuffer::<Gray8>::new(2, 2).unwrap();
    let path = std::env::temp_dir().join(format!("memblit_fb_{}.png", std::process::id()));
    fb.save_png(&path).unwrap();
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
    let _ = std::fs::remove_file(&path);
}

#[test]
#[should_panic(expected = "row 4 outside 4 row framebuffer")]
fn row_bytes_past_the_last_row_panics_top_down() {
    let fb = Framebuffer::<Gray8>::new(3, 4).unwrap();
    let _ = fb.row_bytes(4);
}

#[test]
#[should_panic(expected = "row 4 outside 4 row framebuffer")]
fn row_bytes_mut_past_the_last_row_panics_bottom_up() {
    let mut fb = Framebuffer::<Gray8>::with_row_order(3, 4, RowOrder::BottomUp).unwrap();
    let _ = fb.row_bytes_mut(4);
}

#[test]
#[should_panic(expected = "row 0 outside 0 row framebuffer")]
fn column_of_an_empty_bottom_up_framebuffer_panics() {
    let fb = Framebuffer::<Gray8>::with_row_order(3, 0, RowOrder::BottomUp).unwrap();
    let _ = fb.column(0);
}

#[test]
fn checked_spans_on_an_empty_framebuffer_fail_cleanly() {
    let fb = Framebuffer::<Gray8>::with_row_order(3, 0, RowOrder::BottomUp).unwrap();
    assert!(matches!(fb.column_span(0, 0, 1), Err(BlitError::Bounds(_))));
    assert!(matches!(fb.span(0, 0, 1), Err(BlitError::Bounds(_))));
    assert_eq!(fb.pixel(0, 0), None);
}
