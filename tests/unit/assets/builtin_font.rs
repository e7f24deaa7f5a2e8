use super::*;

fn lit_pixels(img: &RgbImage, color: Rgb8) -> Vec<(u32, u32)> {
    img.enumerate_pixels()
        .filter(|(_, _, p)| p.0 == color.to_array())
        .map(|(x, y, _)| (x, y))
        .collect()
}

#[test]
fn scale_tracks_font_size() {
    assert_eq!(BuiltinFont::for_size(1).scale(), 1);
    assert_eq!(BuiltinFont::for_size(8).scale(), 1);
    assert_eq!(BuiltinFont::for_size(32).scale(), 4);
    assert_eq!(BuiltinFont::for_size(200).scale(), 25);
}

#[test]
fn measure_counts_cells_without_trailing_gap() {
    let f = BuiltinFont::for_size(16);
    assert_eq!(f.measure(""), TextExtent::default());
    assert_eq!(
        f.measure("001"),
        TextExtent {
            width: 3 * 6 * 2 - 2,
            height: 14
        }
    );
}

#[test]
fn draw_stays_inside_measured_box() {
    let f = BuiltinFont::for_size(8);
    let mut img = RgbImage::new(40, 20);
    let red = Rgb8::new(255, 0, 0);
    f.draw(&mut img, "Fr 09", 3, 4, red);

    let lit = lit_pixels(&img, red);
    assert!(!lit.is_empty());
    let ext = f.measure("Fr 09");
    for (x, y) in lit {
        assert!(x >= 3 && i64::from(x) < 3 + ext.width);
        assert!(y >= 4 && i64::from(y) < 4 + ext.height);
    }
}

#[test]
fn off_canvas_origin_is_clipped_not_panicking() {
    let f = BuiltinFont::for_size(24);
    let mut img = RgbImage::new(10, 10);
    let white = Rgb8::new(255, 255, 255);
    f.draw(&mut img, "888", -7, -5, white);
    f.draw(&mut img, "888", 9, 9, white);
    f.draw(&mut img, "888", 500, -500, white);
    assert!(!lit_pixels(&img, white).is_empty());
}

#[test]
fn non_ascii_falls_back_to_question_mark() {
    assert_eq!(glyph_for('é'), glyph_for('?'));
    assert_eq!(glyph_for('\n'), glyph_for('?'));
    assert_ne!(glyph_for('0'), glyph_for('?'));
}
