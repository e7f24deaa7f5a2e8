use super::*;

const CANVAS: Canvas = Canvas {
    width: 640,
    height: 360,
};

#[test]
fn start_uses_padding() {
    let ext = TextExtent {
        width: 100,
        height: 30,
    };
    let (x, y) = place_caption(CANVAS, ext, Anchor::Start, Anchor::Start, 20, 7);
    assert_eq!((x, y), (20, 7));
}

#[test]
fn center_ignores_padding_and_floors() {
    let ext = TextExtent {
        width: 101,
        height: 31,
    };
    let (x, y) = place_caption(CANVAS, ext, Anchor::Center, Anchor::Center, 999, 999);
    assert_eq!(x, (640 - 101) / 2);
    assert_eq!(y, (360 - 31) / 2);
}

#[test]
fn end_aligns_far_edge_minus_padding() {
    let ext = TextExtent {
        width: 100,
        height: 30,
    };
    let (x, y) = place_caption(CANVAS, ext, Anchor::End, Anchor::End, 20, 10);
    assert_eq!(x + ext.width + 20, 640);
    assert_eq!(y + ext.height + 10, 360);
}

#[test]
fn oversized_captions_are_not_clamped() {
    let ext = TextExtent {
        width: 700,
        height: 401,
    };
    assert_eq!(anchor_offset(Anchor::End, 640, 700, 20), -80);
    // Floor division, like the host's integer division.
    assert_eq!(anchor_offset(Anchor::Center, 360, 401, 0), -21);
    let (x, _) = place_caption(CANVAS, ext, Anchor::Start, Anchor::Start, 1000, 0);
    assert_eq!(x, 1000);
}
