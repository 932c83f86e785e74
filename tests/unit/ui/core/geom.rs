use super::*;

#[test]
fn rect_contains_is_inclusive_exclusive() {
    let r = Rect::new(10, 20, 3, 2); // x:10..13, y:20..22
    assert!(r.contains(Pos::new(10, 20)));
    assert!(r.contains(Pos::new(12, 21)));

    // Right/bottom edges are exclusive.
    assert!(!r.contains(Pos::new(13, 20)));
    assert!(!r.contains(Pos::new(12, 22)));

    // Outside.
    assert!(!r.contains(Pos::new(9, 20)));
    assert!(!r.contains(Pos::new(10, 19)));
}

#[test]
fn rect_empty_never_contains() {
    let r = Rect::new(0, 0, 0, 10);
    assert!(!r.contains(Pos::new(0, 0)));
    let r = Rect::new(0, 0, 10, 0);
    assert!(!r.contains(Pos::new(0, 0)));
}

#[test]
fn inset_shrinks_and_saturates() {
    let r = Rect::new(0, 0, 10, 6);
    assert_eq!(r.inset(Insets::xy(2, 1)), Rect::new(2, 1, 6, 4));
    assert!(Rect::new(0, 0, 3, 3).inset(Insets::all(2)).is_empty());
}

#[test]
fn intersect_of_disjoint_rects_is_empty() {
    let a = Rect::new(0, 0, 5, 5);
    let b = Rect::new(3, 3, 5, 5);
    assert_eq!(a.intersect(b), Rect::new(3, 3, 2, 2));
    assert!(a.intersect(Rect::new(10, 10, 2, 2)).is_empty());
}

#[test]
fn split_top_and_bottom_clamp_to_height() {
    let r = Rect::new(0, 0, 8, 5);
    assert_eq!(
        r.split_top(2),
        (Rect::new(0, 0, 8, 2), Rect::new(0, 2, 8, 3))
    );
    assert_eq!(
        r.split_bottom(1),
        (Rect::new(0, 0, 8, 4), Rect::new(0, 4, 8, 1))
    );
    let (top, rest) = r.split_top(9);
    assert_eq!(top, r);
    assert!(rest.is_empty());
}

#[test]
fn centered_fits_inside_the_area() {
    let area = Rect::new(0, 0, 80, 24);
    assert_eq!(area.centered(40, 10), Rect::new(20, 7, 40, 10));
    assert_eq!(area.centered(100, 30), area);
}

#[test]
fn row_is_none_past_the_bottom() {
    let r = Rect::new(2, 3, 4, 2);
    assert_eq!(r.row(1), Some(Rect::new(2, 4, 4, 1)));
    assert_eq!(r.row(2), None);
}
