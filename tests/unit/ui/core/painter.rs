use super::*;

#[test]
fn painter_collects_commands_and_clears() {
    let mut p = Painter::new();
    assert!(p.cmds().is_empty());

    p.fill_rect(Rect::new(0, 0, 1, 1), Style::default());
    p.style_rect(Rect::new(0, 0, 1, 1), Style::default());
    p.hline(Pos::new(0, 0), 3, '─', Style::default());
    p.text_clipped(Pos::new(0, 0), "hi", Style::default(), Rect::new(0, 0, 2, 1));
    p.border(Rect::new(0, 0, 3, 3), Style::default(), BorderKind::Plain);
    assert_eq!(p.cmds().len(), 5);

    p.clear();
    assert!(p.cmds().is_empty());
}

#[test]
fn text_centered_places_text_in_the_middle() {
    let mut p = Painter::new();
    p.text_centered(Rect::new(10, 2, 10, 1), "abcd", Style::default());
    match p.cmds() {
        [PaintCmd::Text { pos, text, clip, .. }] => {
            assert_eq!(*pos, Pos::new(13, 2));
            assert_eq!(text, "abcd");
            assert_eq!(*clip, Some(Rect::new(10, 2, 10, 1)));
        }
        other => panic!("unexpected commands: {other:?}"),
    }
}

#[test]
fn text_centered_on_an_empty_rect_paints_nothing() {
    let mut p = Painter::new();
    p.text_centered(Rect::new(0, 0, 0, 1), "abc", Style::default());
    assert!(p.cmds().is_empty());
}

#[test]
fn rounded_border_uses_rounded_corners() {
    let [tl, tr, bl, br, h, v] = BorderKind::Rounded.glyphs();
    assert_eq!((tl, tr, bl, br), ('╭', '╮', '╰', '╯'));
    assert_eq!((h, v), ('─', '│'));
    assert_eq!(BorderKind::Plain.glyphs()[0], '┌');
}
