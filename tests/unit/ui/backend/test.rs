use super::*;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::style::{Color, Mod, Style};

#[test]
fn draw_text_clips_wide_glyphs_that_do_not_fit() {
    let mut buf = TestBuffer::new(Rect::new(0, 0, 1, 1));
    draw_text(&mut buf, Pos::new(0, 0), "界", Style::default(), None);
    assert_eq!(buf.cell(0, 0).unwrap().symbol, " ");
}

#[test]
fn draw_text_renders_wide_glyphs_when_they_fit() {
    let mut buf = TestBuffer::new(Rect::new(0, 0, 2, 1));
    draw_text(&mut buf, Pos::new(0, 0), "界", Style::default(), None);
    assert_eq!(buf.cell(0, 0).unwrap().symbol, "界");
    assert_eq!(buf.cell(1, 0).unwrap().symbol, " ");
}

#[test]
fn draw_text_respects_the_clip_rect() {
    let mut buf = TestBuffer::new(Rect::new(0, 0, 6, 1));
    draw_text(
        &mut buf,
        Pos::new(0, 0),
        "abcdef",
        Style::default(),
        Some(Rect::new(0, 0, 3, 1)),
    );
    assert_eq!(buf.row_text(0), "abc");
}

#[test]
fn fill_rect_clips_to_buffer_area() {
    let mut buf = TestBuffer::new(Rect::new(0, 0, 2, 2));
    buf.cell_mut(0, 0).unwrap().symbol = "A".to_string();
    fill_rect(&mut buf, Rect::new(0, 0, 10, 10), Style::default());
    assert_eq!(buf.cell(0, 0).unwrap().symbol, " ");
}

#[test]
fn style_rect_patches_the_existing_style_and_keeps_symbols() {
    let mut buf = TestBuffer::new(Rect::new(0, 0, 1, 1));
    {
        let cell = buf.cell_mut(0, 0).unwrap();
        cell.symbol = "A".to_string();
        cell.style = Style::default().fg(Color::Indexed(2));
    }
    let scrim = Style::default().bg(Color::Indexed(236)).add_mod(Mod::DIM);
    style_rect(&mut buf, Rect::new(0, 0, 1, 1), scrim);

    let cell = buf.cell(0, 0).unwrap();
    assert_eq!(cell.symbol, "A");
    assert_eq!(cell.style.fg, Some(Color::Indexed(2)));
    assert_eq!(cell.style.bg, Some(Color::Indexed(236)));
    assert!(cell.style.mods.contains(Mod::DIM));
}

#[test]
fn draw_hline_writes_characters() {
    let mut buf = TestBuffer::new(Rect::new(0, 0, 3, 1));
    draw_hline(&mut buf, Pos::new(0, 0), 3, '-', Style::default());
    assert_eq!(buf.row_text(0), "---");
}

#[test]
fn draw_border_uses_the_kind_glyphs() {
    let mut buf = TestBuffer::new(Rect::new(0, 0, 4, 3));
    draw_border(&mut buf, Rect::new(0, 0, 4, 3), Style::default(), BorderKind::Rounded);
    assert_eq!(buf.row_text(0), "╭──╮");
    assert_eq!(buf.row_text(1), "│  │");
    assert_eq!(buf.row_text(2), "╰──╯");
}

#[test]
fn backend_replays_commands_and_reports_text() {
    let mut backend = TestBackend::new(8, 2);
    let cmds = vec![
        PaintCmd::FillRect {
            rect: Rect::new(0, 0, 8, 2),
            style: Style::default(),
        },
        PaintCmd::Text {
            pos: Pos::new(1, 1),
            text: "sure?".to_string(),
            style: Style::default(),
            clip: None,
        },
    ];
    backend.draw(Rect::new(0, 0, 8, 2), &cmds);
    backend.set_cursor(Some(Pos::new(2, 1)));

    assert_eq!(backend.buffer().row_text(0), "");
    assert_eq!(backend.buffer().row_text(1), " sure?");
    assert!(backend.buffer().contains_text("sure?"));
    assert_eq!(backend.buffer().text(), "\n sure?");
    assert_eq!(backend.cursor(), Some(Pos::new(2, 1)));
}
