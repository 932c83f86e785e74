use crate::ui::backend::Backend;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::{BorderKind, PaintCmd};
use crate::ui::core::style::{Color, Mod, Style};
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::Rect as RRect;
use ratatui::style::{Color as RColor, Modifier as RModifier, Style as RStyle};
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;
use std::io;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Replays paint commands into a ratatui frame.
pub struct RatatuiBackend<'a, 'f> {
    frame: &'a mut Frame<'f>,
    cursor: Option<Pos>,
}

impl<'a, 'f> RatatuiBackend<'a, 'f> {
    pub fn new(frame: &'a mut Frame<'f>) -> Self {
        Self { frame, cursor: None }
    }
}

impl Drop for RatatuiBackend<'_, '_> {
    fn drop(&mut self) {
        // ratatui hides the cursor unless a position is set for this frame.
        if let Some(pos) = self.cursor {
            self.frame.set_cursor_position((pos.x, pos.y));
        }
    }
}

impl From<RRect> for Rect {
    fn from(r: RRect) -> Self {
        Rect::new(r.x, r.y, r.width, r.height)
    }
}

impl From<Rect> for RRect {
    fn from(r: Rect) -> Self {
        RRect::new(r.x, r.y, r.w, r.h)
    }
}

impl Backend for RatatuiBackend<'_, '_> {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]) {
        self.frame.render_widget(Replay { cmds }, area.into());
    }

    fn set_cursor(&mut self, pos: Option<Pos>) {
        self.cursor = pos;
    }
}

/// Terminal handle for `main`; nothing else in the crate names a ratatui type.
pub struct RatatuiTerminal {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl RatatuiTerminal {
    pub fn new(stdout: io::Stdout) -> io::Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }

    pub fn draw<F>(&mut self, paint: F) -> io::Result<()>
    where
        F: FnOnce(&mut dyn Backend, Rect),
    {
        self.terminal.draw(|frame| {
            let area = Rect::from(frame.area());
            let mut backend = RatatuiBackend::new(frame);
            paint(&mut backend, area);
        })?;
        Ok(())
    }
}

struct Replay<'a> {
    cmds: &'a [PaintCmd],
}

impl Widget for Replay<'_> {
    fn render(self, _area: RRect, buf: &mut Buffer) {
        for cmd in self.cmds {
            match cmd {
                PaintCmd::FillRect { rect, style } => {
                    let style = convert_style(*style);
                    for_each_cell(buf, *rect, |cell| {
                        // Fills are opaque: drop whatever a lower layer left in the cell.
                        cell.reset();
                        cell.set_char(' ').set_style(style);
                    });
                }
                PaintCmd::StyleRect { rect, style } => {
                    // `Cell::set_style` merges, so the symbols underneath survive.
                    let style = convert_style(*style);
                    for_each_cell(buf, *rect, |cell| {
                        cell.set_style(style);
                    });
                }
                PaintCmd::HLine { pos, len, ch, style } => {
                    let style = convert_style(*style);
                    for_each_cell(buf, Rect::new(pos.x, pos.y, *len, 1), |cell| {
                        cell.set_char(*ch).set_style(style);
                    });
                }
                PaintCmd::Text {
                    pos,
                    text,
                    style,
                    clip,
                } => draw_text(buf, *pos, text, convert_style(*style), *clip),
                PaintCmd::Border { rect, style, kind } => {
                    draw_border(buf, *rect, convert_style(*style), *kind)
                }
            }
        }
    }
}

fn for_each_cell(buf: &mut Buffer, rect: Rect, mut f: impl FnMut(&mut Cell)) {
    let clip = rect.intersect(Rect::from(buf.area));
    for y in clip.y..clip.bottom() {
        for x in clip.x..clip.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                f(cell);
            }
        }
    }
}

fn convert_style(s: Style) -> RStyle {
    let mut out = RStyle::default().add_modifier(convert_mods(s.mods));
    if let Some(fg) = s.fg {
        out = out.fg(convert_color(fg));
    }
    if let Some(bg) = s.bg {
        out = out.bg(convert_color(bg));
    }
    out
}

fn convert_color(c: Color) -> RColor {
    match c {
        Color::Reset => RColor::Reset,
        Color::Rgb(r, g, b) => RColor::Rgb(r, g, b),
        Color::Indexed(i) => RColor::Indexed(i),
    }
}

fn convert_mods(m: Mod) -> RModifier {
    [
        (Mod::BOLD, RModifier::BOLD),
        (Mod::DIM, RModifier::DIM),
        (Mod::REVERSE, RModifier::REVERSED),
    ]
    .into_iter()
    .filter(|(ours, _)| m.contains(*ours))
    .fold(RModifier::empty(), |acc, (_, theirs)| acc | theirs)
}

fn draw_text(buf: &mut Buffer, pos: Pos, text: &str, style: RStyle, clip: Option<Rect>) {
    let area = Rect::from(buf.area);
    let clip = clip.map_or(area, |c| c.intersect(area));
    if pos.y < clip.y || pos.y >= clip.bottom() {
        return;
    }

    let mut x = pos.x;
    for g in text.graphemes(true) {
        let w = g.width() as u16;
        if w == 0 {
            continue;
        }
        // Wide glyphs are all or nothing at the right edge.
        if x.saturating_add(w) > clip.right() {
            break;
        }
        if x >= clip.x {
            if let Some(cell) = buf.cell_mut((x, pos.y)) {
                cell.set_symbol(g).set_style(style);
            }
            for dx in 1..w {
                if let Some(cell) = buf.cell_mut((x + dx, pos.y)) {
                    cell.set_char(' ').set_style(style);
                }
            }
        }
        x = x.saturating_add(w);
    }
}

fn draw_border(buf: &mut Buffer, rect: Rect, style: RStyle, kind: BorderKind) {
    if rect.w < 2 || rect.h < 2 {
        return;
    }
    let [tl, tr, bl, br, h, v] = kind.glyphs();
    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;

    let mut put = |x: u16, y: u16, ch: char| {
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char(ch).set_style(style);
        }
    };
    put(rect.x, rect.y, tl);
    put(right, rect.y, tr);
    put(rect.x, bottom, bl);
    put(right, bottom, br);
    for x in rect.x + 1..right {
        put(x, rect.y, h);
        put(x, bottom, h);
    }
    for y in rect.y + 1..bottom {
        put(rect.x, y, v);
        put(right, y, v);
    }
}
