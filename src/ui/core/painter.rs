use super::geom::{Pos, Rect};
use super::style::Style;
use unicode_width::UnicodeWidthStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderKind {
    Plain,
    Rounded,
}

impl BorderKind {
    /// Corner and edge glyphs: top-left, top-right, bottom-left, bottom-right, horizontal,
    /// vertical.
    pub fn glyphs(self) -> [char; 6] {
        match self {
            BorderKind::Plain => ['┌', '┐', '└', '┘', '─', '│'],
            BorderKind::Rounded => ['╭', '╮', '╰', '╯', '─', '│'],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaintCmd {
    /// Blank the cells and paint them with `style`.
    FillRect { rect: Rect, style: Style },
    /// Apply a style to the existing buffer cells without changing their symbols.
    StyleRect { rect: Rect, style: Style },
    HLine {
        pos: Pos,
        len: u16,
        ch: char,
        style: Style,
    },
    Text {
        pos: Pos,
        text: String,
        style: Style,
        clip: Option<Rect>,
    },
    Border {
        rect: Rect,
        style: Style,
        kind: BorderKind,
    },
}

/// Recorded list of paint commands for one frame, replayed by a `Backend`.
#[derive(Debug, Default)]
pub struct Painter {
    cmds: Vec<PaintCmd>,
}

impl Painter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn cmds(&self) -> &[PaintCmd] {
        &self.cmds
    }

    pub fn fill_rect(&mut self, rect: Rect, style: Style) {
        self.cmds.push(PaintCmd::FillRect { rect, style });
    }

    pub fn style_rect(&mut self, rect: Rect, style: Style) {
        self.cmds.push(PaintCmd::StyleRect { rect, style });
    }

    pub fn hline(&mut self, pos: Pos, len: u16, ch: char, style: Style) {
        self.cmds.push(PaintCmd::HLine { pos, len, ch, style });
    }

    pub fn text_clipped(&mut self, pos: Pos, text: impl Into<String>, style: Style, clip: Rect) {
        self.cmds.push(PaintCmd::Text {
            pos,
            text: text.into(),
            style,
            clip: Some(clip),
        });
    }

    /// Draws `text` on the first row of `rect`, horizontally centred and clipped to it.
    pub fn text_centered(&mut self, rect: Rect, text: &str, style: Style) {
        if rect.is_empty() {
            return;
        }
        let w = (text.width().min(u16::MAX as usize) as u16).min(rect.w);
        let x = rect.x.saturating_add((rect.w - w) / 2);
        self.text_clipped(Pos::new(x, rect.y), text, style, rect);
    }

    pub fn border(&mut self, rect: Rect, style: Style, kind: BorderKind) {
        self.cmds.push(PaintCmd::Border { rect, style, kind });
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/painter.rs"]
mod tests;
