use super::{paint_buttons, text_width, Dialog, DialogProps};
use crate::core::event::{KeyCode, KeyEvent};
use crate::kernel::{Action, ModalKind, NoticeOptions};
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::style::Style;
use crate::ui::core::theme::Theme;
use crate::ui::core::widget::Ui;
use std::time::Instant;

const MIN_WIDTH: u16 = 28;
const CHROME_W: u16 = 4;

/// Read-only list of lines with a single close button.
pub struct NoticeDialog;

fn options<'a>(props: &'a DialogProps<'_>) -> Option<&'a NoticeOptions> {
    match &props.entry.options {
        ModalKind::Notice(opts) => Some(opts),
        _ => None,
    }
}

impl Dialog for NoticeDialog {
    fn title(&self, props: &DialogProps<'_>) -> String {
        options(props).map(|o| o.title.clone()).unwrap_or_default()
    }

    fn size(&self, props: &DialogProps<'_>, _area: Rect) -> (u16, u16) {
        let Some(opts) = options(props) else {
            return (MIN_WIDTH, 5);
        };
        let content_w = opts
            .lines
            .iter()
            .map(|l| text_width(l))
            .chain(std::iter::once(text_width(&opts.title).saturating_add(2)))
            .max()
            .unwrap_or(0);
        let lines = u16::try_from(opts.lines.len()).unwrap_or(u16::MAX);
        (
            content_w.saturating_add(CHROME_W).max(MIN_WIDTH),
            lines.saturating_add(4),
        )
    }

    fn paint(&self, ui: &mut Ui<'_>, props: &DialogProps<'_>, theme: &Theme) {
        let Some(opts) = options(props) else {
            return;
        };
        let style = Style::default().bg(theme.dialog_bg).fg(theme.dialog_fg);
        let body = ui.rect;
        for (offset, line) in opts.lines.iter().enumerate() {
            let Some(row) = u16::try_from(offset).ok().and_then(|o| body.row(o)) else {
                break;
            };
            if row.y.saturating_add(1) >= body.bottom() {
                break;
            }
            ui.painter
                .text_clipped(Pos::new(row.x, row.y), line.as_str(), style, row);
        }
        paint_buttons(ui, props.entry.name(), &["Close"], Some(0), theme);
    }

    fn on_key(&self, props: &DialogProps<'_>, key: &KeyEvent, _now: Instant) -> Option<Action> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('q') => Some(props.on_close.action()),
            _ => None,
        }
    }

    fn on_button(&self, props: &DialogProps<'_>, _index: usize, _now: Instant) -> Option<Action> {
        Some(props.on_close.action())
    }
}
