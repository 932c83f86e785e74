use super::{paint_buttons, text_width, wrap_words, Dialog, DialogProps};
use crate::core::event::{KeyCode, KeyEvent};
use crate::kernel::store::{CONFIRM_BUTTON_ACCEPT, CONFIRM_BUTTON_CANCEL};
use crate::kernel::{Action, ConfirmOptions, ModalKind};
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::style::{Mod, Style};
use crate::ui::core::theme::Theme;
use crate::ui::core::widget::Ui;
use std::time::Instant;

const MIN_WIDTH: u16 = 32;
const MAX_WIDTH: u16 = 64;
/// Border plus one column of padding on each side.
const CHROME_W: u16 = 4;
const PENDING_LABEL: &str = "Working…";

/// Yes/no question with an optional side effect run on accept.
pub struct ConfirmDialog;

fn options<'a>(props: &'a DialogProps<'_>) -> Option<&'a ConfirmOptions> {
    match &props.entry.options {
        ModalKind::Confirm(opts) => Some(opts),
        _ => None,
    }
}

fn inner_width(opts: &ConfirmOptions, area: Rect) -> u16 {
    let wanted = text_width(&opts.message)
        .max(text_width(&opts.title).saturating_add(2))
        .saturating_add(CHROME_W)
        .clamp(MIN_WIDTH, MAX_WIDTH);
    wanted.min(area.w).saturating_sub(CHROME_W)
}

impl Dialog for ConfirmDialog {
    fn title(&self, props: &DialogProps<'_>) -> String {
        options(props).map(|o| o.title.clone()).unwrap_or_default()
    }

    fn size(&self, props: &DialogProps<'_>, area: Rect) -> (u16, u16) {
        let Some(opts) = options(props) else {
            return (MIN_WIDTH, 5);
        };
        let inner_w = inner_width(opts, area);
        let message_h =
            u16::try_from(wrap_words(&opts.message, inner_w).len()).unwrap_or(u16::MAX);
        let local = &props.entry.local;
        let status_h = u16::from(local.pending || local.error.is_some());
        // Border, message, blank, optional status, buttons.
        let h = message_h
            .saturating_add(2 + 1 + 1)
            .saturating_add(status_h);
        (inner_w.saturating_add(CHROME_W), h)
    }

    fn paint(&self, ui: &mut Ui<'_>, props: &DialogProps<'_>, theme: &Theme) {
        let Some(opts) = options(props) else {
            return;
        };
        let local = &props.entry.local;
        let base = Style::default().bg(theme.dialog_bg).fg(theme.dialog_fg);

        for line in wrap_words(&opts.message, ui.rect.w) {
            let row = ui.take_top(1);
            if row.is_empty() {
                return;
            }
            ui.painter.text_clipped(Pos::new(row.x, row.y), line, base, row);
        }
        ui.take_top(1);

        if local.pending {
            let row = ui.take_top(1);
            let style = Style::default()
                .bg(theme.dialog_bg)
                .fg(theme.muted_fg)
                .add_mod(Mod::DIM);
            ui.painter
                .text_clipped(Pos::new(row.x, row.y), PENDING_LABEL, style, row);
        } else if let Some(error) = &local.error {
            let row = ui.take_top(1);
            let style = Style::default().bg(theme.dialog_bg).fg(theme.error_fg);
            ui.painter
                .text_clipped(Pos::new(row.x, row.y), error.as_str(), style, row);
        }

        let accept = if local.pending {
            PENDING_LABEL
        } else {
            opts.confirm_label.as_str()
        };
        paint_buttons(
            ui,
            props.entry.name(),
            &[accept, "Cancel"],
            Some(local.focus),
            theme,
        );
    }

    fn on_key(&self, _props: &DialogProps<'_>, key: &KeyEvent, _now: Instant) -> Option<Action> {
        match key.code {
            KeyCode::Enter => Some(Action::ConfirmAccept),
            KeyCode::Left | KeyCode::BackTab => Some(Action::ConfirmFocus { delta: -1 }),
            KeyCode::Right | KeyCode::Tab => Some(Action::ConfirmFocus { delta: 1 }),
            KeyCode::Char('y') => Some(Action::ConfirmPress {
                button: CONFIRM_BUTTON_ACCEPT,
            }),
            KeyCode::Char('n') => Some(Action::ConfirmPress {
                button: CONFIRM_BUTTON_CANCEL,
            }),
            _ => None,
        }
    }

    fn on_button(&self, props: &DialogProps<'_>, index: usize, _now: Instant) -> Option<Action> {
        if index == CONFIRM_BUTTON_CANCEL {
            return Some(props.on_close.dismiss());
        }
        Some(Action::ConfirmPress { button: index })
    }
}
