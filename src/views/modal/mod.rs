//! Modal stack rendering.
//!
//! Every registry entry gets its own layer: a backdrop covering the whole viewport with the
//! resolved dialog centred on top. Layers are painted in registry order and stacked by index,
//! so the last opened modal is both drawn and hit-tested above all others.

mod confirm;
mod dismiss;
mod lookup;
mod notice;
mod order_status;

pub use confirm::ConfirmDialog;
pub use dismiss::DismissPolicy;
pub use lookup::DialogTable;
pub use notice::NoticeDialog;
pub use order_status::OrderStatusDialog;

use crate::core::event::KeyEvent;
use crate::kernel::{Action, AppState, ModalEntry, ModalName};
use crate::ui::core::geom::{Insets, Pos, Rect};
use crate::ui::core::id::Id;
use crate::ui::core::painter::BorderKind;
use crate::ui::core::style::{Mod, Style};
use crate::ui::core::theme::Theme;
use crate::ui::core::tree::{layer, NodeKind, Sense};
use crate::ui::core::widget::Ui;
use std::time::Instant;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// First z used by the modal layer. Each stacked entry takes `MODAL_Z_STEP` slots: backdrop,
/// dialog body, dialog content.
pub const MODAL_Z_BASE: u32 = 1_000;
pub const MODAL_Z_STEP: u32 = 10;

const PLACEHOLDER_WIDTH: u16 = 44;
const PLACEHOLDER_HEIGHT: u16 = 5;

pub fn backdrop_id(name: ModalName) -> Id {
    Id::from_parts("modal.backdrop", &[name as u64])
}

pub fn dialog_id(name: ModalName) -> Id {
    Id::from_parts("modal.dialog", &[name as u64])
}

pub fn button_id(name: ModalName, index: usize) -> Id {
    Id::from_parts("modal.button", &[name as u64, index as u64])
}

/// z of the backdrop of the entry at `index` in the registry.
pub fn layer_z(index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    MODAL_Z_BASE.saturating_add(index.saturating_mul(MODAL_Z_STEP))
}

/// Close callback handed to a dialog, bound to the name of the entry it renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OnClose(ModalName);

impl OnClose {
    pub fn new(name: ModalName) -> Self {
        Self(name)
    }

    pub fn name(self) -> ModalName {
        self.0
    }

    /// The dialog is done: close it unconditionally.
    pub fn action(self) -> Action {
        Action::CloseModal(self.0)
    }

    /// The user backed out; ignored while the dialog has an action in flight.
    pub fn dismiss(self) -> Action {
        Action::DismissModal(self.0)
    }
}

/// What a dialog sees of the world: its own entry, read-only app state and its close callback.
pub struct DialogProps<'a> {
    pub entry: &'a ModalEntry,
    pub state: &'a AppState,
    pub on_close: OnClose,
}

impl<'a> DialogProps<'a> {
    pub fn new(entry: &'a ModalEntry, state: &'a AppState) -> Self {
        Self {
            entry,
            state,
            on_close: OnClose::new(entry.name()),
        }
    }
}

/// A dialog implementation. Dialogs are stateless: options and transient state live on the
/// registry entry, and every interaction is reported back as a kernel `Action`.
pub trait Dialog: Send + Sync {
    fn title(&self, props: &DialogProps<'_>) -> String;

    /// Outer size including the border, before clamping to the viewport.
    fn size(&self, props: &DialogProps<'_>, area: Rect) -> (u16, u16);

    /// Paints the content. `ui.rect` is the area inside the border and padding.
    fn paint(&self, ui: &mut Ui<'_>, props: &DialogProps<'_>, theme: &Theme);

    fn on_key(&self, props: &DialogProps<'_>, key: &KeyEvent, now: Instant) -> Option<Action>;

    fn on_button(&self, props: &DialogProps<'_>, index: usize, now: Instant) -> Option<Action>;
}

/// Draws the modal stack on top of whatever was painted before it.
pub struct ModalRenderer<'a> {
    dialogs: &'a DialogTable,
    theme: &'a Theme,
}

impl<'a> ModalRenderer<'a> {
    pub fn new(dialogs: &'a DialogTable, theme: &'a Theme) -> Self {
        Self { dialogs, theme }
    }

    pub fn paint(&self, ui: &mut Ui<'_>, state: &AppState) {
        let area = ui.rect;
        if area.is_empty() {
            return;
        }
        let prev_layer = ui.layer;
        let prev_z = ui.z;
        ui.layer = layer::MODAL;

        for (index, entry) in state.modals.entries().iter().enumerate() {
            let z = layer_z(index);
            let name = entry.name();

            ui.z = z;
            let scrim = Style::default().bg(self.theme.scrim_bg).add_mod(Mod::DIM);
            ui.painter.style_rect(area, scrim);
            ui.register(
                backdrop_id(name),
                area,
                Sense::CLICK,
                NodeKind::Backdrop { modal: name },
            );

            let props = DialogProps::new(entry, state);
            match self.dialogs.get(name) {
                Some(dialog) => self.paint_dialog(ui, dialog, &props, z),
                None => {
                    tracing::error!(modal = %name, "no dialog registered for modal");
                    self.paint_placeholder(ui, name, z);
                }
            }
        }

        ui.layer = prev_layer;
        ui.z = prev_z;
    }

    fn paint_dialog(&self, ui: &mut Ui<'_>, dialog: &dyn Dialog, props: &DialogProps<'_>, z: u32) {
        let area = ui.rect;
        let (w, h) = dialog.size(props, area);
        let rect = area.centered(w, h);
        let name = props.entry.name();
        let title = dialog.title(props);
        self.paint_frame(ui, rect, &title, name, z);

        let content = rect.inset(Insets::xy(2, 1));
        if content.is_empty() {
            return;
        }
        ui.z = z + 2;
        ui.with_rect(content, |ui| dialog.paint(ui, props, self.theme));
    }

    fn paint_placeholder(&self, ui: &mut Ui<'_>, name: ModalName, z: u32) {
        let rect = ui.rect.centered(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT);
        self.paint_frame(ui, rect, "Error", name, z);
        let content = rect.inset(Insets::xy(2, 1));
        let style = Style::default()
            .bg(self.theme.dialog_bg)
            .fg(self.theme.error_fg);
        for (offset, line) in ["No dialog registered for", name.as_str()].into_iter().enumerate() {
            let Some(row) = content.row(offset as u16) else {
                break;
            };
            ui.painter.text_centered(row, line, style);
        }
    }

    fn paint_frame(&self, ui: &mut Ui<'_>, rect: Rect, title: &str, name: ModalName, z: u32) {
        let base = Style::default()
            .bg(self.theme.dialog_bg)
            .fg(self.theme.dialog_fg);
        ui.painter.fill_rect(rect, base);
        ui.painter.border(
            rect,
            Style::default()
                .bg(self.theme.dialog_bg)
                .fg(self.theme.dialog_border),
            BorderKind::Rounded,
        );
        if !title.is_empty() && rect.w > 4 {
            let title = format!(" {title} ");
            let clip = Rect::new(rect.x + 2, rect.y, rect.w - 4, 1);
            let style = Style::default()
                .bg(self.theme.dialog_bg)
                .fg(self.theme.header_fg)
                .add_mod(Mod::BOLD);
            ui.painter.text_clipped(Pos::new(clip.x, clip.y), title, style, clip);
        }

        ui.z = z + 1;
        ui.register(dialog_id(name), rect, Sense::NONE, NodeKind::Dialog { modal: name });
    }
}

/// Right-aligned button row on the last line of `ui.rect`. Each button registers a clickable
/// node so the app can route clicks back to `Dialog::on_button`.
pub(crate) fn paint_buttons(
    ui: &mut Ui<'_>,
    name: ModalName,
    labels: &[&str],
    focus: Option<usize>,
    theme: &Theme,
) {
    let Some(row) = ui.rect.h.checked_sub(1).and_then(|last| ui.rect.row(last)) else {
        return;
    };
    let total: u16 = labels
        .iter()
        .map(|l| button_width(l).saturating_add(1))
        .fold(0u16, u16::saturating_add)
        .saturating_sub(1);
    let mut x = row.x.saturating_add(row.w.saturating_sub(total));

    let base = Style::default().bg(theme.dialog_bg).fg(theme.accent_fg);
    let focused = Style::default()
        .bg(theme.selected_bg)
        .fg(theme.selected_fg)
        .add_mod(Mod::BOLD);
    for (index, label) in labels.iter().enumerate() {
        let w = button_width(label);
        let rect = Rect::new(x, row.y, w, 1).intersect(row);
        if rect.is_empty() {
            break;
        }
        let style = if focus == Some(index) { focused } else { base };
        ui.painter
            .text_clipped(Pos::new(rect.x, rect.y), format!("[{label}]"), style, rect);
        ui.register(
            button_id(name, index),
            rect,
            Sense::CLICK | Sense::HOVER,
            NodeKind::DialogButton { modal: name, index },
        );
        x = x.saturating_add(w).saturating_add(1);
    }
}

fn button_width(label: &str) -> u16 {
    (label.width().saturating_add(2)).min(u16::MAX as usize) as u16
}

/// Greedy word wrap to `width` columns. Words wider than a line are split on grapheme
/// boundaries.
pub(crate) fn wrap_words(text: &str, width: u16) -> Vec<String> {
    let width = width as usize;
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_w = 0usize;
        for word in paragraph.split_whitespace() {
            let word_w = word.width();
            let sep = usize::from(!line.is_empty());
            if line_w + sep + word_w <= width {
                if sep == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                line_w += sep + word_w;
                continue;
            }
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_w = 0;
            }
            for g in word.graphemes(true) {
                let gw = g.width();
                if line_w + gw > width && !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                    line_w = 0;
                }
                line.push_str(g);
                line_w += gw;
            }
        }
        lines.push(line);
    }
    lines
}

pub(crate) fn text_width(text: &str) -> u16 {
    text.width().min(u16::MAX as usize) as u16
}

#[cfg(test)]
#[path = "../../../tests/unit/views/modal.rs"]
mod tests;
