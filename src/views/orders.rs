//! Order list (pure rendering + hit-test registration).

use crate::kernel::order::format_cents;
use crate::kernel::{AppState, Order, OrdersState, SnackbarKind};
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::id::Id;
use crate::ui::core::style::{Mod, Style};
use crate::ui::core::theme::Theme;
use crate::ui::core::tree::{NodeKind, Sense};
use crate::ui::core::widget::Ui;

const TITLE: &str = "Storefront · Orders";
const HINT: &str = "↑/↓ select  Enter status  a advance  c cancel  ? help  q quit";

const COL_ID: u16 = 8;
const COL_CUSTOMER: u16 = 16;
const COL_TOTAL: u16 = 11;
const COL_STATUS: u16 = 12;

pub fn order_row_id(index: usize) -> Id {
    Id::from_parts("orders.row", &[index as u64])
}

/// Page behind the modal stack: title, column header, one row per order and a status line
/// that shows the snackbar when there is one.
#[derive(Debug, Default)]
pub struct OrdersView {
    offset: usize,
}

impl OrdersView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn paint(&mut self, ui: &mut Ui<'_>, state: &AppState, theme: &Theme) {
        if ui.rect.is_empty() {
            return;
        }
        let title = ui.take_top(1);
        ui.painter.text_clipped(
            Pos::new(title.x, title.y),
            TITLE,
            Style::default().fg(theme.header_fg).add_mod(Mod::BOLD),
            title,
        );

        let status = ui.take_bottom(1);
        paint_status_line(ui, status, state, theme);

        let header = ui.take_top(1);
        let muted = Style::default().fg(theme.muted_fg);
        paint_columns(
            ui,
            header,
            ["Order", "Customer", "Item", "Total", "Status"],
            muted.add_mod(Mod::BOLD),
        );

        let list = ui.rect;
        self.paint_list(ui, list, &state.orders, theme);
    }

    fn paint_list(&mut self, ui: &mut Ui<'_>, list: Rect, orders: &OrdersState, theme: &Theme) {
        if list.is_empty() {
            return;
        }
        let muted = Style::default().fg(theme.muted_fg);
        if orders.items.is_empty() {
            let message = if orders.loading {
                "Loading orders…".to_string()
            } else if let Some(error) = &orders.error {
                format!("Failed to load orders: {error}")
            } else {
                "No orders".to_string()
            };
            let style = if orders.error.is_some() {
                Style::default().fg(theme.error_fg)
            } else {
                muted
            };
            ui.painter
                .text_clipped(Pos::new(list.x, list.y), message, style, list);
            return;
        }

        let visible = list.h as usize;
        self.offset = scroll_offset(self.offset, orders.selected, visible);

        for (row_idx, (index, order)) in orders
            .items
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(visible)
            .enumerate()
        {
            let Some(row) = list.row(row_idx as u16) else {
                break;
            };
            let selected = index == orders.selected;
            let style = if selected {
                let style = Style::default()
                    .bg(theme.selected_bg)
                    .fg(theme.selected_fg);
                ui.painter.fill_rect(row, style);
                style
            } else {
                Style::default()
            };
            paint_columns(ui, row, order_cells(order), style);
            let status_style = if order.status.is_terminal() && !selected {
                muted
            } else {
                style
            };
            let status_x = row.right().saturating_sub(COL_STATUS);
            let status_rect = Rect::new(status_x, row.y, COL_STATUS, 1).intersect(row);
            ui.painter.fill_rect(status_rect, style);
            ui.painter.text_clipped(
                Pos::new(status_rect.x, status_rect.y),
                order.status.label(),
                status_style,
                status_rect,
            );
            ui.register(
                order_row_id(index),
                row,
                Sense::CLICK | Sense::HOVER,
                NodeKind::OrderRow { index },
            );
        }
    }
}

fn order_cells(order: &Order) -> [String; 5] {
    [
        order.id.to_string(),
        order.customer.clone(),
        order.item.clone(),
        format_cents(order.total_cents),
        order.status.label().to_string(),
    ]
}

/// Fixed-width id, customer, total and status columns; the item takes the rest.
fn paint_columns<S: AsRef<str>>(ui: &mut Ui<'_>, row: Rect, cells: [S; 5], style: Style) {
    let fixed = COL_ID + COL_CUSTOMER + COL_TOTAL + COL_STATUS;
    let item_w = row.w.saturating_sub(fixed);
    let widths = [COL_ID, COL_CUSTOMER, item_w, COL_TOTAL, COL_STATUS];
    let mut x = row.x;
    for (cell, w) in cells.iter().zip(widths) {
        let rect = Rect::new(x, row.y, w.saturating_sub(1), 1).intersect(row);
        if !rect.is_empty() {
            ui.painter
                .text_clipped(Pos::new(rect.x, rect.y), cell.as_ref(), style, rect);
        }
        x = x.saturating_add(w);
    }
}

fn paint_status_line(ui: &mut Ui<'_>, rect: Rect, state: &AppState, theme: &Theme) {
    if rect.is_empty() {
        return;
    }
    let (text, style) = match &state.snackbar {
        Some(snackbar) => {
            let fg = match snackbar.kind {
                SnackbarKind::Info => theme.accent_fg,
                SnackbarKind::Success => theme.success_fg,
                SnackbarKind::Error => theme.error_fg,
            };
            (
                snackbar.message.as_str(),
                Style::default().fg(fg).add_mod(Mod::BOLD),
            )
        }
        None => (HINT, Style::default().fg(theme.muted_fg)),
    };
    ui.painter
        .text_clipped(Pos::new(rect.x, rect.y), text, style, rect);
}

/// Smallest change to `offset` that keeps `selected` inside a window of `visible` rows.
pub(crate) fn scroll_offset(offset: usize, selected: usize, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    if selected < offset {
        selected
    } else if selected >= offset + visible {
        selected + 1 - visible
    } else {
        offset
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/orders.rs"]
mod tests;
