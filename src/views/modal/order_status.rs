use super::{paint_buttons, Dialog, DialogProps};
use crate::core::event::{KeyCode, KeyEvent};
use crate::kernel::order::format_cents;
use crate::kernel::{Action, ModalKind, Order, OrderId, OrderStatus};
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::style::{Mod, Style};
use crate::ui::core::theme::Theme;
use crate::ui::core::widget::Ui;
use std::time::Instant;

const WIDTH: u16 = 48;
const BUTTONS: [&str; 3] = ["Advance", "Cancel order", "Close"];
const BUTTON_ADVANCE: usize = 0;
const BUTTON_CANCEL: usize = 1;

/// Order summary plus the status timeline, with the current step highlighted.
pub struct OrderStatusDialog;

fn order_id(props: &DialogProps<'_>) -> Option<OrderId> {
    match &props.entry.options {
        ModalKind::OrderStatus(opts) => Some(opts.order_id),
        _ => None,
    }
}

fn order<'a>(props: &'a DialogProps<'_>) -> Option<&'a Order> {
    order_id(props).and_then(|id| props.state.orders.find(id))
}

impl Dialog for OrderStatusDialog {
    fn title(&self, props: &DialogProps<'_>) -> String {
        match order_id(props) {
            Some(id) => format!("Order {id}"),
            None => "Order".to_string(),
        }
    }

    fn size(&self, props: &DialogProps<'_>, _area: Rect) -> (u16, u16) {
        let timeline = OrderStatus::PROGRESSION.len() as u16;
        let cancelled = order(props).is_some_and(|o| o.status == OrderStatus::Cancelled);
        // Border, two summary lines, rule, timeline, optional cancelled line, blank, buttons.
        (WIDTH, 2 + 2 + 1 + timeline + u16::from(cancelled) + 1 + 1)
    }

    fn paint(&self, ui: &mut Ui<'_>, props: &DialogProps<'_>, theme: &Theme) {
        let base = Style::default().bg(theme.dialog_bg).fg(theme.dialog_fg);
        let Some(order) = order(props) else {
            let row = ui.take_top(1);
            let style = Style::default().bg(theme.dialog_bg).fg(theme.error_fg);
            ui.painter
                .text_clipped(Pos::new(row.x, row.y), "Order not found", style, row);
            paint_buttons(ui, props.entry.name(), &BUTTONS[2..], None, theme);
            return;
        };

        let summary = [
            format!("{} · {}", order.item, format_cents(order.total_cents)),
            format!("Customer: {}", order.customer),
        ];
        for line in summary {
            let row = ui.take_top(1);
            ui.painter.text_clipped(Pos::new(row.x, row.y), line, base, row);
        }
        let rule = ui.take_top(1);
        ui.painter.hline(
            Pos::new(rule.x, rule.y),
            rule.w,
            '─',
            Style::default().bg(theme.dialog_bg).fg(theme.muted_fg),
        );

        let current = order.status.position();
        for (step, status) in OrderStatus::PROGRESSION.iter().enumerate() {
            let row = ui.take_top(1);
            if row.is_empty() {
                break;
            }
            let (marker, style) = match current {
                Some(pos) if step < pos => (
                    "✓",
                    Style::default().bg(theme.dialog_bg).fg(theme.success_fg),
                ),
                Some(pos) if step == pos => (
                    "●",
                    Style::default()
                        .bg(theme.dialog_bg)
                        .fg(theme.accent_fg)
                        .add_mod(Mod::BOLD),
                ),
                _ => ("○", Style::default().bg(theme.dialog_bg).fg(theme.muted_fg)),
            };
            ui.painter.text_clipped(
                Pos::new(row.x, row.y),
                format!("{marker} {}", status.label()),
                style,
                row,
            );
        }
        if order.status == OrderStatus::Cancelled {
            let row = ui.take_top(1);
            let style = Style::default()
                .bg(theme.dialog_bg)
                .fg(theme.error_fg)
                .add_mod(Mod::BOLD);
            ui.painter.text_clipped(
                Pos::new(row.x, row.y),
                format!("✗ {}", OrderStatus::Cancelled.label()),
                style,
                row,
            );
        }

        paint_buttons(ui, props.entry.name(), &BUTTONS, None, theme);
    }

    fn on_key(&self, props: &DialogProps<'_>, key: &KeyEvent, now: Instant) -> Option<Action> {
        match key.code {
            KeyCode::Char('a') => self.on_button(props, BUTTON_ADVANCE, now),
            KeyCode::Char('c') => self.on_button(props, BUTTON_CANCEL, now),
            KeyCode::Enter => Some(props.on_close.action()),
            _ => None,
        }
    }

    fn on_button(&self, props: &DialogProps<'_>, index: usize, now: Instant) -> Option<Action> {
        // Without an order only the close button is shown.
        let Some(order_id) = order(props).map(|o| o.id) else {
            return Some(props.on_close.action());
        };
        match index {
            BUTTON_ADVANCE => Some(Action::RequestAdvanceOrder { order_id, now }),
            BUTTON_CANCEL => Some(Action::RequestCancelOrder { order_id, now }),
            _ => Some(props.on_close.action()),
        }
    }
}
