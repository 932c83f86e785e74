use super::modal::{
    ConfirmAction, ConfirmOptions, ModalKind, ModalName, NoticeOptions, OrderStatusOptions,
};
use super::order::Order;
use super::snackbar::{Snackbar, SnackbarKind};
use super::{Action, AppState, Effect};

/// Confirm dialog buttons, left to right.
pub const CONFIRM_BUTTON_ACCEPT: usize = 0;
pub const CONFIRM_BUTTON_CANCEL: usize = 1;
const CONFIRM_BUTTON_COUNT: usize = 2;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }

    fn effect(effect: Effect, state_changed: bool) -> Self {
        Self {
            effects: vec![effect],
            state_changed,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::OpenModal(kind) => {
                let name = kind.name();
                let seq = self.state.modals.open(kind);
                tracing::debug!(
                    modal = %name,
                    seq = seq.0,
                    depth = self.state.modals.len(),
                    "modal opened"
                );
                DispatchResult::changed(true)
            }
            Action::CloseModal(name) => {
                let changed = self.state.modals.close(name);
                if changed {
                    tracing::debug!(modal = %name, "modal closed");
                }
                DispatchResult::changed(changed)
            }
            Action::DismissModal(name) => DispatchResult::changed(self.dismiss(name)),
            Action::DismissTopModal => {
                let Some(name) = self.state.modals.top().map(|e| e.name()) else {
                    return DispatchResult::changed(false);
                };
                DispatchResult::changed(self.dismiss(name))
            }
            Action::ConfirmFocus { delta } => {
                let Some(entry) = self.state.modals.top_mut() else {
                    return DispatchResult::changed(false);
                };
                if entry.name() != ModalName::Confirm || entry.local.pending {
                    return DispatchResult::changed(false);
                }
                let prev = entry.local.focus;
                let next = (prev as isize + delta).rem_euclid(CONFIRM_BUTTON_COUNT as isize);
                entry.local.focus = next as usize;
                DispatchResult::changed(entry.local.focus != prev)
            }
            Action::ConfirmAccept => self.confirm_accept(),
            Action::ConfirmPress { button } => {
                if let Some(entry) = self.state.modals.top_mut() {
                    if entry.name() == ModalName::Confirm && !entry.local.pending {
                        entry.local.focus = button.min(CONFIRM_BUTTON_COUNT - 1);
                    }
                }
                self.confirm_accept()
            }
            Action::ConfirmSettled { seq, result, now } => {
                let Some(entry) = self.state.modals.get_mut(ModalName::Confirm) else {
                    tracing::debug!(seq = seq.0, "confirm result for a closed dialog dropped");
                    return DispatchResult::changed(false);
                };
                if entry.seq() != seq {
                    tracing::debug!(seq = seq.0, "confirm result for a replaced dialog dropped");
                    return DispatchResult::changed(false);
                }

                match result {
                    Ok(updated) => {
                        let action = match &entry.options {
                            ModalKind::Confirm(opts) => opts.action.clone(),
                            _ => ConfirmAction::Acknowledge,
                        };
                        self.state.modals.close(ModalName::Confirm);
                        if let Some(order) = updated {
                            self.state.orders.upsert(order);
                        }
                        if let Some(message) = success_message(&action) {
                            self.state.snackbar =
                                Some(Snackbar::new(message, SnackbarKind::Success, now));
                        }
                        tracing::info!(seq = seq.0, ?action, "confirm action succeeded");
                    }
                    Err(error) => {
                        tracing::warn!(seq = seq.0, %error, "confirm action failed");
                        entry.local.pending = false;
                        entry.local.error = Some(error);
                    }
                }
                DispatchResult::changed(true)
            }
            Action::OrdersLoadStart => {
                if self.state.orders.loading {
                    tracing::debug!("orders already loading");
                    return DispatchResult::changed(false);
                }
                self.state.orders.loading = true;
                DispatchResult::effect(Effect::LoadOrders, true)
            }
            Action::OrdersLoaded(result) => match result {
                Ok(orders) => {
                    tracing::info!(count = orders.len(), "orders loaded");
                    DispatchResult::changed(self.state.orders.replace(orders))
                }
                Err(error) => {
                    tracing::warn!(%error, "failed to load orders");
                    self.state.orders.loading = false;
                    self.state.orders.error = Some(error);
                    DispatchResult::changed(true)
                }
            },
            Action::OrdersMoveSelection { delta } => {
                DispatchResult::changed(self.state.orders.move_selection(delta))
            }
            Action::OrdersClickRow { row } => {
                DispatchResult::changed(self.state.orders.click_row(row))
            }
            Action::OpenOrderStatus { order_id } => {
                if self.state.orders.find(order_id).is_none() {
                    return DispatchResult::changed(false);
                }
                self.dispatch(Action::OpenModal(ModalKind::OrderStatus(
                    OrderStatusOptions { order_id },
                )))
            }
            Action::RequestAdvanceOrder { order_id, now } => {
                let Some(order) = self.state.orders.find(order_id) else {
                    return DispatchResult::changed(false);
                };
                let Some(to) = order.status.next() else {
                    let message = format!("Order {} is already {}", order.id, order.status);
                    self.state.snackbar = Some(Snackbar::new(message, SnackbarKind::Info, now));
                    return DispatchResult::changed(true);
                };
                let opts = ConfirmOptions::message(format!(
                    "Mark order {} ({}) as {}?",
                    order.id, order.item, to
                ))
                .with_title("Advance order")
                .with_action("Advance", ConfirmAction::AdvanceOrder { order_id, to });
                self.dispatch(Action::OpenModal(ModalKind::Confirm(opts)))
            }
            Action::RequestCancelOrder { order_id, now } => {
                let Some(order) = self.state.orders.find(order_id) else {
                    return DispatchResult::changed(false);
                };
                if !order.status.can_cancel() {
                    let message = format!("Order {} can no longer be cancelled", order.id);
                    self.state.snackbar = Some(Snackbar::new(message, SnackbarKind::Info, now));
                    return DispatchResult::changed(true);
                }
                let opts = ConfirmOptions::message(cancel_prompt(order))
                    .with_title("Cancel order")
                    .with_action("Cancel order", ConfirmAction::CancelOrder { order_id });
                self.dispatch(Action::OpenModal(ModalKind::Confirm(opts)))
            }
            Action::ShowHelp => self.dispatch(Action::OpenModal(ModalKind::Notice(help_notice()))),
            Action::Tick { now } => {
                let expired = self
                    .state
                    .snackbar
                    .as_ref()
                    .is_some_and(|s| s.is_expired(now));
                if expired {
                    self.state.snackbar = None;
                }
                DispatchResult::changed(expired)
            }
        }
    }

    fn dismiss(&mut self, name: ModalName) -> bool {
        if self
            .state
            .modals
            .get(name)
            .is_some_and(|e| e.local.pending)
        {
            tracing::debug!(modal = %name, "dismiss ignored while action is in flight");
            return false;
        }
        self.state.modals.close(name)
    }

    fn confirm_accept(&mut self) -> DispatchResult {
        let Some(entry) = self.state.modals.top_mut() else {
            return DispatchResult::changed(false);
        };
        let ModalKind::Confirm(opts) = &entry.options else {
            return DispatchResult::changed(false);
        };
        if entry.local.pending {
            return DispatchResult::changed(false);
        }
        if entry.local.focus == CONFIRM_BUTTON_CANCEL {
            return DispatchResult::changed(self.state.modals.close(ModalName::Confirm));
        }

        match opts.action.clone() {
            ConfirmAction::Acknowledge => {
                DispatchResult::changed(self.state.modals.close(ModalName::Confirm))
            }
            action => {
                let seq = entry.seq();
                entry.local.pending = true;
                entry.local.error = None;
                tracing::debug!(seq = seq.0, ?action, "confirm action started");
                DispatchResult::effect(Effect::RunConfirm { seq, action }, true)
            }
        }
    }
}

fn success_message(action: &ConfirmAction) -> Option<String> {
    match action {
        ConfirmAction::Acknowledge => None,
        ConfirmAction::AdvanceOrder { order_id, to } => {
            Some(format!("Order {order_id} is now {to}"))
        }
        ConfirmAction::CancelOrder { order_id } => Some(format!("Order {order_id} cancelled")),
    }
}

fn cancel_prompt(order: &Order) -> String {
    format!(
        "Cancel order {} ({}) for {}?",
        order.id, order.item, order.customer
    )
}

fn help_notice() -> NoticeOptions {
    NoticeOptions {
        title: "Keys".to_string(),
        lines: [
            "Up/Down   select order",
            "Enter     order status",
            "a         advance status",
            "c         cancel order",
            "?         this help",
            "Esc       close dialog",
            "q         quit",
        ]
        .into_iter()
        .map(str::to_string)
        .collect(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
