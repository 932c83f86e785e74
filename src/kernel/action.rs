use super::modal::{ModalKind, ModalName, ModalSeq};
use super::order::{Order, OrderId};
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Action {
    OpenModal(ModalKind),
    /// Unconditional close, the `onClose` of a dialog.
    CloseModal(ModalName),
    /// Close requested by the user (backdrop click, Esc). Ignored while the dialog has an
    /// action in flight.
    DismissModal(ModalName),
    DismissTopModal,
    ConfirmFocus {
        delta: isize,
    },
    ConfirmAccept,
    /// Focus `button` and accept it, as a mouse click on that button does.
    ConfirmPress {
        button: usize,
    },
    ConfirmSettled {
        seq: ModalSeq,
        result: Result<Option<Order>, String>,
        now: Instant,
    },
    OrdersLoadStart,
    OrdersLoaded(Result<Vec<Order>, String>),
    OrdersMoveSelection {
        delta: isize,
    },
    OrdersClickRow {
        row: usize,
    },
    OpenOrderStatus {
        order_id: OrderId,
    },
    RequestAdvanceOrder {
        order_id: OrderId,
        now: Instant,
    },
    RequestCancelOrder {
        order_id: OrderId,
        now: Instant,
    },
    ShowHelp,
    Tick {
        now: Instant,
    },
}
