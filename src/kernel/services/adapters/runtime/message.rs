use crate::kernel::modal::ModalSeq;
use crate::kernel::order::Order;
use crate::kernel::services::ports::ApiError;
use crate::kernel::Action;
use std::time::Instant;

#[derive(Debug)]
pub enum AppMessage {
    /// An action produced off the UI thread, e.g. through a `ModalHandle`.
    Action(Action),
    OrdersLoaded(Result<Vec<Order>, ApiError>),
    ConfirmSettled {
        seq: ModalSeq,
        result: Result<Option<Order>, ApiError>,
    },
}

impl AppMessage {
    pub fn into_action(self, now: Instant) -> Action {
        match self {
            AppMessage::Action(action) => action,
            AppMessage::OrdersLoaded(result) => {
                Action::OrdersLoaded(result.map_err(|e| e.to_string()))
            }
            AppMessage::ConfirmSettled { seq, result } => Action::ConfirmSettled {
                seq,
                result: result.map_err(|e| e.to_string()),
                now,
            },
        }
    }
}
