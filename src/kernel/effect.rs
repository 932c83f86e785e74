use super::modal::{ConfirmAction, ModalSeq};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadOrders,
    RunConfirm { seq: ModalSeq, action: ConfirmAction },
}
