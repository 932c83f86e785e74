use super::error::KernelError;
use super::modal::{ModalKind, ModalName};
use super::services::adapters::AppMessage;
use super::Action;
use std::sync::mpsc::{self, Receiver, Sender};

/// Injected handle for code that cannot borrow the store, such as background tasks.
///
/// Every call is forwarded to the UI loop, which dispatches it on the store. Once the loop
/// has dropped its receiver, calls fail with `KernelError::RegistryClosed`.
#[derive(Clone, Debug)]
pub struct ModalHandle {
    tx: Sender<AppMessage>,
}

impl ModalHandle {
    pub fn new(tx: Sender<AppMessage>) -> Self {
        Self { tx }
    }

    pub fn channel() -> (Self, Receiver<AppMessage>) {
        let (tx, rx) = mpsc::channel();
        (Self::new(tx), rx)
    }

    pub fn open(&self, kind: ModalKind) -> Result<(), KernelError> {
        self.dispatch(Action::OpenModal(kind))
    }

    pub fn close(&self, name: ModalName) -> Result<(), KernelError> {
        self.dispatch(Action::CloseModal(name))
    }

    pub fn dispatch(&self, action: Action) -> Result<(), KernelError> {
        self.send(AppMessage::Action(action))
    }

    pub fn send(&self, message: AppMessage) -> Result<(), KernelError> {
        self.tx
            .send(message)
            .map_err(|_| KernelError::RegistryClosed)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/handle.rs"]
mod tests;
