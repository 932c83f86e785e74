use super::{ConfirmDialog, Dialog, NoticeDialog, OrderStatusDialog};
use crate::kernel::ModalName;
use rustc_hash::FxHashMap;

static CONFIRM: ConfirmDialog = ConfirmDialog;
static ORDER_STATUS: OrderStatusDialog = OrderStatusDialog;
static NOTICE: NoticeDialog = NoticeDialog;

/// Modal name to dialog implementation. Built once at startup and read-only afterwards.
pub struct DialogTable {
    dialogs: FxHashMap<ModalName, &'static dyn Dialog>,
}

impl DialogTable {
    /// Empty table; every stacked modal renders the error placeholder.
    pub fn empty() -> Self {
        Self {
            dialogs: FxHashMap::default(),
        }
    }

    pub fn standard() -> Self {
        let mut table = Self::empty();
        table.insert(ModalName::Confirm, &CONFIRM);
        table.insert(ModalName::OrderStatus, &ORDER_STATUS);
        table.insert(ModalName::Notice, &NOTICE);
        table
    }

    pub fn with(mut self, name: ModalName, dialog: &'static dyn Dialog) -> Self {
        self.insert(name, dialog);
        self
    }

    fn insert(&mut self, name: ModalName, dialog: &'static dyn Dialog) {
        if self.dialogs.insert(name, dialog).is_some() {
            tracing::warn!(modal = %name, "dialog registered twice, keeping the last one");
        }
    }

    pub fn get(&self, name: ModalName) -> Option<&'static dyn Dialog> {
        self.dialogs.get(&name).copied()
    }

    pub fn contains(&self, name: ModalName) -> bool {
        self.dialogs.contains_key(&name)
    }

    /// Names that have no dialog, in `ModalName::ALL` order.
    pub fn missing(&self) -> Vec<ModalName> {
        ModalName::ALL
            .into_iter()
            .filter(|name| !self.contains(*name))
            .collect()
    }
}

impl Default for DialogTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/views/lookup.rs"]
mod tests;
