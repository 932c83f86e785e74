//! Modal stack.
//!
//! The registry is an ordered list of open dialogs. Insertion order is stacking order, so the
//! last entry is drawn on top and receives keyboard input. A name appears at most once: opening
//! a name that is already present drops the old entry and pushes the new one on top.
//!
//! Dialog options are typed per kind (`ModalKind`) and are handed to the dialog untouched.
//! Transient dialog state (focused button, in-flight action, last error) lives next to the
//! options in `DialogLocal` and is reset whenever the entry is reopened.

use super::order::{OrderId, OrderStatus};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModalName {
    Confirm,
    OrderStatus,
    Notice,
}

impl ModalName {
    pub const ALL: [ModalName; 3] = [ModalName::Confirm, ModalName::OrderStatus, ModalName::Notice];

    pub fn as_str(self) -> &'static str {
        match self {
            ModalName::Confirm => "confirmModal",
            ModalName::OrderStatus => "orderStatusModal",
            ModalName::Notice => "noticeModal",
        }
    }
}

impl fmt::Display for ModalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a confirm dialog does once accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Nothing to run; accepting just closes the dialog.
    Acknowledge,
    AdvanceOrder { order_id: OrderId, to: OrderStatus },
    CancelOrder { order_id: OrderId },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmOptions {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub action: ConfirmAction,
}

impl ConfirmOptions {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            title: "Confirm".to_string(),
            message: message.into(),
            confirm_label: "OK".to_string(),
            action: ConfirmAction::Acknowledge,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_action(mut self, label: impl Into<String>, action: ConfirmAction) -> Self {
        self.confirm_label = label.into();
        self.action = action;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderStatusOptions {
    pub order_id: OrderId,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeOptions {
    pub title: String,
    pub lines: Vec<String>,
}

/// A modal to open, carrying the options of its dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalKind {
    Confirm(ConfirmOptions),
    OrderStatus(OrderStatusOptions),
    Notice(NoticeOptions),
}

impl ModalKind {
    pub fn name(&self) -> ModalName {
        match self {
            ModalKind::Confirm(_) => ModalName::Confirm,
            ModalKind::OrderStatus(_) => ModalName::OrderStatus,
            ModalKind::Notice(_) => ModalName::Notice,
        }
    }
}

/// Monotonic id of one `open` call. Async results are matched against it so that a result
/// for a dialog that was closed or reopened in the meantime is dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModalSeq(pub u64);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DialogLocal {
    pub focus: usize,
    pub pending: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalEntry {
    name: ModalName,
    seq: ModalSeq,
    pub options: ModalKind,
    pub local: DialogLocal,
}

impl ModalEntry {
    pub fn name(&self) -> ModalName {
        self.name
    }

    pub fn seq(&self) -> ModalSeq {
        self.seq
    }
}

#[derive(Debug, Clone, Default)]
pub struct ModalRegistry {
    entries: Vec<ModalEntry>,
    next_seq: u64,
}

impl ModalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts `kind` to the top of the stack.
    pub fn open(&mut self, kind: ModalKind) -> ModalSeq {
        let name = kind.name();
        self.entries.retain(|e| e.name != name);

        self.next_seq = self.next_seq.wrapping_add(1);
        let seq = ModalSeq(self.next_seq);
        self.entries.push(ModalEntry {
            name,
            seq,
            options: kind,
            local: DialogLocal::default(),
        });
        seq
    }

    /// Removes `name` if present. Returns whether the stack changed.
    pub fn close(&mut self, name: ModalName) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.name != name);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[ModalEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = ModalName> + '_ {
        self.entries.iter().map(|e| e.name)
    }

    pub fn top(&self) -> Option<&ModalEntry> {
        self.entries.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut ModalEntry> {
        self.entries.last_mut()
    }

    pub fn get(&self, name: ModalName) -> Option<&ModalEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn get_mut(&mut self, name: ModalName) -> Option<&mut ModalEntry> {
        self.entries.iter_mut().find(|e| e.name == name)
    }

    pub fn position(&self, name: ModalName) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    pub fn contains(&self, name: ModalName) -> bool {
        self.position(name).is_some()
    }

    pub fn is_top(&self, name: ModalName) -> bool {
        self.top().is_some_and(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/modal.rs"]
mod tests;
