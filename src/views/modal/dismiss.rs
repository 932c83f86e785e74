use super::backdrop_id;
use crate::kernel::services::ports::ModalSettings;
use crate::kernel::{Action, ModalRegistry};
use crate::ui::core::id::Id;

/// Decides which clicks close a modal.
///
/// A click closes a modal only when its target is that modal's own backdrop node. Clicks on
/// the dialog or anything inside it have a different target and never dismiss. The topmost
/// backdrop covers the viewport, so with several modals open only the top one can be hit.
/// Esc is not governed here: it always dispatches `Action::DismissTopModal`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DismissPolicy {
    on_backdrop: bool,
}

impl DismissPolicy {
    pub fn new(settings: &ModalSettings) -> Self {
        Self {
            on_backdrop: settings.dismiss_on_backdrop,
        }
    }

    pub fn on_click(&self, target: Id, modals: &ModalRegistry) -> Option<Action> {
        if !self.on_backdrop {
            return None;
        }
        modals
            .names()
            .find(|name| backdrop_id(*name) == target)
            .map(Action::DismissModal)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/views/dismiss.rs"]
mod tests;
