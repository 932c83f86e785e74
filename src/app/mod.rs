//! Application shell.
//!
//! Owns the store and everything a frame needs: routes input to the page or to the topmost
//! modal, hands effects to the async runtime, drains its results and paints.

mod input;
mod render;
mod tick;

use crate::kernel::services::adapters::{AppMessage, AsyncRuntime};
use crate::kernel::services::ports::{MarketApi, Settings};
use crate::kernel::{Action, AppState, ModalHandle, Store};
use crate::ui::core::painter::Painter;
use crate::ui::core::runtime::UiRuntime;
use crate::ui::core::theme::Theme;
use crate::ui::core::tree::UiTree;
use crate::views::{DialogTable, DismissPolicy, OrdersView};
use std::io;
use std::sync::mpsc::Receiver;
use std::sync::Arc;

const MAX_MESSAGES_PER_TICK: usize = 256;

pub struct App {
    store: Store,
    dialogs: DialogTable,
    dismiss: DismissPolicy,
    theme: Theme,
    orders_view: OrdersView,
    painter: Painter,
    tree: UiTree,
    ui_runtime: UiRuntime,
    runtime: AsyncRuntime,
    rx: Receiver<AppMessage>,
    dirty: bool,
}

impl App {
    pub fn new(settings: &Settings, api: Arc<dyn MarketApi>) -> io::Result<Self> {
        Self::with_dialogs(settings, api, DialogTable::standard())
    }

    pub fn with_dialogs(
        settings: &Settings,
        api: Arc<dyn MarketApi>,
        dialogs: DialogTable,
    ) -> io::Result<Self> {
        let missing = dialogs.missing();
        if !missing.is_empty() {
            tracing::error!(?missing, "modals without a dialog will render a placeholder");
        }

        let (handle, rx) = ModalHandle::channel();
        let runtime = AsyncRuntime::new(handle, api)?;
        let mut theme = Theme::default();
        theme.apply_settings(&settings.theme);

        Ok(Self {
            store: Store::new(AppState::new()),
            dialogs,
            dismiss: DismissPolicy::new(&settings.modal),
            theme,
            orders_view: OrdersView::new(),
            painter: Painter::new(),
            tree: UiTree::new(),
            ui_runtime: UiRuntime::new(),
            runtime,
            rx,
            dirty: true,
        })
    }

    /// Kicks off the initial order load.
    pub fn start(&mut self) {
        self.dispatch(Action::OrdersLoadStart);
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    /// Handle for code outside the UI loop. Actions sent through it are applied on the next
    /// `tick`.
    pub fn modal_handle(&self) -> ModalHandle {
        self.runtime.modal_handle().clone()
    }

    /// Hit-test tree of the last painted frame.
    pub fn tree(&self) -> &UiTree {
        &self.tree
    }

    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    pub fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.runtime.run(effect);
        }
        self.dirty |= result.state_changed;
        result.state_changed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app.rs"]
mod tests;
