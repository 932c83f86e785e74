use super::App;
use crate::core::event::{InputEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton};
use crate::core::view::EventResult;
use crate::kernel::Action;
use crate::ui::core::id::Id;
use crate::ui::core::input::UiEvent;
use crate::ui::core::tree::NodeKind;
use crate::views::modal::DialogProps;
use std::time::Instant;

impl App {
    pub fn handle_input(&mut self, event: &InputEvent, now: Instant) -> EventResult {
        match event {
            InputEvent::Key(key) => {
                if !key.is_press() {
                    return EventResult::Ignored;
                }
                self.handle_key(key, now)
            }
            InputEvent::Mouse(_) => self.handle_mouse(event, now),
            InputEvent::Resize(..) | InputEvent::FocusGained => {
                self.dirty = true;
                EventResult::Consumed
            }
            InputEvent::FocusLost => {
                self.ui_runtime.reset_pointer_state();
                EventResult::Ignored
            }
            InputEvent::Paste(_) => EventResult::Ignored,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, now: Instant) -> EventResult {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return EventResult::Quit;
        }

        // The topmost modal owns the keyboard while the stack is non-empty.
        if !self.store.state().modals.is_empty() {
            let action = if key.code == KeyCode::Esc {
                Some(Action::DismissTopModal)
            } else {
                self.top_dialog_key(key, now)
            };
            if let Some(action) = action {
                self.dispatch(action);
            }
            return EventResult::Consumed;
        }

        let orders = &self.store.state().orders;
        let selected = orders.selected_order().map(|o| o.id);
        let action = match key.code {
            KeyCode::Char('q') => return EventResult::Quit,
            KeyCode::Up | KeyCode::Char('k') => Some(Action::OrdersMoveSelection { delta: -1 }),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::OrdersMoveSelection { delta: 1 }),
            KeyCode::Enter => selected.map(|order_id| Action::OpenOrderStatus { order_id }),
            KeyCode::Char('a') => {
                selected.map(|order_id| Action::RequestAdvanceOrder { order_id, now })
            }
            KeyCode::Char('c') => {
                selected.map(|order_id| Action::RequestCancelOrder { order_id, now })
            }
            KeyCode::Char('r') => Some(Action::OrdersLoadStart),
            KeyCode::Char('?') => Some(Action::ShowHelp),
            _ => None,
        };
        match action {
            Some(action) => {
                self.dispatch(action);
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }

    fn top_dialog_key(&self, key: &KeyEvent, now: Instant) -> Option<Action> {
        let state = self.store.state();
        let entry = state.modals.top()?;
        let dialog = self.dialogs.get(entry.name())?;
        dialog.on_key(&DialogProps::new(entry, state), key, now)
    }

    fn handle_mouse(&mut self, event: &InputEvent, now: Instant) -> EventResult {
        let out = self.ui_runtime.on_input(event, &self.tree);
        self.dirty |= out.needs_redraw;

        let mut result = if out.needs_redraw {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        };
        for ui_event in out.events {
            let action = match ui_event {
                UiEvent::Click {
                    target,
                    button: MouseButton::Left,
                    ..
                } => self.on_click(target, now),
                UiEvent::Scroll { delta, .. } if self.store.state().modals.is_empty() => {
                    Some(Action::OrdersMoveSelection {
                        delta: isize::from(delta),
                    })
                }
                _ => None,
            };
            if let Some(action) = action {
                self.dispatch(action);
                result = EventResult::Consumed;
            }
        }
        result
    }

    fn on_click(&self, target: Id, now: Instant) -> Option<Action> {
        let node = self.tree.node(target)?;
        let state = self.store.state();
        match node.kind {
            NodeKind::Backdrop { .. } => self.dismiss.on_click(target, &state.modals),
            NodeKind::DialogButton { modal, index } => {
                // Buttons of covered dialogs are not reachable, but the tree may be a frame old.
                if !state.modals.is_top(modal) {
                    return None;
                }
                let entry = state.modals.top()?;
                let dialog = self.dialogs.get(modal)?;
                dialog.on_button(&DialogProps::new(entry, state), index, now)
            }
            NodeKind::OrderRow { index } => {
                if !state.modals.is_empty() {
                    return None;
                }
                let orders = &state.orders;
                if orders.selected == index {
                    orders
                        .selected_order()
                        .map(|o| Action::OpenOrderStatus { order_id: o.id })
                } else {
                    Some(Action::OrdersClickRow { row: index })
                }
            }
            NodeKind::Dialog { .. } | NodeKind::Unknown => None,
        }
    }
}
