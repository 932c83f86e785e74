use super::geom::Pos;
use super::id::Id;
use super::input::UiEvent;
use super::tree::{Sense, UiTree};
use crate::core::event::{InputEvent, MouseButton, MouseEventKind};

#[derive(Debug, Clone)]
pub struct UiRuntimeOutput {
    pub events: Vec<UiEvent>,
    pub needs_redraw: bool,
}

impl UiRuntimeOutput {
    pub fn empty() -> Self {
        Self {
            events: Vec::new(),
            needs_redraw: false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PressedState {
    button: MouseButton,
    target: Option<Id>,
}

/// Turns raw mouse input into hover changes and clicks against the last painted `UiTree`.
#[derive(Debug, Default)]
pub struct UiRuntime {
    hovered: Option<Id>,
    pressed: Option<PressedState>,
    last_pos: Option<Pos>,
}

impl UiRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<Id> {
        self.hovered
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed.is_some()
    }

    pub fn last_pos(&self) -> Option<Pos> {
        self.last_pos
    }

    pub fn reset_pointer_state(&mut self) {
        self.pressed = None;
    }

    pub fn on_input(&mut self, input: &InputEvent, tree: &UiTree) -> UiRuntimeOutput {
        let mut out = UiRuntimeOutput::empty();

        let InputEvent::Mouse(me) = input else {
            return out;
        };

        let pos = Pos::new(me.column, me.row);
        self.last_pos = Some(pos);

        let next_hover = tree.hit_test_with_sense(pos, Sense::HOVER).map(|n| n.id);
        if next_hover != self.hovered {
            out.events.push(UiEvent::HoverChanged {
                from: self.hovered,
                to: next_hover,
                pos,
            });
            self.hovered = next_hover;
            out.needs_redraw = true;
        }

        match me.kind {
            MouseEventKind::Down(button) => {
                self.pressed = Some(PressedState {
                    button,
                    target: tree.hit_test(pos).map(|n| n.id),
                });
            }
            MouseEventKind::Up(button) => {
                let Some(pressed) = self.pressed.take() else {
                    return out;
                };
                if pressed.button != button {
                    return out;
                }
                // A press that started on one node and ended on another is not a click.
                let target = tree.hit_test(pos).map(|n| n.id);
                if let (Some(target), true) = (target, target == pressed.target) {
                    out.events.push(UiEvent::Click {
                        target,
                        button,
                        pos,
                    });
                }
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                let delta = if matches!(me.kind, MouseEventKind::ScrollUp) {
                    -1
                } else {
                    1
                };
                out.events.push(UiEvent::Scroll {
                    target: tree.hit_test(pos).map(|n| n.id),
                    delta,
                    pos,
                });
            }
            MouseEventKind::Drag(_)
            | MouseEventKind::Moved
            | MouseEventKind::ScrollLeft
            | MouseEventKind::ScrollRight => {}
        }

        out
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/runtime.rs"]
mod tests;
