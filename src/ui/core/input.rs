use super::geom::Pos;
use super::id::Id;
use crate::core::event::MouseButton;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    HoverChanged {
        from: Option<Id>,
        to: Option<Id>,
        pos: Pos,
    },
    /// Press and release landed on the same topmost node. `target` is that node, not any of
    /// the nodes underneath it.
    Click {
        target: Id,
        button: MouseButton,
        pos: Pos,
    },
    Scroll {
        target: Option<Id>,
        delta: i16,
        pos: Pos,
    },
}
