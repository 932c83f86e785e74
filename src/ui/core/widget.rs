use super::geom::{Insets, Rect};
use super::id::Id;
use super::painter::Painter;
use super::tree::{Node, NodeKind, Sense, UiTree};

/// Painting context handed to views: the remaining area plus the frame's painter and tree.
///
/// `layer` and `z` are applied to every node registered through this context so a view does
/// not need to know where it sits in the stack.
pub struct Ui<'a> {
    pub rect: Rect,
    pub painter: &'a mut Painter,
    pub tree: &'a mut UiTree,
    pub layer: u8,
    pub z: u32,
}

impl<'a> Ui<'a> {
    pub fn new(rect: Rect, painter: &'a mut Painter, tree: &'a mut UiTree) -> Self {
        Self {
            rect,
            painter,
            tree,
            layer: 0,
            z: 0,
        }
    }

    pub fn with_rect<R>(&mut self, rect: Rect, f: impl FnOnce(&mut Ui<'_>) -> R) -> R {
        let mut child = Ui {
            rect,
            painter: self.painter,
            tree: self.tree,
            layer: self.layer,
            z: self.z,
        };
        f(&mut child)
    }

    pub fn inset(&mut self, insets: Insets) {
        self.rect = self.rect.inset(insets);
    }

    pub fn take_top(&mut self, h: u16) -> Rect {
        let (top, rest) = self.rect.split_top(h);
        self.rect = rest;
        top
    }

    pub fn take_bottom(&mut self, h: u16) -> Rect {
        let (rest, bottom) = self.rect.split_bottom(h);
        self.rect = rest;
        bottom
    }

    pub fn register(&mut self, id: Id, rect: Rect, sense: Sense, kind: NodeKind) {
        self.tree.push(Node {
            id,
            rect,
            layer: self.layer,
            z: self.z,
            sense,
            kind,
        });
    }
}
