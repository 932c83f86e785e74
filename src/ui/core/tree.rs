use super::geom::{Pos, Rect};
use super::id::Id;
use crate::kernel::ModalName;
use std::ops::{BitOr, BitOrAssign};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Sense(u8);

impl Sense {
    pub const NONE: Self = Self(0);
    pub const HOVER: Self = Self(1 << 0);
    pub const CLICK: Self = Self(1 << 1);

    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl BitOr for Sense {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Sense {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Layers, lowest first. Nodes on a higher layer always win hit-tests.
pub mod layer {
    pub const PAGE: u8 = 0;
    pub const MODAL: u8 = 1;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Unknown,
    OrderRow { index: usize },
    Backdrop { modal: ModalName },
    Dialog { modal: ModalName },
    DialogButton { modal: ModalName, index: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub id: Id,
    pub rect: Rect,
    pub layer: u8,
    pub z: u32,
    pub sense: Sense,
    pub kind: NodeKind,
}

impl Node {
    pub fn contains(&self, p: Pos) -> bool {
        self.rect.contains(p)
    }
}

/// Flat list of interactive regions produced while painting a frame.
#[derive(Clone, Debug, Default)]
pub struct UiTree {
    nodes: Vec<Node>,
}

impl UiTree {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: Id) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn push(&mut self, mut node: Node) {
        // Default z-order: insertion order within the same layer.
        if node.z == 0 {
            node.z = self.nodes.len() as u32;
        }
        self.nodes.push(node);
    }

    /// Topmost node under `p`: highest layer wins, then highest z.
    pub fn hit_test(&self, p: Pos) -> Option<&Node> {
        self.hit_test_where(p, |_| true)
    }

    pub fn hit_test_with_sense(&self, p: Pos, required: Sense) -> Option<&Node> {
        self.hit_test_where(p, |n| n.sense.contains(required))
    }

    fn hit_test_where<F>(&self, p: Pos, mut pred: F) -> Option<&Node>
    where
        F: FnMut(&Node) -> bool,
    {
        self.nodes
            .iter()
            .filter(|n| n.contains(p) && pred(n))
            .max_by(|a, b| (a.layer, a.z).cmp(&(b.layer, b.z)))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/tree.rs"]
mod tests;
