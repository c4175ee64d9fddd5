//! Hit-test tree rebuilt on every paint.

use super::geom::{Pos, Rect};
use std::ops::{BitOr, BitOrAssign};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Sense(u16);

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

/// What a region of the screen stands for. Task ids are carried raw so this
/// layer stays independent of the kernel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    InputField,
    AddButton,
    TaskRow { index: usize, task_id: u64 },
    TaskToggle { task_id: u64 },
    TaskDelete { task_id: u64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub rect: Rect,
    pub sense: Sense,
    pub kind: NodeKind,
}

impl Node {
    pub fn contains(&self, p: Pos) -> bool {
        self.rect.contains(p)
    }
}

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

    pub fn push(&mut self, node: Node) {
        if node.rect.is_empty() {
            return;
        }
        self.nodes.push(node);
    }

    pub fn find(&self, kind: NodeKind) -> Option<&Node> {
        self.nodes.iter().find(|n| n.kind == kind)
    }

    /// Topmost node under `p` that has every bit of `required`. Nodes pushed
    /// later sit on top of earlier ones.
    pub fn hit_test(&self, p: Pos, required: Sense) -> Option<&Node> {
        self.nodes
            .iter()
            .rev()
            .find(|n| n.sense.contains(required) && n.contains(p))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/tree.rs"]
mod tests;
