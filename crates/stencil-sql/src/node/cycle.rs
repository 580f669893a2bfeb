use super::Node;

use stencil_core::stmt::Key;

/// A fragment rendered once per row bound to `id`, rows joined by
/// `delimiter`. `empty` is rendered instead when no rows are bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleNode {
    pub id: Key,
    pub body: Vec<Node>,
    pub empty: Vec<Node>,
    pub delimiter: Box<str>,
}

/// Inside a cycle body, the `index`-th value of the current row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleItemNode {
    pub index: usize,
}

impl From<CycleNode> for Node {
    fn from(value: CycleNode) -> Self {
        Node::Cycle(value)
    }
}

impl From<CycleItemNode> for Node {
    fn from(value: CycleItemNode) -> Self {
        Node::CycleItem(value)
    }
}
