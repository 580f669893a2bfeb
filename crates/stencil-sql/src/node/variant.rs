use super::Node;

use stencil_core::stmt::Key;

/// An exclusive choice between two pre-compiled fragments. `alternative` is
/// rendered when `id` is an active alternative at bind time, `main`
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantNode {
    pub id: Key,
    pub main: Vec<Node>,
    pub alternative: Vec<Node>,
}

impl From<VariantNode> for Node {
    fn from(value: VariantNode) -> Self {
        Node::Variant(value)
    }
}
