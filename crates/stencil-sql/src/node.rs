//! The template IR.
//!
//! A compiled statement is a sequence of [`Node`]s. Most nodes are final SQL
//! text; the templating nodes ([`PlaceholderNode`], [`VariantNode`],
//! [`CycleNode`] and [`CycleItemNode`]) mark the fragments that can only be
//! rendered once a bind configuration is known.
//!
//! Nodes are never mutated after compression. A compressed template is shared
//! between threads and rendered concurrently.

mod container;
pub use container::ContainerNode;

mod cycle;
pub use cycle::{CycleItemNode, CycleNode};

mod delimiter;
pub use delimiter::{DelimiterKind, DelimiterNode};

mod placeholder;
pub use placeholder::{PlaceholderId, PlaceholderNode};

mod text;
pub use text::TextNode;

mod variant;
pub use variant::VariantNode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal SQL text
    Text(TextNode),

    /// A separator that may end the line when pretty printing
    Delimiter(DelimiterNode),

    /// Groups children, optionally indenting them
    Container(ContainerNode),

    /// A single value resolved at bind time
    Placeholder(PlaceholderNode),

    /// One of two fragments, picked at bind time
    Variant(VariantNode),

    /// A fragment repeated once per bound row
    Cycle(CycleNode),

    /// A column of the current cycle row
    CycleItem(CycleItemNode),
}

impl Node {
    /// Returns `true` for nodes that cannot be rendered without a bind
    /// configuration.
    pub fn is_templating(&self) -> bool {
        matches!(
            self,
            Node::Placeholder(_) | Node::Variant(_) | Node::Cycle(_) | Node::CycleItem(_)
        )
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(node) => Some(&node.text),
            _ => None,
        }
    }

    /// Counts this node and every node nested inside it.
    pub fn count(&self) -> usize {
        1 + match self {
            Node::Container(node) => count(&node.children),
            Node::Variant(node) => count(&node.main) + count(&node.alternative),
            Node::Cycle(node) => count(&node.body) + count(&node.empty),
            _ => 0,
        }
    }
}

/// Counts `nodes` and everything nested inside them.
pub fn count(nodes: &[Node]) -> usize {
    nodes.iter().map(Node::count).sum()
}
