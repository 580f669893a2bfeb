use crate::{
    bind::{Bindings, PostCompiler, Sql},
    compress::Compressor,
    node::{self, Node},
    Quote,
};

use stencil_core::{ParamStyle, Result};
use std::sync::Arc;

/// A compiled statement.
///
/// Templates are cheap to clone and immutable; a compressed template is the
/// artifact cached per statement shape and bound once per execution.
#[derive(Debug, Clone)]
pub struct Template {
    nodes: Arc<[Node]>,
    format: Format,
    compressed: bool,

    /// Bytes of literal text, used to size the output buffer when binding
    text_len: usize,
}

/// Rendering settings fixed at compile time and needed again at bind time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Format {
    pub param_style: ParamStyle,
    pub quote: Quote,
    pub pretty: bool,
}

impl Template {
    pub(crate) fn new(nodes: Vec<Node>, format: Format, compressed: bool) -> Template {
        let text_len = text_len(&nodes);

        Template {
            nodes: nodes.into(),
            format,
            compressed,
            text_len,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// Total number of nodes, including nested ones.
    pub fn node_count(&self) -> usize {
        node::count(&self.nodes)
    }

    /// Returns `true` when the template renders the same text for every bind
    /// configuration.
    pub fn is_static(&self) -> bool {
        fn is_static(nodes: &[Node]) -> bool {
            nodes.iter().all(|node| match node {
                Node::Container(container) => is_static(&container.children),
                node => !node.is_templating(),
            })
        }

        is_static(&self.nodes)
    }

    /// Returns the minimal equivalent template. Compressing an already
    /// compressed template returns a clone.
    pub fn compress(&self) -> Template {
        if self.compressed {
            return self.clone();
        }

        Compressor::compress(self)
    }

    /// Renders the SQL text and parameter list for one execution.
    pub fn bind(&self, bindings: &Bindings) -> Result<Sql> {
        PostCompiler::new(self, bindings).finish()
    }

    pub(crate) fn size_hint(&self) -> usize {
        self.text_len
    }
}

fn text_len(nodes: &[Node]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            Node::Text(node) => node.text.len(),
            Node::Delimiter(node) => node.text.len() + 1,
            Node::Container(node) => text_len(&node.children),
            Node::Variant(node) => text_len(&node.main).max(text_len(&node.alternative)),
            Node::Cycle(node) => text_len(&node.body).max(text_len(&node.empty)),
            Node::Placeholder(_) | Node::CycleItem(_) => 4,
        })
        .sum()
}
