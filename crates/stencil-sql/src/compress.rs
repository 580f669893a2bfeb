//! Reduces a raw template to the node sequence that gets cached.
//!
//! Literal text, delimiters and containers are folded into as few
//! [`TextNode`]s as possible, with spacing and indentation resolved.
//! Templating nodes are kept, and the branches of variants and bodies of
//! cycles are compressed recursively.
//!
//! [`TextNode`]: crate::node::TextNode

use crate::{
    layout::Spacer,
    node::{CycleNode, Node, VariantNode},
    Template,
};

use std::mem;

#[derive(Debug)]
pub struct Compressor {
    spacer: Spacer,

    /// Text accumulated since the last templating node
    buffer: String,

    nodes: Vec<Node>,
}

impl Compressor {
    pub fn compress(template: &Template) -> Template {
        let format = template.format();
        let nodes = Compressor::new(Spacer::new(format.pretty)).run(template.nodes());
        let compressed = Template::new(nodes, format, true);

        log::debug!(
            "compressed template; nodes={} -> {}",
            template.node_count(),
            compressed.node_count()
        );

        compressed
    }

    fn new(spacer: Spacer) -> Compressor {
        Compressor {
            spacer,
            buffer: String::new(),
            nodes: vec![],
        }
    }

    fn run(mut self, nodes: &[Node]) -> Vec<Node> {
        self.visit(nodes);
        self.flush();
        self.nodes
    }

    fn visit(&mut self, nodes: &[Node]) {
        for node in nodes {
            match node {
                Node::Text(node) => self.spacer.text(&mut self.buffer, &node.text),
                Node::Delimiter(node) => {
                    self.spacer
                        .delimiter(&mut self.buffer, &node.text, node.kind)
                }
                Node::Container(node) => {
                    self.spacer.enter(&mut self.buffer, node.requires_indent);
                    self.visit(&node.children);
                    self.spacer.exit(&mut self.buffer, node.requires_indent);
                }
                Node::Placeholder(placeholder) => {
                    self.spacer.before_opaque(&mut self.buffer);
                    self.flush();
                    self.nodes.push(node.clone());
                    self.spacer.after_opaque(placeholder.id.is_prefix());
                }
                Node::CycleItem(_) => {
                    self.spacer.before_opaque(&mut self.buffer);
                    self.flush();
                    self.nodes.push(node.clone());
                    self.spacer.after_opaque(false);
                }
                Node::Variant(variant) => {
                    self.flush();

                    let main = Compressor::new(self.spacer.clone()).run(&variant.main);
                    let alternative =
                        Compressor::new(self.spacer.clone()).run(&variant.alternative);

                    self.nodes.push(
                        VariantNode {
                            id: variant.id.clone(),
                            main,
                            alternative,
                        }
                        .into(),
                    );
                    self.spacer.after_opaque(false);
                }
                Node::Cycle(cycle) => {
                    self.spacer.before_opaque(&mut self.buffer);
                    self.flush();

                    let body = Compressor::new(self.spacer.fresh()).run(&cycle.body);
                    let empty = Compressor::new(self.spacer.fresh()).run(&cycle.empty);

                    self.nodes.push(
                        CycleNode {
                            id: cycle.id.clone(),
                            body,
                            empty,
                            delimiter: cycle.delimiter.clone(),
                        }
                        .into(),
                    );
                    self.spacer.after_opaque(false);
                }
            }
        }
    }

    fn flush(&mut self) {
        if !self.buffer.is_empty() {
            self.nodes.push(Node::text(mem::take(&mut self.buffer)));
        }
    }
}
