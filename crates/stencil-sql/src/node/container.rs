use super::Node;

/// A scope around child nodes. Only exists before compression; the compressor
/// replaces it by the indentation and line breaks it contributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerNode {
    pub children: Vec<Node>,
    pub requires_indent: bool,
}

impl From<ContainerNode> for Node {
    fn from(value: ContainerNode) -> Self {
        Node::Container(value)
    }
}
