use super::Node;

/// Final SQL text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    pub text: Box<str>,
}

impl Node {
    pub fn text(text: impl Into<Box<str>>) -> Node {
        TextNode { text: text.into() }.into()
    }
}

impl From<TextNode> for Node {
    fn from(value: TextNode) -> Self {
        Node::Text(value)
    }
}
