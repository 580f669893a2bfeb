use super::Node;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterNode {
    pub text: Box<str>,
    pub kind: DelimiterKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterKind {
    /// Between projected columns; ends the line when pretty printing
    Column,

    /// Between rows or clauses; ends the line when pretty printing
    Row,

    /// Any other separator
    Other,
}

impl DelimiterKind {
    pub fn breaks_line(self) -> bool {
        matches!(self, DelimiterKind::Column | DelimiterKind::Row)
    }
}

impl Node {
    pub fn delimiter(text: impl Into<Box<str>>, kind: DelimiterKind) -> Node {
        DelimiterNode {
            text: text.into(),
            kind,
        }
        .into()
    }
}

impl From<DelimiterNode> for Node {
    fn from(value: DelimiterNode) -> Self {
        Node::Delimiter(value)
    }
}
