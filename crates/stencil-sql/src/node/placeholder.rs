use super::Node;

use stencil_core::stmt::{CatalogRef, Key, ParamRef, SchemaRef, TypeRef};

/// A slot filled with a single value at bind time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderNode {
    pub id: PlaceholderId,
}

/// What a placeholder is resolved against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlaceholderId {
    /// A bound parameter. Renders a parameter marker and collects the value.
    Param { param: ParamRef, name: Box<str> },

    /// Text supplied by the caller, substituted verbatim.
    Value(Key),

    /// The physical name of a logical schema, rendered as `name.` or nothing.
    Schema(SchemaRef),

    /// The physical name of a logical catalog, rendered as `name.` or nothing.
    Catalog(CatalogRef),

    /// The numeric id of a persistent type.
    TypeId(TypeRef),
}

impl PlaceholderId {
    /// Qualification prefixes glue to the name that follows them.
    pub fn is_prefix(&self) -> bool {
        matches!(self, PlaceholderId::Schema(_) | PlaceholderId::Catalog(_))
    }
}

impl Node {
    pub fn placeholder(id: PlaceholderId) -> Node {
        PlaceholderNode { id }.into()
    }
}

impl From<PlaceholderNode> for Node {
    fn from(value: PlaceholderNode) -> Self {
        Node::Placeholder(value)
    }
}
