use super::{Expr, Key};

/// Tests expressions against the rows of a collection bound at execution
/// time. An empty collection matches nothing.
#[derive(Debug, Clone)]
pub struct ExprInCollection {
    pub exprs: Vec<Expr>,
    pub collection: Key,
    pub style: CollectionMatch,
}

/// How a collection test is spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionMatch {
    /// `x IN (v1, v2, ...)`. Only valid for a single expression.
    List,

    /// `x = v1 OR x = v2 ...`, with one conjunction of equalities per row
    /// when several expressions are matched.
    Disjunction,
}

impl Expr {
    pub fn in_collection(expr: impl Into<Expr>, collection: impl Into<Key>) -> Self {
        ExprInCollection {
            exprs: vec![expr.into()],
            collection: collection.into(),
            style: CollectionMatch::List,
        }
        .into()
    }

    pub fn matches_any(exprs: Vec<Expr>, collection: impl Into<Key>) -> Self {
        ExprInCollection {
            exprs,
            collection: collection.into(),
            style: CollectionMatch::Disjunction,
        }
        .into()
    }
}

impl From<ExprInCollection> for Expr {
    fn from(value: ExprInCollection) -> Self {
        Self::InCollection(value)
    }
}
