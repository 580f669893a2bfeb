use super::{Expr, Query};

/// A scalar sub-query.
#[derive(Debug, Clone)]
pub struct ExprStmt {
    pub query: Box<Query>,
}

impl Expr {
    pub fn stmt(query: impl Into<Query>) -> Self {
        ExprStmt {
            query: Box::new(query.into()),
        }
        .into()
    }
}

impl From<ExprStmt> for Expr {
    fn from(value: ExprStmt) -> Self {
        Self::Stmt(value)
    }
}
