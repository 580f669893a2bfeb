use super::{Expr, Query};

#[derive(Debug, Clone)]
pub struct ExprExists {
    pub subquery: Box<Query>,
    pub negated: bool,
}

impl Expr {
    pub fn exists(subquery: impl Into<Query>) -> Self {
        ExprExists {
            subquery: Box::new(subquery.into()),
            negated: false,
        }
        .into()
    }

    pub fn not_exists(subquery: impl Into<Query>) -> Self {
        ExprExists {
            subquery: Box::new(subquery.into()),
            negated: true,
        }
        .into()
    }
}

impl From<ExprExists> for Expr {
    fn from(value: ExprExists) -> Self {
        Self::Exists(value)
    }
}
