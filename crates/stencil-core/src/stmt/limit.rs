use super::Expr;

/// `LIMIT` with an optional `OFFSET`
#[derive(Debug, Clone)]
pub struct Limit {
    pub limit: Expr,
    pub offset: Option<Expr>,
}
