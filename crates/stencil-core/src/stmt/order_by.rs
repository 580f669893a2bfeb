use super::{Direction, Expr};

#[derive(Debug, Clone)]
pub struct OrderByExpr {
    pub expr: Expr,
    pub direction: Option<Direction>,
}
