use super::*;

#[derive(Debug, Clone)]
pub struct Query {
    /// The body of the query. Either `SELECT` or a set operation.
    pub body: ExprSet,

    /// ORDER BY
    pub order_by: Vec<OrderByExpr>,

    /// LIMIT and OFFSET
    pub limit: Option<Limit>,

    /// FOR { UPDATE | SHARE }
    pub lock: Option<Lock>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lock {
    Update,
    Share,
}

impl Query {
    pub fn new(body: impl Into<ExprSet>) -> Self {
        Self {
            body: body.into(),
            order_by: vec![],
            limit: None,
            lock: None,
        }
    }

    pub fn order_by(mut self, expr: impl Into<Expr>, direction: Direction) -> Self {
        self.order_by.push(OrderByExpr {
            expr: expr.into(),
            direction: Some(direction),
        });
        self
    }

    pub fn limit(mut self, limit: impl Into<Expr>) -> Self {
        self.limit = Some(Limit {
            limit: limit.into(),
            offset: None,
        });
        self
    }

    pub fn limit_offset(mut self, limit: impl Into<Expr>, offset: impl Into<Expr>) -> Self {
        self.limit = Some(Limit {
            limit: limit.into(),
            offset: Some(offset.into()),
        });
        self
    }

    pub fn lock(mut self, lock: Lock) -> Self {
        self.lock = Some(lock);
        self
    }
}

impl From<Select> for Query {
    fn from(value: Select) -> Self {
        Query::new(value)
    }
}
