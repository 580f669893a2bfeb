use super::Expr;

#[derive(Debug, Clone)]
pub struct ExprRecord {
    pub fields: Vec<Expr>,
}

impl Expr {
    pub fn record(fields: Vec<Expr>) -> Self {
        ExprRecord { fields }.into()
    }
}

impl From<ExprRecord> for Expr {
    fn from(value: ExprRecord) -> Self {
        Self::Record(value)
    }
}
