use super::{Expr, TableRef};

/// A column read through a table reference. Renders as `alias.column`.
#[derive(Debug, Clone)]
pub struct ExprColumn {
    pub table: TableRef,
    pub column: String,
}

impl Expr {
    pub fn column(table: &TableRef, column: impl Into<String>) -> Self {
        ExprColumn {
            table: table.clone(),
            column: column.into(),
        }
        .into()
    }
}

impl From<ExprColumn> for Expr {
    fn from(value: ExprColumn) -> Self {
        Self::Column(value)
    }
}
