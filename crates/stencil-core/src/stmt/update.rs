use super::{Expr, SelectItem, TableRef};

#[derive(Debug, Clone)]
pub struct Update {
    /// The table being updated
    pub target: TableRef,

    pub assignments: Vec<Assignment>,

    /// Only rows matching this filter are updated
    pub filter: Option<Expr>,

    /// Optionally return data from the update
    pub returning: Vec<SelectItem>,
}

#[derive(Debug, Clone)]
pub struct Assignment {
    pub column: String,
    pub expr: Expr,
}

impl Update {
    pub fn new(target: &TableRef) -> Self {
        Update {
            target: target.clone(),
            assignments: vec![],
            filter: None,
            returning: vec![],
        }
    }

    pub fn set(mut self, column: impl Into<String>, expr: impl Into<Expr>) -> Self {
        self.assignments.push(Assignment {
            column: column.into(),
            expr: expr.into(),
        });
        self
    }

    pub fn filter(mut self, filter: impl Into<Expr>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn returning(mut self, expr: impl Into<Expr>) -> Self {
        self.returning.push(SelectItem::from(expr.into()));
        self
    }
}
