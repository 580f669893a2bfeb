use super::{Expr, SelectItem, TableRef};

#[derive(Debug, Clone)]
pub struct Delete {
    /// Source of data to delete from
    pub from: TableRef,

    /// WHERE
    pub filter: Option<Expr>,

    /// Optionally return data from the deletion
    pub returning: Vec<SelectItem>,
}

impl Delete {
    pub fn new(from: &TableRef) -> Self {
        Delete {
            from: from.clone(),
            filter: None,
            returning: vec![],
        }
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
