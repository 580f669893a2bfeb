use super::{Expr, Key, Query, Table};

use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Insert {
    /// Where to insert the values
    pub table: Arc<Table>,

    pub columns: Vec<String>,

    /// Source of values to insert
    pub source: InsertSource,

    /// Columns of the inserted rows to return
    pub returning: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum InsertSource {
    /// Rows known when the statement is built
    Values(Vec<Vec<Expr>>),

    /// Rows produced by a query
    Query(Box<Query>),

    /// Rows bound at execution time, one row per collection item
    Collection(Key),
}

impl Insert {
    pub fn new(table: &Arc<Table>, columns: Vec<&str>, source: InsertSource) -> Self {
        Insert {
            table: table.clone(),
            columns: columns.into_iter().map(str::to_string).collect(),
            source,
            returning: vec![],
        }
    }

    pub fn returning(mut self, column: impl Into<String>) -> Self {
        self.returning.push(column.into());
        self
    }
}
