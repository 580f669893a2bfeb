use super::{Expr, Query, SchemaRef};

use by_address::ByAddress;
use std::sync::Arc;

/// A physical table, optionally living in a logical schema.
#[derive(Debug)]
pub struct Table {
    pub name: String,
    pub schema: Option<SchemaRef>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Arc<Table> {
        Arc::new(Table {
            name: name.into(),
            schema: None,
        })
    }

    pub fn in_schema(name: impl Into<String>, schema: &SchemaRef) -> Arc<Table> {
        Arc::new(Table {
            name: name.into(),
            schema: Some(schema.clone()),
        })
    }
}

/// What a table reference reads from.
#[derive(Debug)]
pub enum TableSource {
    Table(Arc<Table>),

    /// A sub-query in the `FROM` clause.
    Derived(Query),
}

#[derive(Debug)]
struct TableRefInner {
    source: TableSource,
    name: Option<String>,
}

/// One occurrence of a table in a statement.
///
/// Every occurrence gets its own alias, so a self-join uses two references
/// to the same [`Table`]. References compare by identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableRef(ByAddress<Arc<TableRefInner>>);

impl TableRef {
    pub fn new(table: &Arc<Table>) -> TableRef {
        TableRef::from_parts(TableSource::Table(table.clone()), None)
    }

    /// A reference carrying an explicit name. The name is used as the alias
    /// unless it is already taken.
    pub fn named(table: &Arc<Table>, name: impl Into<String>) -> TableRef {
        TableRef::from_parts(TableSource::Table(table.clone()), Some(name.into()))
    }

    pub fn derived(query: Query) -> TableRef {
        TableRef::from_parts(TableSource::Derived(query), None)
    }

    fn from_parts(source: TableSource, name: Option<String>) -> TableRef {
        TableRef(ByAddress(Arc::new(TableRefInner { source, name })))
    }

    pub fn source(&self) -> &TableSource {
        &self.0.source
    }

    pub fn table(&self) -> Option<&Arc<Table>> {
        match &self.0.source {
            TableSource::Table(table) => Some(table),
            TableSource::Derived(_) => None,
        }
    }

    /// The explicit name, when it differs from the underlying table's name.
    pub fn explicit_name(&self) -> Option<&str> {
        let name = self.0.name.as_deref()?;
        match self.table() {
            Some(table) if table.name == name => None,
            _ => Some(name),
        }
    }

    /// Returns an expression referencing `column` through this reference.
    pub fn col(&self, column: impl Into<String>) -> Expr {
        Expr::column(self, column)
    }
}
