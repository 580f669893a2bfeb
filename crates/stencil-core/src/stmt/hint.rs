use super::{Key, TableRef};

#[derive(Debug, Clone)]
pub enum Hint {
    /// Ask the database to read `table` through the named index.
    Index {
        table: TableRef,
        index: String,

        /// When set, the hint is only rendered if this key is an active
        /// alternative at bind time.
        when: Option<Key>,
    },
}

impl Hint {
    pub fn index(table: &TableRef, index: impl Into<String>) -> Self {
        Hint::Index {
            table: table.clone(),
            index: index.into(),
            when: None,
        }
    }

    pub fn index_when(table: &TableRef, index: impl Into<String>, when: impl Into<Key>) -> Self {
        Hint::Index {
            table: table.clone(),
            index: index.into(),
            when: Some(when.into()),
        }
    }

    pub fn table(&self) -> &TableRef {
        match self {
            Hint::Index { table, .. } => table,
        }
    }
}
