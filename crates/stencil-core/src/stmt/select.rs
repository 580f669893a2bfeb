use super::{Expr, Hint, Join, JoinKind, TableRef, TableWithJoins};

#[derive(Debug, Clone)]
pub struct Select {
    /// `SELECT DISTINCT`
    pub distinct: bool,

    /// The projection part of a SQL query.
    pub returning: Vec<SelectItem>,

    /// The `FROM` part of a SQL query. Empty for table-less selects.
    pub from: Vec<TableWithJoins>,

    /// Query filter
    pub filter: Option<Expr>,

    pub group_by: Vec<Expr>,

    pub having: Option<Expr>,

    /// Index hints for tables in `from`
    pub hints: Vec<Hint>,
}

/// One projected expression, optionally named.
#[derive(Debug, Clone)]
pub struct SelectItem {
    pub expr: Expr,
    pub alias: Option<String>,
}

impl Select {
    pub fn new(from: &TableRef) -> Self {
        Self {
            distinct: false,
            returning: vec![],
            from: vec![TableWithJoins::new(from)],
            filter: None,
            group_by: vec![],
            having: None,
            hints: vec![],
        }
    }

    /// A select without a `FROM` clause.
    pub fn values(returning: Vec<Expr>) -> Self {
        Self {
            distinct: false,
            returning: returning.into_iter().map(SelectItem::from).collect(),
            from: vec![],
            filter: None,
            group_by: vec![],
            having: None,
            hints: vec![],
        }
    }

    pub fn column(mut self, expr: impl Into<Expr>) -> Self {
        self.returning.push(SelectItem::from(expr.into()));
        self
    }

    pub fn column_as(mut self, expr: impl Into<Expr>, alias: impl Into<String>) -> Self {
        self.returning.push(SelectItem {
            expr: expr.into(),
            alias: Some(alias.into()),
        });
        self
    }

    /// Adds a filter, AND-ing it with any existing one.
    pub fn filter(mut self, filter: impl Into<Expr>) -> Self {
        self.filter = Some(match self.filter.take() {
            Some(existing) => Expr::and(existing, filter),
            None => filter.into(),
        });
        self
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Adds a join to the last table in the `FROM` clause.
    pub fn join(mut self, kind: JoinKind, table: &TableRef, on: Option<Expr>) -> Self {
        if let Some(last) = self.from.last_mut() {
            last.joins.push(Join {
                kind,
                table: table.clone(),
                on,
            });
        } else {
            self.from.push(TableWithJoins::new(table));
        }
        self
    }

    pub fn group_by(mut self, expr: impl Into<Expr>) -> Self {
        self.group_by.push(expr.into());
        self
    }

    pub fn having(mut self, expr: impl Into<Expr>) -> Self {
        self.having = Some(expr.into());
        self
    }

    pub fn hint(mut self, hint: Hint) -> Self {
        self.hints.push(hint);
        self
    }
}

impl From<Expr> for SelectItem {
    fn from(expr: Expr) -> Self {
        SelectItem { expr, alias: None }
    }
}
