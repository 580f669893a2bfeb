use super::{Columns, Comma, Formatter, Ident, ToSql};

use crate::node::{CycleItemNode, CycleNode, DelimiterKind, Node, PlaceholderId, VariantNode};

use stencil_core::{
    stmt::{self, JoinKind, TableSource},
    Error, IndexHints, Result,
};

impl ToSql for &stmt::Statement {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        match self {
            stmt::Statement::Query(stmt) => stmt.to_sql(f),
            stmt::Statement::Insert(stmt) => stmt.to_sql(f),
            stmt::Statement::Update(stmt) => stmt.to_sql(f),
            stmt::Statement::Delete(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Query {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        fmt!(f, &self.body);

        if !self.order_by.is_empty() {
            f.clause();
            fmt!(f, "ORDER BY", Comma(&self.order_by));
        }

        if let Some(limit) = &self.limit {
            f.clause();
            fmt!(f, "LIMIT", &limit.limit);

            if let Some(offset) = &limit.offset {
                fmt!(f, "OFFSET", offset);
            }
        }

        if let Some(lock) = self.lock {
            if !f.capability().select_for_update {
                return Err(unsupported(f, "row locking (FOR UPDATE / FOR SHARE)"));
            }

            f.clause();
            fmt!(
                f,
                match lock {
                    stmt::Lock::Update => "FOR UPDATE",
                    stmt::Lock::Share => "FOR SHARE",
                }
            );
        }

        Ok(())
    }
}

impl ToSql for &stmt::ExprSet {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        match self {
            stmt::ExprSet::Select(select) => select.to_sql(f),
            stmt::ExprSet::SetOp(set_op) => set_op.to_sql(f),
        }
    }
}

impl ToSql for &stmt::ExprSetOp {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        if self.operands.len() < 2 {
            return Err(Error::invalid_statement(format!(
                "{} needs at least two operands",
                self.op.as_sql()
            )));
        }

        for (i, operand) in self.operands.iter().enumerate() {
            if !operand.order_by.is_empty() || operand.limit.is_some() || operand.lock.is_some()
            {
                return Err(Error::compilation(format!(
                    "{} operands cannot carry ORDER BY, LIMIT or locking clauses",
                    self.op.as_sql()
                )));
            }

            if i > 0 {
                f.clause();
                fmt!(f, self.op.as_sql());
                f.clause();
            }

            let scope = f.cx.open_naming_scope();
            let ret = operand.body.to_sql(f);
            f.cx.close_naming_scope(scope);
            ret?;
        }

        Ok(())
    }
}

impl ToSql for &stmt::Select {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        if self.returning.is_empty() {
            return Err(Error::invalid_statement("select has an empty projection"));
        }

        // Every table in FROM is named before the projection references it
        for item in &self.from {
            f.cx.table_alias(&item.relation);
            for join in &item.joins {
                f.cx.table_alias(&join.table);
            }
        }

        for hint in &self.hints {
            let in_from = self.from.iter().any(|item| {
                item.relation == *hint.table()
                    || item.joins.iter().any(|join| join.table == *hint.table())
            });

            if !in_from {
                return Err(Error::invalid_statement(
                    "index hint references a table outside the FROM clause",
                ));
            }
        }

        fmt!(f, "SELECT");
        if self.distinct {
            fmt!(f, "DISTINCT");
        }

        f.container(true, |f| {
            fmt!(f, Columns(&self.returning));
            Ok(())
        })?;

        if !self.from.is_empty() {
            f.clause();
            fmt!(f, "FROM");

            for (i, item) in self.from.iter().enumerate() {
                if i > 0 {
                    f.push(Node::delimiter(",", DelimiterKind::Other));
                }
                table_with_joins(f, item, &self.hints)?;
            }
        } else if self.filter.is_some() && f.capability().select_without_from_needs_dual {
            f.clause();
            fmt!(f, "FROM DUAL");
        }

        if let Some(filter) = &self.filter {
            f.clause();
            fmt!(f, "WHERE", filter);
        }

        if !self.group_by.is_empty() {
            f.clause();
            fmt!(f, "GROUP BY", Comma(&self.group_by));
        }

        if let Some(having) = &self.having {
            f.clause();
            fmt!(f, "HAVING", having);
        }

        Ok(())
    }
}

impl ToSql for &stmt::SelectItem {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        fmt!(f, &self.expr);

        if let Some(alias) = &self.alias {
            fmt!(f, "AS", Ident(alias));
        }

        Ok(())
    }
}

impl ToSql for &stmt::OrderByExpr {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        fmt!(f, &self.expr);

        match self.direction {
            Some(stmt::Direction::Asc) => fmt!(f, "ASC"),
            Some(stmt::Direction::Desc) => fmt!(f, "DESC"),
            None => {}
        }

        Ok(())
    }
}

fn table_with_joins(
    f: &mut Formatter<'_>,
    item: &stmt::TableWithJoins,
    hints: &[stmt::Hint],
) -> Result<()> {
    table_factor(f, &item.relation, hints)?;

    for join in &item.joins {
        match join.kind {
            JoinKind::Right if !f.capability().right_join => {
                return Err(unsupported(f, "RIGHT JOIN"));
            }
            JoinKind::Full if !f.capability().full_outer_join => {
                return Err(unsupported(f, "FULL OUTER JOIN"));
            }
            _ => {}
        }

        match (join.kind, &join.on) {
            (JoinKind::Cross, Some(_)) => {
                return Err(Error::invalid_statement(
                    "CROSS JOIN cannot have a join constraint",
                ));
            }
            (kind, None) if kind != JoinKind::Cross => {
                return Err(Error::invalid_statement(format!(
                    "{} requires a join constraint",
                    kind.as_sql()
                )));
            }
            _ => {}
        }

        f.clause();
        fmt!(f, join.kind.as_sql());
        table_factor(f, &join.table, hints)?;

        if let Some(on) = &join.on {
            fmt!(f, "ON", on);
        }
    }

    Ok(())
}

/// A table reference followed by its alias and index hints.
fn table_factor(f: &mut Formatter<'_>, table_ref: &stmt::TableRef, hints: &[stmt::Hint]) -> Result<()> {
    match table_ref.source() {
        TableSource::Table(table) => {
            qualified_name(f, table)?;

            let alias = f.cx.table_alias(table_ref).to_string();
            if alias != table.name {
                fmt!(f, Ident(alias));
            }
        }
        TableSource::Derived(query) => {
            let alias = f.cx.table_alias(table_ref).to_string();

            fmt!(f, "(");
            f.sub_statement(|f| query.to_sql(f))?;
            fmt!(f, ")", Ident(alias));
        }
    }

    for hint in hints.iter().filter(|hint| hint.table() == table_ref) {
        index_hint(f, hint)?;
    }

    Ok(())
}

/// The table name, qualified by schema and catalog placeholders.
fn qualified_name(f: &mut Formatter<'_>, table: &stmt::Table) -> Result<()> {
    let capability = f.capability();

    if let Some(schema) = &table.schema {
        if capability.schemas {
            if let Some(catalog) = schema.catalog.as_ref().filter(|_| capability.catalogs) {
                f.push(Node::placeholder(PlaceholderId::Catalog(catalog.clone())));
            }

            f.push(Node::placeholder(PlaceholderId::Schema(schema.clone())));
        }
    }

    fmt!(f, Ident(&table.name));
    Ok(())
}

fn index_hint(f: &mut Formatter<'_>, hint: &stmt::Hint) -> Result<()> {
    let stmt::Hint::Index { table, index, when } = hint;

    if table.table().is_none() {
        return Err(Error::invalid_statement(
            "index hints only apply to base tables",
        ));
    }

    let nodes = f.fragment(|f| {
        match f.capability().index_hints {
            IndexHints::None => return Err(unsupported(f, "index hint syntax")),
            IndexHints::UseIndex => fmt!(f, "USE INDEX (", Ident(index), ")"),
            IndexHints::IndexedBy => fmt!(f, "INDEXED BY", Ident(index)),
        }
        Ok(())
    })?;

    match when {
        Some(id) => f.push(VariantNode {
            id: id.clone(),
            main: vec![],
            alternative: nodes,
        }),
        None => f.dst.extend(nodes),
    }

    Ok(())
}

impl ToSql for &stmt::Insert {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        let width = self.columns.len();

        if width == 0 {
            return Err(Error::invalid_statement("insert has no columns"));
        }

        fmt!(f, "INSERT INTO");
        qualified_name(f, &self.table)?;
        fmt!(f, "(", Comma(self.columns.iter().map(Ident)), ")");

        match &self.source {
            stmt::InsertSource::Values(rows) => {
                if rows.is_empty() {
                    return Err(Error::invalid_statement("insert has no rows"));
                }

                if let Some(row) = rows.iter().find(|row| row.len() != width) {
                    return Err(Error::invalid_statement(format!(
                        "insert row has {} values for {} columns",
                        row.len(),
                        width
                    )));
                }

                f.clause();
                fmt!(f, "VALUES");

                for (i, row) in rows.iter().enumerate() {
                    if i > 0 {
                        f.push(Node::delimiter(",", DelimiterKind::Row));
                    }
                    fmt!(f, "(", Comma(row), ")");
                }
            }
            stmt::InsertSource::Query(query) => {
                f.clause();
                f.sub_statement(|f| query.to_sql(f))?;
            }
            stmt::InsertSource::Collection(id) => {
                let body = f.fragment(|f| {
                    let items = (0..width).map(|index| Node::from(CycleItemNode { index }));
                    fmt!(f, "SELECT", Comma(items));
                    Ok(())
                })?;

                let empty = f.fragment(|f| {
                    fmt!(f, "SELECT", Comma((0..width).map(|_| "NULL")));
                    if f.capability().select_without_from_needs_dual {
                        fmt!(f, "FROM DUAL");
                    }
                    fmt!(f, "WHERE 1 = 0");
                    Ok(())
                })?;

                f.clause();
                f.push(CycleNode {
                    id: id.clone(),
                    body,
                    empty,
                    delimiter: " UNION ALL ".into(),
                });
            }
        }

        if !self.returning.is_empty() {
            if !f.capability().returning {
                return Err(unsupported(f, "RETURNING"));
            }

            f.clause();
            fmt!(f, "RETURNING", Comma(self.returning.iter().map(Ident)));
        }

        Ok(())
    }
}

impl ToSql for &stmt::Update {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        if self.assignments.is_empty() {
            return Err(Error::invalid_statement("update has no assignments"));
        }

        dml_scope(f, &self.target, |f| {
            fmt!(f, "UPDATE");
            table_factor(f, &self.target, &[])?;
            f.clause();
            fmt!(f, "SET", Comma(&self.assignments));

            if let Some(filter) = &self.filter {
                f.clause();
                fmt!(f, "WHERE", filter);
            }

            returning(f, &self.returning)
        })
    }
}

impl ToSql for &stmt::Assignment {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        fmt!(f, Ident(&self.column), "=", &self.expr);
        Ok(())
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        dml_scope(f, &self.from, |f| {
            fmt!(f, "DELETE FROM");
            table_factor(f, &self.from, &[])?;

            if let Some(filter) = &self.filter {
                f.clause();
                fmt!(f, "WHERE", filter);
            }

            returning(f, &self.returning)
        })
    }
}

/// UPDATE and DELETE name their target table directly. Nested statements
/// get their own scope and alias as usual.
fn dml_scope(
    f: &mut Formatter<'_>,
    target: &stmt::TableRef,
    body: impl FnOnce(&mut Formatter<'_>) -> Result<()>,
) -> Result<()> {
    if target.table().is_none() {
        return Err(Error::invalid_statement(
            "the target of UPDATE or DELETE must be a table",
        ));
    }

    let scope = f.cx.open_naming_scope();
    f.cx.set_table_aliasing(false);
    f.cx.table_alias(target);
    let bare = f.bare.replace(target.clone());

    let ret = body(f);

    f.bare = bare;
    f.cx.close_naming_scope(scope);
    ret
}

fn returning(f: &mut Formatter<'_>, items: &[stmt::SelectItem]) -> Result<()> {
    if items.is_empty() {
        return Ok(());
    }

    if !f.capability().returning {
        return Err(unsupported(f, "RETURNING"));
    }

    f.clause();
    fmt!(f, "RETURNING", Comma(items));
    Ok(())
}

fn unsupported(f: &Formatter<'_>, feature: &str) -> Error {
    Error::compilation(format!(
        "{feature} is not supported by {}",
        f.flavor().name()
    ))
}
