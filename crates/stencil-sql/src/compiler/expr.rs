use super::{Comma, Formatter, Ident, ToSql};

use crate::node::{CycleItemNode, CycleNode, Node, PlaceholderId, VariantNode};

use stencil_core::{
    stmt::{self, CollectionMatch},
    Error, Result,
};

/// An operand of a binary or logical operator, parenthesized when it would
/// otherwise bind to the wrong operator.
struct Operand<'a>(&'a stmt::Expr);

impl ToSql for Operand<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        if is_compound(self.0) {
            fmt!(f, "(", self.0, ")");
        } else {
            fmt!(f, self.0);
        }

        Ok(())
    }
}

/// Operators binding looser than comparison. A variant counts when either
/// branch does, since the branch is only picked at bind time.
fn is_compound(expr: &stmt::Expr) -> bool {
    match expr {
        stmt::Expr::And(_) | stmt::Expr::BinaryOp(_) => true,
        stmt::Expr::Variant(variant) => {
            is_compound(&variant.main) || is_compound(&variant.alternative)
        }
        expr => expr.is_disjunction(),
    }
}

fn needs_parens_in_and(expr: &stmt::Expr) -> bool {
    match expr {
        stmt::Expr::And(_) => true,
        stmt::Expr::Variant(variant) => {
            needs_parens_in_and(&variant.main) || needs_parens_in_and(&variant.alternative)
        }
        expr => expr.is_disjunction(),
    }
}

impl ToSql for &stmt::Expr {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        use stmt::Expr::*;

        match self {
            And(expr) if expr.operands.is_empty() => fmt!(f, "1 = 1"),
            And(expr) => {
                for (i, operand) in expr.operands.iter().enumerate() {
                    if i > 0 {
                        fmt!(f, "AND");
                    }

                    if needs_parens_in_and(operand) {
                        fmt!(f, "(", operand, ")");
                    } else {
                        fmt!(f, operand);
                    }
                }
            }
            BinaryOp(expr) if expr.rhs.is_value_null() && expr.op == stmt::BinaryOp::Eq => {
                fmt!(f, Operand(&expr.lhs), "IS NULL")
            }
            BinaryOp(expr) if expr.rhs.is_value_null() && expr.op == stmt::BinaryOp::Ne => {
                fmt!(f, Operand(&expr.lhs), "IS NOT NULL")
            }
            BinaryOp(expr) => {
                fmt!(f, Operand(&expr.lhs), expr.op.as_sql(), Operand(&expr.rhs))
            }
            Column(expr) => column(f, expr)?,
            Exists(expr) => {
                fmt!(f, if expr.negated { "NOT EXISTS (" } else { "EXISTS (" });
                f.sub_statement(|f| expr.subquery.to_sql(f))?;
                fmt!(f, ")");
            }
            Func(stmt::ExprFunc::Count(count)) => count_to_sql(f, count)?,
            Func(stmt::ExprFunc::Call(call)) => {
                fmt!(f, format!("{}(", call.name), Comma(&call.args), ")")
            }
            InCollection(expr) => in_collection(f, expr)?,
            InList(expr) if expr.list.is_empty() => fmt!(f, "1 = 0"),
            InList(expr) => fmt!(f, Operand(&expr.expr), "IN (", Comma(&expr.list), ")"),
            InSubquery(expr) => {
                fmt!(f, Operand(&expr.expr), "IN (");
                f.sub_statement(|f| expr.query.to_sql(f))?;
                fmt!(f, ")");
            }
            IsNull(expr) => {
                let op = if expr.negate { "IS NOT NULL" } else { "IS NULL" };
                fmt!(f, Operand(&expr.expr), op)
            }
            Like(expr) => {
                let op = if expr.negate { "NOT LIKE" } else { "LIKE" };
                fmt!(f, Operand(&expr.expr), op, Operand(&expr.pattern))
            }
            Not(expr) => fmt!(f, "NOT (", &*expr.expr, ")"),
            Or(expr) if expr.operands.is_empty() => fmt!(f, "1 = 0"),
            Or(expr) => {
                for (i, operand) in expr.operands.iter().enumerate() {
                    if i > 0 {
                        fmt!(f, "OR");
                    }
                    fmt!(f, operand);
                }
            }
            Param(param) => {
                let name = f.cx.parameter_name(param).into();
                f.push(Node::placeholder(PlaceholderId::Param {
                    param: param.clone(),
                    name,
                }));
            }
            Placeholder(key) => f.push(Node::placeholder(PlaceholderId::Value(key.clone()))),
            Record(expr) => fmt!(f, "(", Comma(&expr.fields), ")"),
            Stmt(expr) => {
                fmt!(f, "(");
                f.sub_statement(|f| expr.query.to_sql(f))?;
                fmt!(f, ")");
            }
            TypeId(ty) => f.push(Node::placeholder(PlaceholderId::TypeId(ty.clone()))),
            Value(value) => fmt!(f, value),
            Variant(expr) => {
                let main = f.fragment(|f| expr.main.to_sql(f))?;
                let alternative = f.fragment(|f| expr.alternative.to_sql(f))?;
                f.push(VariantNode {
                    id: expr.id.clone(),
                    main,
                    alternative,
                });
            }
        }

        Ok(())
    }
}

fn column(f: &mut Formatter<'_>, expr: &stmt::ExprColumn) -> Result<()> {
    if f.bare.as_ref() == Some(&expr.table) {
        fmt!(f, Ident(&expr.column));
        return Ok(());
    }

    let Some(alias) = f.cx.lookup_alias(&expr.table) else {
        return Err(Error::invalid_statement(format!(
            "column `{}` references a table that is not in scope",
            expr.column
        )));
    };

    let quote = f.quote();
    let text = format!("{}.{}", quote.quote(alias), quote.quote(&expr.column));
    fmt!(f, text);
    Ok(())
}

fn count_to_sql(f: &mut Formatter<'_>, count: &stmt::FuncCount) -> Result<()> {
    if count.distinct && count.arg.is_none() {
        return Err(Error::invalid_statement("COUNT(DISTINCT *) is not valid"));
    }

    let native_filter = f.capability().count_filter;

    fmt!(f, "COUNT(");
    if count.distinct {
        fmt!(f, "DISTINCT");
    }

    match &count.filter {
        // Rows failing the filter produce NULL, which COUNT skips
        Some(filter) if !native_filter => {
            fmt!(f, "CASE WHEN", &**filter, "THEN");
            match &count.arg {
                Some(arg) => fmt!(f, &**arg),
                None => fmt!(f, "1"),
            }
            fmt!(f, "END");
        }
        _ => match &count.arg {
            Some(arg) => fmt!(f, &**arg),
            None => fmt!(f, "*"),
        },
    }

    fmt!(f, ")");

    if let Some(filter) = &count.filter {
        if native_filter {
            fmt!(f, "FILTER (WHERE", &**filter, ")");
        }
    }

    Ok(())
}

fn in_collection(f: &mut Formatter<'_>, expr: &stmt::ExprInCollection) -> Result<()> {
    match expr.style {
        CollectionMatch::List => {
            let [lhs] = &expr.exprs[..] else {
                return Err(Error::invalid_statement(format!(
                    "`IN` over collection `{}` takes exactly one expression, got {}",
                    expr.collection,
                    expr.exprs.len()
                )));
            };

            // `IN (NULL)` is unknown rather than false, so an empty
            // collection matches against an empty subquery instead
            let empty = f.fragment(|f| {
                fmt!(f, "SELECT NULL");
                if f.capability().select_without_from_needs_dual {
                    fmt!(f, "FROM DUAL");
                }
                fmt!(f, "WHERE 1 = 0");
                Ok(())
            })?;

            fmt!(f, Operand(lhs), "IN (");
            f.push(CycleNode {
                id: expr.collection.clone(),
                body: vec![CycleItemNode { index: 0 }.into()],
                empty,
                delimiter: ", ".into(),
            });
            fmt!(f, ")");
        }
        CollectionMatch::Disjunction => {
            if expr.exprs.is_empty() {
                return Err(Error::invalid_statement(format!(
                    "collection `{}` is matched against no expressions",
                    expr.collection
                )));
            }

            let body = f.fragment(|f| {
                for (index, lhs) in expr.exprs.iter().enumerate() {
                    if index > 0 {
                        fmt!(f, "AND");
                    }
                    fmt!(f, Operand(lhs), "=", Node::from(CycleItemNode { index }));
                }
                Ok(())
            })?;

            f.push(CycleNode {
                id: expr.collection.clone(),
                body,
                empty: vec![Node::text("1 = 0")],
                delimiter: " OR ".into(),
            });
        }
    }

    Ok(())
}
