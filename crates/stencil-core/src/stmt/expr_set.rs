use super::{Query, Select};

#[derive(Debug, Clone)]
pub enum ExprSet {
    /// A select query, possibly with a filter.
    Select(Box<Select>),

    /// A set operation (union, intersection, ...) on two queries
    SetOp(ExprSetOp),
}

#[derive(Debug, Clone)]
pub struct ExprSetOp {
    pub op: SetOp,
    pub operands: Vec<Query>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOp {
    Union,
    UnionAll,
    Intersect,
    Except,
}

impl SetOp {
    pub fn as_sql(self) -> &'static str {
        match self {
            SetOp::Union => "UNION",
            SetOp::UnionAll => "UNION ALL",
            SetOp::Intersect => "INTERSECT",
            SetOp::Except => "EXCEPT",
        }
    }
}

impl ExprSet {
    pub fn union_all(operands: Vec<Query>) -> Self {
        ExprSet::SetOp(ExprSetOp {
            op: SetOp::UnionAll,
            operands,
        })
    }

    pub fn as_select(&self) -> Option<&Select> {
        match self {
            Self::Select(select) => Some(select),
            Self::SetOp(_) => None,
        }
    }
}

impl From<Select> for ExprSet {
    fn from(value: Select) -> Self {
        ExprSet::Select(Box::new(value))
    }
}

impl From<ExprSetOp> for ExprSet {
    fn from(value: ExprSetOp) -> Self {
        ExprSet::SetOp(value)
    }
}
