use super::Expr;

#[derive(Debug, Clone)]
pub enum ExprFunc {
    /// `COUNT(..)`, optionally filtered
    Count(FuncCount),

    /// Any other function, rendered as `name(args, ...)`
    Call(FuncCall),
}

#[derive(Debug, Clone)]
pub struct FuncCount {
    /// `None` counts rows (`COUNT(*)`)
    pub arg: Option<Box<Expr>>,

    pub distinct: bool,

    /// Only count rows matching this expression
    pub filter: Option<Box<Expr>>,
}

#[derive(Debug, Clone)]
pub struct FuncCall {
    pub name: String,
    pub args: Vec<Expr>,
}

impl Expr {
    pub fn count_star() -> Self {
        ExprFunc::Count(FuncCount {
            arg: None,
            distinct: false,
            filter: None,
        })
        .into()
    }

    pub fn count_filtered(filter: impl Into<Expr>) -> Self {
        ExprFunc::Count(FuncCount {
            arg: None,
            distinct: false,
            filter: Some(Box::new(filter.into())),
        })
        .into()
    }

    pub fn call(name: impl Into<String>, args: Vec<Expr>) -> Self {
        ExprFunc::Call(FuncCall {
            name: name.into(),
            args,
        })
        .into()
    }
}

impl From<ExprFunc> for Expr {
    fn from(value: ExprFunc) -> Self {
        Self::Func(value)
    }
}
