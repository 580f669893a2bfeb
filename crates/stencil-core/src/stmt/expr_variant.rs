use super::{Expr, Key};

/// Picks `main` unless `id` is marked as an active alternative when the
/// template is bound, in which case `alternative` is used.
#[derive(Debug, Clone)]
pub struct ExprVariant {
    pub id: Key,
    pub main: Box<Expr>,
    pub alternative: Box<Expr>,
}

impl Expr {
    pub fn variant(
        id: impl Into<Key>,
        main: impl Into<Expr>,
        alternative: impl Into<Expr>,
    ) -> Self {
        ExprVariant {
            id: id.into(),
            main: Box::new(main.into()),
            alternative: Box::new(alternative.into()),
        }
        .into()
    }
}

impl From<ExprVariant> for Expr {
    fn from(value: ExprVariant) -> Self {
        Self::Variant(value)
    }
}
