use super::Formatter;

use crate::node::Node;

use stencil_core::Result;

macro_rules! fmt {
    ($f:expr, $( $fragments:expr ),* $(,)?) => {{
        $(
            $fragments.to_sql($f)?;
        )*
    }};
}

pub(super) trait ToSql {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()>;
}

/// A quoted identifier
pub(super) struct Ident<S>(pub(super) S);

impl ToSql for &str {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        f.push(Node::text(self));
        Ok(())
    }
}

impl ToSql for String {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        f.push(Node::text(self));
        Ok(())
    }
}

impl ToSql for Node {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        f.push(self);
        Ok(())
    }
}

impl<T: ToSql> ToSql for Option<T> {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        match self {
            Some(value) => value.to_sql(f),
            None => Ok(()),
        }
    }
}

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        let text = f.quote().quote(self.0.as_ref());
        f.push(Node::text(text));
        Ok(())
    }
}
