use super::{Formatter, ToSql};

use crate::node::{DelimiterKind, Node};

use stencil_core::Result;

/// Comma delimited
pub(super) struct Comma<L>(pub(super) L);

/// Comma delimited projection; each column gets its own line when pretty
/// printing
pub(super) struct Columns<L>(pub(super) L);

impl<L> ToSql for Comma<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        delimited(f, self.0, DelimiterKind::Other)
    }
}

impl<L> ToSql for Columns<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        delimited(f, self.0, DelimiterKind::Column)
    }
}

fn delimited<L>(f: &mut Formatter<'_>, items: L, kind: DelimiterKind) -> Result<()>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.push(Node::delimiter(",", kind));
        }
        item.to_sql(f)?;
    }

    Ok(())
}
