/// How identifiers are quoted in the rendered SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    /// Identifiers are emitted as-is
    None,

    /// `"name"` (PostgreSQL, SQLite)
    Double,

    /// `` `name` `` (MySQL)
    Backtick,
}

impl Quote {
    pub(crate) fn push(self, dst: &mut String, name: &str) {
        let quote = match self {
            Quote::None => {
                dst.push_str(name);
                return;
            }
            Quote::Double => '"',
            Quote::Backtick => '`',
        };

        dst.push(quote);
        for ch in name.chars() {
            if ch == quote {
                dst.push(quote);
            }
            dst.push(ch);
        }
        dst.push(quote);
    }

    pub fn quote(self, name: &str) -> String {
        let mut ret = String::with_capacity(name.len() + 2);
        self.push(&mut ret, name);
        ret
    }
}
