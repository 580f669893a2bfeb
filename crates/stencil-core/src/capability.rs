/// What a SQL dialect can express.
///
/// The compiler consults these flags when it renders a statement. A statement
/// that needs something the dialect lacks fails with a compilation error
/// instead of producing SQL the database would reject.
#[derive(Debug, Clone)]
pub struct Capability {
    /// Supports `RETURNING` on INSERT, UPDATE and DELETE.
    pub returning: bool,

    /// Supports row-level locking (`FOR UPDATE` / `FOR SHARE`).
    pub select_for_update: bool,

    /// Supports `FULL OUTER JOIN`.
    pub full_outer_join: bool,

    /// Supports `RIGHT JOIN`.
    pub right_join: bool,

    /// How index hints are spelled, if at all.
    pub index_hints: IndexHints,

    /// Tables can be qualified by a schema name.
    pub schemas: bool,

    /// Schemas can be qualified by a catalog (database) name.
    pub catalogs: bool,

    /// Supports `COUNT(*) FILTER (WHERE ...)`.
    pub count_filter: bool,

    /// Has boolean literals (`TRUE` / `FALSE`) instead of `1` / `0`.
    pub native_bool: bool,

    /// A `SELECT` with a `WHERE` clause but no table needs `FROM DUAL`.
    pub select_without_from_needs_dual: bool,

    /// The default parameter marker style.
    pub param_style: ParamStyle,
}

/// Index hint syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexHints {
    /// The dialect has no index hints.
    None,

    /// MySQL: `t USE INDEX (ix)`
    UseIndex,

    /// SQLite: `t INDEXED BY ix`
    IndexedBy,
}

/// How bound parameters appear in the SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamStyle {
    /// `?` for every occurrence; each occurrence binds a value.
    Positional,

    /// `$1`, `$2`, ... The same parameter reuses its ordinal.
    Dollar,

    /// `?1`, `?2`, ... The same parameter reuses its ordinal.
    QuestionNumbered,

    /// `:p0`, `:p1`, ... using the allocated parameter name.
    Named,
}

impl ParamStyle {
    /// Returns `true` when repeated references to one parameter share a
    /// single bound value.
    pub fn dedupes(self) -> bool {
        !matches!(self, ParamStyle::Positional)
    }
}

impl Capability {
    /// SQLite capabilities.
    pub const SQLITE: Self = Self {
        returning: true,
        select_for_update: false,
        full_outer_join: true,
        right_join: true,
        index_hints: IndexHints::IndexedBy,
        schemas: true,
        catalogs: false,
        count_filter: true,
        native_bool: false,
        select_without_from_needs_dual: false,
        param_style: ParamStyle::QuestionNumbered,
    };

    /// PostgreSQL capabilities
    pub const POSTGRESQL: Self = Self {
        select_for_update: true,
        index_hints: IndexHints::None,
        native_bool: true,
        param_style: ParamStyle::Dollar,
        ..Self::SQLITE
    };

    /// MySQL capabilities
    pub const MYSQL: Self = Self {
        returning: false,
        select_for_update: true,
        full_outer_join: false,
        index_hints: IndexHints::UseIndex,
        catalogs: false,
        count_filter: false,
        native_bool: true,
        select_without_from_needs_dual: true,
        param_style: ParamStyle::Positional,
        ..Self::SQLITE
    };
}
