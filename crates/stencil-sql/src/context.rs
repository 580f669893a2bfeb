//! Naming state for one compilation.

mod alias;
use alias::AliasGenerator;

use stencil_core::stmt::{ParamRef, TableRef, TableSource};

use indexmap::IndexMap;
use std::collections::HashSet;

/// Allocates table aliases and parameter names while a statement is compiled.
///
/// Aliases are only visible inside the naming scope that allocated them, but
/// a name handed out once is never handed out again in the same compilation.
#[derive(Debug)]
pub struct CompilerContext {
    /// Aliases visible from the current naming scope, in allocation order
    aliases: IndexMap<TableRef, Box<str>>,

    /// Every alias or table name used so far, lowercased. Never shrinks.
    taken: HashSet<String>,

    alias_gen: AliasGenerator,

    params: IndexMap<ParamRef, Box<str>>,

    parameter_prefix: String,

    /// Whether the current scope renders generated aliases
    table_aliasing: bool,

    /// What nested scopes start with
    default_table_aliasing: bool,

    indent: usize,
}

/// Snapshot returned by [`CompilerContext::open_naming_scope`].
#[derive(Debug)]
#[must_use = "a naming scope must be passed back to `close_naming_scope`"]
pub struct NamingScope {
    visible: usize,
    table_aliasing: bool,
    indent: usize,
}

impl CompilerContext {
    pub fn new() -> CompilerContext {
        CompilerContext {
            aliases: IndexMap::new(),
            taken: HashSet::new(),
            alias_gen: AliasGenerator::default(),
            params: IndexMap::new(),
            parameter_prefix: "p".to_string(),
            table_aliasing: true,
            default_table_aliasing: true,
            indent: 0,
        }
    }

    pub fn with_table_aliasing(mut self, enabled: bool) -> CompilerContext {
        self.table_aliasing = enabled;
        self.default_table_aliasing = enabled;
        self
    }

    pub fn with_parameter_prefix(mut self, prefix: impl Into<String>) -> CompilerContext {
        self.parameter_prefix = prefix.into();
        self
    }

    /// Returns the alias of `table`, allocating one on first use.
    ///
    /// An explicit name on the reference is honored unless it is taken. With
    /// aliasing disabled, the table's own name is used and reserved; a
    /// derived table or a name that is already taken still gets a generated
    /// alias.
    pub fn table_alias(&mut self, table: &TableRef) -> &str {
        if !self.aliases.contains_key(table) {
            let alias = self.choose_alias(table);
            self.taken.insert(alias.to_lowercase());
            self.aliases.insert(table.clone(), alias.into());
        }

        &self.aliases[table]
    }

    /// Returns the alias of `table` if one is visible from the current scope.
    pub fn lookup_alias(&self, table: &TableRef) -> Option<&str> {
        self.aliases.get(table).map(|alias| &alias[..])
    }

    fn choose_alias(&mut self, table: &TableRef) -> String {
        if let Some(name) = table.explicit_name() {
            if !self.is_taken(name) {
                return name.to_string();
            }
        }

        if !self.table_aliasing {
            if let TableSource::Table(table) = table.source() {
                if !self.is_taken(&table.name) {
                    return table.name.clone();
                }
            }
        }

        loop {
            let alias = self.alias_gen.next();
            if !self.is_taken(&alias) {
                return alias;
            }
        }
    }

    /// Returns the name of `param`, allocating `prefix + counter` on first
    /// use.
    pub fn parameter_name(&mut self, param: &ParamRef) -> &str {
        if !self.params.contains_key(param) {
            let name = format!("{}{}", self.parameter_prefix, self.params.len());
            self.params.insert(param.clone(), name.into());
        }

        &self.params[param]
    }

    /// Number of distinct parameters seen so far.
    pub fn parameter_count(&self) -> usize {
        self.params.len()
    }

    /// Marks `name` as unavailable for generated aliases. Returns `false` if
    /// it already was.
    pub fn reserve_name(&mut self, name: &str) -> bool {
        self.taken.insert(name.to_lowercase())
    }

    pub fn is_taken(&self, name: &str) -> bool {
        self.taken.contains(&name.to_lowercase())
    }

    pub fn table_aliasing(&self) -> bool {
        self.table_aliasing
    }

    /// Enables or disables aliasing until the current naming scope closes.
    pub fn set_table_aliasing(&mut self, enabled: bool) {
        self.table_aliasing = enabled;
    }

    /// Opens a scope for a nested statement. Nested statements start with
    /// the compilation's default aliasing, whatever the enclosing statement
    /// uses.
    pub fn open_naming_scope(&mut self) -> NamingScope {
        let scope = NamingScope {
            visible: self.aliases.len(),
            table_aliasing: self.table_aliasing,
            indent: self.indent,
        };

        self.table_aliasing = self.default_table_aliasing;
        scope
    }

    /// Hides every alias allocated since `scope` was opened.
    pub fn close_naming_scope(&mut self, scope: NamingScope) {
        self.aliases.truncate(scope.visible);
        self.table_aliasing = scope.table_aliasing;
        self.indent = scope.indent;
    }

    /// Runs `f` inside a fresh naming scope.
    pub fn naming_scope<R>(&mut self, f: impl FnOnce(&mut CompilerContext) -> R) -> R {
        let scope = self.open_naming_scope();
        let ret = f(self);
        self.close_naming_scope(scope);
        ret
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    pub(crate) fn enter_indent(&mut self) {
        self.indent += 1;
    }

    pub(crate) fn exit_indent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }
}

impl Default for CompilerContext {
    fn default() -> Self {
        CompilerContext::new()
    }
}
