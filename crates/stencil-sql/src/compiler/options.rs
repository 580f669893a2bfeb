use stencil_core::ParamStyle;

/// Compilation settings. Everything here affects the compiled text, so
/// templates compiled with different options must not share a cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Render generated aliases for table references. When disabled, tables
    /// are referenced by their own names.
    pub table_aliasing: bool,

    /// Prefix of generated parameter names
    pub parameter_prefix: String,

    /// Quote identifiers using the flavor's quoting
    pub quote_identifiers: bool,

    /// Overrides the flavor's parameter marker style
    pub param_style: Option<ParamStyle>,

    /// Break lines and indent nested statements
    pub pretty: bool,

    /// Names generated aliases must avoid
    pub reserved_names: Vec<String>,
}

impl Options {
    pub fn table_aliasing(mut self, enabled: bool) -> Self {
        self.table_aliasing = enabled;
        self
    }

    pub fn parameter_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.parameter_prefix = prefix.into();
        self
    }

    pub fn quote_identifiers(mut self, enabled: bool) -> Self {
        self.quote_identifiers = enabled;
        self
    }

    pub fn param_style(mut self, style: ParamStyle) -> Self {
        self.param_style = Some(style);
        self
    }

    pub fn pretty(mut self, enabled: bool) -> Self {
        self.pretty = enabled;
        self
    }

    pub fn reserve(mut self, name: impl Into<String>) -> Self {
        self.reserved_names.push(name.into());
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Options {
            table_aliasing: true,
            parameter_prefix: "p".to_string(),
            quote_identifiers: true,
            param_style: None,
            pretty: false,
            reserved_names: vec![],
        }
    }
}
