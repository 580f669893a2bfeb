#[macro_use]
mod fmt;
use fmt::{Ident, ToSql};

mod delim;
use delim::{Columns, Comma};

mod flavor;
pub use flavor::Flavor;

mod options;
pub use options::Options;

// Fragment compilers
mod expr;
mod statement;
mod value;

use crate::{
    node::{ContainerNode, DelimiterKind, Node},
    CompilerContext, Format, Quote, Template,
};

use stencil_core::{
    stmt::{Statement, TableRef},
    Capability, Result,
};

use std::mem;

/// Compiles relational statements into templates for one SQL dialect.
#[derive(Debug, Clone)]
pub struct Compiler {
    /// The database flavor handles the differences between SQL dialects and
    /// supported features.
    flavor: Flavor,

    options: Options,
}

struct Formatter<'a> {
    /// Handle to the compiler
    compiler: &'a Compiler,

    /// Naming state
    cx: CompilerContext,

    /// Nodes of the fragment being built
    dst: Vec<Node>,

    /// An UPDATE or DELETE target whose columns render unqualified
    bare: Option<TableRef>,
}

impl Compiler {
    pub fn new(flavor: Flavor) -> Compiler {
        Compiler {
            flavor,
            options: Options::default(),
        }
    }

    pub fn with_options(mut self, options: Options) -> Compiler {
        self.options = options;
        self
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn capability(&self) -> &'static Capability {
        self.flavor.capability()
    }

    /// How templates produced by this compiler render.
    pub fn format(&self) -> Format {
        Format {
            param_style: self
                .options
                .param_style
                .unwrap_or(self.capability().param_style),
            quote: if self.options.quote_identifiers {
                self.flavor.quote()
            } else {
                Quote::None
            },
            pretty: self.options.pretty,
        }
    }

    /// Compiles `stmt` into a raw, uncompressed template.
    pub fn compile(&self, stmt: &Statement) -> Result<Template> {
        let mut f = Formatter::new(self);
        stmt.to_sql(&mut f)?;

        let template = Template::new(f.dst, self.format(), false);

        log::debug!(
            "compiled {} statement; flavor={:?} nodes={} params={}",
            stmt.name(),
            self.flavor,
            template.node_count(),
            f.cx.parameter_count()
        );

        Ok(template)
    }

    /// Compiles and compresses `stmt`. The result is what gets cached.
    pub fn prepare(&self, stmt: &Statement) -> Result<Template> {
        Ok(self.compile(stmt)?.compress())
    }
}

impl<'a> Formatter<'a> {
    fn new(compiler: &'a Compiler) -> Formatter<'a> {
        let options = &compiler.options;
        let mut cx = CompilerContext::new()
            .with_table_aliasing(options.table_aliasing)
            .with_parameter_prefix(options.parameter_prefix.clone());

        for name in &options.reserved_names {
            cx.reserve_name(name);
        }

        Formatter {
            compiler,
            cx,
            dst: vec![],
            bare: None,
        }
    }

    fn capability(&self) -> &'static Capability {
        self.compiler.capability()
    }

    fn flavor(&self) -> Flavor {
        self.compiler.flavor
    }

    fn quote(&self) -> Quote {
        self.compiler.format().quote
    }

    fn push(&mut self, node: impl Into<Node>) {
        self.dst.push(node.into());
    }

    /// Starts a new clause. Breaks the line when pretty printing.
    fn clause(&mut self) {
        self.push(Node::delimiter("", DelimiterKind::Row));
    }

    /// Collects the nodes emitted by `f` into a container.
    fn container(
        &mut self,
        requires_indent: bool,
        f: impl FnOnce(&mut Self) -> Result<()>,
    ) -> Result<()> {
        if requires_indent {
            self.cx.enter_indent();
        }

        let children = self.fragment(f);

        if requires_indent {
            self.cx.exit_indent();
        }

        self.push(ContainerNode {
            children: children?,
            requires_indent,
        });
        Ok(())
    }

    /// Returns the nodes emitted by `f` instead of appending them.
    fn fragment(&mut self, f: impl FnOnce(&mut Self) -> Result<()>) -> Result<Vec<Node>> {
        let outer = mem::take(&mut self.dst);
        let ret = f(self);
        let nodes = mem::replace(&mut self.dst, outer);
        ret.map(|_| nodes)
    }

    /// Compiles a nested statement in its own naming scope and indented
    /// container.
    fn sub_statement(&mut self, f: impl FnOnce(&mut Self) -> Result<()>) -> Result<()> {
        let bare = self.bare.take();
        let scope = self.cx.open_naming_scope();
        let ret = self.container(true, f);
        self.cx.close_naming_scope(scope);
        self.bare = bare;
        ret
    }
}
