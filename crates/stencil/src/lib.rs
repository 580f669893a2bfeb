//! Compile relational statements into SQL once, bind them many times.
//!
//! An [`Engine`] pairs a [`Compiler`] for one dialect with a
//! [`TemplateCache`]. Statements are identified by a caller supplied key,
//! typically a [`Fingerprint`] of whatever produced the statement. The first
//! `prepare` for a key compiles and compresses the statement; every later call
//! returns the shared template, which is then bound per execution.

mod cache;
pub use cache::{CacheStats, Fingerprint, TemplateCache};

mod engine;
pub use engine::{Builder, Engine};

pub use stencil_core::{bail, err};

pub use stencil_sql::{
    stmt, BindingTarget, Bindings, Compiler, CycleItem, Error, Flavor, NameMapping, Options,
    ParamStyle, Params, Result, Sql, Template, TypeIdRegistry,
};
