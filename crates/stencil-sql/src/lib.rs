pub mod bind;
pub use bind::{
    Bindings, CycleItem, NameMapping, Ordinal, Params, PostCompiler, Sql, TypeIdRegistry,
};

pub mod compiler;
pub use compiler::{Compiler, Flavor, Options};

pub mod compress;
pub use compress::Compressor;

pub mod context;
pub use context::{CompilerContext, NamingScope};

mod ident;
pub use ident::Quote;

mod layout;

pub mod node;
pub use node::Node;

mod template;
pub use template::{Format, Template};

pub use stencil_core::{stmt, BindingTarget, Capability, Error, ParamStyle, Result};
