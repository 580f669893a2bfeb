mod capability;
pub use capability::{Capability, IndexHints, ParamStyle};

mod error;
pub use error::{BindingTarget, Error, IntoError};

pub mod stmt;

/// A Result type alias that uses Stencil's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
