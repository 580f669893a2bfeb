use by_address::ByAddress;
use std::sync::Arc;

/// A query parameter whose value is supplied at bind time.
#[derive(Debug, Default)]
pub struct Param {
    /// Free-form label, only used when debugging.
    pub label: Option<String>,
}

/// Identity handle to a [`Param`]. Two handles are equal only when they point
/// at the same parameter object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParamRef(ByAddress<Arc<Param>>);

impl ParamRef {
    pub fn new() -> ParamRef {
        ParamRef::from(Param::default())
    }

    pub fn labeled(label: impl Into<String>) -> ParamRef {
        ParamRef::from(Param {
            label: Some(label.into()),
        })
    }

    pub fn param(&self) -> &Param {
        &self.0
    }
}

impl Default for ParamRef {
    fn default() -> Self {
        ParamRef::new()
    }
}

impl From<Param> for ParamRef {
    fn from(value: Param) -> Self {
        ParamRef(ByAddress(Arc::new(value)))
    }
}
