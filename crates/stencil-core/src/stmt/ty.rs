use by_address::ByAddress;
use std::sync::Arc;

/// A persistent type whose numeric type id is only known per execution.
#[derive(Debug)]
pub struct TypeInfo {
    pub name: String,

    /// Interfaces may have no registered id; they resolve to `0`.
    pub interface: bool,
}

/// Identity handle to a [`TypeInfo`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef(ByAddress<Arc<TypeInfo>>);

impl TypeInfo {
    pub fn new(name: impl Into<String>) -> TypeRef {
        TypeRef(ByAddress(Arc::new(TypeInfo {
            name: name.into(),
            interface: false,
        })))
    }

    pub fn interface(name: impl Into<String>) -> TypeRef {
        TypeRef(ByAddress(Arc::new(TypeInfo {
            name: name.into(),
            interface: true,
        })))
    }
}

impl core::ops::Deref for TypeRef {
    type Target = TypeInfo;

    fn deref(&self) -> &TypeInfo {
        &self.0
    }
}
