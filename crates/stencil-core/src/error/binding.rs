use super::Error;

/// The template slot a bind configuration failed to satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingTarget {
    /// A bound parameter, identified by its allocated name.
    Param(String),

    /// An inline placeholder, identified by its key.
    Value(String),

    /// A type identifier missing from the type-id registry.
    Type(String),

    /// A cycle item index outside the row supplied for the enclosing cycle.
    CycleItem {
        cycle: String,
        index: usize,
        width: usize,
    },
}

impl core::fmt::Display for BindingTarget {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            BindingTarget::Param(name) => write!(f, "no value bound for parameter `{name}`"),
            BindingTarget::Value(key) => write!(f, "no value bound for placeholder `{key}`"),
            BindingTarget::Type(name) => write!(f, "type `{name}` has no registered type id"),
            BindingTarget::CycleItem {
                cycle,
                index,
                width,
            } => write!(
                f,
                "cycle `{cycle}` has no item {index} (row width is {width})"
            ),
        }
    }
}

/// Error when a compiled template references an id the bind configuration
/// does not supply.
///
/// Binding errors are fatal for a single execution only. The compiled
/// template is left untouched and can be bound again with a complete
/// configuration.
#[derive(Debug)]
pub(super) struct BindingError {
    target: BindingTarget,
}

impl std::error::Error for BindingError {}

impl core::fmt::Display for BindingError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "binding failed: {}", self.target)
    }
}

impl Error {
    /// Creates a binding error for the given unresolved target.
    pub fn binding(target: BindingTarget) -> Error {
        Error::from(super::ErrorKind::Binding(BindingError { target }))
    }

    /// Returns `true` if this error is a binding error.
    pub fn is_binding(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Binding(_))
    }

    /// Returns the unresolved target when this is a binding error.
    pub fn binding_target(&self) -> Option<&BindingTarget> {
        match self.kind() {
            super::ErrorKind::Binding(err) => Some(&err.target),
            _ => None,
        }
    }
}
