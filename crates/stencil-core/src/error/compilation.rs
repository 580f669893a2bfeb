use super::Error;

/// Error when a statement contains a shape the compiler cannot render for the
/// active dialect.
///
/// This occurs when:
/// - A statement uses a clause the dialect does not have (`RETURNING` on MySQL)
/// - A join kind is not supported (`FULL OUTER JOIN` on MySQL)
/// - A hint cannot be expressed in the dialect's syntax
///
/// Compilation errors surface as translation failures and are never retried.
#[derive(Debug)]
pub(super) struct CompilationError {
    message: Box<str>,
}

impl std::error::Error for CompilationError {}

impl core::fmt::Display for CompilationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "compilation failed: {}", self.message)
    }
}

impl Error {
    /// Creates a structural compilation error naming the offending fragment.
    pub fn compilation(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Compilation(CompilationError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a structural compilation error.
    pub fn is_compilation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Compilation(_))
    }
}
