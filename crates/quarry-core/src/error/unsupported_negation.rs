use super::Error;

/// Error when negating a restriction whose operator has no counterpart.
///
/// Only `=`/`<>`, `>`/`<`, `IS`/`IS NOT` and `LIKE`/`NOT LIKE` negate.
#[derive(Debug)]
pub(super) struct UnsupportedNegationError {
    operator: Box<str>,
}

impl std::error::Error for UnsupportedNegationError {}

impl core::fmt::Display for UnsupportedNegationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "operator `{}` has no defined negation", self.operator)
    }
}

impl Error {
    /// Creates an unsupported negation error.
    pub fn unsupported_negation(operator: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedNegation(
            UnsupportedNegationError {
                operator: operator.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an unsupported negation error.
    pub fn is_unsupported_negation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedNegation(_))
    }
}
