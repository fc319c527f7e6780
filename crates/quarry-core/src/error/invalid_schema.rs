use super::Error;

/// Error when a layout change would leave the schema inconsistent.
///
/// This occurs when:
/// - A second primary index is added, or a primary index spans several fields
/// - A field or index name is declared twice
/// - A field or index that does not exist is dropped
/// - A table is created twice
#[derive(Debug)]
pub(super) struct InvalidSchemaError {
    message: Box<str>,
}

impl std::error::Error for InvalidSchemaError {}

impl core::fmt::Display for InvalidSchemaError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSchema(InvalidSchemaError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid schema error.
    pub fn is_invalid_schema(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidSchema(_))
    }
}
