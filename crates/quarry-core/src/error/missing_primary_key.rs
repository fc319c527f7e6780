use super::Error;

/// Error when an operation needs a primary key the table does not have.
///
/// This occurs when:
/// - A foreign key references a layout without a primary index
/// - A record is updated or deleted through a layout without a primary index
#[derive(Debug)]
pub(super) struct MissingPrimaryKeyError {
    table: Box<str>,
}

impl std::error::Error for MissingPrimaryKeyError {}

impl core::fmt::Display for MissingPrimaryKeyError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "table `{}` has no primary key", self.table)
    }
}

impl Error {
    /// Creates a missing primary key error.
    pub fn missing_primary_key(table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingPrimaryKey(MissingPrimaryKeyError {
            table: table.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing primary key error.
    pub fn is_missing_primary_key(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingPrimaryKey(_))
    }
}
