use super::Error;

/// Error when a restriction group type is neither `AND` nor `OR`.
#[derive(Debug)]
pub(super) struct InvalidGroupTypeError {
    ty: Box<str>,
}

impl std::error::Error for InvalidGroupTypeError {}

impl core::fmt::Display for InvalidGroupTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid restriction group type `{}`", self.ty)
    }
}

impl Error {
    /// Creates an invalid group type error.
    pub fn invalid_group_type(ty: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidGroupType(InvalidGroupTypeError {
            ty: ty.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid group type error.
    pub fn is_invalid_group_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidGroupType(_))
    }
}
