use super::Error;

/// Error when a column type string does not name a known type.
#[derive(Debug)]
pub(super) struct InvalidTypeError {
    ty: Box<str>,
}

impl std::error::Error for InvalidTypeError {}

impl core::fmt::Display for InvalidTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid column type `{}`", self.ty)
    }
}

impl Error {
    /// Creates an invalid type error.
    pub fn invalid_type(ty: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidType(InvalidTypeError {
            ty: ty.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid type error.
    pub fn is_invalid_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidType(_))
    }
}
