mod adhoc;
mod driver;
mod invalid_group_type;
mod invalid_schema;
mod invalid_statement;
mod invalid_type;
mod missing_primary_key;
mod unknown_field;
mod unsupported_negation;

use adhoc::AdhocError;
use driver::DriverError;
use invalid_group_type::InvalidGroupTypeError;
use invalid_schema::InvalidSchemaError;
use invalid_statement::InvalidStatementError;
use invalid_type::InvalidTypeError;
use missing_primary_key::MissingPrimaryKeyError;
use std::sync::Arc;
use unknown_field::UnknownFieldError;
use unsupported_negation::UnsupportedNegationError;

/// Returns early with an ad-hoc [`Error`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while building, serializing, or executing
/// statements.
///
/// Every failure in quarry is raised at the point of the offending call. The
/// error is a single pointer wide and cheap to clone.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context
    /// is shown first, followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }

        let Some(inner) = err.inner.as_mut() else {
            return self;
        };

        match Arc::get_mut(inner) {
            Some(inner) if inner.cause.is_none() => {
                inner.cause = Some(self);
                err
            }
            // A shared or already-chained consequent keeps its own chain
            _ => err,
        }
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }

    /// Creates an ad-hoc error from format arguments. Prefer the [`err!`]
    /// and [`bail!`] macros.
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(args)))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Driver(err) => Some(err),
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    Driver(DriverError),
    UnknownField(UnknownFieldError),
    UnsupportedNegation(UnsupportedNegationError),
    InvalidType(InvalidTypeError),
    InvalidGroupType(InvalidGroupTypeError),
    MissingPrimaryKey(MissingPrimaryKeyError),
    InvalidSchema(InvalidSchemaError),
    InvalidStatement(InvalidStatementError),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            Driver(err) => core::fmt::Display::fmt(err, f),
            UnknownField(err) => core::fmt::Display::fmt(err, f),
            UnsupportedNegation(err) => core::fmt::Display::fmt(err, f),
            InvalidType(err) => core::fmt::Display::fmt(err, f),
            InvalidGroupType(err) => core::fmt::Display::fmt(err, f),
            MissingPrimaryKey(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
            InvalidStatement(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown quarry error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}
