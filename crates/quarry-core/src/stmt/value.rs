/// A column value, or a sequence of them.
///
/// Integers render unquoted, `Null` renders as the literal `null`, and every
/// other scalar goes through the dialect's literal quoting.
///
/// Integers compare by numeric value, so `I64(5) == U64(5)`.
#[derive(Debug, Default, Clone)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed 64-bit integer
    I64(i64),

    /// Unsigned 64-bit integer
    U64(u64),

    /// 64-bit floating point
    F64(f64),

    /// String value
    String(String),

    /// A sequence of values, used for membership tests
    List(Vec<Value>),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::I64(_) | Self::U64(_))
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::I64(v) => Some(v),
            Self::U64(v) => i64::try_from(v).ok(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Self::U64(v) => Some(v),
            Self::I64(v) => u64::try_from(v).ok(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::I64(a), Self::I64(b)) => a == b,
            (Self::U64(a), Self::U64(b)) => a == b,
            (Self::I64(a), Self::U64(b)) | (Self::U64(b), Self::I64(a)) => {
                u64::try_from(*a).ok() == Some(*b)
            }
            (Self::F64(a), Self::F64(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I64(src.into())
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<u32> for Value {
    fn from(src: u32) -> Self {
        Self::U64(src.into())
    }
}

impl From<u64> for Value {
    fn from(src: u64) -> Self {
        Self::U64(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(src: Option<T>) -> Self {
        src.map(Into::into).unwrap_or(Value::Null)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(src: Vec<T>) -> Self {
        Self::List(src.into_iter().map(Into::into).collect())
    }
}
