use super::{FieldReference, Query, Value};

/// Right-hand side of a [`Restriction`](super::Restriction).
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A literal value, null, or a sequence of values
    Value(Value),

    /// A column, e.g. the outer table of a correlated subquery or the other
    /// side of a join
    Field(FieldReference),

    /// A subquery
    Query(Box<Query>),
}

impl Operand {
    pub fn is_list(&self) -> bool {
        matches!(self, Operand::Value(Value::List(_)))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Operand::Value(Value::Null))
    }

    pub fn as_query(&self) -> Option<&Query> {
        match self {
            Operand::Query(query) => Some(query),
            _ => None,
        }
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Value(value)
    }
}

impl From<FieldReference> for Operand {
    fn from(value: FieldReference) -> Self {
        Operand::Field(value)
    }
}

impl From<Query> for Operand {
    fn from(value: Query) -> Self {
        Operand::Query(Box::new(value))
    }
}

macro_rules! impl_from_value {
    ( $($t:ty),+ ) => {
        $(
            impl From<$t> for Operand {
                fn from(value: $t) -> Self {
                    Operand::Value(value.into())
                }
            }
        )+
    };
}

impl_from_value!(bool, i32, i64, u32, u64, f64, &str, String);

impl<T: Into<Value>> From<Vec<T>> for Operand {
    fn from(value: Vec<T>) -> Self {
        Operand::Value(value.into())
    }
}

impl<T: Into<Value>> From<Option<T>> for Operand {
    fn from(value: Option<T>) -> Self {
        Operand::Value(value.into())
    }
}
