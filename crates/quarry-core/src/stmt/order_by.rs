use super::{FieldReference, SelectExpression};

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// What an `ORDER BY` entry sorts on.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderTarget {
    /// A physical column
    Field(FieldReference),

    /// The alias of an entry in the select list
    Output(String),
}

impl From<FieldReference> for OrderTarget {
    fn from(value: FieldReference) -> Self {
        OrderTarget::Field(value)
    }
}

impl From<&SelectExpression> for OrderTarget {
    fn from(value: &SelectExpression) -> Self {
        match value.alias() {
            Some(alias) => OrderTarget::Output(alias.to_string()),
            None => OrderTarget::Field(value.input().clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub target: OrderTarget,
    pub direction: Direction,
}

impl OrderBy {
    pub fn asc(target: impl Into<OrderTarget>) -> OrderBy {
        OrderBy {
            target: target.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(target: impl Into<OrderTarget>) -> OrderBy {
        OrderBy {
            target: target.into(),
            direction: Direction::Desc,
        }
    }
}
