use super::{FieldReference, Operand, Operator, RestrictionGroup, TableReference};
use crate::Result;

use std::fmt;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum JoinDirection {
    #[default]
    Left,
    Inner,
    Right,
}

impl JoinDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            JoinDirection::Left => "LEFT",
            JoinDirection::Inner => "INNER",
            JoinDirection::Right => "RIGHT",
        }
    }
}

impl fmt::Display for JoinDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A joined table with its `ON` predicates.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    direction: JoinDirection,
    table: TableReference,
    restrictions: RestrictionGroup,
}

impl Join {
    pub fn new(table: TableReference) -> Join {
        Join {
            direction: JoinDirection::default(),
            table,
            restrictions: RestrictionGroup::and(),
        }
    }

    pub fn table(&self) -> &TableReference {
        &self.table
    }

    pub fn direction(&self) -> JoinDirection {
        self.direction
    }

    pub fn set_direction(&mut self, direction: JoinDirection) -> &mut Self {
        self.direction = direction;
        self
    }

    /// Adds `lhs <operator> rhs` to the `ON` clause.
    pub fn on(&mut self, lhs: FieldReference, operator: Operator, rhs: impl Into<Operand>) -> &mut Self {
        self.restrictions.restrict(lhs, operator, rhs);
        self
    }

    pub fn restrictions(&self) -> &RestrictionGroup {
        &self.restrictions
    }

    pub fn restrictions_mut(&mut self) -> &mut RestrictionGroup {
        &mut self.restrictions
    }

    /// References a column of the joined table.
    pub fn output(&self, name: &str) -> Result<FieldReference> {
        self.table.output(name)
    }
}
