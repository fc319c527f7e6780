use crate::{Error, Result};

use std::fmt;

/// Comparison operator of a [`Restriction`](super::Restriction).
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
    Is,
    IsNot,
    Like,
    NotLike,
    In,
    NotIn,
}

impl Operator {
    pub fn is_eq(self) -> bool {
        matches!(self, Self::Eq)
    }

    pub fn is_ne(self) -> bool {
        matches!(self, Self::Ne)
    }

    /// True for `IN` and `NOT IN`.
    pub fn is_membership(self) -> bool {
        matches!(self, Self::In | Self::NotIn)
    }

    /// Returns the operator's negation.
    ///
    /// The mapping is a closed table: `=`/`<>`, `>`/`<`, `IS`/`IS NOT` and
    /// `LIKE`/`NOT LIKE`. Every other operator fails.
    pub fn negate(self) -> Result<Operator> {
        use Operator::*;

        match self {
            Eq => Ok(Ne),
            Ne => Ok(Eq),
            Gt => Ok(Lt),
            Lt => Ok(Gt),
            Is => Ok(IsNot),
            IsNot => Ok(Is),
            Like => Ok(NotLike),
            NotLike => Ok(Like),
            Ge | Le | In | NotIn => Err(Error::unsupported_negation(self.as_str())),
        }
    }

    pub fn as_str(self) -> &'static str {
        use Operator::*;

        match self {
            Eq => "=",
            Ne => "<>",
            Gt => ">",
            Lt => "<",
            Ge => ">=",
            Le => "<=",
            Is => "IS",
            IsNot => "IS NOT",
            Like => "LIKE",
            NotLike => "NOT LIKE",
            In => "IN",
            NotIn => "NOT IN",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
