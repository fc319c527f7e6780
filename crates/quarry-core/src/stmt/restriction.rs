use super::{FieldReference, Operand, Operator, Query};
use crate::Result;

/// One predicate of a [`RestrictionGroup`](super::RestrictionGroup).
///
/// A restriction without a field is an existence test: its value is a
/// correlated subquery, `=` means `EXISTS` and `<>` means `NOT EXISTS`.
#[derive(Debug, Clone, PartialEq)]
pub struct Restriction {
    field: Option<FieldReference>,
    operator: Operator,
    value: Operand,
}

impl Restriction {
    pub fn new(field: FieldReference, operator: Operator, value: impl Into<Operand>) -> Restriction {
        Restriction {
            field: Some(field),
            operator,
            value: value.into(),
        }
    }

    pub fn exists(subquery: Query) -> Restriction {
        Restriction {
            field: None,
            operator: Operator::Eq,
            value: subquery.into(),
        }
    }

    pub fn not_exists(subquery: Query) -> Restriction {
        Restriction {
            field: None,
            operator: Operator::Ne,
            value: subquery.into(),
        }
    }

    pub fn field(&self) -> Option<&FieldReference> {
        self.field.as_ref()
    }

    pub fn value(&self) -> &Operand {
        &self.value
    }

    pub fn is_exists(&self) -> bool {
        self.field.is_none()
    }

    /// The operator as given, before sequence promotion.
    pub fn raw_operator(&self) -> Operator {
        self.operator
    }

    /// The operator used when rendering.
    ///
    /// A sequence value is always a membership test: `<>` becomes `NOT IN`
    /// and any other operator that is not already `IN`/`NOT IN` becomes `IN`.
    pub fn operator(&self) -> Operator {
        if !self.value.is_list() || self.operator.is_membership() {
            return self.operator;
        }

        match self.operator {
            Operator::Ne => Operator::NotIn,
            _ => Operator::In,
        }
    }

    /// Returns the restriction with its operator negated.
    pub fn negate(&self) -> Result<Restriction> {
        Ok(Restriction {
            field: self.field.clone(),
            operator: self.operator.negate()?,
            value: self.value.clone(),
        })
    }
}
