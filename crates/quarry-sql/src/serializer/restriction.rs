use super::{Comma, Formatter, Ident, Period, ToSql};
use crate::{
    quoter::Quoter,
    stmt::{
        Condition, FieldReference, GroupType, Operand, Operator, Query, Restriction,
        RestrictionGroup, Value,
    },
};

use quarry_core::{Error, Result};

/// True when the group renders to nothing: it has no restrictions, directly
/// or in any nested group.
pub(super) fn is_vacuous(group: &RestrictionGroup) -> bool {
    group.children().iter().all(|child| match child {
        Condition::Group(group) => is_vacuous(group),
        Condition::Restriction(_) => false,
    })
}

impl ToSql for &FieldReference {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()> {
        let (alias, name) = self.raw();
        fmt!(f, Period([Ident(alias), Ident(name)]));
        Ok(())
    }
}

impl ToSql for &RestrictionGroup {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()> {
        let separator = match self.ty() {
            GroupType::And => " AND ",
            GroupType::Or => " OR ",
        };

        let mut s = "";
        for child in self.children() {
            if matches!(child, Condition::Group(group) if is_vacuous(group)) {
                continue;
            }

            fmt!(f, s child);
            s = separator;
        }

        Ok(())
    }
}

impl ToSql for &Condition {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()> {
        match self {
            Condition::Restriction(restriction) => fmt!(f, restriction),
            Condition::Group(group) => fmt!(f, "(" group ")"),
        }

        Ok(())
    }
}

impl ToSql for &Restriction {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()> {
        let operator = self.operator();

        let Some(field) = self.field() else {
            return existence(self, operator, f);
        };

        let op = operator.as_str();

        match self.value() {
            Operand::Value(Value::Null) => {
                let op = match operator {
                    Operator::Eq | Operator::Is => "IS",
                    Operator::Ne | Operator::IsNot => "IS NOT",
                    _ => {
                        return Err(Error::invalid_statement(format!(
                            "cannot compare `{}` with null using `{operator}`",
                            field.name()
                        )))
                    }
                };

                fmt!(f, field " " op " null");
            }
            Operand::Value(Value::List(items)) if items.is_empty() => {
                // Nothing is a member of the empty list
                let always = if operator == Operator::NotIn {
                    "1 = 1"
                } else {
                    "0 = 1"
                };
                fmt!(f, always);
            }
            Operand::Value(Value::List(items)) => {
                fmt!(f, field " " op " (" Comma(items) ")");
            }
            Operand::Value(value) if operator.is_membership() => {
                fmt!(f, field " " op " (" value ")");
            }
            Operand::Value(value) => fmt!(f, field " " op " " value),
            Operand::Field(other) => fmt!(f, field " " op " " other),
            Operand::Query(query) => {
                let query: &Query = query;
                fmt!(f, field " " op " (" query ")");
            }
        }

        Ok(())
    }
}

/// Renders a field-less restriction as `EXISTS (...)` or `NOT EXISTS (...)`.
fn existence<Q: Quoter>(
    restriction: &Restriction,
    operator: Operator,
    f: &mut Formatter<'_, Q>,
) -> Result<()> {
    let Some(query) = restriction.value().as_query() else {
        return Err(Error::invalid_statement(
            "existence test requires a subquery",
        ));
    };

    let keyword = match operator {
        Operator::Eq => "EXISTS",
        Operator::Ne => "NOT EXISTS",
        _ => {
            return Err(Error::invalid_statement(format!(
                "operator `{operator}` cannot test existence"
            )))
        }
    };

    fmt!(f, keyword " (" query ")");
    Ok(())
}
