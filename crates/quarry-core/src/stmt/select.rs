use super::FieldReference;
use crate::{Error, Result};

use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Aggregate {
    Count,
    CountDistinct,
    Sum,
    Avg,
    Min,
    Max,
}

impl Aggregate {
    pub fn as_str(self) -> &'static str {
        match self {
            Aggregate::Count | Aggregate::CountDistinct => "COUNT",
            Aggregate::Sum => "SUM",
            Aggregate::Avg => "AVG",
            Aggregate::Min => "MIN",
            Aggregate::Max => "MAX",
        }
    }

    /// True if the aggregate only sees distinct input values.
    pub fn is_distinct(self) -> bool {
        matches!(self, Aggregate::CountDistinct)
    }
}

impl fmt::Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a query's select list.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectExpression {
    input: FieldReference,
    alias: Option<String>,
    aggregate: Option<Aggregate>,
}

impl SelectExpression {
    pub fn new(input: FieldReference) -> SelectExpression {
        SelectExpression {
            input,
            alias: None,
            aggregate: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> SelectExpression {
        self.alias = Some(alias.into());
        self
    }

    /// An aggregate over `input`. Aggregates are always aliased so they can
    /// be read back from the result set and ordered by.
    pub fn aggregate(
        input: FieldReference,
        aggregate: Aggregate,
        alias: impl Into<String>,
    ) -> Result<SelectExpression> {
        let alias = alias.into();

        if alias.is_empty() {
            return Err(Error::invalid_statement(format!(
                "{aggregate} over `{}` requires an alias",
                input.name()
            )));
        }

        Ok(SelectExpression {
            input,
            alias: Some(alias),
            aggregate: Some(aggregate),
        })
    }

    pub fn input(&self) -> &FieldReference {
        &self.input
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn aggregate_op(&self) -> Option<Aggregate> {
        self.aggregate
    }

    pub fn is_aggregate(&self) -> bool {
        self.aggregate.is_some()
    }

    /// Name of the column this expression produces in the result set.
    pub fn output_name(&self) -> &str {
        self.alias.as_deref().unwrap_or_else(|| self.input.name())
    }
}
