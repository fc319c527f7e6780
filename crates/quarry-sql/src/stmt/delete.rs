use super::{primary_key_value, Name, Statement, Value};

use quarry_core::{schema::Layout, Record, Result};

#[derive(Debug, Clone)]
pub struct Delete {
    pub table: Name,

    /// Primary key column and the value selecting the row
    pub key: (String, Value),
}

impl Statement {
    pub fn delete_record(layout: &Layout, record: &Record) -> Result<Self> {
        Ok(Delete {
            table: Name::from(layout.name()),
            key: primary_key_value(layout, record)?,
        }
        .into())
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
