use super::{Name, Statement, Value};

use quarry_core::{schema::Layout, Error, Record, Result};

#[derive(Debug, Clone)]
pub struct Insert {
    pub table: Name,
    pub columns: Vec<String>,
    pub values: Vec<Value>,
}

impl Statement {
    /// Inserts the record's working copy.
    ///
    /// Every layout field becomes a column, in layout order. Fields the
    /// record does not set are inserted as null.
    pub fn insert_record(layout: &Layout, record: &Record) -> Result<Self> {
        if let Some(key) = record.keys().find(|key| !layout.has_field(key)) {
            return Err(Error::unknown_field(layout.name(), key));
        }

        let (columns, values) = layout
            .fields()
            .map(|field| {
                let value = record.get(&field.name).cloned().unwrap_or_default();
                (field.name.clone(), value)
            })
            .unzip();

        Ok(Insert {
            table: Name::from(layout.name()),
            columns,
            values,
        }
        .into())
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
