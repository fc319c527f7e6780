use super::{primary_key_value, Name, Statement, Value};

use quarry_core::{schema::Layout, Error, Record, Result};

#[derive(Debug, Clone)]
pub struct Update {
    pub table: Name,

    /// Changed columns and their new values
    pub assignments: Vec<(String, Value)>,

    /// Primary key column and the value selecting the row
    pub key: (String, Value),
}

impl Statement {
    /// Writes the record's changed fields back to its row.
    pub fn update_record(layout: &Layout, record: &Record) -> Result<Self> {
        let key = primary_key_value(layout, record)?;
        let diff = record.diff();

        if diff.is_empty() {
            return Err(Error::invalid_statement(format!(
                "record of table `{}` has no changes to update",
                layout.name()
            )));
        }

        if let Some(name) = diff.keys().find(|name| !layout.has_field(name)) {
            return Err(Error::unknown_field(layout.name(), name));
        }

        Ok(Update {
            table: Name::from(layout.name()),
            assignments: diff.into_iter().collect(),
            key,
        }
        .into())
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
