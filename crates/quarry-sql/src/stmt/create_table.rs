use super::{ColumnDef, Name, Statement};

use quarry_core::{
    schema::{ForeignKey, Index, Layout},
    Result,
};

#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Name of the table
    pub name: Name,

    /// Column definitions, in layout order
    pub columns: Vec<ColumnDef>,

    /// The primary key column
    pub primary_key: Option<String>,

    /// Secondary indexes
    pub indexes: Vec<Index>,

    pub foreign_keys: Vec<ForeignKey>,
}

impl Statement {
    pub fn create_table(layout: &Layout) -> Result<Self> {
        Ok(CreateTable {
            name: Name::from(layout.name()),
            columns: layout
                .fields()
                .map(ColumnDef::from_field)
                .collect::<Result<_>>()?,
            primary_key: layout.primary_field().map(|field| field.name.clone()),
            indexes: layout
                .indexes()
                .filter(|index| !index.primary)
                .cloned()
                .collect(),
            foreign_keys: layout.foreign_keys().cloned().collect(),
        }
        .into())
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
