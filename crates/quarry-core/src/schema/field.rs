use super::ColumnType;
use crate::Result;

/// A column declared on a [`Layout`](super::Layout).
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// The name of the column in the database.
    pub name: String,

    /// The raw type string, e.g. `"string:255"`.
    pub ty: String,

    /// Whether or not the column accepts null
    pub nullable: bool,

    /// True if the database assigns the column's value on insert.
    pub auto_increment: bool,
}

impl Field {
    /// A nullable, non auto-incrementing field.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Field {
        Field {
            name: name.into(),
            ty: ty.into(),
            nullable: true,
            auto_increment: false,
        }
    }

    pub fn not_null(mut self) -> Field {
        self.nullable = false;
        self
    }

    /// Marks the field auto-incrementing. Auto-incremented columns are never
    /// null.
    pub fn auto_increment(mut self) -> Field {
        self.auto_increment = true;
        self.nullable = false;
        self
    }

    /// Parses the field's type string.
    pub fn column_type(&self) -> Result<ColumnType> {
        ColumnType::parse(&self.ty)
    }
}
