use quarry_core::{
    schema::{ColumnType, Field},
    Result,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub ty: ColumnType,
    pub nullable: bool,
    pub auto_increment: bool,
}

impl ColumnDef {
    /// Fails when the field's type string is not recognized.
    pub fn from_field(field: &Field) -> Result<ColumnDef> {
        Ok(ColumnDef {
            name: field.name.clone(),
            ty: field.column_type()?,
            nullable: field.nullable,
            auto_increment: field.auto_increment,
        })
    }
}
