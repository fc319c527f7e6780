mod alter_table;
pub use alter_table::{AlterTable, AlterTableAction};

mod column_def;
pub use column_def::ColumnDef;

mod create_table;
pub use create_table::CreateTable;

mod delete;
pub use delete::Delete;

mod drop_table;
pub use drop_table::DropTable;

mod insert;
pub use insert::Insert;

mod name;
pub use name::Name;

mod rename_table;
pub use rename_table::RenameTable;

mod update;
pub use update::Update;

pub use quarry_core::stmt::*;

use quarry_core::{schema::Layout, Error, Record, Result};

#[derive(Debug, Clone)]
pub enum Statement {
    AlterTable(AlterTable),
    CreateTable(CreateTable),
    Delete(Delete),
    DropTable(DropTable),
    Insert(Insert),
    Query(Query),
    RenameTable(RenameTable),
    Update(Update),
}

impl From<Query> for Statement {
    fn from(value: Query) -> Self {
        Self::Query(value)
    }
}

/// The value identifying `record`'s row: the committed primary key value,
/// falling back to the working one.
fn primary_key_value(layout: &Layout, record: &Record) -> Result<(String, Value)> {
    let field = layout
        .primary_field()
        .ok_or_else(|| Error::missing_primary_key(layout.name()))?;

    let value = record
        .original(&field.name)
        .or_else(|| record.get(&field.name))
        .filter(|value| !value.is_null())
        .ok_or_else(|| {
            Error::invalid_statement(format!(
                "record has no value for primary key `{}` of table `{}`",
                field.name,
                layout.name()
            ))
        })?;

    Ok((field.name.clone(), value.clone()))
}
