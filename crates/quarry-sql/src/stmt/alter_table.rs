use super::{ColumnDef, Name, Statement};

use quarry_core::{
    schema::{ForeignKey, Index, Layout, LayoutChange},
    Error, Result,
};

/// A statement to alter a SQL table.
#[derive(Debug, Clone)]
pub struct AlterTable {
    /// Current name of the table.
    pub name: Name,

    /// The alterations to apply, in order.
    pub actions: Vec<AlterTableAction>,
}

/// One action of an ALTER TABLE statement.
#[derive(Debug, Clone)]
pub enum AlterTableAction {
    AddColumn(ColumnDef),
    DropColumn(String),

    /// Adds a secondary index, or the primary key when the index is primary.
    AddIndex(Index),
    DropIndex(String),
    DropPrimaryKey,

    AddForeignKey(ForeignKey),
    DropForeignKey(String),
}

impl Statement {
    /// Translates layout changes into a single ALTER TABLE statement.
    ///
    /// `layout` is the table as it was before the changes; it decides whether
    /// a dropped index is the primary key.
    pub fn alter_table(layout: &Layout, changes: &[LayoutChange]) -> Result<Self> {
        if changes.is_empty() {
            return Err(Error::invalid_statement(format!(
                "no changes to apply to table `{}`",
                layout.name()
            )));
        }

        let actions = changes
            .iter()
            .map(|change| {
                Ok::<_, Error>(match change {
                    LayoutChange::AddField(field) => {
                        AlterTableAction::AddColumn(ColumnDef::from_field(field)?)
                    }
                    LayoutChange::DropField(name) => AlterTableAction::DropColumn(name.clone()),
                    LayoutChange::AddIndex(index) => AlterTableAction::AddIndex(index.clone()),
                    LayoutChange::DropIndex(name) => match layout.index(name) {
                        Some(index) if index.primary => AlterTableAction::DropPrimaryKey,
                        _ => AlterTableAction::DropIndex(name.clone()),
                    },
                    LayoutChange::AddForeignKey(foreign_key) => {
                        AlterTableAction::AddForeignKey(foreign_key.clone())
                    }
                    LayoutChange::DropForeignKey(name) => {
                        AlterTableAction::DropForeignKey(name.clone())
                    }
                })
            })
            .collect::<Result<_>>()?;

        Ok(AlterTable {
            name: Name::from(layout.name()),
            actions,
        }
        .into())
    }
}

impl From<AlterTable> for Statement {
    fn from(value: AlterTable) -> Self {
        Self::AlterTable(value)
    }
}
