use super::{Name, Statement};

/// A statement to drop a SQL table.
#[derive(Debug, Clone)]
pub struct DropTable {
    /// Name of the table.
    pub name: Name,
}

impl Statement {
    pub fn drop_table(name: &str) -> Self {
        DropTable {
            name: Name::from(name),
        }
        .into()
    }
}

impl From<DropTable> for Statement {
    fn from(value: DropTable) -> Self {
        Self::DropTable(value)
    }
}
