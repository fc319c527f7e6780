use super::{Name, Statement};

#[derive(Debug, Clone)]
pub struct RenameTable {
    pub from: Name,
    pub to: Name,
}

impl Statement {
    pub fn rename_table(from: &str, to: &str) -> Self {
        RenameTable {
            from: Name::from(from),
            to: Name::from(to),
        }
        .into()
    }
}

impl From<RenameTable> for Statement {
    fn from(value: RenameTable) -> Self {
        Self::RenameTable(value)
    }
}
