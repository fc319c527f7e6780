use super::{Formatter, Ident, ToSql};
use crate::{quoter::Quoter, stmt};

use quarry_core::Result;

impl ToSql for &stmt::ColumnDef {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()> {
        let name = Ident(&self.name);
        let null = if self.nullable { " NULL" } else { " NOT NULL" };
        let auto_increment = if self.auto_increment {
            " AUTO_INCREMENT"
        } else {
            ""
        };

        fmt!(f, name " " self.ty null auto_increment);
        Ok(())
    }
}
