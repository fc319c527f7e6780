use super::{value::Literal, Comma, Formatter, ToSql};
use crate::quoter::Quoter;

use quarry_core::{schema::ColumnType, Result};

impl ToSql for &ColumnType {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()> {
        let unsigned = if self.is_unsigned() { " UNSIGNED" } else { "" };

        match self {
            ColumnType::Int { .. } => fmt!(f, "INT" unsigned),
            ColumnType::Long { .. } => fmt!(f, "BIGINT" unsigned),
            ColumnType::String(len) => {
                let len = u64::from(*len);
                fmt!(f, "VARCHAR(" len ")")
            }
            ColumnType::Text => fmt!(f, "TEXT"),
            ColumnType::Blob => fmt!(f, "BLOB"),
            ColumnType::Bool => fmt!(f, "TINYINT(1)"),
            ColumnType::Float => fmt!(f, "FLOAT"),
            ColumnType::Double => fmt!(f, "DOUBLE"),
            ColumnType::Enum(variants) => {
                let variants = Comma(variants.iter().map(Literal));
                fmt!(f, "ENUM(" variants ")")
            }
        }

        Ok(())
    }
}
