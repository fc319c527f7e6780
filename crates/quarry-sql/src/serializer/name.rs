use super::{Formatter, Ident, Period, ToSql};
use crate::{quoter::Quoter, stmt};

use quarry_core::Result;

impl ToSql for &stmt::Name {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()> {
        let parts = Period(self.0.iter().map(Ident));
        fmt!(f, parts);
        Ok(())
    }
}
