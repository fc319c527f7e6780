use super::{Formatter, ToSql};
use crate::quoter::Quoter;

use quarry_core::Result;

/// A quoted identifier
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()> {
        let quoted = f.serializer.quoter.quote_identifier(self.0.as_ref());
        f.dst.push_str(&quoted);
        Ok(())
    }
}
