use super::Formatter;
use crate::quoter::Quoter;

use quarry_core::Result;

macro_rules! fmt {
    ($f:expr, $( $fragments:expr )*) => {{
        $(
            $fragments.to_sql($f)?;
        )*
    }};
}

pub(super) trait ToSql {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()>;
}

impl ToSql for &str {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()> {
        f.dst.push_str(self);
        Ok(())
    }
}

impl ToSql for &String {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()> {
        f.dst.push_str(self);
        Ok(())
    }
}

impl ToSql for u64 {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()> {
        use std::fmt::Write;

        let _ = write!(f.dst, "{self}");
        Ok(())
    }
}

impl ToSql for i64 {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()> {
        use std::fmt::Write;

        let _ = write!(f.dst, "{self}");
        Ok(())
    }
}

impl<T: ToSql> ToSql for Option<T> {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()> {
        match self {
            Some(fragment) => fragment.to_sql(f),
            None => Ok(()),
        }
    }
}
