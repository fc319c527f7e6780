use super::{Comma, Formatter, ToSql};
use crate::{quoter::Quoter, stmt::Value};

use quarry_core::Result;

/// A quoted string literal
pub(super) struct Literal<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Literal<S> {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()> {
        let quoted = f.serializer.quoter.quote_literal(self.0.as_ref());
        f.dst.push_str(&quoted);
        Ok(())
    }
}

impl ToSql for &Value {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()> {
        match self {
            Value::Null => fmt!(f, "null"),
            Value::Bool(true) => fmt!(f, "1"),
            Value::Bool(false) => fmt!(f, "0"),
            Value::I64(v) => fmt!(f, *v),
            Value::U64(v) => fmt!(f, *v),
            Value::F64(v) => fmt!(f, Literal(v.to_string())),
            Value::String(v) => fmt!(f, Literal(v)),
            Value::List(items) => fmt!(f, "(" Comma(items) ")"),
        }

        Ok(())
    }
}
