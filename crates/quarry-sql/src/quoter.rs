use std::fmt::Debug;

/// Escapes identifiers and literals for one SQL dialect.
///
/// Implementations are stateless, so a single quoter can be shared by any
/// number of serializers.
pub trait Quoter: Debug + Send + Sync {
    /// Quotes a table, column, index or constraint name.
    fn quote_identifier(&self, ident: &str) -> String;

    /// Quotes a string literal.
    fn quote_literal(&self, literal: &str) -> String;
}

/// MySQL quoting: backtick identifiers and single quoted, backslash escaped
/// literals.
#[derive(Debug, Default, Clone, Copy)]
pub struct MysqlQuoter;

impl Quoter for MysqlQuoter {
    fn quote_identifier(&self, ident: &str) -> String {
        format!("`{}`", ident.replace('`', "``"))
    }

    fn quote_literal(&self, literal: &str) -> String {
        let mut ret = String::with_capacity(literal.len() + 2);
        ret.push('\'');

        for ch in literal.chars() {
            match ch {
                '\\' => ret.push_str("\\\\"),
                '\'' => ret.push_str("\\'"),
                '"' => ret.push_str("\\\""),
                '\n' => ret.push_str("\\n"),
                '\r' => ret.push_str("\\r"),
                '\0' => ret.push_str("\\0"),
                '\x1a' => ret.push_str("\\Z"),
                ch => ret.push(ch),
            }
        }

        ret.push('\'');
        ret
    }
}
