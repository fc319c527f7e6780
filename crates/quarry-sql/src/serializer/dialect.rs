use super::Serializer;
use crate::MysqlQuoter;

/// Options appended to every `CREATE TABLE`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Storage engine, rendered `ENGINE=<engine>`
    pub engine: Option<String>,

    /// Default character set, rendered `DEFAULT CHARSET=<charset>`
    pub charset: Option<String>,
}

impl TableOptions {
    pub fn is_empty(&self) -> bool {
        self.engine.is_none() && self.charset.is_none()
    }
}

impl Serializer<MysqlQuoter> {
    pub fn mysql() -> Serializer<MysqlQuoter> {
        Serializer::new(MysqlQuoter)
    }

    pub fn mysql_with(table_options: TableOptions) -> Serializer<MysqlQuoter> {
        Serializer::mysql().with_table_options(table_options)
    }
}
