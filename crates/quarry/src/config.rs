use crate::{Error, Result};
use quarry_sql::{Serializer, TableOptions};

use serde::Deserialize;

/// Configuration for a [`Db`](crate::Db)
///
/// ```toml
/// engine = "InnoDB"
/// charset = "utf8mb4"
/// log_statements = true
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Storage engine for created tables
    pub engine: Option<String>,

    /// Default character set for created tables
    pub charset: Option<String>,

    /// Log every statement at `INFO` instead of `DEBUG`
    pub log_statements: bool,
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TOML document.
    pub fn from_toml(src: &str) -> Result<Self> {
        toml::from_str(src).map_err(|err| {
            Error::from(anyhow::Error::new(err)).context(quarry_core::err!("invalid configuration"))
        })
    }

    pub fn engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = Some(engine.into());
        self
    }

    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    pub fn log_statements(mut self, log_statements: bool) -> Self {
        self.log_statements = log_statements;
        self
    }

    pub fn table_options(&self) -> TableOptions {
        TableOptions {
            engine: self.engine.clone(),
            charset: self.charset.clone(),
        }
    }

    /// A MySQL serializer carrying this configuration's table options.
    pub fn serializer(&self) -> Serializer {
        Serializer::mysql_with(self.table_options())
    }
}
