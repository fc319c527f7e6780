mod config;
pub use config::Config;

pub mod db;
pub use db::Db;

pub mod driver;

pub mod migration;

pub use quarry_core::{schema, stmt, Error, Layout, Record, Result, Schema};
pub use quarry_sql::{Serializer, Statement, TableOptions};
