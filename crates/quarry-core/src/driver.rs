use crate::{stmt::Value, Record, Result};

use indexmap::IndexMap;
use std::fmt::Debug;

/// Executes rendered SQL against a connection.
///
/// A driver wraps exactly one connection and every call blocks until the
/// statement completes. Failures are returned as [`Error::driver`] and are
/// never retried.
///
/// [`Error::driver`]: crate::Error::driver
pub trait Driver: Debug + Send + Sync {
    /// Runs a `SELECT` and returns its rows.
    fn query(&self, sql: &str) -> Result<ResultSet>;

    fn insert(&self, sql: &str) -> Result<bool>;

    fn update(&self, sql: &str) -> Result<bool>;

    fn delete(&self, sql: &str) -> Result<bool>;

    /// Runs a statement with no result rows, such as DDL.
    fn execute(&self, sql: &str) -> Result<bool>;

    /// Creates the database the driver is configured for.
    fn create(&self) -> Result<bool>;

    /// Drops the database the driver is configured for.
    fn destroy(&self) -> Result<bool>;

    /// Returns true if the named table exists.
    fn has(&self, name: &str) -> Result<bool>;

    /// Id generated by the most recent insert, if the driver tracks one.
    fn last_insert_id(&self) -> Result<Option<u64>> {
        Ok(None)
    }
}

/// Rows returned by [`Driver::query`], each an ordered column → value map.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ResultSet {
    pub rows: Vec<IndexMap<String, Value>>,
}

impl ResultSet {
    pub fn new(rows: Vec<IndexMap<String, Value>>) -> ResultSet {
        ResultSet { rows }
    }

    pub fn empty() -> ResultSet {
        ResultSet::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl IntoIterator for ResultSet {
    type Item = Record;
    type IntoIter = std::iter::Map<std::vec::IntoIter<IndexMap<String, Value>>, fn(IndexMap<String, Value>) -> Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter().map(Record::from_row as fn(_) -> Record)
    }
}
