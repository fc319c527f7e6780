use quarry_core::{
    driver::{Driver, ResultSet},
    Result,
};

use std::sync::{Arc, Mutex, PoisonError};

/// Wraps a driver and records every SQL statement passed through it.
#[derive(Debug)]
pub struct LoggingDriver {
    inner: Box<dyn Driver>,

    /// Statements in execution order. Shared so tests can read it after the
    /// driver moved into a `Db`.
    log: Arc<Mutex<Vec<String>>>,
}

impl LoggingDriver {
    pub fn new(driver: impl Driver + 'static) -> Self {
        Self {
            inner: Box::new(driver),
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a handle to access the statement log
    pub fn log_handle(&self) -> Arc<Mutex<Vec<String>>> {
        self.log.clone()
    }

    /// A copy of the statements logged so far.
    pub fn statements(&self) -> Vec<String> {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, sql: &str) {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(sql.to_string());
    }
}

impl Driver for LoggingDriver {
    fn query(&self, sql: &str) -> Result<ResultSet> {
        self.record(sql);
        self.inner.query(sql)
    }

    fn insert(&self, sql: &str) -> Result<bool> {
        self.record(sql);
        self.inner.insert(sql)
    }

    fn update(&self, sql: &str) -> Result<bool> {
        self.record(sql);
        self.inner.update(sql)
    }

    fn delete(&self, sql: &str) -> Result<bool> {
        self.record(sql);
        self.inner.delete(sql)
    }

    fn execute(&self, sql: &str) -> Result<bool> {
        self.record(sql);
        self.inner.execute(sql)
    }

    fn create(&self) -> Result<bool> {
        self.inner.create()
    }

    fn destroy(&self) -> Result<bool> {
        self.inner.destroy()
    }

    fn has(&self, name: &str) -> Result<bool> {
        self.inner.has(name)
    }

    fn last_insert_id(&self) -> Result<Option<u64>> {
        self.inner.last_insert_id()
    }
}
