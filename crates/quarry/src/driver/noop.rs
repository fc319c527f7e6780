use quarry_core::{
    driver::{Driver, ResultSet},
    Result,
};

/// A driver that executes nothing.
///
/// Queries return no rows, writes report success and no table exists. Used to
/// render SQL without a connection.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDriver;

impl Driver for NoopDriver {
    fn query(&self, _sql: &str) -> Result<ResultSet> {
        Ok(ResultSet::empty())
    }

    fn insert(&self, _sql: &str) -> Result<bool> {
        Ok(true)
    }

    fn update(&self, _sql: &str) -> Result<bool> {
        Ok(true)
    }

    fn delete(&self, _sql: &str) -> Result<bool> {
        Ok(true)
    }

    fn execute(&self, _sql: &str) -> Result<bool> {
        Ok(true)
    }

    fn create(&self) -> Result<bool> {
        Ok(true)
    }

    fn destroy(&self) -> Result<bool> {
        Ok(true)
    }

    fn has(&self, _name: &str) -> Result<bool> {
        Ok(false)
    }
}
