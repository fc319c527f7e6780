mod builder;
pub use builder::Builder;

use crate::{
    driver::Driver,
    migration::SqlSchemaExecutor,
    stmt::{Query, Value, COUNT_ALIAS},
    Config, Layout, Record, Result, Schema, Serializer,
};

use std::sync::Arc;
use tracing::{debug, info};

/// A database handle: renders statements and runs them through a driver.
///
/// Cloning is cheap and clones share the driver and schema.
#[derive(Debug, Clone)]
pub struct Db {
    driver: Arc<dyn Driver>,
    schema: Arc<Schema>,
    serializer: Serializer,
    config: Config,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn driver(&self) -> &Arc<dyn Driver> {
        &self.driver
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    pub fn serializer(&self) -> &Serializer {
        &self.serializer
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Looks up a registered layout.
    pub fn layout(&self, name: &str) -> Result<&Arc<Layout>> {
        self.schema
            .layout(name)
            .ok_or_else(|| quarry_core::err!("table `{name}` is not registered"))
    }

    /// Runs the query and hydrates every row into a [`Record`].
    pub fn fetch_all(&self, query: &Query) -> Result<Vec<Record>> {
        let sql = self.serializer.query(query)?;
        self.log(&sql);

        Ok(self.driver.query(&sql)?.into_iter().collect())
    }

    /// Runs the query restricted to its first row.
    ///
    /// Any paging on `query` is replaced: the row returned is the first one
    /// of page one, whatever page the caller asked for.
    pub fn first(&self, query: &Query) -> Result<Option<Record>> {
        let mut query = query.clone();
        query.paginate(1, 1);

        Ok(self.fetch_all(&query)?.into_iter().next())
    }

    /// Counts the rows the query matches.
    pub fn count(&self, query: &Query) -> Result<u64> {
        let count = query.count_query()?;

        let Some(row) = self.fetch_all(&count)?.into_iter().next() else {
            return Ok(0);
        };

        match row.get(COUNT_ALIAS) {
            Some(value) => value.as_u64().ok_or_else(|| {
                quarry_core::err!("count query returned a non integer value: {value:?}")
            }),
            None => Ok(0),
        }
    }

    /// Inserts the record.
    ///
    /// When the primary key is auto-incremented and the record leaves it
    /// unset, it is filled from the driver's last insert id. The record is
    /// committed once the driver reports success.
    pub fn insert(&self, layout: &Layout, record: &mut Record) -> Result<bool> {
        let sql = self.serializer.insert_record(layout, record)?;
        self.log(&sql);

        if !self.driver.insert(&sql)? {
            return Ok(false);
        }

        if let Some(field) = layout.primary_field().filter(|field| field.auto_increment) {
            let unset = record.get(&field.name).map_or(true, Value::is_null);

            if unset {
                if let Some(id) = self.driver.last_insert_id()? {
                    record.set(field.name.clone(), id);
                }
            }
        }

        record.commit();
        Ok(true)
    }

    /// Writes the record's changes. A record without changes is left alone
    /// and nothing is sent to the driver.
    pub fn update(&self, layout: &Layout, record: &mut Record) -> Result<bool> {
        if !record.is_changed() {
            return Ok(false);
        }

        let sql = self.serializer.update_record(layout, record)?;
        self.log(&sql);

        if !self.driver.update(&sql)? {
            return Ok(false);
        }

        record.commit();
        Ok(true)
    }

    pub fn delete(&self, layout: &Layout, record: &Record) -> Result<bool> {
        let sql = self.serializer.delete_record(layout, record)?;
        self.log(&sql);

        self.driver.delete(&sql)
    }

    /// A schema migration executor over a copy of this handle's schema,
    /// emitting DDL through the same driver. Hand it to [`Db::apply`] once
    /// the migration is done.
    pub fn migrate(&self) -> SqlSchemaExecutor {
        SqlSchemaExecutor::new(
            Schema::clone(&self.schema),
            self.driver.clone(),
            self.serializer.clone(),
        )
    }

    /// Adopts the schema a finished migration left behind. Clones of this
    /// handle made earlier keep the old schema.
    pub fn apply(&mut self, migration: SqlSchemaExecutor) {
        let schema = migration.into_schema();
        debug!(tables = schema.layouts().len(), "adopting migrated schema");

        self.schema = Arc::new(schema);
    }

    /// Creates the database behind the driver.
    pub fn create(&self) -> Result<bool> {
        self.driver.create()
    }

    /// Drops the database behind the driver.
    pub fn destroy(&self) -> Result<bool> {
        self.driver.destroy()
    }

    /// Returns true if the table exists in the database.
    pub fn has_table(&self, name: &str) -> Result<bool> {
        self.driver.has(name)
    }

    fn log(&self, sql: &str) {
        if self.config.log_statements {
            info!(sql, "executing statement");
        } else {
            debug!(sql, "executing statement");
        }
    }
}
