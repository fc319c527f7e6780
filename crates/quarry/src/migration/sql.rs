use super::{
    state::{define_layout, missing_table},
    SchemaMigrationExecutor, TableDefinition, TableMigrationExecutor,
};
use crate::{driver::Driver, schema::LayoutChange, Error, Layout, Result, Schema, Serializer};

use std::sync::Arc;
use tracing::debug;

/// Alters a table through the driver, keeping its layout in step.
///
/// The layout only changes once the driver accepted the statement.
#[derive(Debug)]
pub struct SqlTableExecutor<'a> {
    layout: &'a mut Layout,
    driver: &'a dyn Driver,
    serializer: &'a Serializer,
}

impl<'a> SqlTableExecutor<'a> {
    pub fn new(
        layout: &'a mut Layout,
        driver: &'a dyn Driver,
        serializer: &'a Serializer,
    ) -> SqlTableExecutor<'a> {
        SqlTableExecutor {
            layout,
            driver,
            serializer,
        }
    }
}

impl TableMigrationExecutor for SqlTableExecutor<'_> {
    fn layout(&self) -> &Layout {
        &*self.layout
    }

    fn alter(&mut self, changes: Vec<LayoutChange>) -> Result<()> {
        let mut next = self.layout.clone();
        next.apply_all(&changes)?;

        let sql = self.serializer.alter_table(&*self.layout, &changes)?;
        execute(self.driver, &sql)?;

        *self.layout = next;
        Ok(())
    }
}

/// Runs schema migrations against a live database.
///
/// Tables created, renamed or dropped here are reflected in the executor's
/// own [`Schema`], which starts as a copy of the application schema.
#[derive(Debug)]
pub struct SqlSchemaExecutor {
    schema: Schema,
    driver: Arc<dyn Driver>,
    serializer: Serializer,
}

impl SqlSchemaExecutor {
    pub fn new(schema: Schema, driver: Arc<dyn Driver>, serializer: Serializer) -> SqlSchemaExecutor {
        SqlSchemaExecutor {
            schema,
            driver,
            serializer,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn into_schema(self) -> Schema {
        self.schema
    }
}

impl SchemaMigrationExecutor for SqlSchemaExecutor {
    fn add(&mut self, name: &str, define: &mut TableDefinition<'_>) -> Result<()> {
        if self.schema.contains(name) {
            return Err(Error::invalid_schema(format!("table `{name}` already exists")));
        }

        let layout = define_layout(name, define)?;
        let sql = self.serializer.create_table(&layout)?;
        execute(&*self.driver, &sql)?;

        self.schema.register(layout)?;
        Ok(())
    }

    fn table<'a>(&'a mut self, name: &str) -> Result<Box<dyn TableMigrationExecutor + 'a>> {
        let layout = self
            .schema
            .layout_mut(name)
            .ok_or_else(|| missing_table(name))?;

        Ok(Box::new(SqlTableExecutor::new(
            layout,
            &*self.driver,
            &self.serializer,
        )))
    }

    fn rename_table(&mut self, from: &str, to: &str) -> Result<()> {
        if !self.schema.contains(from) {
            return Err(missing_table(from));
        }

        if self.schema.contains(to) {
            return Err(Error::invalid_schema(format!("table `{to}` already exists")));
        }

        let sql = self.serializer.rename_table(from, to)?;
        execute(&*self.driver, &sql)?;

        self.schema.rename(from, to)
    }

    fn drop_table(&mut self, name: &str) -> Result<()> {
        if !self.schema.contains(name) {
            return Err(missing_table(name));
        }

        let sql = self.serializer.drop_table(name)?;
        execute(&*self.driver, &sql)?;

        self.schema.remove(name);
        Ok(())
    }

    fn has(&self, name: &str) -> Result<bool> {
        Ok(self.schema.contains(name))
    }

    fn layout(&self, name: &str) -> Option<&Layout> {
        self.schema.layout(name).map(|layout| &**layout)
    }
}

fn execute(driver: &dyn Driver, sql: &str) -> Result<()> {
    debug!(sql, "executing migration statement");

    if !driver.execute(sql)? {
        quarry_core::bail!("driver rejected statement: {sql}");
    }

    Ok(())
}
