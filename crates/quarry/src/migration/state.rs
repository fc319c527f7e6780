use super::{SchemaMigrationExecutor, TableDefinition, TableMigrationExecutor};
use crate::{schema::LayoutChange, Error, Layout, Result, Schema};

use tracing::debug;

/// Applies table changes to a layout in memory only.
#[derive(Debug)]
pub struct StateTableExecutor<'a> {
    layout: &'a mut Layout,
}

impl<'a> StateTableExecutor<'a> {
    pub fn new(layout: &'a mut Layout) -> StateTableExecutor<'a> {
        StateTableExecutor { layout }
    }
}

impl TableMigrationExecutor for StateTableExecutor<'_> {
    fn layout(&self) -> &Layout {
        &*self.layout
    }

    fn alter(&mut self, changes: Vec<LayoutChange>) -> Result<()> {
        self.layout.apply_all(&changes)?;
        debug!(table = self.layout.name(), changes = changes.len(), "updated table state");
        Ok(())
    }
}

/// Tracks schema changes in memory only.
#[derive(Debug)]
pub struct StateSchemaExecutor<'a> {
    schema: &'a mut Schema,
}

impl<'a> StateSchemaExecutor<'a> {
    pub fn new(schema: &'a mut Schema) -> StateSchemaExecutor<'a> {
        StateSchemaExecutor { schema }
    }
}

/// Runs `define` over a fresh layout named `name`.
pub(super) fn define_layout(name: &str, define: &mut TableDefinition<'_>) -> Result<Layout> {
    let mut layout = Layout::new(name);
    define(&mut StateTableExecutor::new(&mut layout))?;
    Ok(layout)
}

pub(super) fn missing_table(name: &str) -> Error {
    Error::invalid_schema(format!("table `{name}` does not exist"))
}

impl SchemaMigrationExecutor for StateSchemaExecutor<'_> {
    fn add(&mut self, name: &str, define: &mut TableDefinition<'_>) -> Result<()> {
        if self.schema.contains(name) {
            return Err(Error::invalid_schema(format!("table `{name}` already exists")));
        }

        let layout = define_layout(name, define)?;
        self.schema.register(layout)?;
        debug!(table = name, "added table state");
        Ok(())
    }

    fn table<'a>(&'a mut self, name: &str) -> Result<Box<dyn TableMigrationExecutor + 'a>> {
        let layout = self
            .schema
            .layout_mut(name)
            .ok_or_else(|| missing_table(name))?;

        Ok(Box::new(StateTableExecutor::new(layout)))
    }

    fn rename_table(&mut self, from: &str, to: &str) -> Result<()> {
        self.schema.rename(from, to)
    }

    fn drop_table(&mut self, name: &str) -> Result<()> {
        self.schema
            .remove(name)
            .map(drop)
            .ok_or_else(|| missing_table(name))
    }

    fn has(&self, name: &str) -> Result<bool> {
        Ok(self.schema.contains(name))
    }

    fn layout(&self, name: &str) -> Option<&Layout> {
        self.schema.layout(name).map(|layout| &**layout)
    }
}
