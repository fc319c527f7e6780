use super::TableMigrationExecutor;
use crate::{Layout, Result};

/// Defines the columns and indexes of a table being created.
pub type TableDefinition<'a> = dyn FnMut(&mut dyn TableMigrationExecutor) -> Result<()> + 'a;

/// DSL for changing the set of tables.
pub trait SchemaMigrationExecutor {
    /// Creates a table. `define` receives an executor over the new, empty
    /// layout; the table is created once `define` returns successfully.
    fn add(&mut self, name: &str, define: &mut TableDefinition<'_>) -> Result<()>;

    /// An executor for altering an existing table.
    fn table<'a>(&'a mut self, name: &str) -> Result<Box<dyn TableMigrationExecutor + 'a>>;

    fn rename_table(&mut self, from: &str, to: &str) -> Result<()>;

    fn drop_table(&mut self, name: &str) -> Result<()>;

    fn has(&self, name: &str) -> Result<bool>;

    fn layout(&self, name: &str) -> Option<&Layout>;
}

impl<T: SchemaMigrationExecutor + ?Sized> SchemaMigrationExecutor for Box<T> {
    fn add(&mut self, name: &str, define: &mut TableDefinition<'_>) -> Result<()> {
        (**self).add(name, define)
    }

    fn table<'a>(&'a mut self, name: &str) -> Result<Box<dyn TableMigrationExecutor + 'a>> {
        (**self).table(name)
    }

    fn rename_table(&mut self, from: &str, to: &str) -> Result<()> {
        (**self).rename_table(from, to)
    }

    fn drop_table(&mut self, name: &str) -> Result<()> {
        (**self).drop_table(name)
    }

    fn has(&self, name: &str) -> Result<bool> {
        (**self).has(name)
    }

    fn layout(&self, name: &str) -> Option<&Layout> {
        (**self).layout(name)
    }
}
