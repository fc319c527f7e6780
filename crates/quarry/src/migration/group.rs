use super::{SchemaMigrationExecutor, TableDefinition, TableMigrationExecutor};
use crate::{schema::LayoutChange, Error, Layout, Result};

use tracing::trace;

/// Runs every call against several executors, in order.
///
/// A call reaches the members one after the other and stops at the first
/// failure; members after the failing one never see the call. Calls that
/// return something answer with the first member's result.
#[derive(Debug)]
pub struct Group<E> {
    first: E,
    rest: Vec<E>,
}

impl<E> Group<E> {
    /// Fails if `executors` is empty.
    pub fn new(executors: Vec<E>) -> Result<Group<E>> {
        let mut executors = executors.into_iter();

        let Some(first) = executors.next() else {
            return Err(Error::invalid_statement(
                "an executor group needs at least one member",
            ));
        };

        Ok(Group {
            first,
            rest: executors.collect(),
        })
    }

    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn members(&self) -> impl Iterator<Item = &E> + '_ {
        std::iter::once(&self.first).chain(&self.rest)
    }

    pub fn into_inner(self) -> Vec<E> {
        let mut executors = Vec::with_capacity(self.len());
        executors.push(self.first);
        executors.extend(self.rest);
        executors
    }

    fn each(&mut self, mut f: impl FnMut(&mut E) -> Result<()>) -> Result<()> {
        f(&mut self.first)?;

        for (i, executor) in self.rest.iter_mut().enumerate() {
            trace!(member = i + 1, "forwarding migration call");
            f(executor)?;
        }

        Ok(())
    }
}

impl<E: TableMigrationExecutor> TableMigrationExecutor for Group<E> {
    fn layout(&self) -> &Layout {
        self.first.layout()
    }

    fn alter(&mut self, changes: Vec<LayoutChange>) -> Result<()> {
        self.each(|executor| executor.alter(changes.clone()))
    }

    fn id(&mut self) -> Result<()> {
        self.each(|executor| executor.id())
    }

    fn increments(&mut self, name: &str) -> Result<()> {
        self.each(|executor| executor.increments(name))
    }

    fn int(&mut self, name: &str, unsigned: bool) -> Result<()> {
        self.each(|executor| executor.int(name, unsigned))
    }

    fn long(&mut self, name: &str, unsigned: bool) -> Result<()> {
        self.each(|executor| executor.long(name, unsigned))
    }

    fn string(&mut self, name: &str, length: u32) -> Result<()> {
        self.each(|executor| executor.string(name, length))
    }

    fn text(&mut self, name: &str) -> Result<()> {
        self.each(|executor| executor.text(name))
    }

    fn enumeration(&mut self, name: &str, options: &[&str]) -> Result<()> {
        self.each(|executor| executor.enumeration(name, options))
    }

    fn boolean(&mut self, name: &str) -> Result<()> {
        self.each(|executor| executor.boolean(name))
    }

    fn float(&mut self, name: &str) -> Result<()> {
        self.each(|executor| executor.float(name))
    }

    fn double(&mut self, name: &str) -> Result<()> {
        self.each(|executor| executor.double(name))
    }

    fn blob(&mut self, name: &str) -> Result<()> {
        self.each(|executor| executor.blob(name))
    }

    fn field(&mut self, name: &str, ty: &str, nullable: bool) -> Result<()> {
        self.each(|executor| executor.field(name, ty, nullable))
    }

    fn index(&mut self, name: &str, fields: &[&str]) -> Result<()> {
        self.each(|executor| executor.index(name, fields))
    }

    fn unique(&mut self, name: &str, fields: &[&str]) -> Result<()> {
        self.each(|executor| executor.unique(name, fields))
    }

    fn primary(&mut self, field: &str) -> Result<()> {
        self.each(|executor| executor.primary(field))
    }

    fn foreign(&mut self, name: &str, referenced: &Layout) -> Result<()> {
        self.each(|executor| executor.foreign(name, referenced))
    }

    fn timestamps(&mut self) -> Result<()> {
        self.each(|executor| executor.timestamps())
    }

    fn soft_delete(&mut self) -> Result<()> {
        self.each(|executor| executor.soft_delete())
    }

    fn drop_column(&mut self, name: &str) -> Result<()> {
        self.each(|executor| executor.drop_column(name))
    }

    fn drop_index(&mut self, name: &str) -> Result<()> {
        self.each(|executor| executor.drop_index(name))
    }
}

impl<E: SchemaMigrationExecutor> SchemaMigrationExecutor for Group<E> {
    /// `define` runs once per member.
    fn add(&mut self, name: &str, define: &mut TableDefinition<'_>) -> Result<()> {
        self.each(|executor| executor.add(name, define))
    }

    fn table<'a>(&'a mut self, name: &str) -> Result<Box<dyn TableMigrationExecutor + 'a>> {
        let first = self.first.table(name)?;
        let rest = self
            .rest
            .iter_mut()
            .map(|executor| executor.table(name))
            .collect::<Result<Vec<_>>>()?;

        Ok(Box::new(Group { first, rest }))
    }

    fn rename_table(&mut self, from: &str, to: &str) -> Result<()> {
        self.each(|executor| executor.rename_table(from, to))
    }

    fn drop_table(&mut self, name: &str) -> Result<()> {
        self.each(|executor| executor.drop_table(name))
    }

    fn has(&self, name: &str) -> Result<bool> {
        self.first.has(name)
    }

    fn layout(&self, name: &str) -> Option<&Layout> {
        self.first.layout(name)
    }
}
