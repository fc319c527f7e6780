use super::Layout;
use crate::{Error, Result};

use indexmap::IndexMap;
use std::sync::Arc;

/// Registry of every table layout known to the application.
///
/// Layouts are registered explicitly at startup. Queries hold `Arc` snapshots
/// of a layout, so changing a layout through [`Schema::layout_mut`] never
/// alters a query that was already built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    tables: IndexMap<String, Arc<Layout>>,
}

impl Schema {
    pub fn new() -> Schema {
        Schema::default()
    }

    /// Registers a layout, failing if a table of the same name exists.
    pub fn register(&mut self, layout: Layout) -> Result<Arc<Layout>> {
        if self.tables.contains_key(layout.name()) {
            return Err(Error::invalid_schema(format!(
                "table `{}` is already registered",
                layout.name()
            )));
        }

        let layout = Arc::new(layout);
        self.tables
            .insert(layout.name().to_string(), layout.clone());
        Ok(layout)
    }

    pub fn layout(&self, name: &str) -> Option<&Arc<Layout>> {
        self.tables.get(name)
    }

    /// Mutable access to a layout. Outstanding `Arc` snapshots keep the
    /// previous version.
    pub fn layout_mut(&mut self, name: &str) -> Option<&mut Layout> {
        self.tables.get_mut(name).map(Arc::make_mut)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Arc<Layout>> {
        self.tables.shift_remove(name)
    }

    pub fn rename(&mut self, from: &str, to: &str) -> Result<()> {
        if self.tables.contains_key(to) {
            return Err(Error::invalid_schema(format!(
                "table `{to}` is already registered"
            )));
        }

        let Some(mut layout) = self.tables.shift_remove(from) else {
            return Err(Error::invalid_schema(format!(
                "table `{from}` is not registered"
            )));
        };

        Arc::make_mut(&mut layout).set_name(to);
        self.tables.insert(to.to_string(), layout);
        Ok(())
    }

    pub fn layouts(&self) -> impl ExactSizeIterator<Item = &Arc<Layout>> + '_ {
        self.tables.values()
    }
}
