use crate::{schema::Layout, Result};

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

/// Allocates the numeric suffix of the next table alias.
fn next_alias_id() -> usize {
    static NEXT_ALIAS_ID: AtomicUsize = AtomicUsize::new(1);

    NEXT_ALIAS_ID.fetch_add(1, Ordering::Relaxed)
}

/// A handle to one occurrence of a table within a query.
///
/// The alias is `<table>_<n>` where `n` comes from a process-wide monotonic
/// counter, so no two references ever share an alias.
#[derive(Debug, Clone, PartialEq)]
pub struct TableReference {
    layout: Arc<Layout>,
    alias: String,
}

/// A column of a specific [`TableReference`].
///
/// Only obtainable through [`TableReference::output`], which checks the
/// column exists.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldReference {
    table: TableReference,
    name: String,
}

impl TableReference {
    pub(crate) fn new(layout: Arc<Layout>) -> TableReference {
        let alias = format!("{}_{}", layout.name(), next_alias_id());
        TableReference { layout, alias }
    }

    pub fn layout(&self) -> &Arc<Layout> {
        &self.layout
    }

    pub fn name(&self) -> &str {
        self.layout.name()
    }

    /// Returns `(table name, alias)` for the grammar.
    pub fn raw(&self) -> (&str, &str) {
        (self.layout.name(), &self.alias)
    }

    /// References the named column, failing if the layout has no such field.
    pub fn output(&self, name: &str) -> Result<FieldReference> {
        self.layout.expect_field(name)?;

        Ok(FieldReference {
            table: self.clone(),
            name: name.to_string(),
        })
    }

    /// References every column, in layout order.
    pub fn outputs(&self) -> impl Iterator<Item = FieldReference> + '_ {
        self.layout.fields().map(|field| FieldReference {
            table: self.clone(),
            name: field.name.clone(),
        })
    }
}

impl FieldReference {
    pub fn table(&self) -> &TableReference {
        &self.table
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `(table alias, field name)` for the grammar.
    pub fn raw(&self) -> (&str, &str) {
        (&self.table.alias, &self.name)
    }
}
