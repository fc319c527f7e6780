use super::{Field, ForeignKey, Index, LayoutChange};
use crate::{stmt::TableReference, Error, Result};

use indexmap::IndexMap;
use std::sync::Arc;

/// Physical definition of a table: its fields, indexes and foreign keys.
///
/// Field order is declaration order and is the column order used when
/// rendering `CREATE TABLE` and `INSERT` statements. A layout has at most one
/// primary index and that index covers a single field. Composite primary keys
/// are not supported.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    name: String,
    fields: IndexMap<String, Field>,
    indexes: IndexMap<String, Index>,
    foreign_keys: IndexMap<String, ForeignKey>,
}

impl Layout {
    pub fn new(name: impl Into<String>) -> Layout {
        Layout {
            name: name.into(),
            fields: IndexMap::new(),
            indexes: IndexMap::new(),
            foreign_keys: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Allocates a new reference to this table.
    ///
    /// Each call yields a fresh alias, so two queries (or both sides of a
    /// self-join) built from the same layout never collide.
    pub fn table_reference(self: &Arc<Self>) -> TableReference {
        TableReference::new(self.clone())
    }

    pub fn fields(&self) -> impl ExactSizeIterator<Item = &Field> + '_ {
        self.fields.values()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Returns the field, or an unknown field error naming this table.
    pub fn expect_field(&self, name: &str) -> Result<&Field> {
        self.fields
            .get(name)
            .ok_or_else(|| Error::unknown_field(&self.name, name))
    }

    pub fn indexes(&self) -> impl ExactSizeIterator<Item = &Index> + '_ {
        self.indexes.values()
    }

    pub fn index(&self, name: &str) -> Option<&Index> {
        self.indexes.get(name)
    }

    pub fn foreign_keys(&self) -> impl ExactSizeIterator<Item = &ForeignKey> + '_ {
        self.foreign_keys.values()
    }

    pub fn foreign_key(&self, name: &str) -> Option<&ForeignKey> {
        self.foreign_keys.get(name)
    }

    pub fn primary_key(&self) -> Option<&Index> {
        self.indexes.values().find(|index| index.primary)
    }

    pub fn primary_field(&self) -> Option<&Field> {
        let index = self.primary_key()?;
        self.fields.get(index.fields.first()?)
    }

    pub fn put_field(&mut self, field: Field) -> Result<()> {
        if self.fields.contains_key(&field.name) {
            return Err(Error::invalid_schema(format!(
                "field `{}` already exists on table `{}`",
                field.name, self.name
            )));
        }

        self.fields.insert(field.name.clone(), field);
        Ok(())
    }

    /// Removes a field along with every foreign key that uses it. Indexes
    /// lose the field and are removed once they cover nothing.
    pub fn unset_field(&mut self, name: &str) -> Result<Field> {
        let field = self
            .fields
            .shift_remove(name)
            .ok_or_else(|| Error::unknown_field(&self.name, name))?;

        self.foreign_keys.retain(|_, foreign_key| !foreign_key.covers(name));

        for index in self.indexes.values_mut() {
            index.fields.retain(|field| field != name);
        }
        self.indexes.retain(|_, index| !index.fields.is_empty());

        Ok(field)
    }

    pub fn put_index(&mut self, index: Index) -> Result<()> {
        if self.indexes.contains_key(&index.name) {
            return Err(Error::invalid_schema(format!(
                "index `{}` already exists on table `{}`",
                index.name, self.name
            )));
        }

        if index.fields.is_empty() {
            return Err(Error::invalid_schema(format!(
                "index `{}` on table `{}` covers no fields",
                index.name, self.name
            )));
        }

        for field in &index.fields {
            self.expect_field(field)?;
        }

        if index.primary {
            if self.primary_key().is_some() {
                return Err(Error::invalid_schema(format!(
                    "table `{}` already has a primary key",
                    self.name
                )));
            }

            if index.fields.len() != 1 {
                return Err(Error::invalid_schema(format!(
                    "primary key of table `{}` must cover exactly one field",
                    self.name
                )));
            }
        }

        self.indexes.insert(index.name.clone(), index);
        Ok(())
    }

    pub fn unset_index(&mut self, name: &str) -> Result<Index> {
        self.indexes.shift_remove(name).ok_or_else(|| {
            Error::invalid_schema(format!(
                "index `{}` does not exist on table `{}`",
                name, self.name
            ))
        })
    }

    pub fn put_foreign_key(&mut self, foreign_key: ForeignKey) -> Result<()> {
        if self.foreign_keys.contains_key(&foreign_key.name) {
            return Err(Error::invalid_schema(format!(
                "foreign key `{}` already exists on table `{}`",
                foreign_key.name, self.name
            )));
        }

        if foreign_key.fields.len() != foreign_key.referenced_fields.len() {
            return Err(Error::invalid_schema(format!(
                "foreign key `{}` references {} fields with {}",
                foreign_key.name,
                foreign_key.referenced_fields.len(),
                foreign_key.fields.len()
            )));
        }

        for field in &foreign_key.fields {
            self.expect_field(field)?;
        }

        self.foreign_keys
            .insert(foreign_key.name.clone(), foreign_key);
        Ok(())
    }

    pub fn unset_foreign_key(&mut self, name: &str) -> Result<ForeignKey> {
        self.foreign_keys.shift_remove(name).ok_or_else(|| {
            Error::invalid_schema(format!(
                "foreign key `{}` does not exist on table `{}`",
                name, self.name
            ))
        })
    }

    /// Applies a single change. On error the layout is left untouched.
    pub fn apply(&mut self, change: &LayoutChange) -> Result<()> {
        match change {
            LayoutChange::AddField(field) => self.put_field(field.clone()),
            LayoutChange::DropField(name) => self.unset_field(name).map(drop),
            LayoutChange::AddIndex(index) => self.put_index(index.clone()),
            LayoutChange::DropIndex(name) => self.unset_index(name).map(drop),
            LayoutChange::AddForeignKey(foreign_key) => {
                self.put_foreign_key(foreign_key.clone())
            }
            LayoutChange::DropForeignKey(name) => self.unset_foreign_key(name).map(drop),
        }
    }

    /// Applies a batch of changes atomically: either all of them take effect
    /// or the layout is left as it was.
    pub fn apply_all<'a>(&mut self, changes: impl IntoIterator<Item = &'a LayoutChange>) -> Result<()> {
        let mut next = self.clone();
        for change in changes {
            next.apply(change)?;
        }
        *self = next;
        Ok(())
    }
}
