use super::ID_TYPE;
use crate::{
    schema::{ColumnType, Field, ForeignKey, Index, LayoutChange},
    Error, Layout, Result,
};

/// DSL for changing one table.
///
/// Implementors provide [`layout`](Self::layout) and [`alter`](Self::alter);
/// every other method is expressed as a batch of [`LayoutChange`]s passed to
/// `alter`, which applies them atomically.
pub trait TableMigrationExecutor {
    /// The table as it is after every call made so far.
    fn layout(&self) -> &Layout;

    /// Applies a batch of changes. Either all of them take effect or none.
    fn alter(&mut self, changes: Vec<LayoutChange>) -> Result<()>;

    /// Adds the conventional `_id` primary key.
    fn id(&mut self) -> Result<()> {
        self.increments("_id")
    }

    /// Adds an auto-incrementing unsigned long column and makes it the
    /// primary key.
    fn increments(&mut self, name: &str) -> Result<()> {
        self.alter(vec![
            LayoutChange::AddField(Field::new(name, ID_TYPE).auto_increment()),
            LayoutChange::AddIndex(Index::primary(name)),
        ])
    }

    fn int(&mut self, name: &str, unsigned: bool) -> Result<()> {
        let ty = if unsigned { "int:unsigned" } else { "int" };
        self.field(name, ty, true)
    }

    fn long(&mut self, name: &str, unsigned: bool) -> Result<()> {
        let ty = if unsigned { "long:unsigned" } else { "long" };
        self.field(name, ty, true)
    }

    fn string(&mut self, name: &str, length: u32) -> Result<()> {
        self.field(name, &format!("string:{length}"), true)
    }

    fn text(&mut self, name: &str) -> Result<()> {
        self.field(name, "text", true)
    }

    fn enumeration(&mut self, name: &str, options: &[&str]) -> Result<()> {
        self.field(name, &format!("enum:{}", options.join(",")), true)
    }

    fn boolean(&mut self, name: &str) -> Result<()> {
        self.field(name, "bool", true)
    }

    fn float(&mut self, name: &str) -> Result<()> {
        self.field(name, "float", true)
    }

    fn double(&mut self, name: &str) -> Result<()> {
        self.field(name, "double", true)
    }

    fn blob(&mut self, name: &str) -> Result<()> {
        self.field(name, "blob", true)
    }

    /// Adds a column of any type. The type string is checked before anything
    /// changes.
    fn field(&mut self, name: &str, ty: &str, nullable: bool) -> Result<()> {
        ColumnType::parse(ty)?;

        let mut field = Field::new(name, ty);
        field.nullable = nullable;
        self.alter(vec![LayoutChange::AddField(field)])
    }

    fn index(&mut self, name: &str, fields: &[&str]) -> Result<()> {
        self.alter(vec![LayoutChange::AddIndex(Index::new(
            name,
            fields.iter().copied(),
        ))])
    }

    fn unique(&mut self, name: &str, fields: &[&str]) -> Result<()> {
        self.alter(vec![LayoutChange::AddIndex(Index::unique(
            name,
            fields.iter().copied(),
        ))])
    }

    fn primary(&mut self, field: &str) -> Result<()> {
        self.alter(vec![LayoutChange::AddIndex(Index::primary(field))])
    }

    /// Adds a column referencing the primary key of `referenced`, along with
    /// the foreign key constraint. The column takes the referenced key's
    /// type.
    fn foreign(&mut self, name: &str, referenced: &Layout) -> Result<()> {
        let Some(key) = referenced.primary_field() else {
            return Err(Error::missing_primary_key(referenced.name()));
        };

        self.alter(vec![
            LayoutChange::AddField(Field::new(name, key.ty.clone())),
            LayoutChange::AddForeignKey(ForeignKey {
                name: name.to_string(),
                fields: vec![name.to_string()],
                referenced_table: referenced.name().to_string(),
                referenced_fields: vec![key.name.clone()],
            }),
        ])
    }

    /// Adds nullable `created` and `updated` columns.
    fn timestamps(&mut self) -> Result<()> {
        self.alter(vec![
            LayoutChange::AddField(Field::new("created", ID_TYPE)),
            LayoutChange::AddField(Field::new("updated", ID_TYPE)),
        ])
    }

    /// Adds an indexed, nullable `removed` column.
    fn soft_delete(&mut self) -> Result<()> {
        self.alter(vec![
            LayoutChange::AddField(Field::new("removed", ID_TYPE)),
            LayoutChange::AddIndex(Index::new("removed_idx", ["removed"])),
        ])
    }

    /// Drops a column. Foreign keys using it are dropped first.
    fn drop_column(&mut self, name: &str) -> Result<()> {
        let mut changes: Vec<_> = self
            .layout()
            .foreign_keys()
            .filter(|foreign_key| foreign_key.covers(name))
            .map(|foreign_key| LayoutChange::DropForeignKey(foreign_key.name.clone()))
            .collect();

        changes.push(LayoutChange::DropField(name.to_string()));
        self.alter(changes)
    }

    fn drop_index(&mut self, name: &str) -> Result<()> {
        self.alter(vec![LayoutChange::DropIndex(name.to_string())])
    }
}

impl<T: TableMigrationExecutor + ?Sized> TableMigrationExecutor for Box<T> {
    fn layout(&self) -> &Layout {
        (**self).layout()
    }

    fn alter(&mut self, changes: Vec<LayoutChange>) -> Result<()> {
        (**self).alter(changes)
    }

    fn id(&mut self) -> Result<()> {
        (**self).id()
    }

    fn increments(&mut self, name: &str) -> Result<()> {
        (**self).increments(name)
    }

    fn int(&mut self, name: &str, unsigned: bool) -> Result<()> {
        (**self).int(name, unsigned)
    }

    fn long(&mut self, name: &str, unsigned: bool) -> Result<()> {
        (**self).long(name, unsigned)
    }

    fn string(&mut self, name: &str, length: u32) -> Result<()> {
        (**self).string(name, length)
    }

    fn text(&mut self, name: &str) -> Result<()> {
        (**self).text(name)
    }

    fn enumeration(&mut self, name: &str, options: &[&str]) -> Result<()> {
        (**self).enumeration(name, options)
    }

    fn boolean(&mut self, name: &str) -> Result<()> {
        (**self).boolean(name)
    }

    fn float(&mut self, name: &str) -> Result<()> {
        (**self).float(name)
    }

    fn double(&mut self, name: &str) -> Result<()> {
        (**self).double(name)
    }

    fn blob(&mut self, name: &str) -> Result<()> {
        (**self).blob(name)
    }

    fn field(&mut self, name: &str, ty: &str, nullable: bool) -> Result<()> {
        (**self).field(name, ty, nullable)
    }

    fn index(&mut self, name: &str, fields: &[&str]) -> Result<()> {
        (**self).index(name, fields)
    }

    fn unique(&mut self, name: &str, fields: &[&str]) -> Result<()> {
        (**self).unique(name, fields)
    }

    fn primary(&mut self, field: &str) -> Result<()> {
        (**self).primary(field)
    }

    fn foreign(&mut self, name: &str, referenced: &Layout) -> Result<()> {
        (**self).foreign(name, referenced)
    }

    fn timestamps(&mut self) -> Result<()> {
        (**self).timestamps()
    }

    fn soft_delete(&mut self) -> Result<()> {
        (**self).soft_delete()
    }

    fn drop_column(&mut self, name: &str) -> Result<()> {
        (**self).drop_column(name)
    }

    fn drop_index(&mut self, name: &str) -> Result<()> {
        (**self).drop_index(name)
    }
}
