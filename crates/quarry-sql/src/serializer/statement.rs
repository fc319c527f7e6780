use super::{Comma, Formatter, Ident, ToSql};
use crate::{
    quoter::Quoter,
    stmt::{self, AlterTableAction, Statement, Value},
};

use quarry_core::{
    schema::{ForeignKey, Index},
    Result,
};

/// Columns, primary key, indexes and foreign keys of a CREATE TABLE, one per
/// line.
struct Definitions<'a>(&'a stmt::CreateTable);

/// `[UNIQUE ]INDEX name (cols)`, or `PRIMARY KEY (cols)` for the primary
/// index.
struct IndexClause<'a>(&'a Index);

struct ForeignKeyClause<'a>(&'a ForeignKey);

struct Assignment<'a>(&'a str, &'a Value);

struct Columns<'a>(&'a [String]);

impl ToSql for &Statement {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()> {
        match self {
            Statement::AlterTable(stmt) => stmt.to_sql(f),
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::DropTable(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Query(stmt) => stmt.to_sql(f),
            Statement::RenameTable(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()> {
        let name = &self.name;
        let definitions = Definitions(self);

        fmt!(f, "CREATE TABLE " name " (" definitions ")");

        let serializer = f.serializer;
        let options = &serializer.table_options;
        if let Some(engine) = &options.engine {
            fmt!(f, " ENGINE=" engine);
        }
        if let Some(charset) = &options.charset {
            fmt!(f, " DEFAULT CHARSET=" charset);
        }

        Ok(())
    }
}

impl ToSql for Definitions<'_> {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()> {
        let table = self.0;
        let mut s = "\n    ";

        for column in &table.columns {
            fmt!(f, s column);
            s = ",\n    ";
        }

        if let Some(primary_key) = &table.primary_key {
            fmt!(f, s "PRIMARY KEY (" Ident(primary_key) ")");
            s = ",\n    ";
        }

        for index in &table.indexes {
            fmt!(f, s IndexClause(index));
            s = ",\n    ";
        }

        for foreign_key in &table.foreign_keys {
            fmt!(f, s ForeignKeyClause(foreign_key));
            s = ",\n    ";
        }

        fmt!(f, "\n");
        Ok(())
    }
}

impl ToSql for IndexClause<'_> {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()> {
        let index = self.0;
        let columns = Columns(&index.fields);

        if index.primary {
            fmt!(f, "PRIMARY KEY (" columns ")");
        } else {
            let unique = if index.unique { "UNIQUE " } else { "" };
            fmt!(f, unique "INDEX " Ident(&index.name) " (" columns ")");
        }

        Ok(())
    }
}

impl ToSql for ForeignKeyClause<'_> {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()> {
        let foreign_key = self.0;
        let name = Ident(&foreign_key.name);
        let columns = Columns(&foreign_key.fields);
        let table = Ident(&foreign_key.referenced_table);
        let referenced = Columns(&foreign_key.referenced_fields);

        fmt!(
            f, "CONSTRAINT " name " FOREIGN KEY (" columns ") REFERENCES " table " (" referenced ")"
            " ON DELETE CASCADE ON UPDATE CASCADE"
        );

        Ok(())
    }
}

impl ToSql for Columns<'_> {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()> {
        fmt!(f, Comma(self.0.iter().map(Ident)));
        Ok(())
    }
}

impl ToSql for &stmt::AlterTable {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()> {
        let name = &self.name;
        let actions = Comma(&self.actions);

        fmt!(f, "ALTER TABLE " name " " actions);
        Ok(())
    }
}

impl ToSql for &AlterTableAction {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()> {
        match self {
            AlterTableAction::AddColumn(column) => fmt!(f, "ADD COLUMN " column),
            AlterTableAction::DropColumn(name) => fmt!(f, "DROP COLUMN " Ident(name)),
            AlterTableAction::AddIndex(index) => fmt!(f, "ADD " IndexClause(index)),
            AlterTableAction::DropIndex(name) => fmt!(f, "DROP INDEX " Ident(name)),
            AlterTableAction::DropPrimaryKey => fmt!(f, "DROP PRIMARY KEY"),
            AlterTableAction::AddForeignKey(foreign_key) => {
                fmt!(f, "ADD " ForeignKeyClause(foreign_key))
            }
            AlterTableAction::DropForeignKey(name) => fmt!(f, "DROP FOREIGN KEY " Ident(name)),
        }

        Ok(())
    }
}

impl ToSql for &stmt::DropTable {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()> {
        let name = &self.name;

        fmt!(f, "DROP TABLE " name);
        Ok(())
    }
}

impl ToSql for &stmt::RenameTable {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()> {
        let (from, to) = (&self.from, &self.to);

        fmt!(f, "RENAME TABLE " from " TO " to);
        Ok(())
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()> {
        let table = &self.table;
        let columns = Columns(&self.columns);
        let values = Comma(&self.values);

        fmt!(f, "INSERT INTO " table " (" columns ") VALUES ( " values " )");
        Ok(())
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()> {
        let assignments = Comma(
            self.assignments
                .iter()
                .map(|(column, value)| Assignment(column, value)),
        );
        let table = &self.table;
        let (key, value) = &self.key;

        fmt!(f, "UPDATE " table " SET " assignments " WHERE " Ident(key) " = " value);
        Ok(())
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()> {
        let table = &self.table;
        let (key, value) = &self.key;

        fmt!(f, "DELETE FROM " table " WHERE " Ident(key) " = " value);
        Ok(())
    }
}

impl ToSql for Assignment<'_> {
    fn to_sql<Q: Quoter>(self, f: &mut Formatter<'_, Q>) -> Result<()> {
        fmt!(f, Ident(self.0) " = " self.1);
        Ok(())
    }
}
