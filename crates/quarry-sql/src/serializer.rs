#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Period};

mod dialect;
pub use dialect::TableOptions;

mod ident;
use ident::Ident;

// Fragment serializers
mod column_def;
mod name;
mod query;
mod restriction;
mod statement;
mod ty;
mod value;

use crate::{quoter::Quoter, stmt::Statement, MysqlQuoter};

use quarry_core::{
    schema::{Layout, LayoutChange},
    stmt::Query,
    Record, Result,
};

/// Serialize a statement to a SQL string.
///
/// The serializer is stateless apart from its quoter and table options and
/// can be shared freely. Statements are rendered without a trailing `;`.
#[derive(Debug, Clone)]
pub struct Serializer<Q = MysqlQuoter> {
    /// Escapes identifiers and literals for the target dialect
    quoter: Q,

    /// Appended to every `CREATE TABLE`
    table_options: TableOptions,
}

struct Formatter<'a, Q> {
    /// Handle to the serializer
    serializer: &'a Serializer<Q>,

    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl<Q: Quoter> Serializer<Q> {
    pub fn new(quoter: Q) -> Serializer<Q> {
        Serializer {
            quoter,
            table_options: TableOptions::default(),
        }
    }

    pub fn with_table_options(mut self, table_options: TableOptions) -> Serializer<Q> {
        self.table_options = table_options;
        self
    }

    pub fn quoter(&self) -> &Q {
        &self.quoter
    }

    pub fn table_options(&self) -> &TableOptions {
        &self.table_options
    }

    pub fn serialize(&self, stmt: &Statement) -> Result<String> {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        stmt.to_sql(&mut fmt)?;

        Ok(ret)
    }

    pub fn query(&self, query: &Query) -> Result<String> {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        query.to_sql(&mut fmt)?;

        Ok(ret)
    }

    pub fn insert_record(&self, layout: &Layout, record: &Record) -> Result<String> {
        self.serialize(&Statement::insert_record(layout, record)?)
    }

    pub fn update_record(&self, layout: &Layout, record: &Record) -> Result<String> {
        self.serialize(&Statement::update_record(layout, record)?)
    }

    pub fn delete_record(&self, layout: &Layout, record: &Record) -> Result<String> {
        self.serialize(&Statement::delete_record(layout, record)?)
    }

    pub fn create_table(&self, layout: &Layout) -> Result<String> {
        self.serialize(&Statement::create_table(layout)?)
    }

    pub fn drop_table(&self, name: &str) -> Result<String> {
        self.serialize(&Statement::drop_table(name))
    }

    /// Renders `changes` to `layout` as one ALTER TABLE. `layout` is the
    /// table before the changes are applied.
    pub fn alter_table(&self, layout: &Layout, changes: &[LayoutChange]) -> Result<String> {
        self.serialize(&Statement::alter_table(layout, changes)?)
    }

    pub fn rename_table(&self, from: &str, to: &str) -> Result<String> {
        self.serialize(&Statement::rename_table(from, to))
    }
}
