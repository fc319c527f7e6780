//! Imperative schema migrations.
//!
//! A [`SchemaMigrationExecutor`] creates, renames and drops tables and hands
//! out a [`TableMigrationExecutor`] per table. Every DSL call updates the
//! executor's in-memory [`Layout`](crate::Layout) right away, so later calls in
//! the same migration see the result of earlier ones.
//!
//! * [`SqlSchemaExecutor`] and [`SqlTableExecutor`] also emit DDL through a
//!   driver
//! * [`StateSchemaExecutor`] and [`StateTableExecutor`] only track state
//! * [`Group`] runs every call against several executors in order

mod group;
pub use group::Group;

mod schema;
pub use schema::{SchemaMigrationExecutor, TableDefinition};

mod sql;
pub use sql::{SqlSchemaExecutor, SqlTableExecutor};

mod state;
pub use state::{StateSchemaExecutor, StateTableExecutor};

mod table;
pub use table::TableMigrationExecutor;

/// Type string of `id()`/`increments()` columns and of the timestamp columns.
pub const ID_TYPE: &str = "long:unsigned";
