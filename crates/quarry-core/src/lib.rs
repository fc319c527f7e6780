#[macro_use]
mod error;
pub use error::{Error, IntoError};

pub mod driver;
pub use driver::{Driver, ResultSet};

pub mod record;
pub use record::Record;

pub mod schema;
pub use schema::{Layout, Schema};

pub mod stmt;

pub type Result<T, E = Error> = core::result::Result<T, E>;
