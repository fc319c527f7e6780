pub mod quoter;
pub use quoter::{MysqlQuoter, Quoter};

pub mod serializer;
pub use serializer::{Serializer, TableOptions};

pub mod stmt;
pub use stmt::Statement;
