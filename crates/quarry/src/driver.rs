mod logging;
pub use logging::LoggingDriver;

mod noop;
pub use noop::NoopDriver;

pub use quarry_core::driver::{Driver, ResultSet};
