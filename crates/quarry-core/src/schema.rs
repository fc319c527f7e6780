mod change;
pub use change::LayoutChange;

mod field;
pub use field::Field;

mod index;
pub use index::{ForeignKey, Index, PRIMARY_INDEX};

mod layout;
pub use layout::Layout;

mod schema;
pub use schema::Schema;

mod ty;
pub use ty::{ColumnType, DEFAULT_STRING_LENGTH};
