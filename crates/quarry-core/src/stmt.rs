mod join;
pub use join::{Join, JoinDirection};

mod op;
pub use op::Operator;

mod operand;
pub use operand::Operand;

mod order_by;
pub use order_by::{Direction, OrderBy, OrderTarget};

mod query;
pub use query::{Query, COUNT_ALIAS};

mod restriction;
pub use restriction::Restriction;

mod restriction_group;
pub use restriction_group::{Condition, GroupType, RestrictionGroup};

mod select;
pub use select::{Aggregate, SelectExpression};

mod table_ref;
pub use table_ref::{FieldReference, TableReference};

mod value;
pub use value::Value;
