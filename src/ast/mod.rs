pub mod builders;
pub mod clauses;
pub mod conditions;
pub mod datasets;
pub mod expr;
pub mod joins;
pub mod operators;
pub mod values;

pub use self::clauses::{
    ClauseMap, ClausePosition, DeletePosition, InsertPosition, SelectPosition, UpdatePosition,
};
pub use self::conditions::{Condition, ConditionGroup, FullCondition};
pub use self::datasets::{Dataset, TypeInfo};
pub use self::expr::{CaseExpr, ColumnExpr, Expr, TableExpr, TypeExpr};
pub use self::joins::JoinExpr;
pub use self::operators::{JoinKind, LogicOp, Operator, SortOrder};
pub use self::values::Value;
