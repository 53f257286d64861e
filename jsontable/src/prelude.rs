pub use crate::build::Build;
pub use crate::column::{
    Column, ColumnDef, ColumnExists, ColumnList, NestedPath, OrdinalityColumn, Quotes,
};
pub use crate::passing::{Passing, PassingList};
pub use crate::path::{ContextItem, PathExpression};
pub use crate::query::JsonQuery;
pub use crate::sql::Sql;
pub use crate::table::JsonTable;
pub use crate::{JsonTableError, JsonTableResult};

#[cfg(feature = "postgres")]
pub use crate::execute::SqlExecutor;
