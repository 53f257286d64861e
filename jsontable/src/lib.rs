//!
//! Typed builder for the SQL/JSON `JSON_TABLE` clause.
//!
//! A tree is assembled bottom-up and rendered once at the root:
//!
//! ```text
//! JsonQuery
//!  └ JsonTable ─ ContextItem, PathExpression
//!     ├ PassingList ─ Passing*
//!     └ ColumnList ─ OrdinalityColumn | Column | ColumnExists | NestedPath
//!                                                            └ ColumnList ...
//! ```
//!
//! ```
//! use jsontable::prelude::*;
//!
//! # fn main() -> JsonTableResult<()> {
//! let columns = ColumnList::new(vec![
//!     OrdinalityColumn::new("id").into(),
//!     Column::new("kind", "text")
//!         .path(PathExpression::new("$.kind")?)
//!         .into(),
//! ])?;
//!
//! let query = JsonQuery::new(
//!     JsonTable::new("js", PathExpression::new("$.favorites[*]")?).columns(columns),
//! )
//! .from_table("films");
//!
//! assert_eq!(
//!     query.to_string(),
//!     "SELECT \"jt\".* FROM \"films\", JSON_TABLE (js, '$.favorites[*]' \
//!      COLUMNS (id FOR ORDINALITY, kind text PATH '$.kind')) AS \"jt\""
//! );
//! # Ok(())
//! # }
//! ```
//!

/// `Display` through the PostgreSQL rendering of a node.
macro_rules! display_via_sql {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ::std::fmt::Display for $ty {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    ::std::fmt::Display::fmt(&$crate::build::Build::as_sql(self), f)
                }
            }
        )*
    };
}

pub mod build;
pub mod builder;
pub mod column;
pub mod database;
#[cfg(feature = "postgres")]
pub mod execute;
pub mod passing;
pub mod path;
pub mod prelude;
pub mod query;
pub mod sql;
pub mod table;

#[derive(thiserror::Error, Debug)]
pub enum JsonTableError {
    #[error("Path expression must not be empty")]
    EmptyPath,

    #[error("COLUMNS needs at least one column")]
    EmptyColumnList,

    #[error("PASSING needs at least one argument")]
    EmptyPassingList,

    #[error("Invalid quotes behavior: {0}, expected OMIT or KEEP")]
    InvalidQuotes(String),

    #[cfg(feature = "postgres")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type JsonTableResult<T> = Result<T, JsonTableError>;
