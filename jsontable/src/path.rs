//!
//! The inputs of a JSON_TABLE: the context item and JSON path expressions.
//!

use crate::build::Build;
use crate::builder::QueryBuilder;
use crate::{JsonTableError, JsonTableResult};

/// A SQL/JSON path such as `$.favorites[*]`.
///
/// The path syntax is not checked here; the database does that. It is
/// always rendered as a string literal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PathExpression(String);

impl PathExpression {
    pub fn new(path: impl Into<String>) -> JsonTableResult<Self> {
        let path = path.into();
        if path.is_empty() {
            return Err(JsonTableError::EmptyPath);
        }
        Ok(Self(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for PathExpression {
    type Err = JsonTableError;

    fn from_str(s: &str) -> JsonTableResult<Self> {
        Self::new(s)
    }
}

impl std::convert::TryFrom<&str> for PathExpression {
    type Error = JsonTableError;

    fn try_from(value: &str) -> JsonTableResult<Self> {
        Self::new(value)
    }
}

impl std::convert::TryFrom<String> for PathExpression {
    type Error = JsonTableError;

    fn try_from(value: String) -> JsonTableResult<Self> {
        Self::new(value)
    }
}

impl AsRef<str> for PathExpression {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Build for PathExpression {
    fn build(&self, builder: &mut QueryBuilder) {
        builder.push_literal(&self.0);
    }
}

/// The document a JSON_TABLE reads from: a column reference like
/// `families.data`, or any SQL expression such as `'{"a": 1}'::json`.
///
/// The expression is emitted verbatim and must already be valid SQL.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContextItem(String);

impl ContextItem {
    pub fn new(expression: impl Into<String>) -> Self {
        Self(expression.into())
    }

    pub fn expression(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContextItem {
    fn from(expression: &str) -> Self {
        Self::new(expression)
    }
}

impl From<String> for ContextItem {
    fn from(expression: String) -> Self {
        Self::new(expression)
    }
}

impl Build for ContextItem {
    fn build(&self, builder: &mut QueryBuilder) {
        builder.push(&self.0);
    }
}

display_via_sql!(PathExpression, ContextItem);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_item_is_verbatim() {
        assert_eq!(ContextItem::new("js").to_string(), "js");
        assert_eq!(
            ContextItem::new("'{\"a\": 1}'::json").to_string(),
            "'{\"a\": 1}'::json"
        );
    }

    #[test]
    fn path_is_a_literal() -> JsonTableResult<()> {
        let path = PathExpression::new("$.films[*] ? (@.director == \"O'Hara\")")?;
        assert_eq!(
            path.to_string(),
            "'$.films[*] ? (@.director == \"O''Hara\")'"
        );
        Ok(())
    }

    #[test]
    fn empty_path_is_rejected() {
        assert!(matches!(
            PathExpression::new(""),
            Err(JsonTableError::EmptyPath)
        ));
        assert!("".parse::<PathExpression>().is_err());
        assert!("$".parse::<PathExpression>().is_ok());
    }
}
