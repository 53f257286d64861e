//!
//! A complete `SELECT` around a JSON_TABLE.
//!

use crate::build::Build;
use crate::builder::QueryBuilder;
use crate::table::JsonTable;

/// Alias given to the JSON_TABLE when selecting from a stored table.
pub const DEFAULT_ALIAS: &str = "jt";

/// # JsonQuery
///
/// Without a source table the context item must be a self-contained
/// document, and the statement is `SELECT * FROM JSON_TABLE (...)`.
///
/// With a source table the context item usually references one of its
/// columns, and the statement is
/// `SELECT "jt".* FROM "table", JSON_TABLE (...) AS "jt"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonQuery {
    json_table: JsonTable,
    table_name: Option<String>,
    alias: String,
}

impl JsonQuery {
    pub fn new(json_table: JsonTable) -> Self {
        Self {
            json_table,
            table_name: None,
            alias: DEFAULT_ALIAS.to_owned(),
        }
    }

    /// Select from `table_name` laterally joined with the JSON_TABLE.
    ///
    /// An empty name counts as no table.
    pub fn from_table(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    pub fn json_table(&self) -> &JsonTable {
        &self.json_table
    }

    pub fn table_name(&self) -> Option<&str> {
        self.table_name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }
}

impl Build for JsonQuery {
    fn build(&self, builder: &mut QueryBuilder) {
        match self.table_name() {
            None => {
                builder.push("SELECT * FROM ").push_node(&self.json_table);
            }
            Some(table_name) => {
                builder
                    .push("SELECT ")
                    .push_identifier(&self.alias)
                    .push(".* FROM ")
                    .push_identifier(table_name)
                    .push(", ")
                    .push_node(&self.json_table)
                    .push(" AS ")
                    .push_identifier(&self.alias);
            }
        }
    }
}

display_via_sql!(JsonQuery);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{Column, ColumnList, OrdinalityColumn};
    use crate::path::PathExpression;
    use crate::JsonTableResult;

    fn favorites() -> JsonTableResult<JsonTable> {
        Ok(
            JsonTable::new("js", PathExpression::new("$.favorites[*]")?).columns(
                ColumnList::new(vec![
                    OrdinalityColumn::new("id").into(),
                    Column::new("kind", "text")
                        .path(PathExpression::new("$.kind")?)
                        .into(),
                ])?,
            ),
        )
    }

    #[test]
    fn standalone_document() -> JsonTableResult<()> {
        let query = JsonQuery::new(favorites()?);
        assert_eq!(query.table_name(), None);
        assert_eq!(
            query.to_string(),
            "SELECT * FROM JSON_TABLE (js, '$.favorites[*]' \
             COLUMNS (id FOR ORDINALITY, kind text PATH '$.kind'))"
        );
        Ok(())
    }

    #[test]
    fn from_table_with_default_alias() -> JsonTableResult<()> {
        let query = JsonQuery::new(favorites()?).from_table("films");
        assert_eq!(query.alias(), "jt");
        assert_eq!(
            query.to_string(),
            "SELECT \"jt\".* FROM \"films\", JSON_TABLE (js, '$.favorites[*]' \
             COLUMNS (id FOR ORDINALITY, kind text PATH '$.kind')) AS \"jt\""
        );
        Ok(())
    }

    #[test]
    fn empty_table_name_means_standalone_document() -> JsonTableResult<()> {
        let query =
            JsonQuery::new(JsonTable::new("'{}'::json", PathExpression::new("$")?)).from_table("");
        assert_eq!(query.table_name(), None);
        assert_eq!(
            query.to_string(),
            "SELECT * FROM JSON_TABLE ('{}'::json, '$')"
        );
        Ok(())
    }

    #[test]
    fn identifiers_are_escaped() -> JsonTableResult<()> {
        let query = JsonQuery::new(JsonTable::new("f.js", PathExpression::new("$")?))
            .from_table("my \"films\"")
            .with_alias("f");
        assert_eq!(
            query.to_string(),
            "SELECT \"f\".* FROM \"my \"\"films\"\"\", JSON_TABLE (f.js, '$') AS \"f\""
        );
        Ok(())
    }
}
