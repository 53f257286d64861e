use crate::build::Build;
use crate::builder::QueryBuilder;
use crate::column::ColumnList;
use crate::passing::PassingList;
use crate::path::{ContextItem, PathExpression};

/// # JsonTable
///
/// `JSON_TABLE (<context item>, <path> [PASSING ...] [COLUMNS (...)])`
///
/// The clause is a table expression; wrap it in a [`crate::query::JsonQuery`]
/// or splice it into a statement of your own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonTable {
    context_item: ContextItem,
    path: PathExpression,
    passing: Option<PassingList>,
    columns: Option<ColumnList>,
}

impl JsonTable {
    pub fn new(context_item: impl Into<ContextItem>, path: PathExpression) -> Self {
        Self {
            context_item: context_item.into(),
            path,
            passing: None,
            columns: None,
        }
    }

    pub fn passing(mut self, passing: PassingList) -> Self {
        self.passing = Some(passing);
        self
    }

    pub fn columns(mut self, columns: ColumnList) -> Self {
        self.columns = Some(columns);
        self
    }

    pub fn context_item(&self) -> &ContextItem {
        &self.context_item
    }

    pub fn path_expression(&self) -> &PathExpression {
        &self.path
    }

    pub fn passing_list(&self) -> Option<&PassingList> {
        self.passing.as_ref()
    }

    pub fn column_list(&self) -> Option<&ColumnList> {
        self.columns.as_ref()
    }
}

impl Build for JsonTable {
    fn build(&self, builder: &mut QueryBuilder) {
        builder
            .push("JSON_TABLE (")
            .push_node(&self.context_item)
            .push(", ")
            .push_node(&self.path);
        if let Some(passing) = &self.passing {
            builder.push(" ").push_node(passing);
        }
        if let Some(columns) = &self.columns {
            builder.push(" ").push_node(columns);
        }
        builder.push(")");
    }
}

display_via_sql!(JsonTable);
