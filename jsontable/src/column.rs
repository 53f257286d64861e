//!
//! Column definitions of a `COLUMNS (...)` clause.
//!

use crate::build::Build;
use crate::builder::QueryBuilder;
use crate::path::PathExpression;
use crate::{JsonTableError, JsonTableResult};

/// `<name> FOR ORDINALITY`: numbers the rows of its scope from 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrdinalityColumn {
    name: String,
}

impl OrdinalityColumn {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Build for OrdinalityColumn {
    fn build(&self, builder: &mut QueryBuilder) {
        builder.push(&self.name).push(" FOR ORDINALITY");
    }
}

/// What to do with the quotes of a scalar string result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quotes {
    Omit,
    Keep,
}

impl Quotes {
    pub fn as_str(self) -> &'static str {
        match self {
            Quotes::Omit => "OMIT",
            Quotes::Keep => "KEEP",
        }
    }
}

impl std::str::FromStr for Quotes {
    type Err = JsonTableError;

    fn from_str(s: &str) -> JsonTableResult<Self> {
        if s.eq_ignore_ascii_case("OMIT") {
            Ok(Quotes::Omit)
        } else if s.eq_ignore_ascii_case("KEEP") {
            Ok(Quotes::Keep)
        } else {
            Err(JsonTableError::InvalidQuotes(s.to_owned()))
        }
    }
}

impl std::fmt::Display for Quotes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A regular column: `<name> <type> [FORMAT JSON] [PATH ..]
/// [WITH WRAPPER] [OMIT|KEEP QUOTES]`.
///
/// Without a path the column is matched by name against the current row
/// item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    name: String,
    ty: String,
    path: Option<PathExpression>,
    format_json: bool,
    with_wrapper: bool,
    encoding: Option<String>,
    quotes: Option<Quotes>,
}

impl Column {
    /// `ty` is any SQL type name and is emitted verbatim.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            path: None,
            format_json: false,
            with_wrapper: false,
            encoding: None,
            quotes: None,
        }
    }

    pub fn path(mut self, path: PathExpression) -> Self {
        self.path = Some(path);
        self
    }

    /// Expect the value to be JSON text.
    pub fn format_json(mut self) -> Self {
        self.format_json = true;
        self
    }

    /// Wrap multiple matched values into one JSON array.
    pub fn with_wrapper(mut self) -> Self {
        self.with_wrapper = true;
        self
    }

    /// Recorded on the column but not part of the rendered clause.
    pub fn encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    pub fn quotes(mut self, quotes: Quotes) -> Self {
        self.quotes = Some(quotes);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn path_expression(&self) -> Option<&PathExpression> {
        self.path.as_ref()
    }

    pub fn encoding_name(&self) -> Option<&str> {
        self.encoding.as_deref()
    }
}

impl Build for Column {
    fn build(&self, builder: &mut QueryBuilder) {
        builder.push(&self.name).push(" ").push(&self.ty);
        if self.format_json {
            builder.push(" FORMAT JSON");
        }
        if let Some(path) = &self.path {
            builder.push(" PATH ").push_node(path);
        }
        if self.with_wrapper {
            builder.push(" WITH WRAPPER");
        }
        if let Some(quotes) = self.quotes {
            builder.push(" ").push(quotes.as_str()).push(" QUOTES");
        }
    }
}

/// `<name> [<type>] EXISTS PATH <path>`: whether the path matches anything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnExists {
    name: String,
    path: PathExpression,
    ty: Option<String>,
}

impl ColumnExists {
    pub fn new(name: impl Into<String>, path: PathExpression) -> Self {
        Self {
            name: name.into(),
            path,
            ty: None,
        }
    }

    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path_expression(&self) -> &PathExpression {
        &self.path
    }
}

impl Build for ColumnExists {
    fn build(&self, builder: &mut QueryBuilder) {
        builder.push(&self.name);
        if let Some(ty) = &self.ty {
            builder.push(" ").push(ty);
        }
        builder.push(" EXISTS PATH ").push_node(&self.path);
    }
}

/// `NESTED PATH <path> COLUMNS (...)`.
///
/// Rows produced by the nested columns are joined to the parent row. Sibling
/// nested paths are unioned: a row from one sibling has NULL in the columns
/// of the others.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NestedPath {
    path: PathExpression,
    columns: ColumnList,
}

impl NestedPath {
    pub fn new(path: PathExpression, columns: ColumnList) -> Self {
        Self { path, columns }
    }

    pub fn path_expression(&self) -> &PathExpression {
        &self.path
    }

    pub fn columns(&self) -> &ColumnList {
        &self.columns
    }
}

impl Build for NestedPath {
    fn build(&self, builder: &mut QueryBuilder) {
        builder
            .push("NESTED PATH ")
            .push_node(&self.path)
            .push(" ")
            .push_node(&self.columns);
    }
}

/// Anything that may appear inside `COLUMNS (...)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnDef {
    Ordinality(OrdinalityColumn),
    Column(Column),
    Exists(ColumnExists),
    Nested(NestedPath),
}

impl Build for ColumnDef {
    fn build(&self, builder: &mut QueryBuilder) {
        match self {
            ColumnDef::Ordinality(column) => column.build(builder),
            ColumnDef::Column(column) => column.build(builder),
            ColumnDef::Exists(column) => column.build(builder),
            ColumnDef::Nested(nested) => nested.build(builder),
        }
    }
}

impl From<OrdinalityColumn> for ColumnDef {
    fn from(column: OrdinalityColumn) -> Self {
        ColumnDef::Ordinality(column)
    }
}

impl From<Column> for ColumnDef {
    fn from(column: Column) -> Self {
        ColumnDef::Column(column)
    }
}

impl From<ColumnExists> for ColumnDef {
    fn from(column: ColumnExists) -> Self {
        ColumnDef::Exists(column)
    }
}

impl From<NestedPath> for ColumnDef {
    fn from(nested: NestedPath) -> Self {
        ColumnDef::Nested(nested)
    }
}

/// `COLUMNS (...)`. Never empty; column order is output order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnList {
    columns: Vec<ColumnDef>,
}

impl ColumnList {
    pub fn new(columns: Vec<ColumnDef>) -> JsonTableResult<Self> {
        if columns.is_empty() {
            return Err(JsonTableError::EmptyColumnList);
        }
        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }
}

impl Build for ColumnList {
    fn build(&self, builder: &mut QueryBuilder) {
        builder
            .push("COLUMNS (")
            .push_separated(&self.columns)
            .push(")");
    }
}

display_via_sql!(
    OrdinalityColumn,
    Column,
    ColumnExists,
    NestedPath,
    ColumnDef,
    ColumnList,
);
