//!
//! `PASSING` arguments, visible to path expressions as `$name`.
//!

use crate::build::Build;
use crate::builder::QueryBuilder;
use crate::{JsonTableError, JsonTableResult};

/// `<literal value> AS <name>`.
///
/// The value is always a string literal. The name is written as raw SQL,
/// so it has to be a plain unquoted identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Passing {
    value: String,
    name: String,
}

impl Passing {
    pub fn new(value: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            name: name.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Build for Passing {
    fn build(&self, builder: &mut QueryBuilder) {
        builder.push_literal(&self.value).push(" AS ").push(&self.name);
    }
}

/// `PASSING <arg>, <arg>, ...`. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PassingList {
    passings: Vec<Passing>,
}

impl PassingList {
    pub fn new(passings: Vec<Passing>) -> JsonTableResult<Self> {
        if passings.is_empty() {
            return Err(JsonTableError::EmptyPassingList);
        }
        Ok(Self { passings })
    }

    pub fn passings(&self) -> &[Passing] {
        &self.passings
    }
}

impl Build for PassingList {
    fn build(&self, builder: &mut QueryBuilder) {
        builder.push("PASSING ").push_separated(&self.passings);
    }
}

display_via_sql!(Passing, PassingList);
