use crate::build::Build;
use crate::builder::{Fragment, QueryBuilder};
use crate::database::postgres::Postgres;
use crate::database::Database;

/// A composed SQL fragment: the reduction of a node's parts.
///
/// `Sql` is itself `Build`, so a rendered clause can be spliced into a
/// larger hand written statement.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sql {
    parts: Vec<Fragment>,
}

impl Sql {
    /// Raw SQL, emitted as is.
    pub fn raw(sql: impl Into<String>) -> Self {
        Self {
            parts: vec![Fragment::Sql(sql.into())],
        }
    }

    pub(crate) fn from_parts(parts: Vec<Fragment>) -> Self {
        Self { parts }
    }

    pub fn parts(&self) -> &[Fragment] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Write the fragments out as text, escaping with the rules of `DB`.
    pub fn render<DB: Database>(&self) -> String {
        let mut buf = String::new();
        for part in &self.parts {
            match part {
                Fragment::Sql(sql) => buf.push_str(sql),
                Fragment::Literal(value) => DB::write_literal(&mut buf, value),
                Fragment::Identifier(ident) => DB::write_identifier(&mut buf, ident),
            }
        }
        buf
    }
}

impl Build for Sql {
    fn build(&self, builder: &mut QueryBuilder) {
        for part in &self.parts {
            match part {
                Fragment::Sql(sql) => builder.push(sql),
                Fragment::Literal(value) => builder.push_literal(value),
                Fragment::Identifier(ident) => builder.push_identifier(ident),
            };
        }
    }
}

impl std::ops::Add for Sql {
    type Output = Sql;

    fn add(self, rhs: Sql) -> Sql {
        let mut builder = QueryBuilder::new();
        builder.push_node(&self).push_node(&rhs);
        builder.finish()
    }
}

impl std::fmt::Display for Sql {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render::<Postgres>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_each_fragment_kind() {
        let mut builder = QueryBuilder::new();
        builder
            .push("SELECT ")
            .push_identifier("jt")
            .push(".* WHERE x = ")
            .push_literal("it's");

        assert_eq!(
            builder.finish().to_string(),
            "SELECT \"jt\".* WHERE x = 'it''s'"
        );
    }

    #[test]
    fn splices_into_a_larger_statement() {
        let clause = Sql::raw("JSON_TABLE (p.attributes, ") + {
            let mut builder = QueryBuilder::new();
            builder.push_literal("$.sizes[*]").push(")");
            builder.finish()
        };

        let mut builder = QueryBuilder::new();
        builder
            .push("SELECT p.name FROM products p, ")
            .push_node(&clause)
            .push(" AS jt");

        assert_eq!(
            builder.finish().to_string(),
            "SELECT p.name FROM products p, JSON_TABLE (p.attributes, '$.sizes[*]') AS jt"
        );
    }

    #[test]
    fn empty() {
        assert!(Sql::default().is_empty());
        assert_eq!(Sql::default().to_string(), "");
    }
}
