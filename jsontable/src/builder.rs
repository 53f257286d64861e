use crate::build::Build;
use crate::sql::Sql;

/// One piece of rendered SQL.
///
/// Raw SQL is emitted verbatim. Literals and identifiers keep their
/// unescaped value until the fragment is written out for a dialect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fragment {
    Sql(String),
    Literal(String),
    Identifier(String),
}

/// Accumulates the ordered fragments of a node tree.
#[derive(Default, Debug)]
pub struct QueryBuilder {
    parts: Vec<Fragment>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    pub fn finish(self) -> Sql {
        Sql::from_parts(self.parts)
    }

    pub fn into_parts(self) -> Vec<Fragment> {
        self.parts
    }

    /// Push raw SQL: keywords, punctuation, caller supplied expressions.
    pub fn push(&mut self, sql: &str) -> &mut Self {
        // Adjacent raw text is merged so the part list stays short.
        match self.parts.last_mut() {
            Some(Fragment::Sql(last)) => last.push_str(sql),
            _ => self.parts.push(Fragment::Sql(sql.to_owned())),
        }
        self
    }

    pub fn push_literal(&mut self, value: &str) -> &mut Self {
        self.parts.push(Fragment::Literal(value.to_owned()));
        self
    }

    pub fn push_identifier(&mut self, ident: &str) -> &mut Self {
        self.parts.push(Fragment::Identifier(ident.to_owned()));
        self
    }

    pub fn push_node<B: Build + ?Sized>(&mut self, node: &B) -> &mut Self {
        node.build(self);
        self
    }

    /// Build every item in order with `", "` between neighbours and
    /// nothing after the last one.
    pub fn push_separated<'a, B, I>(&mut self, items: I) -> &mut Self
    where
        B: Build + 'a,
        I: IntoIterator<Item = &'a B>,
    {
        for (n, item) in items.into_iter().enumerate() {
            if n > 0 {
                self.push(", ");
            }
            item.build(self);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_text_is_merged() {
        let mut builder = QueryBuilder::new();
        builder.push("SELECT ").push("* ").push_literal("x").push(" AS ").push("y");

        assert_eq!(
            builder.into_parts(),
            vec![
                Fragment::Sql("SELECT * ".to_owned()),
                Fragment::Literal("x".to_owned()),
                Fragment::Sql(" AS y".to_owned()),
            ]
        );
    }

    #[test]
    fn escaped_fragments_are_never_merged() {
        let mut builder = QueryBuilder::new();
        builder.push_identifier("a").push_identifier("b");

        assert_eq!(
            builder.into_parts(),
            vec![
                Fragment::Identifier("a".to_owned()),
                Fragment::Identifier("b".to_owned()),
            ]
        );
    }
}
