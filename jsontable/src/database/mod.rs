pub mod postgres;

/// A SQL dialect.
///
/// The dialect decides how escaped fragments are spelled: literals and
/// identifiers. Raw SQL fragments are never touched by the dialect.
pub trait Database: std::fmt::Debug + Sync + Send + Clone + 'static {
    /// Append `value` to `buf` as a quoted string literal.
    fn write_literal(buf: &mut String, value: &str);

    /// Append `ident` to `buf` as a quoted identifier.
    fn write_identifier(buf: &mut String, ident: &str);
}
