//!
//! PostgreSQL quoting rules.
//!

use super::Database;

#[derive(Clone, Debug)]
pub struct Postgres;

impl Database for Postgres {
    fn write_literal(buf: &mut String, value: &str) {
        write_quoted(buf, value, '\'');
    }

    fn write_identifier(buf: &mut String, ident: &str) {
        write_quoted(buf, ident, '"');
    }
}

/// Quote `value` as a standard-conforming string literal: `O'Brien` becomes `'O''Brien'`.
pub fn quote_literal(value: &str) -> String {
    let mut buf = String::with_capacity(value.len() + 2);
    Postgres::write_literal(&mut buf, value);
    buf
}

/// Quote `ident` as an identifier: `my "films"` becomes `"my ""films"""`.
pub fn quote_identifier(ident: &str) -> String {
    let mut buf = String::with_capacity(ident.len() + 2);
    Postgres::write_identifier(&mut buf, ident);
    buf
}

fn write_quoted(buf: &mut String, value: &str, quote: char) {
    buf.push(quote);
    for ch in value.chars() {
        if ch == quote {
            buf.push(quote);
        }
        buf.push(ch);
    }
    buf.push(quote);
}
