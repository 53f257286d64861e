//!
//! Running rendered statements against PostgreSQL.
//!
//! Nothing in the node tree depends on this module: it only hands the
//! rendered text to a database client and returns the rows untouched.
//!

use async_trait::*;
use sqlx::postgres::{PgConnection, PgPool, PgRow};

use crate::build::Build;
use crate::database::postgres::Postgres;
use crate::query::JsonQuery;
use crate::JsonTableResult;

/// Something able to run a SQL statement and return its rows.
#[async_trait]
pub trait SqlExecutor: Send {
    async fn fetch_rows(&mut self, sql: &str) -> JsonTableResult<Vec<PgRow>>;
}

#[async_trait]
impl SqlExecutor for PgPool {
    async fn fetch_rows(&mut self, sql: &str) -> JsonTableResult<Vec<PgRow>> {
        Ok(sqlx::query(sql).fetch_all(&*self).await?)
    }
}

/// Also covers transactions, through `&mut *tx`.
#[async_trait]
impl SqlExecutor for PgConnection {
    async fn fetch_rows(&mut self, sql: &str) -> JsonTableResult<Vec<PgRow>> {
        Ok(sqlx::query(sql).fetch_all(self).await?)
    }
}

/// Render `node` for PostgreSQL and fetch every row it produces.
pub async fn fetch_all<B, E>(node: &B, executor: &mut E) -> JsonTableResult<Vec<PgRow>>
where
    B: Build + Sync + ?Sized,
    E: SqlExecutor + ?Sized,
{
    let sql = node.as_sql().render::<Postgres>();
    tracing::debug!(%sql, "fetching json_table rows");

    let rows = executor.fetch_rows(&sql).await?;
    tracing::trace!(rows = rows.len(), "fetched json_table rows");

    Ok(rows)
}

impl JsonQuery {
    pub async fn fetch_all<E>(&self, executor: &mut E) -> JsonTableResult<Vec<PgRow>>
    where
        E: SqlExecutor + ?Sized,
    {
        fetch_all(self, executor).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathExpression;
    use crate::table::JsonTable;

    // Compiles only while the fetch future can move across threads.
    fn spawnable_fetch<'a, E>(
        query: &'a JsonQuery,
        executor: &'a mut E,
    ) -> impl std::future::Future<Output = JsonTableResult<Vec<PgRow>>> + Send + 'a
    where
        E: SqlExecutor + ?Sized,
    {
        fetch_all(query, executor)
    }

    #[test]
    fn fetch_future_is_send() -> JsonTableResult<()> {
        let query = JsonQuery::new(JsonTable::new("'{}'::json", PathExpression::new("$")?));
        let _ = spawnable_fetch::<PgConnection>;
        assert_eq!(query.to_string(), "SELECT * FROM JSON_TABLE ('{}'::json, '$')");
        Ok(())
    }
}
