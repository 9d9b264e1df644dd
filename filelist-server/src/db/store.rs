//! Relational store adapter
//!
//! Thin capability layer over the pool: table existence, parameterized
//! execute/query, and transactions. Statement text is taken as given; any
//! identifier interpolated into it must already be a validated
//! [`ListName`](crate::models::ListName).

use std::path::Path;

use futures::stream::BoxStream;
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqlitePool, SqliteRow};
use sqlx::Transaction;

use super::pool::{create_memory_pool, create_pool};

/// A bind parameter for a store statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param<'a> {
    Text(&'a str),
    Int(i64),
}

impl<'a> From<&'a str> for Param<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for Param<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

impl From<i64> for Param<'_> {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

/// Shared handle to the backing SQLite database. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (or create) a database file.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, sqlx::Error> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "opening database");
        Ok(Self::new(create_pool(path).await?))
    }

    /// Open a private in-memory database.
    pub async fn open_in_memory() -> Result<Self, sqlx::Error> {
        tracing::debug!("opening in-memory database");
        Ok(Self::new(create_memory_pool().await?))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection, waiting for checked-out ones.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// True iff a table with this name exists.
    ///
    /// SQLite resolves table names case-insensitively, so the lookup does too.
    pub async fn table_exists(&self, table: &str) -> Result<bool, sqlx::Error> {
        let found: i64 = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1 COLLATE NOCASE)",
        )
        .bind(table)
        .fetch_one(&self.pool)
        .await?;

        Ok(found != 0)
    }

    /// Run a mutating statement, returning the number of affected rows.
    pub async fn execute(&self, statement: &str, params: &[Param<'_>]) -> Result<u64, sqlx::Error> {
        let result = bind_params(statement, params).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    /// Run a read statement as a lazy row stream.
    ///
    /// The stream holds a pooled connection until it is drained or dropped.
    pub fn query<'a>(
        &'a self,
        statement: &'a str,
        params: &'a [Param<'a>],
    ) -> BoxStream<'a, Result<SqliteRow, sqlx::Error>> {
        bind_params(statement, params).fetch(&self.pool)
    }

    /// Begin a transaction. Dropping it without [`StoreTx::commit`] rolls back.
    pub async fn begin(&self) -> Result<StoreTx, sqlx::Error> {
        Ok(StoreTx {
            tx: self.pool.begin().await?,
        })
    }
}

/// An open transaction on the store.
pub struct StoreTx {
    tx: Transaction<'static, Sqlite>,
}

impl StoreTx {
    pub async fn execute(&mut self, statement: &str, params: &[Param<'_>]) -> Result<u64, sqlx::Error> {
        let result = bind_params(statement, params).execute(&mut *self.tx).await?;
        Ok(result.rows_affected())
    }

    pub async fn fetch_optional(
        &mut self,
        statement: &str,
        params: &[Param<'_>],
    ) -> Result<Option<SqliteRow>, sqlx::Error> {
        bind_params(statement, params)
            .fetch_optional(&mut *self.tx)
            .await
    }

    pub async fn commit(self) -> Result<(), sqlx::Error> {
        self.tx.commit().await
    }
}

fn bind_params<'q>(
    statement: &'q str,
    params: &[Param<'q>],
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    params
        .iter()
        .fold(sqlx::query(statement), |query, param| match *param {
            Param::Text(value) => query.bind(value),
            Param::Int(value) => query.bind(value),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::TryStreamExt;
    use sqlx::Row;

    async fn store_with_probe() -> Store {
        let store = Store::open_in_memory().await.expect("store");
        store
            .execute("CREATE TABLE probe (id INTEGER PRIMARY KEY, label TEXT NOT NULL)", &[])
            .await
            .expect("create probe");
        store
    }

    #[tokio::test]
    async fn table_exists_reports_presence() {
        let store = store_with_probe().await;

        assert!(store.table_exists("probe").await.unwrap());
        assert!(store.table_exists("PROBE").await.unwrap());
        assert!(!store.table_exists("missing").await.unwrap());
    }

    #[tokio::test]
    async fn execute_returns_affected_rows() {
        let store = store_with_probe().await;

        for label in ["a", "b", "b"] {
            store
                .execute("INSERT INTO probe (label) VALUES (?1)", &[label.into()])
                .await
                .unwrap();
        }

        let removed = store
            .execute("DELETE FROM probe WHERE label = ?1", &["b".into()])
            .await
            .unwrap();
        assert_eq!(removed, 2);
    }

    #[tokio::test]
    async fn query_streams_rows() {
        let store = store_with_probe().await;
        store
            .execute("INSERT INTO probe (label) VALUES (?1), (?2)", &["x".into(), "y".into()])
            .await
            .unwrap();

        let labels: Vec<String> = store
            .query("SELECT label FROM probe ORDER BY id", &[])
            .map_ok(|row| row.get::<String, _>("label"))
            .try_collect()
            .await
            .unwrap();

        assert_eq!(labels, vec!["x", "y"]);
    }

    #[tokio::test]
    async fn dropped_transaction_rolls_back() {
        let store = store_with_probe().await;

        {
            let mut tx = store.begin().await.unwrap();
            tx.execute("INSERT INTO probe (label) VALUES (?1)", &["gone".into()])
                .await
                .unwrap();
        }

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM probe")
            .fetch_one(store.pool())
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn committed_transaction_is_visible() {
        let store = store_with_probe().await;

        let mut tx = store.begin().await.unwrap();
        tx.execute("INSERT INTO probe (label) VALUES (?1)", &["kept".into()])
            .await
            .unwrap();
        let row = tx
            .fetch_optional("SELECT id FROM probe WHERE label = ?1", &["kept".into()])
            .await
            .unwrap();
        assert!(row.is_some());
        tx.commit().await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM probe")
            .fetch_one(store.pool())
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
