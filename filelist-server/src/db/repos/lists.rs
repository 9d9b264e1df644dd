//! List repository - lifecycle of named lists
//!
//! A list is a table. Creating a list creates the table, deleting it drops
//! the table and every entry with it.

use crate::db::Store;
use crate::models::ListName;

use super::{parse_list_name, DbError, ENTRY_COLUMNS};

/// List lifecycle repository
pub struct ListRepo<'a> {
    store: &'a Store,
}

impl<'a> ListRepo<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Create an empty list.
    ///
    /// Fails with `AlreadyExists` if the table is present. Two concurrent
    /// creates can both pass that check; the loser then gets SQLite's own
    /// "table already exists" error as `DbError::Sqlx`.
    pub async fn create(&self, id: &str) -> Result<ListName, DbError> {
        let list = parse_list_name(id)?;

        if self.store.table_exists(list.as_str()).await? {
            return Err(DbError::AlreadyExists {
                list: list.as_str().to_owned(),
            });
        }

        let statement = format!("CREATE TABLE {} ({})", list.quoted(), ENTRY_COLUMNS);
        self.store.execute(&statement, &[]).await?;

        tracing::info!(list = %list, "list created");
        Ok(list)
    }

    /// Drop a list and all of its entries.
    pub async fn delete(&self, id: &str) -> Result<(), DbError> {
        let list = parse_list_name(id)?;

        if !self.store.table_exists(list.as_str()).await? {
            return Err(DbError::NotFound {
                list: list.as_str().to_owned(),
            });
        }

        let statement = format!("DROP TABLE {}", list.quoted());
        self.store.execute(&statement, &[]).await?;

        tracing::info!(list = %list, "list deleted");
        Ok(())
    }

    /// Whether a list with this name currently exists.
    pub async fn exists(&self, id: &str) -> Result<bool, DbError> {
        let list = parse_list_name(id)?;
        Ok(self.store.table_exists(list.as_str()).await?)
    }
}
