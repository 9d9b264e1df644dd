//! Entry repository - file records inside a list
//!
//! Handles entry operations with:
//! - Existence check before every statement (missing list is `NotFound`)
//! - Bulk remove by name
//! - Atomic move (select, insert, delete in one transaction)

use futures::{future, TryStreamExt};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::db::Store;
use crate::models::{FileEntry, ListName};

use super::{parse_list_name, DbError};

/// Entry repository
pub struct EntryRepo<'a> {
    store: &'a Store,
}

impl<'a> EntryRepo<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// All entries in a list, oldest first.
    pub async fn list(&self, id: &str) -> Result<Vec<FileEntry>, DbError> {
        let list = self.existing_list(id).await?;

        let statement = format!("SELECT name, hash FROM {} ORDER BY id", list.quoted());
        let entries: Vec<FileEntry> = self
            .store
            .query(&statement, &[])
            .and_then(|row| future::ready(entry_from_row(&row)))
            .try_collect()
            .await?;

        tracing::debug!(list = %list, count = entries.len(), "entries listed");
        Ok(entries)
    }

    /// Append an entry. Duplicate names are accepted.
    pub async fn add(&self, id: &str, entry: &FileEntry) -> Result<(), DbError> {
        let list = self.existing_list(id).await?;
        entry.validate().map_err(DbError::InvalidPayload)?;

        let statement = format!("INSERT INTO {} (name, hash) VALUES (?1, ?2)", list.quoted());
        self.store
            .execute(&statement, &[(&entry.name).into(), (&entry.hash).into()])
            .await?;

        tracing::info!(list = %list, name = %entry.name, "entry added");
        Ok(())
    }

    /// Remove every entry with this name. Returns how many went.
    pub async fn remove(&self, id: &str, name: &str) -> Result<u64, DbError> {
        let list = self.existing_list(id).await?;

        let statement = format!("DELETE FROM {} WHERE name = ?1", list.quoted());
        let removed = self.store.execute(&statement, &[name.into()]).await?;

        tracing::info!(list = %list, name, removed, "entries removed");
        Ok(removed)
    }

    /// Move one entry named `name` from `from` to `to`.
    ///
    /// When several rows share the name, the oldest (lowest id) moves and the
    /// rest stay: only that row is deleted from the source, never every row
    /// with the name (use [`EntryRepo::remove`] for that). The read, insert and delete share a transaction, so a
    /// failure leaves both lists untouched.
    pub async fn move_entry(&self, from: &str, to: &str, name: &str) -> Result<FileEntry, DbError> {
        let source = parse_list_name(from)?;
        let dest = parse_list_name(to)?;

        if !self.store.table_exists(source.as_str()).await? {
            return Err(DbError::SourceListNotFound {
                list: source.as_str().to_owned(),
            });
        }
        if !self.store.table_exists(dest.as_str()).await? {
            return Err(DbError::DestListNotFound {
                list: dest.as_str().to_owned(),
            });
        }

        let mut tx = self.store.begin().await?;

        let select = format!(
            "SELECT id, name, hash FROM {} WHERE name = ?1 ORDER BY id LIMIT 1",
            source.quoted()
        );
        let row = tx
            .fetch_optional(&select, &[name.into()])
            .await?
            .ok_or_else(|| DbError::EntryNotFound {
                list: source.as_str().to_owned(),
                name: name.to_owned(),
            })?;
        let row_id: i64 = row.try_get("id")?;
        let entry = entry_from_row(&row)?;

        let insert = format!("INSERT INTO {} (name, hash) VALUES (?1, ?2)", dest.quoted());
        tx.execute(&insert, &[(&entry.name).into(), (&entry.hash).into()])
            .await?;

        let delete = format!("DELETE FROM {} WHERE id = ?1", source.quoted());
        tx.execute(&delete, &[row_id.into()]).await?;

        tx.commit().await?;

        tracing::info!(from = %source, to = %dest, name = %entry.name, "entry moved");
        Ok(entry)
    }

    /// Validate the identifier and require the list to exist.
    async fn existing_list(&self, id: &str) -> Result<ListName, DbError> {
        let list = parse_list_name(id)?;

        if !self.store.table_exists(list.as_str()).await? {
            return Err(DbError::NotFound {
                list: list.as_str().to_owned(),
            });
        }

        Ok(list)
    }
}

fn entry_from_row(row: &SqliteRow) -> Result<FileEntry, sqlx::Error> {
    Ok(FileEntry {
        name: row.try_get("name")?,
        hash: row.try_get("hash")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::ListRepo;

    async fn store_with(lists: &[&str]) -> Store {
        let store = Store::open_in_memory().await.expect("in-memory store");
        for list in lists {
            ListRepo::new(&store).create(list).await.expect("create list");
        }
        store
    }

    #[tokio::test]
    async fn new_list_is_empty() {
        let store = store_with(&["docs"]).await;
        let entries = EntryRepo::new(&store).list("docs").await.unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn add_then_list() {
        let store = store_with(&["docs"]).await;
        let repo = EntryRepo::new(&store);

        repo.add("docs", &FileEntry::new("a.txt", "h1")).await.unwrap();

        let entries = repo.list("docs").await.unwrap();
        assert_eq!(entries, vec![FileEntry::new("a.txt", "h1")]);
    }

    #[tokio::test]
    async fn add_keeps_duplicate_names() {
        let store = store_with(&["docs"]).await;
        let repo = EntryRepo::new(&store);

        repo.add("docs", &FileEntry::new("a.txt", "h1")).await.unwrap();
        repo.add("docs", &FileEntry::new("a.txt", "h2")).await.unwrap();

        assert_eq!(repo.list("docs").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn add_rejects_empty_payload() {
        let store = store_with(&["docs"]).await;
        let repo = EntryRepo::new(&store);

        let err = repo.add("docs", &FileEntry::new("", "h1")).await.unwrap_err();
        assert!(matches!(err, DbError::InvalidPayload(_)));

        let err = repo.add("docs", &FileEntry::new("a.txt", "")).await.unwrap_err();
        assert!(matches!(err, DbError::InvalidPayload(_)));

        assert!(repo.list("docs").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_to_missing_list_is_not_found() {
        let store = store_with(&[]).await;
        let repo = EntryRepo::new(&store);

        let err = repo
            .add("nosuch", &FileEntry::new("a.txt", "h1"))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { ref list } if list == "nosuch"));
        assert!(!store.table_exists("nosuch").await.unwrap());
    }

    #[tokio::test]
    async fn remove_deletes_all_matches() {
        let store = store_with(&["docs"]).await;
        let repo = EntryRepo::new(&store);

        repo.add("docs", &FileEntry::new("a.txt", "h1")).await.unwrap();
        repo.add("docs", &FileEntry::new("a.txt", "h2")).await.unwrap();
        repo.add("docs", &FileEntry::new("b.txt", "h3")).await.unwrap();

        assert_eq!(repo.remove("docs", "a.txt").await.unwrap(), 2);
        assert_eq!(
            repo.list("docs").await.unwrap(),
            vec![FileEntry::new("b.txt", "h3")]
        );
    }

    #[tokio::test]
    async fn remove_missing_name_is_zero() {
        let store = store_with(&["docs"]).await;
        let removed = EntryRepo::new(&store)
            .remove("docs", "missing.txt")
            .await
            .unwrap();
        assert_eq!(removed, 0);
    }

    #[tokio::test]
    async fn move_relocates_entry() {
        let store = store_with(&["docs", "archive"]).await;
        let repo = EntryRepo::new(&store);
        repo.add("docs", &FileEntry::new("a.txt", "h1")).await.unwrap();

        let moved = repo.move_entry("docs", "archive", "a.txt").await.unwrap();

        assert_eq!(moved, FileEntry::new("a.txt", "h1"));
        assert!(repo.list("docs").await.unwrap().is_empty());
        assert_eq!(
            repo.list("archive").await.unwrap(),
            vec![FileEntry::new("a.txt", "h1")]
        );
    }

    #[tokio::test]
    async fn move_takes_oldest_duplicate_only() {
        let store = store_with(&["docs", "archive"]).await;
        let repo = EntryRepo::new(&store);
        repo.add("docs", &FileEntry::new("a.txt", "v1")).await.unwrap();
        repo.add("docs", &FileEntry::new("a.txt", "v2")).await.unwrap();

        let moved = repo.move_entry("docs", "archive", "a.txt").await.unwrap();

        assert_eq!(moved.hash, "v1");
        assert_eq!(
            repo.list("docs").await.unwrap(),
            vec![FileEntry::new("a.txt", "v2")]
        );
        assert_eq!(
            repo.list("archive").await.unwrap(),
            vec![FileEntry::new("a.txt", "v1")]
        );
    }

    #[tokio::test]
    async fn move_reports_which_list_is_missing() {
        let store = store_with(&["docs"]).await;
        let repo = EntryRepo::new(&store);

        let err = repo.move_entry("nosuch", "docs", "a.txt").await.unwrap_err();
        assert!(matches!(err, DbError::SourceListNotFound { ref list } if list == "nosuch"));

        let err = repo.move_entry("docs", "nosuch", "a.txt").await.unwrap_err();
        assert!(matches!(err, DbError::DestListNotFound { ref list } if list == "nosuch"));
    }

    #[tokio::test]
    async fn move_missing_entry_changes_nothing() {
        let store = store_with(&["docs", "archive"]).await;
        let repo = EntryRepo::new(&store);
        repo.add("docs", &FileEntry::new("b.txt", "h1")).await.unwrap();

        let err = repo.move_entry("docs", "archive", "a.txt").await.unwrap_err();
        assert!(matches!(err, DbError::EntryNotFound { .. }));
        assert_eq!(repo.list("docs").await.unwrap().len(), 1);
        assert!(repo.list("archive").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn move_within_same_list_keeps_entry() {
        let store = store_with(&["docs"]).await;
        let repo = EntryRepo::new(&store);
        repo.add("docs", &FileEntry::new("a.txt", "h1")).await.unwrap();
        repo.add("docs", &FileEntry::new("b.txt", "h2")).await.unwrap();

        repo.move_entry("docs", "docs", "a.txt").await.unwrap();

        assert_eq!(
            repo.list("docs").await.unwrap(),
            vec![FileEntry::new("b.txt", "h2"), FileEntry::new("a.txt", "h1")]
        );
    }

    #[tokio::test]
    async fn invalid_identifier_fails_every_entry_call() {
        let store = store_with(&["docs"]).await;
        let repo = EntryRepo::new(&store);
        let bad = "a;DROP TABLE x";
        let entry = FileEntry::new("a.txt", "h1");

        assert!(matches!(repo.list(bad).await, Err(DbError::InvalidIdentifier(_))));
        assert!(matches!(repo.add(bad, &entry).await, Err(DbError::InvalidIdentifier(_))));
        assert!(matches!(repo.remove(bad, "a.txt").await, Err(DbError::InvalidIdentifier(_))));
        assert!(matches!(
            repo.move_entry(bad, "docs", "a.txt").await,
            Err(DbError::InvalidIdentifier(_))
        ));
        assert!(matches!(
            repo.move_entry("docs", bad, "a.txt").await,
            Err(DbError::InvalidIdentifier(_))
        ));
        assert!(store.table_exists("docs").await.unwrap());
    }
}
