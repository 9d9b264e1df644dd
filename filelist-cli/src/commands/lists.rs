//! Lists command - manage lists directly in the database file
//!
//! Same operations as the HTTP routes, without a running server and without
//! the shared secret: whoever can write the file can edit the lists.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use filelist_server::{EntryRepo, FileEntry, ListRepo, Store};

use super::DbArgs;

#[derive(Parser, Debug)]
#[command(about = "Manage lists directly in the SQLite database")]
pub struct ListsArgs {
    #[command(flatten)]
    pub db: DbArgs,

    #[command(subcommand)]
    pub command: ListsCommand,
}

#[derive(Subcommand, Debug)]
pub enum ListsCommand {
    /// Create an empty list
    Create {
        /// List name (letters, digits, underscore)
        list: String,
    },
    /// Print a list's entries as JSON
    Show {
        /// List name
        list: String,
    },
    /// Add a file entry to a list
    Add {
        /// List name
        list: String,
        /// File name
        name: String,
        /// Content hash
        hash: String,
    },
    /// Remove every entry with the given file name
    Remove {
        /// List name
        list: String,
        /// File name
        name: String,
    },
    /// Move one entry from one list to another
    Move {
        /// Source list
        from: String,
        /// Destination list
        to: String,
        /// File name
        name: String,
    },
    /// Delete a list and all of its entries
    Delete {
        /// List name
        list: String,
    },
}

pub async fn run_lists(args: ListsArgs) -> Result<()> {
    let store = Store::open(&args.db.db_path)
        .await
        .with_context(|| format!("Failed to open database {}", args.db.db_path.display()))?;

    let result = dispatch(&store, args.command).await;
    store.close().await;
    result
}

async fn dispatch(store: &Store, command: ListsCommand) -> Result<()> {
    let lists = ListRepo::new(store);
    let entries = EntryRepo::new(store);

    match command {
        ListsCommand::Create { list } => {
            let name = lists.create(&list).await?;
            println!("Created list {}", name);
        }
        ListsCommand::Show { list } => {
            let items = entries.list(&list).await?;
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        ListsCommand::Add { list, name, hash } => {
            entries.add(&list, &FileEntry::new(name.clone(), hash)).await?;
            println!("Added {} to {}", name, list);
        }
        ListsCommand::Remove { list, name } => {
            let removed = entries.remove(&list, &name).await?;
            let noun = if removed == 1 { "entry" } else { "entries" };
            println!("Removed {} {} named {} from {}", removed, noun, name, list);
        }
        ListsCommand::Move { from, to, name } => {
            let entry = entries.move_entry(&from, &to, &name).await?;
            println!("Moved {} ({}) from {} to {}", entry.name, entry.hash, from, to);
        }
        ListsCommand::Delete { list } => {
            lists.delete(&list).await?;
            println!("Deleted list {}", list);
        }
    }

    Ok(())
}
