//! Database layer - connection pool, store adapter and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no Arc<Mutex<Connection>>
//! - One table per list; the table *is* the list, no registry table
//! - Identifiers are validated before they reach statement text
//! - Transactions for multi-step operations

pub mod pool;
pub mod repos;
pub mod store;

pub use pool::create_pool;
pub use repos::*;
pub use store::{Param, Store, StoreTx};
