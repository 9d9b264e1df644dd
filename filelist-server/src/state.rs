//! Application state shared across handlers

use std::sync::Arc;

use crate::auth::AuthContext;
use crate::db::Store;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Store,
    auth: AuthContext,
}

impl AppState {
    pub fn new(store: Store, auth: AuthContext) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store, auth }),
        }
    }

    pub fn store(&self) -> &Store {
        &self.inner.store
    }

    pub fn auth(&self) -> &AuthContext {
        &self.inner.auth
    }
}
