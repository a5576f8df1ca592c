use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use calentry_core::EventStore;

/// Shared application state: the single session's event store.
///
/// Created empty at startup and discarded on shutdown; there is no durable
/// storage behind it.
#[derive(Clone, Default)]
pub struct AppState {
    store: Arc<Mutex<EventStore>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> MutexGuard<'_, EventStore> {
        // A poisoned lock still holds a consistent store; keep serving
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
