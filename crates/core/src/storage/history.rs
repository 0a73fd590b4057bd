use crate::errors::CoreError;

use super::backend::StorageBackend;

/// Storage key for the persisted recent-search list.
pub const STORAGE_KEY: &str = "recentCarSearches";

/// Maximum number of recent searches kept.
pub const MAX_RECENT_SEARCHES: usize = 5;

/// Bounded most-recently-used list of past search queries.
///
/// Persisted as a JSON string array under [`STORAGE_KEY`] through an
/// injected backend. Loaded once at construction; written back after
/// every mutation. Corrupted persisted data is discarded silently (the
/// backend entry is cleared and the list starts empty) — never a
/// user-visible error.
pub struct RecentSearchStore {
    backend: Box<dyn StorageBackend>,
    entries: Vec<String>,
}

impl RecentSearchStore {
    /// Create the store and load whatever the backend holds.
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        let mut store = Self {
            backend,
            entries: Vec::new(),
        };
        store.load();
        store
    }

    /// Record a successful search.
    ///
    /// Trims the query, rejects blanks, moves a case-insensitive
    /// duplicate to the front, bounds the list, then persists it.
    pub fn record(&mut self, query: &str) -> Result<(), CoreError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(CoreError::ValidationError(
                "Search query must not be blank".into(),
            ));
        }

        let lowered = trimmed.to_lowercase();
        self.entries.retain(|e| e.to_lowercase() != lowered);
        self.entries.insert(0, trimmed.to_string());
        self.entries.truncate(MAX_RECENT_SEARCHES);

        let json = serde_json::to_string(&self.entries)?;
        self.backend.write(STORAGE_KEY, &json)
    }

    /// The current list, most recent first.
    #[must_use]
    pub fn all(&self) -> &[String] {
        &self.entries
    }

    fn load(&mut self) {
        let raw = match self.backend.read(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            // Absent or unreadable entry: start empty.
            Ok(None) | Err(_) => return,
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(mut list) => {
                list.truncate(MAX_RECENT_SEARCHES);
                self.entries = list;
            }
            Err(_) => {
                // Structurally invalid: drop the stored entry and reset.
                let _ = self.backend.remove(STORAGE_KEY);
                self.entries.clear();
            }
        }
    }
}

impl std::fmt::Debug for RecentSearchStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecentSearchStore")
            .field("entries", &self.entries)
            .finish()
    }
}
