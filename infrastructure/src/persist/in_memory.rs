//! In-memory implementation of the comparison persister port, used by
//! tests and ephemeral sessions.

use std::sync::{Arc, Mutex};
use stayscout_domain::ComparePersister;

/// [`ComparePersister`] holding the value in process memory.
///
/// Clones share the same slot, so a test can keep a handle and inspect
/// what the store saved.
#[derive(Clone, Default)]
pub struct InMemoryComparePersister {
    value: Arc<Mutex<Option<String>>>,
}

impl InMemoryComparePersister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-seeded value, as if a previous session saved it.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Arc::new(Mutex::new(Some(value.into()))),
        }
    }

    /// The currently stored value.
    pub fn stored(&self) -> Option<String> {
        self.value.lock().unwrap().clone()
    }
}

impl ComparePersister for InMemoryComparePersister {
    fn load(&self) -> Option<String> {
        self.value.lock().unwrap().clone()
    }

    fn save(&self, value: &str) {
        *self.value.lock().unwrap() = Some(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_the_slot() {
        let persister = InMemoryComparePersister::new();
        let handle = persister.clone();

        persister.save("[]");
        assert_eq!(handle.stored().as_deref(), Some("[]"));
        assert_eq!(handle.load().as_deref(), Some("[]"));
    }

    #[test]
    fn test_seeded_value_loads() {
        let persister = InMemoryComparePersister::with_value("[1,2]");
        assert_eq!(persister.load().as_deref(), Some("[1,2]"));
    }
}
