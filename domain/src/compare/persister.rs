//! Port for persisting the comparison set.
//!
//! The store writes its full state as one serialized value under a
//! single key owned by the implementation (a file path, a browser-style
//! key-value slot, ...). Implementations live in the infrastructure
//! layer.

/// Durable key-value slot for the serialized comparison set.
///
/// Both operations are intentionally non-fallible from the store's
/// point of view: a missing or unreadable value is `None`, and a failed
/// save is the implementation's to log. Losing the comparison set must
/// never take the host down.
pub trait ComparePersister: Send + Sync {
    /// Read the stored value, if any.
    fn load(&self) -> Option<String>;

    /// Replace the stored value wholesale.
    fn save(&self, value: &str);
}

/// Persister that never stores anything, for ephemeral sessions.
pub struct NoPersister;

impl ComparePersister for NoPersister {
    fn load(&self) -> Option<String> {
        None
    }

    fn save(&self, _value: &str) {}
}
