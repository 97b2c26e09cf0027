//! The bounded comparison set.
//!
//! Holds at most [`MAX_COMPARE`] distinct properties in insertion
//! order, persists the full set after every mutation, and restores it
//! on construction. Single-threaded by contract: a multi-threaded host
//! wraps the store in its own mutex.

use tracing::{debug, warn};

use crate::property::{Property, PropertyId};

use super::persister::ComparePersister;

/// Maximum number of properties that can be compared side by side.
pub const MAX_COMPARE: usize = 3;

/// Result of a comparison-set mutation.
///
/// None of these are errors at this level; [`CompareOutcome::LimitReached`]
/// is the one outcome a caller must act on (prompt the user to remove an
/// entry first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompareOutcome {
    /// The property was appended to the set.
    Added,
    /// The property was already in the set; nothing changed.
    AlreadyPresent,
    /// The set already holds [`MAX_COMPARE`] entries; nothing changed.
    LimitReached,
    /// The property was removed from the set.
    Removed,
    /// No entry with that id existed; nothing changed.
    NotPresent,
    /// The set was emptied.
    Cleared,
}

/// Bounded, order-preserving, deduplicated comparison set.
///
/// The persisted value is the full set as a JSON array of properties,
/// replaced wholesale on every mutation. Restore tolerates anything:
/// an absent, unparsable, or invariant-violating stored value falls
/// back to (or is repaired into) a valid set, never an error.
pub struct CompareStore {
    entries: Vec<Property>,
    persister: Box<dyn ComparePersister>,
}

impl CompareStore {
    /// Create a store, restoring any previously persisted set.
    pub fn new(persister: Box<dyn ComparePersister>) -> Self {
        let entries = match persister.load() {
            Some(raw) => match serde_json::from_str::<Vec<Property>>(&raw) {
                Ok(entries) => repair(entries),
                Err(e) => {
                    warn!("Discarding unparsable comparison state: {}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        if !entries.is_empty() {
            debug!("Restored {} compared properties", entries.len());
        }

        Self { entries, persister }
    }

    /// Append a property to the set.
    ///
    /// Adding an id already in the set is a no-op reported as
    /// [`CompareOutcome::AlreadyPresent`]. Adding a fourth distinct
    /// property leaves the set unchanged and reports
    /// [`CompareOutcome::LimitReached`].
    pub fn add(&mut self, property: Property) -> CompareOutcome {
        if self.contains(&property.id) {
            return CompareOutcome::AlreadyPresent;
        }
        if self.entries.len() >= MAX_COMPARE {
            return CompareOutcome::LimitReached;
        }

        self.entries.push(property);
        self.persist();
        CompareOutcome::Added
    }

    /// Remove the entry with the given id, if present.
    pub fn remove(&mut self, id: &PropertyId) -> CompareOutcome {
        let before = self.entries.len();
        self.entries.retain(|p| p.id != *id);

        if self.entries.len() == before {
            return CompareOutcome::NotPresent;
        }
        self.persist();
        CompareOutcome::Removed
    }

    /// Empty the set.
    pub fn clear(&mut self) -> CompareOutcome {
        self.entries.clear();
        self.persist();
        CompareOutcome::Cleared
    }

    /// Membership test, synchronous with the latest mutation.
    pub fn contains(&self, id: &PropertyId) -> bool {
        self.entries.iter().any(|p| p.id == *id)
    }

    /// The compared properties in insertion order.
    pub fn properties(&self) -> &[Property] {
        &self.entries
    }

    /// An owned snapshot of the set, detached from future mutations.
    pub fn snapshot(&self) -> Vec<Property> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when no further distinct property can be added.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_COMPARE
    }

    fn persist(&self) {
        match serde_json::to_string(&self.entries) {
            Ok(raw) => self.persister.save(&raw),
            Err(e) => warn!("Could not serialize comparison state: {}", e),
        }
    }
}

// Re-establish the invariants over a restored set: distinct ids,
// insertion order, at most MAX_COMPARE entries.
fn repair(entries: Vec<Property>) -> Vec<Property> {
    let mut repaired: Vec<Property> = Vec::new();
    for entry in entries {
        if repaired.len() >= MAX_COMPARE {
            warn!("Truncating persisted comparison state to {}", MAX_COMPARE);
            break;
        }
        if repaired.iter().any(|p| p.id == entry.id) {
            warn!("Dropping duplicate compared property {}", entry.id);
            continue;
        }
        repaired.push(entry);
    }
    repaired
}
