//! Port for surfacing comparison-set events to the user.
//!
//! Every mutation of the comparison set produces one discrete
//! [`CompareEvent`] a presentation layer may show (a toast, a console
//! line, ...). The core does not mandate a channel.

use stayscout_domain::PropertyId;

/// A user-visible comparison-set event.
#[derive(Debug, Clone, PartialEq)]
pub enum CompareEvent {
    /// A property joined the comparison set.
    Added { name: String },
    /// The property was already being compared; nothing changed.
    AlreadyPresent { name: String },
    /// The set is full; the user must remove an entry first.
    LimitReached { limit: usize },
    /// A property left the comparison set.
    Removed { id: PropertyId },
    /// Removal targeted an id that was not in the set.
    NotPresent { id: PropertyId },
    /// The comparison set was emptied.
    Cleared,
}

/// Port for delivering comparison events.
///
/// Intentionally synchronous and non-fallible: notification is a
/// courtesy, and a failing sink must never disturb the mutation that
/// triggered it.
pub trait CompareNotifier: Send + Sync {
    fn notify(&self, event: CompareEvent);
}

/// No-op implementation for tests and headless use.
pub struct NoCompareNotifier;

impl CompareNotifier for NoCompareNotifier {
    fn notify(&self, _event: CompareEvent) {}
}
