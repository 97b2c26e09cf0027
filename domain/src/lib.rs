//! Domain layer for stayscout
//!
//! This crate contains the property model and the search/compare core.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Filtering
//!
//! [`search::filter_properties`] evaluates a [`search::FilterCriteria`]
//! against a property collection: facets combine conjunctively, an empty
//! facet selection means "unrestricted", and the requested sort is stable.
//!
//! ## Comparison
//!
//! [`compare::CompareStore`] keeps the bounded (at most three) set of
//! properties a user compares side by side, persisting it through the
//! [`compare::ComparePersister`] port after every mutation.
//! [`compare::build_matrix`] derives the comparison table from the
//! current set, including one boolean row per amenity in the
//! cross-property union.

pub mod compare;
pub mod property;
pub mod search;

// Re-export commonly used types
pub use compare::{
    build_matrix, CellValue, ColumnHeader, CompareOutcome, ComparePersister, CompareStore,
    ComparisonMatrix, ComparisonRow, NoPersister, MAX_COMPARE,
};
pub use property::{
    ContactInfo, FoodMenu, GenderPolicy, Location, MealPlan, Property, PropertyId, PropertyKind,
    RoomDetails, RoomType,
};
pub use search::{
    featured_properties, filter_properties, matches, FilterCriteria, PriceRange, SortKey,
};
