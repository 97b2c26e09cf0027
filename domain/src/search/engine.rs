//! The filter engine: pure evaluation of [`FilterCriteria`] over a
//! property collection.
//!
//! No state, no side effects. Callers pass the full collection in and
//! get a fresh, filtered, sorted `Vec` back, so repeated calls with the
//! same inputs always agree.

use crate::property::Property;

use super::criteria::{FilterCriteria, SortKey};

/// Whether a single property satisfies every active facet.
///
/// Facets are conjunctive; an empty selection set deactivates its facet
/// rather than rejecting everything.
pub fn matches(property: &Property, criteria: &FilterCriteria) -> bool {
    if !criteria.price_range.contains(property.price) {
        return false;
    }

    if !criteria.room_types.is_empty()
        && !criteria.room_types.contains(&property.room_details.room_type)
    {
        return false;
    }

    if !criteria.gender_policies.is_empty()
        && !criteria
            .gender_policies
            .contains(&property.room_details.gender_policy)
    {
        return false;
    }

    if !criteria.property_kinds.is_empty() && !criteria.property_kinds.contains(&property.kind) {
        return false;
    }

    // ALL required amenities must be present. `all` over an empty set is
    // vacuously true, which is exactly "empty means unrestricted".
    if !criteria
        .required_amenities
        .iter()
        .all(|tag| property.has_amenity(tag))
    {
        return false;
    }

    if let Some(query) = criteria.location_query_active() {
        let needle = query.to_lowercase();
        let in_address = property.location.address.to_lowercase().contains(&needle);
        let in_city = property.location.city.to_lowercase().contains(&needle);
        if !in_address && !in_city {
            return false;
        }
    }

    true
}

/// Filter and sort a property collection.
///
/// Returns a new `Vec` with exactly the properties satisfying every
/// active facet, ordered per `criteria.sort`. The sort is stable:
/// properties with equal keys keep their input order, and
/// [`SortKey::None`] preserves the input order outright.
pub fn filter_properties(properties: &[Property], criteria: &FilterCriteria) -> Vec<Property> {
    let mut result: Vec<Property> = properties
        .iter()
        .filter(|p| matches(p, criteria))
        .cloned()
        .collect();

    match criteria.sort {
        SortKey::PriceAsc => result.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => result.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::RatingDesc => {
            result.sort_by(|a, b| rating_key(b).total_cmp(&rating_key(a)));
        }
        SortKey::None => {}
    }

    result
}

/// The featured subset, capped at `limit`, input order preserved.
pub fn featured_properties(properties: &[Property], limit: usize) -> Vec<Property> {
    properties
        .iter()
        .filter(|p| p.featured)
        .take(limit)
        .cloned()
        .collect()
}

// Unrated sorts below every real rating (the scale starts at 0.0).
fn rating_key(property: &Property) -> f32 {
    property.rating.unwrap_or(-1.0)
}
