//! Filter criteria: the composable facet selections a search carries.

use serde::{Deserialize, Serialize};

use crate::property::{GenderPolicy, PropertyKind, RoomType};

/// Inclusive monthly-price bounds.
///
/// Construction clamps an inverted range (`min > max`) down to
/// `min == max` so a malformed range narrows the search instead of
/// erroring out of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    min: f64,
    max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min: min.min(max),
            max,
        }
    }

    /// The range that accepts every non-negative price.
    pub fn unbounded() -> Self {
        Self {
            min: 0.0,
            max: f64::MAX,
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }

    /// Whether this range constrains anything at all.
    pub fn is_unbounded(&self) -> bool {
        self.min <= 0.0 && self.max == f64::MAX
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Requested result ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    RatingDesc,
    /// Preserve the input order.
    #[default]
    None,
}

/// A composable set of facet selections.
///
/// Facets combine conjunctively: a property must satisfy every active
/// facet. A facet with an empty selection is inactive and imposes no
/// constraint ("empty means unrestricted", never "match nothing").
///
/// # Example
///
/// ```
/// use stayscout_domain::search::{FilterCriteria, PriceRange, SortKey};
/// use stayscout_domain::property::RoomType;
///
/// let criteria = FilterCriteria::new()
///     .with_price_range(PriceRange::new(2000.0, 8000.0))
///     .with_room_types([RoomType::Private])
///     .with_required_amenities(["wifi"])
///     .with_sort(SortKey::PriceAsc);
/// assert_eq!(criteria.active_facet_count(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub price_range: PriceRange,
    pub room_types: Vec<RoomType>,
    pub gender_policies: Vec<GenderPolicy>,
    pub property_kinds: Vec<PropertyKind>,
    /// A property must carry ALL of these tags (conjunction, not any-of).
    pub required_amenities: Vec<String>,
    /// Case-insensitive substring matched against address or city.
    pub location_query: Option<String>,
    pub sort: SortKey,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    pub fn with_room_types(mut self, types: impl IntoIterator<Item = RoomType>) -> Self {
        self.room_types = types.into_iter().collect();
        self
    }

    pub fn with_gender_policies(
        mut self,
        policies: impl IntoIterator<Item = GenderPolicy>,
    ) -> Self {
        self.gender_policies = policies.into_iter().collect();
        self
    }

    pub fn with_property_kinds(mut self, kinds: impl IntoIterator<Item = PropertyKind>) -> Self {
        self.property_kinds = kinds.into_iter().collect();
        self
    }

    pub fn with_required_amenities<I, S>(mut self, amenities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_amenities = amenities.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_location_query(mut self, query: impl Into<String>) -> Self {
        self.location_query = Some(query.into());
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// True when the location facet actually constrains something.
    pub(crate) fn location_query_active(&self) -> Option<&str> {
        self.location_query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }

    /// Number of active facets, for "N filters applied" badges.
    pub fn active_facet_count(&self) -> usize {
        usize::from(!self.price_range.is_unbounded())
            + usize::from(!self.room_types.is_empty())
            + usize::from(!self.gender_policies.is_empty())
            + usize::from(!self.property_kinds.is_empty())
            + usize::from(!self.required_amenities.is_empty())
            + usize::from(self.location_query_active().is_some())
    }

    /// True when no facet constrains anything (sort may still apply).
    pub fn is_unconstrained(&self) -> bool {
        self.active_facet_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_range_clamps_instead_of_erroring() {
        let range = PriceRange::new(9000.0, 4000.0);
        assert_eq!(range.min(), 4000.0);
        assert_eq!(range.max(), 4000.0);
        assert!(range.contains(4000.0));
        assert!(!range.contains(4001.0));
        assert!(!range.contains(3999.0));
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let range = PriceRange::new(2000.0, 5000.0);
        assert!(range.contains(2000.0));
        assert!(range.contains(5000.0));
        assert!(!range.contains(1999.99));
        assert!(!range.contains(5000.01));
    }

    #[test]
    fn test_default_criteria_is_unconstrained() {
        let criteria = FilterCriteria::default();
        assert!(criteria.is_unconstrained());
        assert_eq!(criteria.active_facet_count(), 0);
        assert_eq!(criteria.sort, SortKey::None);
    }

    #[test]
    fn test_blank_location_query_is_inactive() {
        let criteria = FilterCriteria::new().with_location_query("   ");
        assert!(criteria.is_unconstrained());
        assert!(criteria.location_query_active().is_none());
    }

    #[test]
    fn test_active_facet_count() {
        let criteria = FilterCriteria::new()
            .with_price_range(PriceRange::new(0.0, 10000.0))
            .with_room_types([RoomType::Private, RoomType::Studio])
            .with_required_amenities(["wifi", "gym"])
            .with_location_query("Koramangala");
        assert_eq!(criteria.active_facet_count(), 4);
    }

    #[test]
    fn test_sort_key_wire_names() {
        assert_eq!(
            serde_json::to_string(&SortKey::PriceAsc).unwrap(),
            "\"price-asc\""
        );
        assert_eq!(serde_json::to_string(&SortKey::None).unwrap(), "\"none\"");
    }
}
