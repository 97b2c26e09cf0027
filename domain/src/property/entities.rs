//! Property listing entity and its nested records.
//!
//! A [`Property`] is loaded from the property store and treated as
//! read-only by the whole search/compare core. Wire format is the
//! camelCase JSON the store serves.

use serde::{Deserialize, Serialize};

use super::value_objects::{GenderPolicy, PropertyId, PropertyKind, RoomType};

/// Street address of a listing, with an optional geo-coordinate pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    /// `(latitude, longitude)` when the store knows it.
    #[serde(default)]
    pub coordinates: Option<(f64, f64)>,
}

/// Room attributes of a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDetails {
    pub room_type: RoomType,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub gender_policy: GenderPolicy,
    pub max_occupancy: u32,
    /// Square feet.
    pub room_size: u32,
}

/// Meals offered on a single day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    #[serde(default)]
    pub breakfast: Vec<String>,
    #[serde(default)]
    pub lunch: Vec<String>,
    #[serde(default)]
    pub dinner: Vec<String>,
}

impl MealPlan {
    /// True when no meal is listed for the day.
    pub fn is_empty(&self) -> bool {
        self.breakfast.is_empty() && self.lunch.is_empty() && self.dinner.is_empty()
    }
}

/// Weekly food menu, one [`MealPlan`] per weekday.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodMenu {
    #[serde(default)]
    pub monday: MealPlan,
    #[serde(default)]
    pub tuesday: MealPlan,
    #[serde(default)]
    pub wednesday: MealPlan,
    #[serde(default)]
    pub thursday: MealPlan,
    #[serde(default)]
    pub friday: MealPlan,
    #[serde(default)]
    pub saturday: MealPlan,
    #[serde(default)]
    pub sunday: MealPlan,
}

impl FoodMenu {
    /// Iterate the week in order with display labels.
    pub fn days(&self) -> [(&'static str, &MealPlan); 7] {
        [
            ("Monday", &self.monday),
            ("Tuesday", &self.tuesday),
            ("Wednesday", &self.wednesday),
            ("Thursday", &self.thursday),
            ("Friday", &self.friday),
            ("Saturday", &self.saturday),
            ("Sunday", &self.sunday),
        ]
    }

    /// True when no day lists any meal.
    pub fn is_empty(&self) -> bool {
        self.days().iter().all(|(_, plan)| plan.is_empty())
    }
}

/// Who to reach about a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub response_time: Option<String>,
}

/// A property listing.
///
/// Immutable once loaded; the filter engine and comparison set only
/// ever read it. Optional blocks default to absent so partially filled
/// listings still deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: PropertyId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    /// Monthly rent, non-negative.
    pub price: f64,
    pub location: Location,
    pub room_details: RoomDetails,
    /// Free-form amenity tags, order preserved. Not a fixed catalog:
    /// new tags may appear per property.
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub rules: Vec<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    /// 0.0 to 5.0 when rated.
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub reviews: Option<u32>,
    #[serde(default)]
    pub distance_to_landmark: Option<String>,
    #[serde(default)]
    pub nearby_places: Vec<String>,
    #[serde(default)]
    pub food_menu: Option<FoodMenu>,
    #[serde(default)]
    pub contact_info: Option<ContactInfo>,
    #[serde(default)]
    pub featured: bool,
}

impl Property {
    /// Create a listing with the required fields; optional blocks start absent.
    pub fn new(
        id: impl Into<PropertyId>,
        name: impl Into<String>,
        kind: PropertyKind,
        price: f64,
        location: Location,
        room_details: RoomDetails,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            kind,
            price,
            location,
            room_details,
            amenities: Vec::new(),
            rules: Vec::new(),
            photos: Vec::new(),
            rating: None,
            reviews: None,
            distance_to_landmark: None,
            nearby_places: Vec::new(),
            food_menu: None,
            contact_info: None,
            featured: false,
        }
    }

    /// Replace the amenity tags.
    pub fn with_amenities<I, S>(mut self, amenities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.amenities = amenities.into_iter().map(Into::into).collect();
        self
    }

    /// Attach a rating, clamped to the 0-5 scale.
    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating.clamp(0.0, 5.0));
        self
    }

    /// Attach a weekly food menu.
    pub fn with_food_menu(mut self, menu: FoodMenu) -> Self {
        self.food_menu = Some(menu);
        self
    }

    /// Mark the listing as featured.
    pub fn as_featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Exact-tag membership test. Amenity tags are opaque strings.
    pub fn has_amenity(&self, tag: &str) -> bool {
        self.amenities.iter().any(|a| a == tag)
    }

    /// True iff the listing carries a food menu that actually lists meals.
    pub fn has_food_menu(&self) -> bool {
        self.food_menu.as_ref().is_some_and(|menu| !menu.is_empty())
    }
}
