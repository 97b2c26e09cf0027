//! Property listing model: the entity served by the property store and
//! consumed read-only by the filter engine and comparison set.

pub mod entities;
pub mod value_objects;

pub use entities::{ContactInfo, FoodMenu, Location, MealPlan, Property, RoomDetails};
pub use value_objects::{GenderPolicy, PropertyId, PropertyKind, RoomType};
