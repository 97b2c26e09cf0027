//! Identifier and enum value objects for the property model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a property listing.
///
/// Opaque string handed out by the property store; the domain never
/// inspects its contents, only compares it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(String);

impl PropertyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PropertyId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PropertyId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Category of a listing (PG, hostel, shared apartment, ...).
///
/// Wire names are the kebab-case codes used by the property store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyKind {
    Pg,
    Hostel,
    SharedApartment,
    SingleRoom,
    Dormitory,
    StudentHousing,
    SharedHouse,
}

impl PropertyKind {
    /// Human-readable label for display surfaces.
    pub fn label(&self) -> &'static str {
        match self {
            PropertyKind::Pg => "PG",
            PropertyKind::Hostel => "Hostel",
            PropertyKind::SharedApartment => "Shared Apartment",
            PropertyKind::SingleRoom => "Single Room",
            PropertyKind::Dormitory => "Dormitory",
            PropertyKind::StudentHousing => "Student Housing",
            PropertyKind::SharedHouse => "Shared House",
        }
    }
}

/// How a room is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Private,
    Shared,
    Studio,
}

impl RoomType {
    pub fn label(&self) -> &'static str {
        match self {
            RoomType::Private => "Private Room",
            RoomType::Shared => "Shared Room",
            RoomType::Studio => "Studio",
        }
    }
}

/// Who may stay at a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenderPolicy {
    CoEd,
    Male,
    Female,
}

impl GenderPolicy {
    pub fn label(&self) -> &'static str {
        match self {
            GenderPolicy::CoEd => "Co-ed",
            GenderPolicy::Male => "Male Only",
            GenderPolicy::Female => "Female Only",
        }
    }
}
