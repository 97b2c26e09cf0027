//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use stayscout_domain::{FilterCriteria, GenderPolicy, PriceRange, PropertyKind, RoomType, SortKey};

/// Student housing search and comparison.
#[derive(Parser, Debug)]
#[command(name = "stayscout", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Explicit config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Keep the comparison set in memory only (do not touch the state file)
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Browse listings, optionally filtered and sorted
    List(ListArgs),

    /// Show one listing in detail
    Show {
        /// Property id
        id: String,
    },

    /// Manage the side-by-side comparison set (up to 3 properties)
    Compare {
        #[command(subcommand)]
        action: CompareAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum CompareAction {
    /// Add a property to the comparison set
    Add { id: String },
    /// Remove a property from the comparison set
    Remove { id: String },
    /// Add the property if absent, remove it if present
    Toggle { id: String },
    /// Empty the comparison set
    Clear,
    /// Print the comparison table for the current set
    Show,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Minimum monthly price (inclusive)
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Maximum monthly price (inclusive)
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Acceptable room types (repeatable)
    #[arg(long = "room-type", value_enum)]
    pub room_types: Vec<RoomTypeArg>,

    /// Acceptable gender policies (repeatable)
    #[arg(long = "gender", value_enum)]
    pub genders: Vec<GenderArg>,

    /// Acceptable property kinds (repeatable)
    #[arg(long = "kind", value_enum)]
    pub kinds: Vec<KindArg>,

    /// Required amenity tags; a listing must have all of them (repeatable)
    #[arg(long = "amenity")]
    pub amenities: Vec<String>,

    /// Case-insensitive substring matched against address or city
    #[arg(long)]
    pub location: Option<String>,

    /// Result ordering
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    /// Show only featured listings
    #[arg(long)]
    pub featured: bool,
}

impl ListArgs {
    /// Translate the flags into domain filter criteria.
    ///
    /// A one-sided price flag gets its missing bound filled in: zero
    /// below, the configured default ceiling above.
    pub fn to_criteria(&self, default_max_price: f64) -> FilterCriteria {
        let mut criteria = FilterCriteria::new()
            .with_room_types(self.room_types.iter().map(|t| t.into_domain()))
            .with_gender_policies(self.genders.iter().map(|g| g.into_domain()))
            .with_property_kinds(self.kinds.iter().map(|k| k.into_domain()))
            .with_required_amenities(self.amenities.iter().cloned());

        if self.min_price.is_some() || self.max_price.is_some() {
            criteria = criteria.with_price_range(PriceRange::new(
                self.min_price.unwrap_or(0.0),
                self.max_price.unwrap_or(default_max_price),
            ));
        }

        if let Some(location) = &self.location {
            criteria = criteria.with_location_query(location.clone());
        }

        if let Some(sort) = self.sort {
            criteria = criteria.with_sort(sort.into_domain());
        }

        criteria
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum RoomTypeArg {
    Private,
    Shared,
    Studio,
}

impl RoomTypeArg {
    fn into_domain(self) -> RoomType {
        match self {
            RoomTypeArg::Private => RoomType::Private,
            RoomTypeArg::Shared => RoomType::Shared,
            RoomTypeArg::Studio => RoomType::Studio,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum GenderArg {
    #[value(name = "co-ed")]
    CoEd,
    Male,
    Female,
}

impl GenderArg {
    fn into_domain(self) -> GenderPolicy {
        match self {
            GenderArg::CoEd => GenderPolicy::CoEd,
            GenderArg::Male => GenderPolicy::Male,
            GenderArg::Female => GenderPolicy::Female,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum KindArg {
    Pg,
    Hostel,
    #[value(name = "shared-apartment")]
    SharedApartment,
    #[value(name = "single-room")]
    SingleRoom,
    Dormitory,
    #[value(name = "student-housing")]
    StudentHousing,
    #[value(name = "shared-house")]
    SharedHouse,
}

impl KindArg {
    fn into_domain(self) -> PropertyKind {
        match self {
            KindArg::Pg => PropertyKind::Pg,
            KindArg::Hostel => PropertyKind::Hostel,
            KindArg::SharedApartment => PropertyKind::SharedApartment,
            KindArg::SingleRoom => PropertyKind::SingleRoom,
            KindArg::Dormitory => PropertyKind::Dormitory,
            KindArg::StudentHousing => PropertyKind::StudentHousing,
            KindArg::SharedHouse => PropertyKind::SharedHouse,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum SortArg {
    #[value(name = "price-asc")]
    PriceAsc,
    #[value(name = "price-desc")]
    PriceDesc,
    #[value(name = "rating-desc")]
    RatingDesc,
}

impl SortArg {
    fn into_domain(self) -> SortKey {
        match self {
            SortArg::PriceAsc => SortKey::PriceAsc,
            SortArg::PriceDesc => SortKey::PriceDesc,
            SortArg::RatingDesc => SortKey::RatingDesc,
        }
    }
}
