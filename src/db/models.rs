use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Opaque string, stored as-is. Hashing happens outside this layer.
    pub password: String,
}

/// Insert payload for `add_user`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Property {
    pub id: i64,
    pub owner_id: i64,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Integer minor currency units (cents), never floating point.
    pub cost_per_night: i64,
    pub parking_spaces: i64,
    pub number_of_bathrooms: i64,
    pub number_of_bedrooms: i64,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub active: bool,
}

/// Insert payload for `add_property`; the id is assigned by the database.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProperty {
    pub owner_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail_photo_url: String,
    #[serde(default)]
    pub cover_photo_url: String,
    pub cost_per_night: i64,
    #[serde(default)]
    pub parking_spaces: i64,
    #[serde(default = "default_one")]
    pub number_of_bathrooms: i64,
    #[serde(default = "default_one")]
    pub number_of_bedrooms: i64,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_one() -> i64 {
    1
}

fn default_true() -> bool {
    true
}

/// A property row joined with its average review rating.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PropertyListing {
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: f64,
}

/// A past stay of a guest: the reservation plus the listing it was for.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GuestReservation {
    pub id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub guest_id: i64,
    #[serde(flatten)]
    pub listing: PropertyListing,
}
