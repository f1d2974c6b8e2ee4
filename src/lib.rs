pub mod config;
pub mod db;
pub mod error;

pub use db::models::{GuestReservation, NewProperty, NewUser, Property, PropertyListing, User};
pub use db::search::FilterOptions;
pub use db::store::ListingStore;
pub use error::StoreError;
