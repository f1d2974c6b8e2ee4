//! Database module: models, schema, and the listing store.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and insert payloads
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `search.rs`: dynamic filter-query builder for property search
//! - `store.rs`: `ListingStore` wrapping the connection pool
//! - `seed.rs`: import of legacy JSON-backed collections

pub mod models;
pub mod schema;
pub mod search;
pub mod seed;
pub mod store;

use crate::error::StoreError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

pub use models::{GuestReservation, NewProperty, NewUser, Property, PropertyListing, User};
pub use schema::SQLITE_INIT;
pub use search::{FilterOptions, PropertyQuery, QueryParam, build_search_query};
pub use store::{ListingStore, SqlitePool};

/// Build the connection pool for the given database URL, creating the
/// SQLite file if it does not exist yet.
pub async fn connect(database_url: &str) -> Result<SqlitePool, StoreError> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(StoreError::from)?
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;
    Ok(pool)
}
