//! Import of the legacy JSON-backed collections (`users.json`,
//! `properties.json`) into the relational store.

use crate::db::models::{NewProperty, NewUser};
use crate::db::store::ListingStore;
use crate::error::StoreError;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{info, warn};

/// Counts of rows inserted by [`apply`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    pub properties: usize,
}

/// Seed collections parsed from disk, not yet inserted.
#[derive(Debug, Default, Clone)]
pub struct SeedData {
    pub users: Vec<NewUser>,
    pub properties: Vec<NewProperty>,
}

/// Load `users.json` and `properties.json` from a directory. A missing
/// directory or missing file yields empty collections rather than an error.
pub fn load_from_dir(dir: &Path) -> Result<SeedData, StoreError> {
    if !dir.exists() {
        info!(path = %dir.display(), "seed directory not found; skipping load");
        return Ok(SeedData::default());
    }

    Ok(SeedData {
        users: load_collection(&dir.join("users.json")),
        properties: load_collection(&dir.join("properties.json")),
    })
}

/// Insert the seed collections through the store. Users go first so that
/// property owner references resolve.
pub async fn apply(store: &ListingStore, seed: &SeedData) -> Result<SeedReport, StoreError> {
    let mut report = SeedReport::default();

    for user in &seed.users {
        match store.add_user(user).await {
            Ok(_) => report.users += 1,
            Err(e) => warn!(email = %user.email, error = %e, "failed to seed user"),
        }
    }

    for property in &seed.properties {
        match store.add_property(property).await {
            Ok(_) => report.properties += 1,
            Err(e) => warn!(title = %property.title, error = %e, "failed to seed property"),
        }
    }

    info!(
        users = report.users,
        properties = report.properties,
        "seed import finished"
    );
    Ok(report)
}

fn load_collection<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    if !path.exists() {
        info!(path = %path.display(), "seed file not found; skipping");
        return Vec::new();
    }
    match read_json(path) {
        Ok(items) => items,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to load seed file");
            Vec::new()
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
