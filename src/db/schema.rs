//! SQL DDL for initializing the listing store.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `users.email` UNIQUE (stored lowercase, looked up via LOWER())
/// - `properties.cost_per_night` in integer minor currency units
/// - reservation dates stored as ISO-8601 TEXT, so lexicographic
///   comparison matches date order
/// - `active` BOOLEAN (stored as INTEGER 0/1)
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS properties (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    owner_id INTEGER NOT NULL REFERENCES users(id),
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    thumbnail_photo_url TEXT NOT NULL DEFAULT '',
    cover_photo_url TEXT NOT NULL DEFAULT '',
    cost_per_night INTEGER NOT NULL,
    parking_spaces INTEGER NOT NULL DEFAULT 0,
    number_of_bathrooms INTEGER NOT NULL DEFAULT 1,
    number_of_bedrooms INTEGER NOT NULL DEFAULT 1,
    country TEXT NOT NULL,
    street TEXT NOT NULL,
    city TEXT NOT NULL,
    province TEXT NOT NULL,
    post_code TEXT NOT NULL,
    active INTEGER NOT NULL DEFAULT 1
);

CREATE TABLE IF NOT EXISTS reservations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    start_date TEXT NOT NULL,
    end_date TEXT NOT NULL,
    property_id INTEGER NOT NULL REFERENCES properties(id),
    guest_id INTEGER NOT NULL REFERENCES users(id)
);

CREATE TABLE IF NOT EXISTS property_reviews (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    guest_id INTEGER NOT NULL REFERENCES users(id),
    property_id INTEGER NOT NULL REFERENCES properties(id),
    reservation_id INTEGER NULL REFERENCES reservations(id),
    rating INTEGER NOT NULL,
    message TEXT NOT NULL DEFAULT ''
);

CREATE INDEX IF NOT EXISTS idx_properties_city ON properties(city);
CREATE INDEX IF NOT EXISTS idx_reservations_guest_id ON reservations(guest_id);
CREATE INDEX IF NOT EXISTS idx_property_reviews_property_id ON property_reviews(property_id);
"#;
