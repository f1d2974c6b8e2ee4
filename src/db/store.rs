use crate::db::models::{GuestReservation, NewProperty, NewUser, Property, PropertyListing, User};
use crate::db::schema::SQLITE_INIT;
use crate::db::search::{self, FilterOptions, QueryParam, build_search_query};
use crate::error::StoreError;
use chrono::{NaiveDate, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Pool, Row, Sqlite};

pub type SqlitePool = Pool<Sqlite>;

/// Data-access context for the listing application. Constructed from a
/// caller-built pool at startup; closing the pool is the caller's concern.
#[derive(Clone)]
pub struct ListingStore {
    pool: SqlitePool,
}

impl ListingStore {
    pub const DEFAULT_LIMIT: i64 = search::DEFAULT_LIMIT;

    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), StoreError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Look up a user by email, case-insensitively.
    pub async fn get_user_with_email(&self, email: &str) -> Result<User, StoreError> {
        let row = sqlx::query(
            "SELECT id, name, email, password FROM users WHERE email = LOWER($1)",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;
        Self::row_to_user(row)
    }

    pub async fn get_user_with_id(&self, id: i64) -> Result<User, StoreError> {
        let row = sqlx::query("SELECT id, name, email, password FROM users WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Self::row_to_user(row)
    }

    /// Register a new user. Returns the assigned id.
    pub async fn add_user(&self, user: &NewUser) -> Result<i64, StoreError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    /// Past stays of a guest: reservations whose end date precedes today,
    /// joined with the property and its average rating, oldest start first.
    pub async fn get_all_reservations(
        &self,
        guest_id: i64,
        limit: Option<i64>,
    ) -> Result<Vec<GuestReservation>, StoreError> {
        let today: NaiveDate = Utc::now().date_naive();
        let rows = sqlx::query(
            r#"SELECT reservations.id AS reservation_id,
                      reservations.start_date,
                      reservations.end_date,
                      reservations.guest_id,
                      properties.*,
                      avg(rating) AS average_rating
               FROM reservations
               JOIN properties ON reservations.property_id = properties.id
               JOIN property_reviews ON properties.id = property_reviews.property_id
               WHERE reservations.guest_id = $1
                 AND reservations.end_date < $2
               GROUP BY properties.id, reservations.id
               ORDER BY reservations.start_date
               LIMIT $3"#,
        )
        .bind(guest_id)
        .bind(today)
        .bind(limit.unwrap_or(Self::DEFAULT_LIMIT))
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_reservation).collect()
    }

    /// Search properties by the given optional filters. The statement is
    /// assembled by [`build_search_query`] and bound in parameter order.
    pub async fn search_properties(
        &self,
        options: &FilterOptions,
        limit: Option<i64>,
    ) -> Result<Vec<PropertyListing>, StoreError> {
        let query = build_search_query(options, limit);
        let mut stmt = sqlx::query(&query.sql);
        for param in &query.params {
            stmt = match param {
                QueryParam::Text(s) => stmt.bind(s),
                QueryParam::Int(i) => stmt.bind(i),
                QueryParam::Real(r) => stmt.bind(r),
            };
        }
        let rows = stmt.fetch_all(&self.pool).await?;
        rows.iter().map(Self::row_to_listing).collect()
    }

    /// Persist a new listing. The id is assigned by the database.
    pub async fn add_property(&self, property: &NewProperty) -> Result<Property, StoreError> {
        let id: i64 = sqlx::query_scalar(
            r#"INSERT INTO properties (
                   owner_id, title, description, thumbnail_photo_url, cover_photo_url,
                   cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms,
                   country, street, city, province, post_code, active
               ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
               RETURNING id"#,
        )
        .bind(property.owner_id)
        .bind(&property.title)
        .bind(&property.description)
        .bind(&property.thumbnail_photo_url)
        .bind(&property.cover_photo_url)
        .bind(property.cost_per_night)
        .bind(property.parking_spaces)
        .bind(property.number_of_bathrooms)
        .bind(property.number_of_bedrooms)
        .bind(&property.country)
        .bind(&property.street)
        .bind(&property.city)
        .bind(&property.province)
        .bind(&property.post_code)
        .bind(if property.active { 1_i64 } else { 0 })
        .fetch_one(&self.pool)
        .await?;

        Ok(Property {
            id,
            owner_id: property.owner_id,
            title: property.title.clone(),
            description: property.description.clone(),
            thumbnail_photo_url: property.thumbnail_photo_url.clone(),
            cover_photo_url: property.cover_photo_url.clone(),
            cost_per_night: property.cost_per_night,
            parking_spaces: property.parking_spaces,
            number_of_bathrooms: property.number_of_bathrooms,
            number_of_bedrooms: property.number_of_bedrooms,
            country: property.country.clone(),
            street: property.street.clone(),
            city: property.city.clone(),
            province: property.province.clone(),
            post_code: property.post_code.clone(),
            active: property.active,
        })
    }

    fn row_to_user(row: SqliteRow) -> Result<User, StoreError> {
        Ok(User {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            password: row.try_get("password")?,
        })
    }

    fn row_to_property(row: &SqliteRow) -> Result<Property, StoreError> {
        let active: i64 = row.try_get("active")?;
        Ok(Property {
            id: row.try_get("id")?,
            owner_id: row.try_get("owner_id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            thumbnail_photo_url: row.try_get("thumbnail_photo_url")?,
            cover_photo_url: row.try_get("cover_photo_url")?,
            cost_per_night: row.try_get("cost_per_night")?,
            parking_spaces: row.try_get("parking_spaces")?,
            number_of_bathrooms: row.try_get("number_of_bathrooms")?,
            number_of_bedrooms: row.try_get("number_of_bedrooms")?,
            country: row.try_get("country")?,
            street: row.try_get("street")?,
            city: row.try_get("city")?,
            province: row.try_get("province")?,
            post_code: row.try_get("post_code")?,
            active: active != 0,
        })
    }

    fn row_to_listing(row: &SqliteRow) -> Result<PropertyListing, StoreError> {
        let property = Self::row_to_property(row)?;
        let average_rating: f64 = row.try_get("average_rating")?;
        Ok(PropertyListing {
            property,
            average_rating,
        })
    }

    // `id` belongs to properties in this row shape; the reservation id is aliased.
    fn row_to_reservation(row: SqliteRow) -> Result<GuestReservation, StoreError> {
        let listing = Self::row_to_listing(&row)?;
        Ok(GuestReservation {
            id: row.try_get("reservation_id")?,
            start_date: row.try_get("start_date")?,
            end_date: row.try_get("end_date")?,
            guest_id: row.try_get("guest_id")?,
            listing,
        })
    }
}
