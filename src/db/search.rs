//! Dynamic filter-query builder for property search.
//!
//! The search SQL is assembled clause by clause from whichever filter fields
//! are present. A single ordered parameter vector is shared by all clauses,
//! and each placeholder number is the vector's length right after the value
//! is pushed, so placeholders always line up with bind order.

use serde::Deserialize;

/// Optional search criteria. An absent field means "no constraint on that
/// dimension". Zero and empty-string values count as absent too, so a
/// minimum price of exactly 0 cannot be expressed as an explicit filter.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FilterOptions {
    pub city: Option<String>,
    pub owner_id: Option<i64>,
    /// Whole currency units per night; converted to minor units internally.
    pub minimum_price_per_night: Option<i64>,
    pub maximum_price_per_night: Option<i64>,
    pub minimum_rating: Option<f64>,
}

/// One positional query parameter, in bind order.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryParam {
    Text(String),
    Int(i64),
    Real(f64),
}

/// A finished statement plus its parameters, ready to bind in order.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyQuery {
    pub sql: String,
    pub params: Vec<QueryParam>,
}

pub const DEFAULT_LIMIT: i64 = 10;

/// Build the parameterized search statement for the given filters.
///
/// Clause order is fixed: city, owner_id, minimum price, maximum price,
/// GROUP BY (always), minimum rating as HAVING, then LIMIT (always last).
/// The first filter clause uses WHERE and later ones use AND; "first" is
/// decided by whether any parameters have been pushed yet.
pub fn build_search_query(options: &FilterOptions, limit: Option<i64>) -> PropertyQuery {
    let mut params: Vec<QueryParam> = Vec::new();
    let mut sql = String::from(
        "SELECT properties.*, avg(rating) AS average_rating \
         FROM properties \
         JOIN property_reviews ON properties.id = property_id",
    );

    if let Some(city) = options.city.as_deref().filter(|c| !c.is_empty()) {
        params.push(QueryParam::Text(format!("%{city}%")));
        sql.push_str(&format!(" WHERE city LIKE ${}", params.len()));
    }

    if let Some(owner_id) = options.owner_id.filter(|id| *id != 0) {
        let keyword = if params.is_empty() { "WHERE" } else { "AND" };
        params.push(QueryParam::Int(owner_id));
        sql.push_str(&format!(" {keyword} owner_id = ${}", params.len()));
    }

    if let Some(min_price) = options.minimum_price_per_night.filter(|p| *p != 0) {
        let keyword = if params.is_empty() { "WHERE" } else { "AND" };
        params.push(QueryParam::Int(min_price * 100));
        sql.push_str(&format!(" {keyword} cost_per_night >= ${}", params.len()));
    }

    if let Some(max_price) = options.maximum_price_per_night.filter(|p| *p != 0) {
        let keyword = if params.is_empty() { "WHERE" } else { "AND" };
        params.push(QueryParam::Int(max_price * 100));
        sql.push_str(&format!(" {keyword} cost_per_night <= ${}", params.len()));
    }

    sql.push_str(" GROUP BY properties.id");

    if let Some(rating) = options.minimum_rating.filter(|r| *r != 0.0) {
        params.push(QueryParam::Real(rating));
        sql.push_str(&format!(" HAVING avg(rating) >= ${}", params.len()));
    }

    params.push(QueryParam::Int(limit.unwrap_or(DEFAULT_LIMIT)));
    sql.push_str(&format!(" LIMIT ${}", params.len()));

    PropertyQuery { sql, params }
}
