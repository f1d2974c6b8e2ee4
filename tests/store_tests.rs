use chrono::{Duration, NaiveDate, Utc};
use sqlx::sqlite::SqlitePoolOptions;
use stayfinder::db::seed::{self, SeedData};
use stayfinder::db::{FilterOptions, ListingStore};
use stayfinder::{NewProperty, NewUser};

async fn test_store() -> ListingStore {
    // single connection so the in-memory database is shared across queries
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");
    let store = ListingStore::new(pool);
    store.init_schema().await.expect("failed to init schema");
    store
}

fn sample_user(email: &str) -> NewUser {
    NewUser {
        name: "Test User".to_string(),
        email: email.to_string(),
        password: "hunter2".to_string(),
    }
}

fn sample_property(owner_id: i64, city: &str, cost_per_night: i64) -> NewProperty {
    NewProperty {
        owner_id,
        title: format!("Cottage in {city}"),
        description: String::new(),
        thumbnail_photo_url: String::new(),
        cover_photo_url: String::new(),
        cost_per_night,
        parking_spaces: 1,
        number_of_bathrooms: 1,
        number_of_bedrooms: 2,
        country: "Canada".to_string(),
        street: "1 Main St".to_string(),
        city: city.to_string(),
        province: "BC".to_string(),
        post_code: "V5K 0A1".to_string(),
        active: true,
    }
}

async fn add_review(store: &ListingStore, guest_id: i64, property_id: i64, rating: i64) {
    sqlx::query(
        "INSERT INTO property_reviews (guest_id, property_id, rating) VALUES ($1, $2, $3)",
    )
    .bind(guest_id)
    .bind(property_id)
    .bind(rating)
    .execute(store.pool())
    .await
    .expect("failed to insert review");
}

async fn add_reservation(
    store: &ListingStore,
    guest_id: i64,
    property_id: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
) {
    sqlx::query(
        "INSERT INTO reservations (start_date, end_date, property_id, guest_id) VALUES ($1, $2, $3, $4)",
    )
    .bind(start_date)
    .bind(end_date)
    .bind(property_id)
    .bind(guest_id)
    .execute(store.pool())
    .await
    .expect("failed to insert reservation");
}

#[tokio::test]
async fn user_email_lookup_is_case_insensitive() {
    let store = test_store().await;
    let id = store
        .add_user(&sample_user("foo@bar.com"))
        .await
        .expect("failed to add user");

    let user = store
        .get_user_with_email("Foo@Bar.com")
        .await
        .expect("lookup failed");
    assert_eq!(user.id, id);
    assert_eq!(user.email, "foo@bar.com");
}

#[tokio::test]
async fn missing_user_is_not_found() {
    let store = test_store().await;
    let err = store
        .get_user_with_email("nobody@example.com")
        .await
        .expect_err("lookup should fail");
    assert!(err.is_not_found());

    let err = store
        .get_user_with_id(999)
        .await
        .expect_err("lookup should fail");
    assert!(err.is_not_found());
}

#[tokio::test]
async fn added_user_round_trips_by_id() {
    let store = test_store().await;
    let new_user = sample_user("ann@example.com");
    let id = store.add_user(&new_user).await.expect("failed to add user");

    let user = store.get_user_with_id(id).await.expect("lookup failed");
    assert_eq!(user.name, new_user.name);
    assert_eq!(user.email, new_user.email);
    assert_eq!(user.password, new_user.password);
}

#[tokio::test]
async fn add_property_assigns_sequential_ids_and_persists() {
    let store = test_store().await;
    let owner = store
        .add_user(&sample_user("owner@example.com"))
        .await
        .expect("failed to add owner");

    let first = store
        .add_property(&sample_property(owner, "Victoria", 9000))
        .await
        .expect("failed to add property");
    let second = store
        .add_property(&sample_property(owner, "Nanaimo", 12000))
        .await
        .expect("failed to add property");
    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(first.city, "Victoria");

    // the new rows are immediately visible to the relational read path
    add_review(&store, owner, first.id, 4).await;
    add_review(&store, owner, second.id, 5).await;
    let listings = store
        .search_properties(&FilterOptions::default(), None)
        .await
        .expect("search failed");
    assert_eq!(listings.len(), 2);
}

#[tokio::test]
async fn reservations_are_past_only_ordered_and_limited() {
    let store = test_store().await;
    let guest = store
        .add_user(&sample_user("guest@example.com"))
        .await
        .expect("failed to add guest");
    let owner = store
        .add_user(&sample_user("host@example.com"))
        .await
        .expect("failed to add owner");
    let property = store
        .add_property(&sample_property(owner, "Kelowna", 15000))
        .await
        .expect("failed to add property");
    add_review(&store, guest, property.id, 4).await;

    let today = Utc::now().date_naive();
    // inserted out of start-date order on purpose
    add_reservation(
        &store,
        guest,
        property.id,
        today - Duration::days(30),
        today - Duration::days(25),
    )
    .await;
    add_reservation(
        &store,
        guest,
        property.id,
        today - Duration::days(90),
        today - Duration::days(85),
    )
    .await;
    add_reservation(
        &store,
        guest,
        property.id,
        today - Duration::days(60),
        today - Duration::days(55),
    )
    .await;
    // still ongoing, must be excluded
    add_reservation(
        &store,
        guest,
        property.id,
        today - Duration::days(2),
        today + Duration::days(3),
    )
    .await;

    let stays = store
        .get_all_reservations(guest, None)
        .await
        .expect("reservation query failed");
    assert_eq!(stays.len(), 3);
    assert!(stays.iter().all(|s| s.end_date < today));
    assert!(
        stays
            .windows(2)
            .all(|pair| pair[0].start_date <= pair[1].start_date)
    );
    assert_eq!(stays[0].guest_id, guest);
    assert_eq!(stays[0].listing.property.id, property.id);

    let limited = store
        .get_all_reservations(guest, Some(2))
        .await
        .expect("reservation query failed");
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[0].start_date, today - Duration::days(90));
}

#[tokio::test]
async fn search_filters_by_city_price_and_rating() {
    let store = test_store().await;
    let owner = store
        .add_user(&sample_user("host2@example.com"))
        .await
        .expect("failed to add owner");

    let cheap = store
        .add_property(&sample_property(owner, "Vancouver", 5000))
        .await
        .expect("failed to add property");
    let pricey = store
        .add_property(&sample_property(owner, "Vancouver", 25000))
        .await
        .expect("failed to add property");
    let elsewhere = store
        .add_property(&sample_property(owner, "Montreal", 8000))
        .await
        .expect("failed to add property");
    add_review(&store, owner, cheap.id, 3).await;
    add_review(&store, owner, cheap.id, 5).await;
    add_review(&store, owner, pricey.id, 5).await;
    add_review(&store, owner, elsewhere.id, 2).await;

    let by_city = store
        .search_properties(
            &FilterOptions {
                city: Some("couver".to_string()),
                ..Default::default()
            },
            None,
        )
        .await
        .expect("search failed");
    assert_eq!(by_city.len(), 2);
    assert!(by_city.iter().all(|l| l.property.city == "Vancouver"));

    // prices arrive in whole units; the 60..300 window drops the 50/night listing
    let by_price = store
        .search_properties(
            &FilterOptions {
                minimum_price_per_night: Some(60),
                maximum_price_per_night: Some(300),
                ..Default::default()
            },
            None,
        )
        .await
        .expect("search failed");
    assert_eq!(by_price.len(), 2);
    assert!(
        by_price
            .iter()
            .all(|l| l.property.cost_per_night >= 6000 && l.property.cost_per_night <= 30000)
    );

    let by_rating = store
        .search_properties(
            &FilterOptions {
                minimum_rating: Some(4.0),
                ..Default::default()
            },
            None,
        )
        .await
        .expect("search failed");
    assert_eq!(by_rating.len(), 2);
    assert!(by_rating.iter().all(|l| l.average_rating >= 4.0));

    let cheap_listing = by_city
        .iter()
        .find(|l| l.property.id == cheap.id)
        .expect("cheap listing missing");
    assert!((cheap_listing.average_rating - 4.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn seed_apply_inserts_rows_and_skips_failures() {
    let store = test_store().await;
    let seed = SeedData {
        users: vec![
            sample_user("seed1@example.com"),
            sample_user("seed2@example.com"),
            // duplicate email violates the unique constraint and is skipped
            sample_user("seed1@example.com"),
        ],
        properties: vec![sample_property(1, "Ottawa", 11000)],
    };

    let report = seed::apply(&store, &seed).await.expect("seed apply failed");
    assert_eq!(report.users, 2);
    assert_eq!(report.properties, 1);

    let user = store
        .get_user_with_email("seed2@example.com")
        .await
        .expect("seeded user missing");
    assert_eq!(user.email, "seed2@example.com");
}

#[tokio::test]
async fn search_limit_caps_result_count() {
    let store = test_store().await;
    let owner = store
        .add_user(&sample_user("host3@example.com"))
        .await
        .expect("failed to add owner");
    for _ in 0..4 {
        let p = store
            .add_property(&sample_property(owner, "Halifax", 7000))
            .await
            .expect("failed to add property");
        add_review(&store, owner, p.id, 4).await;
    }

    let listings = store
        .search_properties(&FilterOptions::default(), Some(2))
        .await
        .expect("search failed");
    assert_eq!(listings.len(), 2);
}
