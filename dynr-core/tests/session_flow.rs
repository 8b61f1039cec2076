//! End-to-end session flows over a shared catalog
//!
//! Sessions run on separate threads against one `Arc<Catalog>`; each keeps
//! its own cart, table and filters.

use dynr_core::{Catalog, Config, ErrorCode, OrderSession};
use shared::order::{CategoryFilter, TableSelection};
use std::fs;
use std::sync::Arc;
use std::thread;

const SESSION_COUNT: usize = 16;

fn shared_catalog() -> Arc<Catalog> {
    Arc::new(Catalog::builtin().expect("builtin catalog"))
}

#[test]
fn test_browse_order_and_book() {
    let mut session = OrderSession::with_defaults(shared_catalog());

    let restaurants = session.catalog().search_restaurants("north indian");
    assert_eq!(restaurants.len(), 1);
    let restaurant_id = restaurants[0].id;

    session.select_restaurant(restaurant_id).unwrap();
    session.set_category_filter(CategoryFilter::parse("Breads").unwrap());
    let naan = session.visible_menu()[0].id;
    assert_eq!(naan, 103);

    session.add_to_cart(101, 2).unwrap();
    session.add_to_cart(naan, 1).unwrap();

    let summary = session.compute_summary();
    assert_eq!(
        (summary.subtotal, summary.tax, summary.service_charge, summary.total),
        (720, 130, 40, 890)
    );

    assert_eq!(
        session.select_table(7).unwrap_err().code,
        ErrorCode::TableUnavailable
    );
    session.select_table(2).unwrap();
    session.confirm_table().unwrap();

    let order = session.place_order().unwrap();
    assert_eq!(order.summary.total, 890);
    assert!(session.cart_lines().is_empty());

    let mut form = shared::models::BookingForm {
        date: Some(chrono::Utc::now().date_naive() + chrono::Duration::days(7)),
        time: chrono::NaiveTime::from_hms_opt(13, 0, 0),
        party_size: 4,
        contact_name: "Meera".to_string(),
        contact_phone: "555-0100".to_string(),
        special_requests: "High chair".to_string(),
    };
    let booking = session.submit_booking(&mut form).unwrap();
    assert_eq!(booking.restaurant_id, restaurant_id);
    assert_eq!(booking.special_requests.as_deref(), Some("High chair"));
    assert!(form.is_blank());
}

#[test]
fn test_sessions_share_catalog_not_state() {
    let catalog = shared_catalog();

    let handles: Vec<_> = (0..SESSION_COUNT)
        .map(|idx| {
            let catalog = Arc::clone(&catalog);
            thread::spawn(move || {
                let mut session = OrderSession::with_defaults(catalog);
                session.select_restaurant(1).unwrap();
                let quantity = idx as u32 + 1;
                session.add_to_cart(108, quantity).unwrap();
                if idx % 2 == 0 {
                    session.select_table(1).unwrap();
                }
                session.snapshot()
            })
        })
        .collect();

    for (idx, handle) in handles.into_iter().enumerate() {
        let snapshot = handle.join().unwrap();
        assert_eq!(snapshot.item_count, idx as u64 + 1);
        assert_eq!(snapshot.summary.subtotal, 60 * (idx as u64 + 1));
        if idx % 2 == 0 {
            assert!(matches!(snapshot.table, TableSelection::Tentative { .. }));
        } else {
            assert_eq!(snapshot.table, TableSelection::None);
        }
    }

    assert_eq!(Arc::strong_count(&catalog), 1);
}

#[test]
fn test_catalog_from_configured_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(
        &path,
        r#"{
            "restaurants": [{
                "id": 10, "name": "Test Kitchen", "cuisine": "Fusion",
                "address": "1 Test Road", "image": "", "rating": 3.5,
                "waitingTime": "10 mins", "parkingAvailable": false,
                "priceRange": "₹"
            }],
            "menuItems": {
                "10": [{
                    "id": 1001, "name": "Soup", "category": "Appetizers",
                    "image": "", "price": 100, "serves": "1",
                    "waitingTime": "5 mins", "isVeg": true, "rating": 4.0,
                    "description": "Hot soup",
                    "nutrition": {"calories": 120, "protein": "3g", "carbs": "15g", "fat": "4g"},
                    "allergens": [], "dietaryInfo": ["vegan"]
                }]
            },
            "tables": [{"id": 1, "name": "Table 1", "seats": 2, "available": true}]
        }"#,
    )
    .unwrap();

    let path_str = path.to_string_lossy().to_string();
    let config = Config::from_lookup(|key| match key {
        "DYNR_CATALOG_PATH" => Some(path_str.clone()),
        "DYNR_SERVICE_CHARGE" => Some("0".to_string()),
        _ => None,
    });

    let catalog = config.load_catalog().unwrap();
    let mut session = OrderSession::new(Arc::new(catalog), &config);
    session.select_restaurant(10).unwrap();
    session.add_to_cart(1001, 1).unwrap();

    let summary = session.compute_summary();
    assert_eq!(summary.service_charge, 0);
    assert_eq!(summary.tax, 18);
    assert_eq!(summary.total, 118);
}

#[test]
fn test_missing_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json").to_string_lossy().to_string();
    let config = Config::from_lookup(|key| (key == "DYNR_CATALOG_PATH").then(|| missing.clone()));

    let err = config.load_catalog().unwrap_err();
    assert_eq!(err.code, ErrorCode::IoError);
}
