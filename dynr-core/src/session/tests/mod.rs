use super::*;
use chrono::{Duration, NaiveTime};

fn create_test_session() -> OrderSession {
    let catalog = Catalog::builtin().unwrap();
    OrderSession::with_defaults(Arc::new(catalog))
}

// ========================================================================
// Helper: open a restaurant and fill the cart
// ========================================================================

fn session_with_items(restaurant_id: i64, items: &[(i64, u32)]) -> OrderSession {
    let mut session = create_test_session();
    session.select_restaurant(restaurant_id).unwrap();
    for (item_id, quantity) in items {
        session.add_to_cart(*item_id, *quantity).unwrap();
    }
    session
}

fn booking_form(days_ahead: i64) -> BookingForm {
    BookingForm {
        date: Some(chrono::Utc::now().date_naive() + Duration::days(days_ahead)),
        time: NaiveTime::from_hms_opt(20, 0, 0),
        party_size: 2,
        contact_name: "Ravi Kumar".to_string(),
        contact_phone: "9876543210".to_string(),
        special_requests: String::new(),
    }
}

mod test_flows;
