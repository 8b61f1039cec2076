use super::*;
use shared::models::MenuCategory;

#[test]
fn test_menu_filters() {
    let mut session = create_test_session();
    session.select_restaurant(1).unwrap();
    assert_eq!(session.visible_menu().len(), 8);

    session.set_category_filter(CategoryFilter::Category(MenuCategory::MainCourse));
    assert!(session.toggle_dietary_filter("vegetarian"));

    let ids: Vec<i64> = session.visible_menu().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![102, 104]);

    assert!(!session.toggle_dietary_filter("vegetarian"));
    let ids: Vec<i64> = session.visible_menu().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![101, 102, 104]);
}

#[test]
fn test_dietary_tags_any_match() {
    let mut session = create_test_session();
    session.select_restaurant(1).unwrap();
    session.toggle_dietary_filter("gluten-free");
    session.toggle_dietary_filter("spicy");

    let ids: Vec<i64> = session.visible_menu().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![101, 105, 106]);

    session.set_category_filter(CategoryFilter::Category(MenuCategory::Rice));
    let ids: Vec<i64> = session.visible_menu().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![105]);
}

#[test]
fn test_switching_restaurant_resets_filters() {
    let mut session = create_test_session();
    session.select_restaurant(1).unwrap();
    session.set_category_filter(CategoryFilter::Category(MenuCategory::Desserts));
    session.toggle_dietary_filter("sweet");

    let menu = session.select_restaurant(2).unwrap();
    assert_eq!(menu.len(), 4);
    assert!(session.filters().is_default());
    assert_eq!(session.visible_menu().len(), 4);
}

#[test]
fn test_restaurant_without_menu() {
    let mut session = create_test_session();
    assert!(session.select_restaurant(5).unwrap().is_empty());
    assert!(session.visible_menu().is_empty());
}

#[test]
fn test_no_restaurant_no_menu() {
    let session = create_test_session();
    assert!(session.visible_menu().is_empty());
    assert!(session.current_restaurant().is_none());
}

#[test]
fn test_clear_filters() {
    let mut session = create_test_session();
    session.select_restaurant(3).unwrap();
    session.toggle_dietary_filter("vegetarian");
    assert_eq!(session.visible_menu().len(), 2);

    session.clear_filters();
    assert_eq!(session.visible_menu().len(), 3);
}

#[test]
fn test_cart_spans_restaurants() {
    let mut session = session_with_items(1, &[(101, 1)]);
    session.select_restaurant(2).unwrap();
    session.add_to_cart(203, 2).unwrap();

    assert_eq!(session.cart_lines().len(), 2);
    assert_eq!(session.compute_summary().subtotal, 680);
}

#[test]
fn test_snapshot_reflects_state() {
    let mut session = session_with_items(1, &[(101, 2), (103, 1)]);
    session.toggle_dietary_filter("vegetarian");
    session.select_table(2).unwrap();

    let snapshot = session.snapshot();
    assert_eq!(snapshot.restaurant_id, Some(1));
    assert_eq!(snapshot.lines.len(), 2);
    assert_eq!(snapshot.item_count, 3);
    assert_eq!(snapshot.summary.total, 890);
    assert_eq!(snapshot.table.table().map(|t| t.id), Some(2));
    assert!(snapshot.filters.dietary.contains("vegetarian"));
    assert!(!snapshot.is_cart_empty());

    let json = serde_json::to_string(&snapshot).unwrap();
    let decoded: SessionSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, snapshot);
}

#[test]
fn test_full_visit() {
    let mut session = create_test_session();
    session.select_restaurant(1).unwrap();
    session.add_to_cart(105, 1).unwrap();
    session.add_to_cart(108, 2).unwrap();
    session.select_table(1).unwrap();
    session.confirm_table().unwrap();

    // 350 + 120 = 470, tax 84.6 -> 85
    let order = session.place_order().unwrap();
    assert_eq!(order.summary.subtotal, 470);
    assert_eq!(order.summary.tax, 85);
    assert_eq!(order.summary.total, 595);

    // Table stays confirmed after the cart is emptied
    assert!(session.table_selection().is_confirmed());
    assert!(session.snapshot().is_cart_empty());
}
