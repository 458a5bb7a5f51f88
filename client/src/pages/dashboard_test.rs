use super::*;

fn user(plan: Option<&str>) -> User {
    serde_json::from_value(serde_json::json!({ "id": 7, "email": "a@b.com", "planTier": plan })).unwrap()
}

#[test]
fn plan_label_shows_tier() {
    assert_eq!(plan_label(Some(&user(Some("Growth")))), "Plan: Growth");
}

#[test]
fn plan_label_without_tier_or_user() {
    assert_eq!(plan_label(Some(&user(None))), "No plan selected");
    assert_eq!(plan_label(Some(&user(Some("  ")))), "No plan selected");
    assert_eq!(plan_label(None), "No plan selected");
}

fn user_with_role(role: &str) -> User {
    serde_json::from_value(serde_json::json!({ "id": 7, "email": "a@b.com", "role": role })).unwrap()
}

#[test]
fn admin_link_follows_configured_role() {
    assert!(shows_admin_link(Some(&user_with_role("Staff")), "Staff"));
    assert!(!shows_admin_link(Some(&user_with_role("admin")), "Staff"));
    assert!(shows_admin_link(Some(&user_with_role("admin")), "Admin"));
    assert!(!shows_admin_link(None, "Admin"));
}
