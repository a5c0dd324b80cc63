#![allow(clippy::expect_used)]
//! Tests for the personal ICS feed endpoint.

use salvo::http::StatusCode;

use super::helpers::*;
use eventsite_test::component::db::store::CalendarStore;
use eventsite_test::component::types::AccessLevel;

fn feed_path(id: uuid::Uuid) -> String {
    format!("/events/ical/{id}")
}

#[test_log::test(tokio::test)]
async fn unknown_feed_is_not_found() {
    let app = TestApp::new();

    let _response = TestRequest::get(&feed_path(uuid::Uuid::new_v4()))
        .send(&app.service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_log::test(tokio::test)]
async fn malformed_feed_id_is_not_found() {
    let app = TestApp::new();

    let _response = TestRequest::get("/events/ical/not-a-uuid")
        .send(&app.service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_log::test(tokio::test)]
async fn feed_created_by_page_visit_is_served() {
    let app = TestApp::new();
    let user = app
        .seed_user("Ada", "ada@example.com", &[], None)
        .await;
    let boba = app
        .seed_event("Boba Night", "social", AccessLevel::EXTERNAL, 2)
        .await;
    app.store.insert_rsvp(user.id, boba).await;

    let _page = TestRequest::get("/events/")
        .as_user("ada@example.com")
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK);

    let view = app
        .store
        .get_or_create_feed_view(user.id)
        .await
        .expect("feed view");

    // No proxy header: the feed id alone grants access.
    let _response = TestRequest::get(&feed_path(view.id))
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .assert_header_contains("content-type", "text/calendar")
        .assert_body_contains("BEGIN:VCALENDAR")
        .assert_body_contains("PRODID:-//eventsite tests//Events//EN")
        .assert_body_not_contains("ICALENDAR-RS")
        .assert_body_contains("Events (Ada)")
        .assert_body_contains("SUMMARY:Boba Night")
        .assert_body_contains(&format!("UID:{boba}@eventsite"));
}

#[test_log::test(tokio::test)]
async fn default_feed_holds_only_rsvpd_events() {
    let app = TestApp::new();
    let user = app
        .seed_user("Ada", "ada@example.com", &[], None)
        .await;
    let boba = app
        .seed_event("Boba Night", "social", AccessLevel::EXTERNAL, 2)
        .await;
    app.seed_event("Board Games", "social", AccessLevel::EXTERNAL, 3)
        .await;
    app.store.insert_rsvp(user.id, boba).await;

    let view = app
        .store
        .get_or_create_feed_view(user.id)
        .await
        .expect("feed view");

    let _response = TestRequest::get(&feed_path(view.id))
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("SUMMARY:Boba Night")
        .assert_body_not_contains("Board Games");
}

#[test_log::test(tokio::test)]
async fn feed_flags_control_rsvp_filtering() {
    let app = TestApp::new();
    let user = app
        .seed_user("Ada", "ada@example.com", &[], None)
        .await;
    let boba = app
        .seed_event("Boba Night", "social", AccessLevel::EXTERNAL, 2)
        .await;
    app.seed_event("Board Games", "social", AccessLevel::EXTERNAL, 3)
        .await;
    app.store.insert_rsvp(user.id, boba).await;

    let view = app
        .store
        .get_or_create_feed_view(user.id)
        .await
        .expect("feed view");
    app.store.set_feed_flags(view.id, false, true).await;

    let _response = TestRequest::get(&feed_path(view.id))
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("SUMMARY:Board Games")
        .assert_body_not_contains("Boba Night");
}

#[test_log::test(tokio::test)]
async fn feed_uses_owner_access_level() {
    let app = TestApp::new();
    let officer = app
        .seed_user("Olive", "olive@example.com", &["officer"], None)
        .await;
    let member = app
        .seed_user("Ada", "ada@example.com", &[], None)
        .await;
    let retreat = app
        .seed_event("Officer Retreat", "meeting", AccessLevel::INTERNAL, 2)
        .await;
    app.store.insert_rsvp(officer.id, retreat).await;
    app.store.insert_rsvp(member.id, retreat).await;

    let officer_view = app
        .store
        .get_or_create_feed_view(officer.id)
        .await
        .expect("feed view");
    let member_view = app
        .store
        .get_or_create_feed_view(member.id)
        .await
        .expect("feed view");

    let _officer_feed = TestRequest::get(&feed_path(officer_view.id))
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("SUMMARY:Officer Retreat");

    let _member_feed = TestRequest::get(&feed_path(member_view.id))
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_not_contains("Officer Retreat");
}
