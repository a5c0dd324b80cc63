#![allow(clippy::expect_used)]
//! Tests for the events calendar page.
//!
//! Verifies access-level filtering, query-string filters and the calendar
//! subscription links.

use salvo::http::StatusCode;

use super::helpers::*;
use eventsite_test::component::db::store::CalendarStore;
use eventsite_test::component::types::AccessLevel;

const EVENTS_PAGE: &str = "/events/";

// ============================================================================
// Visibility
// ============================================================================

#[test_log::test(tokio::test)]
async fn anonymous_sees_only_public_events() {
    let app = TestApp::new();
    app.seed_event("Officer Retreat", "meeting", AccessLevel::INTERNAL, 2)
        .await;
    app.seed_event("Candidate Mixer", "social", AccessLevel::CANDIDATE, 3)
        .await;
    app.seed_event("Open House", "social", AccessLevel::EXTERNAL, 4)
        .await;

    let _response = TestRequest::get(EVENTS_PAGE)
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .assert_header_contains("content-type", "text/html")
        .assert_body_contains("Open House")
        .assert_body_not_contains("Officer Retreat")
        .assert_body_not_contains("Candidate Mixer")
        .assert_body_not_contains("personal (ics)")
        .assert_body_not_contains("class=\"sidebar\"");
}

#[test_log::test(tokio::test)]
async fn candidate_sees_candidate_and_public_events_in_start_order() {
    let app = TestApp::new();
    app.seed_user("Cam", "cam@example.com", &["candidate"], None)
        .await;
    app.seed_event("Open House", "social", AccessLevel::EXTERNAL, 9)
        .await;
    app.seed_event("Officer Retreat", "meeting", AccessLevel::INTERNAL, 2)
        .await;
    app.seed_event("Candidate Mixer", "social", AccessLevel::CANDIDATE, 5)
        .await;

    let _response = TestRequest::get(EVENTS_PAGE)
        .as_user("cam@example.com")
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_not_contains("Officer Retreat")
        .assert_body_order(&["Candidate Mixer", "Open House"])
        .assert_body_contains("class=\"sidebar\"");
}

#[test_log::test(tokio::test)]
async fn unknown_proxy_user_is_public() {
    let app = TestApp::new();
    app.seed_event("Open House", "social", AccessLevel::EXTERNAL, 4)
        .await;

    let _response = TestRequest::get(EVENTS_PAGE)
        .as_user("stranger@example.com")
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("Open House")
        .assert_body_not_contains("personal (ics)");
}

// ============================================================================
// Query filters
// ============================================================================

#[test_log::test(tokio::test)]
async fn type_filter_and_rsvp_hide() {
    let app = TestApp::new();
    let user = app
        .seed_user("Ada", "ada@example.com", &[], None)
        .await;
    let boba = app
        .seed_event("Boba Night", "social", AccessLevel::EXTERNAL, 2)
        .await;
    app.seed_event("Board Games", "social", AccessLevel::EXTERNAL, 3)
        .await;
    app.seed_event("Rust Workshop", "technical", AccessLevel::EXTERNAL, 4)
        .await;
    app.seed_event("Resume Review", "professional", AccessLevel::EXTERNAL, 5)
        .await;
    app.store.insert_rsvp(user.id, boba).await;

    let _response = TestRequest::get("/events/?event_types=social,technical&rsvpd=hide")
        .as_user("ada@example.com")
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_not_contains("Boba Night")
        .assert_body_not_contains("Resume Review")
        .assert_body_order(&["Board Games", "Rust Workshop"]);
}

#[test_log::test(tokio::test)]
async fn only_rsvpd_events() {
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

    let _response = TestRequest::get("/events/?not_rsvpd=hide")
        .as_user("ada@example.com")
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("Boba Night")
        .assert_body_not_contains("Board Games");
}

#[test_log::test(tokio::test)]
async fn empty_event_types_is_no_filter() {
    let app = TestApp::new();
    app.seed_event("Boba Night", "social", AccessLevel::EXTERNAL, 2)
        .await;
    app.seed_event("Rust Workshop", "technical", AccessLevel::EXTERNAL, 4)
        .await;

    let _response = TestRequest::get("/events/?event_types=&rsvpd=show")
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("Boba Night")
        .assert_body_contains("Rust Workshop");
}

#[test_log::test(tokio::test)]
async fn sidebar_link_filters_type_with_reserved_characters() {
    let app = TestApp::new();
    app.seed_user("Ada", "ada@example.com", &[], None)
        .await;
    app.seed_event("Hack Night", "R&D", AccessLevel::EXTERNAL, 2)
        .await;
    app.seed_event("Boba Night", "social", AccessLevel::EXTERNAL, 3)
        .await;

    let _response = TestRequest::get(EVENTS_PAGE)
        .as_user("ada@example.com")
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("href=\"/events/?event_types=R%26D\"");

    let _response = TestRequest::get("/events/?event_types=R%26D")
        .as_user("ada@example.com")
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("Hack Night")
        .assert_body_not_contains("Boba Night");
}

// ============================================================================
// Calendar links
// ============================================================================

#[test_log::test(tokio::test)]
async fn anonymous_gets_only_external_calendar() {
    let app = TestApp::new();
    app.seed_tier_calendars().await;

    let _response = TestRequest::get(EVENTS_PAGE)
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("cid=external@group.calendar")
        .assert_body_contains(">external</a></p>")
        .assert_body_not_contains(">internal</a>")
        .assert_body_not_contains(">candidate</a>");
}

#[test_log::test(tokio::test)]
async fn officer_gets_every_tier_then_personal_links() {
    let app = TestApp::new();
    app.seed_tier_calendars().await;
    app.seed_user(
        "Olive",
        "olive@example.com",
        &["officer"],
        Some("olive@gmail.com"),
    )
    .await;

    let _response = TestRequest::get(EVENTS_PAGE)
        .as_user("olive@example.com")
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_order(&[
            ">internal</a> / ",
            ">candidate</a> / ",
            ">external</a> / ",
            "cid=olive@gmail.com",
            ">personal (gcal)</a> / ",
            ">personal (ics)</a></p>",
        ]);
}

#[test_log::test(tokio::test)]
async fn tier_without_calendar_is_skipped() {
    let app = TestApp::new();
    app.store
        .set_calendar_id(AccessLevel::EXTERNAL, "external@group.calendar")
        .await;
    app.seed_user("Olive", "olive@example.com", &["officer"], None)
        .await;

    let _response = TestRequest::get(EVENTS_PAGE)
        .as_user("olive@example.com")
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_not_contains(">internal</a>")
        .assert_body_not_contains(">candidate</a>")
        .assert_body_not_contains("personal (gcal)")
        .assert_body_order(&[">external</a> / ", ">personal (ics)</a></p>"]);
}

#[test_log::test(tokio::test)]
async fn personal_feed_link_uses_webcal_behind_https() {
    let app = TestApp::new();
    let user = app
        .seed_user("Ada", "ada@example.com", &[], None)
        .await;

    let response = TestRequest::get(EVENTS_PAGE)
        .as_user("ada@example.com")
        .header("Host", "events.example.org")
        .header("X-Forwarded-Proto", "https")
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK);

    let feed = app
        .store
        .get_or_create_feed_view(user.id)
        .await
        .expect("feed view created by page visit");

    let _response = response.assert_body_contains(&format!(
        "cid=webcal://events.example.org/events/ical/{}",
        feed.id
    ));
}

#[test_log::test(tokio::test)]
async fn repeated_visits_reuse_feed_view() {
    let app = TestApp::new();
    let user = app
        .seed_user("Ada", "ada@example.com", &[], None)
        .await;

    for _ in 0..2 {
        let _response = TestRequest::get(EVENTS_PAGE)
            .as_user("ada@example.com")
            .send(&app.service)
            .await
            .assert_status(StatusCode::OK);
    }

    let first = app
        .store
        .get_or_create_feed_view(user.id)
        .await
        .expect("feed view");
    let _response = TestRequest::get(EVENTS_PAGE)
        .as_user("ada@example.com")
        .send(&app.service)
        .await
        .assert_body_contains(&format!("/events/ical/{}", first.id));
}

// ============================================================================
// Operational
// ============================================================================

#[test_log::test(tokio::test)]
async fn healthcheck_is_ok() {
    let app = TestApp::new();

    let _response = TestRequest::get("/app/healthcheck")
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("OK");
}
