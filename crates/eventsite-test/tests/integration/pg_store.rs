#![allow(clippy::expect_used)]
//! `PgStore` against a real PostgreSQL database.
//!
//! Every test acquires the shared test database through `TestDb` and returns
//! early when `TEST_DATABASE_URL` is not set.

use super::helpers::*;
use eventsite_test::component::db::store::{CalendarStore, EventQuery, MemoryStore};
use eventsite_test::component::model::event::{EventListing, NewEvent};
use eventsite_test::component::types::AccessLevel;

fn query(level: AccessLevel, viewer: Option<uuid::Uuid>) -> EventQuery {
    EventQuery {
        access_level: level,
        viewer,
        include_rsvpd: true,
        include_not_rsvpd: true,
        event_types: None,
    }
}

fn names(events: &[EventListing]) -> Vec<String> {
    events.iter().map(|listing| listing.event.name.clone()).collect()
}

// ============================================================================
// Events
// ============================================================================

#[test_log::test(tokio::test)]
async fn visible_events_respect_access_level() {
    let Some(db) = TestDb::new().await.expect("test database") else {
        return;
    };
    db.seed_event("Open House", "social", AccessLevel::EXTERNAL, 9)
        .await
        .expect("seed");
    db.seed_event("Officer Retreat", "meeting", AccessLevel::INTERNAL, 2)
        .await
        .expect("seed");
    db.seed_event("Candidate Mixer", "social", AccessLevel::CANDIDATE, 5)
        .await
        .expect("seed");

    let public = db
        .store
        .visible_events(&query(AccessLevel::EXTERNAL, None))
        .await
        .expect("query");
    assert_eq!(names(&public), vec!["Open House"]);

    let candidate = db
        .store
        .visible_events(&query(AccessLevel::CANDIDATE, None))
        .await
        .expect("query");
    assert_eq!(names(&candidate), vec!["Candidate Mixer", "Open House"]);

    let internal = db
        .store
        .visible_events(&query(AccessLevel::INTERNAL, None))
        .await
        .expect("query");
    assert_eq!(
        names(&internal),
        vec!["Officer Retreat", "Candidate Mixer", "Open House"]
    );
    assert_eq!(internal[0].event_type.name, "meeting");
}

#[test_log::test(tokio::test)]
async fn visible_events_filter_by_type() {
    let Some(db) = TestDb::new().await.expect("test database") else {
        return;
    };
    db.seed_event("Boba Night", "social", AccessLevel::EXTERNAL, 2)
        .await
        .expect("seed");
    db.seed_event("Rust Workshop", "technical", AccessLevel::EXTERNAL, 3)
        .await
        .expect("seed");
    db.seed_event("Resume Review", "professional", AccessLevel::EXTERNAL, 4)
        .await
        .expect("seed");

    let filtered = db
        .store
        .visible_events(&EventQuery {
            event_types: Some(vec!["social".to_string(), "technical".to_string()]),
            ..query(AccessLevel::EXTERNAL, None)
        })
        .await
        .expect("query");

    assert_eq!(names(&filtered), vec!["Boba Night", "Rust Workshop"]);
}

#[test_log::test(tokio::test)]
async fn visible_events_honour_rsvp_flags() {
    let Some(db) = TestDb::new().await.expect("test database") else {
        return;
    };
    let ada = db
        .seed_user("Ada", "ada@example.com", &[])
        .await
        .expect("seed user");
    let bob = db
        .seed_user("Bob", "bob@example.com", &[])
        .await
        .expect("seed user");
    let boba = db
        .seed_event("Boba Night", "social", AccessLevel::EXTERNAL, 2)
        .await
        .expect("seed");
    let games = db
        .seed_event("Board Games", "social", AccessLevel::EXTERNAL, 3)
        .await
        .expect("seed");
    db.seed_rsvp(ada.id, boba).await.expect("rsvp");
    db.seed_rsvp(bob.id, games).await.expect("rsvp");

    let hide_rsvpd = db
        .store
        .visible_events(&EventQuery {
            include_rsvpd: false,
            ..query(AccessLevel::EXTERNAL, Some(ada.id))
        })
        .await
        .expect("query");
    assert_eq!(names(&hide_rsvpd), vec!["Board Games"]);

    let only_rsvpd = db
        .store
        .visible_events(&EventQuery {
            include_not_rsvpd: false,
            ..query(AccessLevel::EXTERNAL, Some(ada.id))
        })
        .await
        .expect("query");
    assert_eq!(names(&only_rsvpd), vec!["Boba Night"]);

    let anonymous_only_rsvpd = db
        .store
        .visible_events(&EventQuery {
            include_not_rsvpd: false,
            ..query(AccessLevel::EXTERNAL, None)
        })
        .await
        .expect("query");
    assert!(anonymous_only_rsvpd.is_empty());
}

#[test_log::test(tokio::test)]
async fn event_types_sorted_and_filtered() {
    let Some(db) = TestDb::new().await.expect("test database") else {
        return;
    };
    db.seed_event("Rust Workshop", "technical", AccessLevel::EXTERNAL, 3)
        .await
        .expect("seed");
    db.seed_event("Boba Night", "social", AccessLevel::EXTERNAL, 2)
        .await
        .expect("seed");
    db.seed_event("Board Games", "social", AccessLevel::EXTERNAL, 4)
        .await
        .expect("seed");

    let all = db.store.event_types(None).await.expect("types");
    let all: Vec<&str> = all.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(all, vec!["social", "technical"]);

    let wanted = vec!["technical".to_string()];
    let some = db.store.event_types(Some(&wanted)).await.expect("types");
    assert_eq!(some.len(), 1);
    assert_eq!(some[0].name, "technical");
}

// ============================================================================
// Users, groups and calendars
// ============================================================================

#[test_log::test(tokio::test)]
async fn find_or_create_user_is_idempotent_and_adds_profile() {
    let Some(db) = TestDb::new().await.expect("test database") else {
        return;
    };

    let first = db
        .store
        .find_or_create_user("Ada", "ada@example.com")
        .await
        .expect("create");
    let second = db
        .store
        .find_or_create_user("Ada Lovelace", "ada@example.com")
        .await
        .expect("find");

    assert_eq!(first.id, second.id);
    assert_eq!(second.name, "Ada");

    let profile = db
        .store
        .profile_for_user(first.id)
        .await
        .expect("profile lookup")
        .expect("profile created with user");
    assert_eq!(profile.personal_calendar_id(), None);

    let by_email = db
        .store
        .user_by_email("ada@example.com")
        .await
        .expect("lookup")
        .expect("user exists");
    assert_eq!(by_email.id, first.id);
}

#[test_log::test(tokio::test)]
async fn group_names_and_tier_calendars() {
    let Some(db) = TestDb::new().await.expect("test database") else {
        return;
    };
    let olive = db
        .seed_user("Olive", "olive@example.com", &["officer", "candidate"])
        .await
        .expect("seed user");
    db.seed_calendar_id(AccessLevel::EXTERNAL, "external@group.calendar")
        .await
        .expect("seed calendar");

    let mut groups = db
        .store
        .group_names_for_user(olive.id)
        .await
        .expect("groups");
    groups.sort();
    assert_eq!(groups, vec!["candidate", "officer"]);

    assert_eq!(
        db.store
            .calendar_id_for_access_level(AccessLevel::EXTERNAL)
            .await
            .expect("lookup")
            .as_deref(),
        Some("external@group.calendar")
    );
    assert_eq!(
        db.store
            .calendar_id_for_access_level(AccessLevel::INTERNAL)
            .await
            .expect("lookup"),
        None
    );
}

// ============================================================================
// Feed views
// ============================================================================

#[test_log::test(tokio::test)]
async fn get_or_create_feed_view_is_stable() {
    let Some(db) = TestDb::new().await.expect("test database") else {
        return;
    };
    let ada = db
        .seed_user("Ada", "ada@example.com", &[])
        .await
        .expect("seed user");

    let first = db
        .store
        .get_or_create_feed_view(ada.id)
        .await
        .expect("create");
    let second = db
        .store
        .get_or_create_feed_view(ada.id)
        .await
        .expect("get");

    assert_eq!(first, second);
    assert!(first.show_rsvpd);
    assert!(!first.show_not_rsvpd);

    let found = db
        .store
        .feed_view_by_id(first.id)
        .await
        .expect("lookup")
        .expect("view exists");
    assert_eq!(found.user_id, ada.id);
    assert!(
        db.store
            .feed_view_by_id(uuid::Uuid::new_v4())
            .await
            .expect("lookup")
            .is_none()
    );
}

// ============================================================================
// Parity with the in-memory store
// ============================================================================

#[test_log::test(tokio::test)]
async fn pg_and_memory_stores_agree_on_visible_events() {
    let Some(db) = TestDb::new().await.expect("test database") else {
        return;
    };
    let memory = MemoryStore::new();

    let seeded = [
        ("Officer Retreat", "meeting", AccessLevel::INTERNAL, 2),
        ("Boba Night", "social", AccessLevel::EXTERNAL, 3),
        ("Candidate Mixer", "social", AccessLevel::CANDIDATE, 4),
        ("Rust Workshop", "technical", AccessLevel::EXTERNAL, 5),
        ("Board Games", "social", AccessLevel::EXTERNAL, 5),
        ("Resume Review", "professional", AccessLevel::CANDIDATE, 6),
    ];

    let pg_user = db
        .seed_user("Ada", "ada@example.com", &[])
        .await
        .expect("seed user");
    let memory_user = memory.insert_user("Ada", "ada@example.com").await;

    for (name, type_name, level, day) in seeded {
        let pg_event = db
            .seed_event(name, type_name, level, day)
            .await
            .expect("seed");
        let memory_type = memory.insert_event_type(type_name).await;
        let start = seeded_start(day);
        let memory_event = memory
            .insert_event(&NewEvent {
                id: uuid::Uuid::now_v7(),
                name,
                location: Some("Cory Hall"),
                description: None,
                start_time: start,
                end_time: start + chrono::Duration::hours(2),
                event_type_id: memory_type.id,
                access_level: level.value(),
                created_by: None,
            })
            .await;

        if type_name == "social" {
            db.seed_rsvp(pg_user.id, pg_event).await.expect("rsvp");
            memory.insert_rsvp(memory_user.id, memory_event.id).await;
        }
    }

    let cases = [
        (AccessLevel::EXTERNAL, true, true, None),
        (AccessLevel::CANDIDATE, true, true, None),
        (AccessLevel::INTERNAL, false, true, None),
        (AccessLevel::INTERNAL, true, false, None),
        (
            AccessLevel::CANDIDATE,
            true,
            true,
            Some(vec!["social".to_string(), "technical".to_string()]),
        ),
    ];

    for (level, include_rsvpd, include_not_rsvpd, event_types) in cases {
        let pg_events = db
            .store
            .visible_events(&EventQuery {
                access_level: level,
                viewer: Some(pg_user.id),
                include_rsvpd,
                include_not_rsvpd,
                event_types: event_types.clone(),
            })
            .await
            .expect("pg query");
        let memory_events = memory
            .visible_events(&EventQuery {
                access_level: level,
                viewer: Some(memory_user.id),
                include_rsvpd,
                include_not_rsvpd,
                event_types,
            })
            .await
            .expect("memory query");

        assert_eq!(
            names(&pg_events),
            names(&memory_events),
            "stores disagree for level {level}, rsvpd {include_rsvpd}, not_rsvpd {include_not_rsvpd}"
        );
    }
}
