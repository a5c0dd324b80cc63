//! Per-user iCalendar feed.

use icalendar::{Calendar, Component, EventLike};

use crate::{auth::access::resolve_access_level, error::ServiceResult};
use eventsite_core::config::{CalendarConfig, Settings};
use eventsite_db::{
    db::store::{CalendarStore, EventQuery},
    model::{event::EventListing, user::User},
    viewer::Viewer,
};

/// Domain suffix of generated event UIDs.
const UID_DOMAIN: &str = "eventsite";

fn event_to_ics(listing: &EventListing) -> icalendar::Event {
    let event = &listing.event;

    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&format!("{}@{UID_DOMAIN}", event.id));
    ics_event.summary(&event.name);
    ics_event.starts(event.start_time);
    ics_event.ends(event.end_time);
    ics_event.add_property("CATEGORIES", &listing.event_type.name);

    if let Some(ref location) = event.location {
        ics_event.location(location);
    }
    if let Some(ref description) = event.description {
        ics_event.description(description);
    }

    ics_event.done()
}

/// Longest content line, in octets, before folding (RFC 5545 §3.1).
const MAX_LINE_OCTETS: usize = 75;

/// Appends `line` folded at `MAX_LINE_OCTETS`, never splitting a character.
fn push_folded(output: &mut String, line: &str) {
    let mut width = 0;
    for ch in line.chars() {
        let len = ch.len_utf8();
        if width + len > MAX_LINE_OCTETS {
            output.push_str("\r\n ");
            width = 1;
        }
        output.push(ch);
        width += len;
    }
    output.push_str("\r\n");
}

/// The serializer always writes its own `PRODID`; swap in the configured one.
fn replace_prodid(ics: &str, prodid: &str) -> String {
    let mut output = String::with_capacity(ics.len());
    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            push_folded(&mut output, &format!("PRODID:{prodid}"));
        } else {
            output.push_str(line);
            output.push_str("\r\n");
        }
    }
    output
}

/// ## Summary
/// Serializes `events` as the feed of `owner`.
#[must_use]
pub fn feed_to_ics(owner: &User, events: &[EventListing], config: &CalendarConfig) -> String {
    let mut calendar = Calendar::new();
    calendar.name(&format!("{} ({})", config.feed_name, owner.name));

    for listing in events {
        calendar.push(event_to_ics(listing));
    }

    replace_prodid(&calendar.done().to_string(), &config.prodid)
}

/// ## Summary
/// Renders the feed identified by `feed_id`.
///
/// The feed holds the events its owner may see, narrowed by the view's RSVP
/// flags. Returns `None` if no such feed exists.
///
/// ## Errors
/// Returns an error if a store lookup fails.
#[tracing::instrument(skip(store, settings))]
pub async fn render_feed(
    store: &dyn CalendarStore,
    settings: &Settings,
    feed_id: uuid::Uuid,
) -> ServiceResult<Option<String>> {
    let Some(view) = store.feed_view_by_id(feed_id).await? else {
        tracing::debug!("Feed view not found");
        return Ok(None);
    };

    let Some(owner) = store.user_by_id(view.user_id).await? else {
        tracing::warn!(user_id = %view.user_id, "Feed view owner not found");
        return Ok(None);
    };

    let viewer = Viewer::User(owner.clone());
    let level = resolve_access_level(store, &settings.access, &viewer).await?;

    let query = EventQuery {
        access_level: level,
        viewer: Some(owner.id),
        include_rsvpd: view.show_rsvpd,
        include_not_rsvpd: view.show_not_rsvpd,
        event_types: None,
    };
    let events = store.visible_events(&query).await?;

    tracing::debug!(event_count = events.len(), %level, "Rendering feed");

    Ok(Some(feed_to_ics(&owner, &events, &settings.calendar)))
}
