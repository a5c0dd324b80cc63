//! HTML rendering of the events page.

use chrono_tz::Tz;
use maud::{DOCTYPE, Markup, html};

use eventsite_core::constants::EVENTS_ROUTE_PREFIX;
use eventsite_db::model::event::EventListing;
use eventsite_service::{calendar::links::CalendarLink, events::page::PageContext};

const DATE_FORMAT: &str = "%a %b %-d, %Y";
const TIME_FORMAT: &str = "%-I:%M %p";

fn type_filter_href(name: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(name.as_bytes()).collect();
    format!("{EVENTS_ROUTE_PREFIX}/?event_types={encoded}")
}

fn calendars(links: &[CalendarLink]) -> Markup {
    html! {
        @if !links.is_empty() {
            p.calendars {
                "Subscribe: "
                @for link in links {
                    a href=(link.link) { (link.name) }
                    @if !link.separator.is_empty() {
                        " " (link.separator) " "
                    }
                }
            }
        }
    }
}

fn sidebar(context: &PageContext) -> Markup {
    html! {
        aside.sidebar {
            h2 { "Filter" }
            ul.event-types {
                li { a href={ (EVENTS_ROUTE_PREFIX) "/" } { "all" } }
                @for event_type in &context.all_event_types {
                    li { a href=(type_filter_href(&event_type.name)) { (event_type.name) } }
                }
            }
            ul.rsvp {
                li { a href={ (EVENTS_ROUTE_PREFIX) "/?rsvpd=hide" } { "hide RSVP'd" } }
                li { a href={ (EVENTS_ROUTE_PREFIX) "/?not_rsvpd=hide" } { "only RSVP'd" } }
            }
        }
    }
}

fn event_row(listing: &EventListing, timezone: Tz) -> Markup {
    let event = &listing.event;
    let start = event.start_time.with_timezone(&timezone);
    let end = event.end_time.with_timezone(&timezone);
    html! {
        tr.event data-event-type=(listing.event_type.name) {
            td.date { (start.format(DATE_FORMAT)) }
            td.time {
                (start.format(TIME_FORMAT)) " - " (end.format(TIME_FORMAT))
            }
            td.name { (event.name) }
            td.category { (listing.event_type.name) }
            td.location { (event.location.as_deref().unwrap_or_default()) }
        }
    }
}

/// ## Summary
/// Renders the full events page.
#[must_use]
pub fn render_events_page(context: &PageContext) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (context.title) }
            }
            body {
                h1 { (context.title) }
                @if context.show_sidebar {
                    (sidebar(context))
                }
                main {
                    (calendars(&context.calendars))
                    p.event-types {
                        @for (i, event_type) in context.event_types.iter().enumerate() {
                            @if i > 0 { ", " }
                            span.event-type { (event_type.name) }
                        }
                    }
                    @if context.events.is_empty() {
                        p.empty { "No events." }
                    } @else {
                        table.events {
                            tbody {
                                @for listing in &context.events {
                                    (event_row(listing, context.timezone))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
