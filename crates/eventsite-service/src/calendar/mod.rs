//! Calendar subscriptions.
//!
//! ## Module Organization
//!
//! - `feed`: Per-user iCalendar feed rendering
//! - `links`: Access-gated subscription link assembly

pub mod feed;
pub mod links;

pub use feed::{feed_to_ics, render_feed};
pub use links::{CalendarLink, assemble_calendar_links};
