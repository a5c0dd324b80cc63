use crate::types::{AccessLevel, AccessTier};

/// Route component constants shared across crates
pub const EVENTS_ROUTE_COMPONENT: &str = "events";
pub const EVENTS_ROUTE_PREFIX: &str = const_str::concat!("/", EVENTS_ROUTE_COMPONENT);

pub const ICAL_ROUTE_COMPONENT: &str = "ical";
pub const ICAL_ROUTE_PREFIX: &str =
    const_str::concat!(EVENTS_ROUTE_PREFIX, "/", ICAL_ROUTE_COMPONENT);

pub const APP_ROUTE_COMPONENT: &str = "app";

/// Placeholder substituted by the calendar id in share link templates.
pub const CID_PLACEHOLDER: &str = "{cid}";

/// Glyph placed between consecutive calendar links.
pub const CALENDAR_LINK_SEPARATOR: &str = "/";

/// Access tiers in display order. Each tier may map to an external calendar.
pub const ACCESS_TIERS: &[AccessTier] = &[
    AccessTier::new(AccessLevel::INTERNAL, "internal"),
    AccessTier::new(AccessLevel::CANDIDATE, "candidate"),
    AccessTier::new(AccessLevel::EXTERNAL, "external"),
];
