use diesel::{pg::Pg, prelude::*};

use crate::db::schema;
use eventsite_core::constants::ICAL_ROUTE_PREFIX;

/// A user's subscribable calendar feed. The id is the only credential needed
/// to read the feed.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = schema::ical_view)]
#[diesel(check_for_backend(Pg))]
pub struct FeedView {
    pub id: uuid::Uuid,
    pub user_id: uuid::Uuid,
    pub show_rsvpd: bool,
    pub show_not_rsvpd: bool,
}

impl FeedView {
    /// ## Summary
    /// Server-relative path of the feed, e.g. `/events/ical/<id>`.
    #[must_use]
    pub fn path(&self) -> String {
        format!("{ICAL_ROUTE_PREFIX}/{}", self.id)
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::ical_view)]
pub struct NewFeedView {
    pub id: uuid::Uuid,
    pub user_id: uuid::Uuid,
}
