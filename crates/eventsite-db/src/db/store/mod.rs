//! The read/write surface the service layer needs from persistence.
//!
//! Handlers receive an `Arc<dyn CalendarStore>` from the depot. `PgStore` backs
//! it with PostgreSQL; `MemoryStore` keeps everything in process.

mod memory;
mod pg;

pub use memory::MemoryStore;
pub use pg::PgStore;

use async_trait::async_trait;

use crate::error::DbResult;
use crate::model::{
    event::{EventListing, EventType},
    feed_view::FeedView,
    profile::Profile,
    user::User,
};
use eventsite_core::types::AccessLevel;

/// Selects the events a viewer may see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventQuery {
    /// Events restricted below this level are hidden.
    pub access_level: AccessLevel,
    /// The authenticated viewer, used for RSVP filtering.
    pub viewer: Option<uuid::Uuid>,
    /// Keep events the viewer RSVP'd to.
    pub include_rsvpd: bool,
    /// Keep events the viewer has not RSVP'd to.
    pub include_not_rsvpd: bool,
    /// Restrict to these event type names.
    pub event_types: Option<Vec<String>>,
}

impl EventQuery {
    /// ## Summary
    /// Whether the query can match nothing regardless of stored data.
    ///
    /// An anonymous viewer has RSVP'd to nothing, so hiding not-RSVP'd events
    /// hides every event.
    #[must_use]
    pub fn excludes_everything(&self) -> bool {
        let anonymous_hides_all = self.viewer.is_none() && !self.include_not_rsvpd;
        let hides_both = !self.include_rsvpd && !self.include_not_rsvpd;
        anonymous_hides_all || hides_both
    }
}

#[async_trait]
pub trait CalendarStore: Send + Sync {
    /// Returns the user with `email`, creating it (and an empty profile) if absent.
    async fn find_or_create_user(&self, name: &str, email: &str) -> DbResult<User>;

    async fn user_by_email(&self, email: &str) -> DbResult<Option<User>>;

    async fn user_by_id(&self, id: uuid::Uuid) -> DbResult<Option<User>>;

    async fn group_names_for_user(&self, user_id: uuid::Uuid) -> DbResult<Vec<String>>;

    /// Events matching `query`, ordered by start time.
    async fn visible_events(&self, query: &EventQuery) -> DbResult<Vec<EventListing>>;

    /// Event types ordered by name, optionally restricted to `names`.
    async fn event_types(&self, names: Option<&[String]>) -> DbResult<Vec<EventType>>;

    async fn calendar_id_for_access_level(&self, level: AccessLevel) -> DbResult<Option<String>>;

    async fn profile_for_user(&self, user_id: uuid::Uuid) -> DbResult<Option<Profile>>;

    /// Returns the user's feed view, creating it atomically on first use.
    async fn get_or_create_feed_view(&self, user_id: uuid::Uuid) -> DbResult<FeedView>;

    async fn feed_view_by_id(&self, id: uuid::Uuid) -> DbResult<Option<FeedView>>;
}
