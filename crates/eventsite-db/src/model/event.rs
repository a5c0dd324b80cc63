use diesel::{pg::Pg, prelude::*};
use serde::Serialize;

use crate::db::schema;

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = schema::event)]
#[diesel(check_for_backend(Pg))]
pub struct Event {
    pub id: uuid::Uuid,
    pub name: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: chrono::DateTime<chrono::Utc>,
    pub event_type_id: uuid::Uuid,
    pub access_level: i32,
    pub created_by: Option<uuid::Uuid>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::event)]
pub struct NewEvent<'a> {
    pub id: uuid::Uuid,
    pub name: &'a str,
    pub location: Option<&'a str>,
    pub description: Option<&'a str>,
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: chrono::DateTime<chrono::Utc>,
    pub event_type_id: uuid::Uuid,
    pub access_level: i32,
    pub created_by: Option<uuid::Uuid>,
}

/// Labeled event category, used for filtering.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Queryable, Selectable, Identifiable, Serialize,
)]
#[diesel(table_name = schema::event_type)]
#[diesel(check_for_backend(Pg))]
pub struct EventType {
    pub id: uuid::Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = schema::rsvp)]
#[diesel(check_for_backend(Pg))]
pub struct Rsvp {
    pub id: uuid::Uuid,
    pub user_id: uuid::Uuid,
    pub event_id: uuid::Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// An event joined with its type, as displayed on the page and in feeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventListing {
    pub event: Event,
    pub event_type: EventType,
}

impl From<(Event, EventType)> for EventListing {
    fn from((event, event_type): (Event, EventType)) -> Self {
        Self { event, event_type }
    }
}
