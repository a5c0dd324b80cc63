use std::collections::{BTreeMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{CalendarStore, EventQuery};
use crate::error::DbResult;
use crate::model::{
    event::{Event, EventListing, EventType, NewEvent, Rsvp},
    feed_view::FeedView,
    group::{Group, Membership},
    profile::Profile,
    user::User,
};
use eventsite_core::types::AccessLevel;

#[derive(Debug, Default)]
struct MemoryData {
    users: Vec<User>,
    groups: Vec<Group>,
    memberships: Vec<Membership>,
    profiles: Vec<Profile>,
    event_types: Vec<EventType>,
    events: Vec<Event>,
    rsvps: Vec<Rsvp>,
    calendar_ids: BTreeMap<i32, String>,
    feed_views: Vec<FeedView>,
}

impl MemoryData {
    fn rsvpd_event_ids(&self, user_id: uuid::Uuid) -> HashSet<uuid::Uuid> {
        self.rsvps
            .iter()
            .filter(|rsvp| rsvp.user_id == user_id)
            .map(|rsvp| rsvp.event_id)
            .collect()
    }
}

/// In-process `CalendarStore` with the same semantics as `PgStore`.
///
/// Used by tests and by local runs with `database.url = "memory://"`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<MemoryData>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a user without a profile.
    pub async fn insert_user(&self, name: &str, email: &str) -> User {
        let user = User {
            id: uuid::Uuid::now_v7(),
            name: name.to_string(),
            email: email.to_string(),
            updated_at: chrono::Utc::now(),
        };
        self.data.write().await.users.push(user.clone());
        user
    }

    /// Creates or replaces the user's profile.
    pub async fn set_profile(&self, user_id: uuid::Uuid, google_calendar_id: Option<&str>) -> Profile {
        let mut data = self.data.write().await;
        data.profiles.retain(|profile| profile.user_id != user_id);
        let profile = Profile {
            id: uuid::Uuid::now_v7(),
            user_id,
            google_calendar_id: google_calendar_id.map(str::to_string),
        };
        data.profiles.push(profile.clone());
        profile
    }

    /// Adds the user to `group_name`, creating the group if needed.
    pub async fn add_to_group(&self, user_id: uuid::Uuid, group_name: &str) {
        let mut data = self.data.write().await;
        let group_id = if let Some(group) = data.groups.iter().find(|g| g.name == group_name) {
            group.id
        } else {
            let group = Group {
                id: uuid::Uuid::now_v7(),
                name: group_name.to_string(),
            };
            let id = group.id;
            data.groups.push(group);
            id
        };

        let membership = Membership { user_id, group_id };
        if !data.memberships.contains(&membership) {
            data.memberships.push(membership);
        }
    }

    pub async fn insert_event_type(&self, name: &str) -> EventType {
        let mut data = self.data.write().await;
        if let Some(existing) = data.event_types.iter().find(|t| t.name == name) {
            return existing.clone();
        }
        let event_type = EventType {
            id: uuid::Uuid::now_v7(),
            name: name.to_string(),
        };
        data.event_types.push(event_type.clone());
        event_type
    }

    pub async fn insert_event(&self, new_event: &NewEvent<'_>) -> Event {
        let event = Event {
            id: new_event.id,
            name: new_event.name.to_string(),
            location: new_event.location.map(str::to_string),
            description: new_event.description.map(str::to_string),
            start_time: new_event.start_time,
            end_time: new_event.end_time,
            event_type_id: new_event.event_type_id,
            access_level: new_event.access_level,
            created_by: new_event.created_by,
            updated_at: chrono::Utc::now(),
        };
        self.data.write().await.events.push(event.clone());
        event
    }

    /// Records an RSVP; repeated calls for the same pair are ignored.
    pub async fn insert_rsvp(&self, user_id: uuid::Uuid, event_id: uuid::Uuid) {
        let mut data = self.data.write().await;
        if data
            .rsvps
            .iter()
            .any(|rsvp| rsvp.user_id == user_id && rsvp.event_id == event_id)
        {
            return;
        }
        data.rsvps.push(Rsvp {
            id: uuid::Uuid::now_v7(),
            user_id,
            event_id,
            created_at: chrono::Utc::now(),
        });
    }

    pub async fn set_calendar_id(&self, level: AccessLevel, calendar_id: &str) {
        self.data
            .write()
            .await
            .calendar_ids
            .insert(level.value(), calendar_id.to_string());
    }

    /// Overrides the RSVP flags of an existing feed view.
    pub async fn set_feed_flags(&self, feed_id: uuid::Uuid, show_rsvpd: bool, show_not_rsvpd: bool) {
        let mut data = self.data.write().await;
        if let Some(view) = data.feed_views.iter_mut().find(|view| view.id == feed_id) {
            view.show_rsvpd = show_rsvpd;
            view.show_not_rsvpd = show_not_rsvpd;
        }
    }
}

#[async_trait]
impl CalendarStore for MemoryStore {
    async fn find_or_create_user(&self, name: &str, email: &str) -> DbResult<User> {
        let mut data = self.data.write().await;

        let user = if let Some(existing) = data.users.iter().find(|u| u.email == email) {
            existing.clone()
        } else {
            let user = User {
                id: uuid::Uuid::now_v7(),
                name: name.to_string(),
                email: email.to_string(),
                updated_at: chrono::Utc::now(),
            };
            data.users.push(user.clone());
            user
        };

        if !data.profiles.iter().any(|p| p.user_id == user.id) {
            data.profiles.push(Profile {
                id: uuid::Uuid::now_v7(),
                user_id: user.id,
                google_calendar_id: None,
            });
        }

        Ok(user)
    }

    async fn user_by_email(&self, email: &str) -> DbResult<Option<User>> {
        let data = self.data.read().await;
        Ok(data.users.iter().find(|u| u.email == email).cloned())
    }

    async fn user_by_id(&self, id: uuid::Uuid) -> DbResult<Option<User>> {
        let data = self.data.read().await;
        Ok(data.users.iter().find(|u| u.id == id).cloned())
    }

    async fn group_names_for_user(&self, user_id: uuid::Uuid) -> DbResult<Vec<String>> {
        let data = self.data.read().await;
        Ok(data
            .memberships
            .iter()
            .filter(|m| m.user_id == user_id)
            .filter_map(|m| data.groups.iter().find(|g| g.id == m.group_id))
            .map(|g| g.name.clone())
            .collect())
    }

    async fn visible_events(&self, query: &EventQuery) -> DbResult<Vec<EventListing>> {
        if query.excludes_everything() {
            return Ok(Vec::new());
        }

        let data = self.data.read().await;
        let rsvpd = query
            .viewer
            .map(|viewer| data.rsvpd_event_ids(viewer))
            .unwrap_or_default();

        let mut listings: Vec<EventListing> = data
            .events
            .iter()
            .filter(|event| event.access_level >= query.access_level.value())
            .filter(|event| {
                let has_rsvp = rsvpd.contains(&event.id);
                (has_rsvp && query.include_rsvpd) || (!has_rsvp && query.include_not_rsvpd)
            })
            .filter_map(|event| {
                data.event_types
                    .iter()
                    .find(|t| t.id == event.event_type_id)
                    .map(|t| EventListing {
                        event: event.clone(),
                        event_type: t.clone(),
                    })
            })
            .filter(|listing| {
                query
                    .event_types
                    .as_ref()
                    .is_none_or(|names| names.contains(&listing.event_type.name))
            })
            .collect();

        listings.sort_by(|a, b| {
            a.event
                .start_time
                .cmp(&b.event.start_time)
                .then_with(|| a.event.name.cmp(&b.event.name))
        });

        Ok(listings)
    }

    async fn event_types(&self, names: Option<&[String]>) -> DbResult<Vec<EventType>> {
        let data = self.data.read().await;
        let mut types: Vec<EventType> = data
            .event_types
            .iter()
            .filter(|t| names.is_none_or(|names| names.contains(&t.name)))
            .cloned()
            .collect();
        types.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(types)
    }

    async fn calendar_id_for_access_level(&self, level: AccessLevel) -> DbResult<Option<String>> {
        let data = self.data.read().await;
        Ok(data.calendar_ids.get(&level.value()).cloned())
    }

    async fn profile_for_user(&self, user_id: uuid::Uuid) -> DbResult<Option<Profile>> {
        let data = self.data.read().await;
        Ok(data.profiles.iter().find(|p| p.user_id == user_id).cloned())
    }

    async fn get_or_create_feed_view(&self, user_id: uuid::Uuid) -> DbResult<FeedView> {
        let mut data = self.data.write().await;
        if let Some(view) = data.feed_views.iter().find(|v| v.user_id == user_id) {
            return Ok(view.clone());
        }

        let view = FeedView {
            id: uuid::Uuid::new_v4(),
            user_id,
            show_rsvpd: true,
            show_not_rsvpd: false,
        };
        data.feed_views.push(view.clone());
        tracing::debug!(%user_id, "Created feed view");
        Ok(view)
    }

    async fn feed_view_by_id(&self, id: uuid::Uuid) -> DbResult<Option<FeedView>> {
        let data = self.data.read().await;
        Ok(data.feed_views.iter().find(|v| v.id == id).cloned())
    }
}
