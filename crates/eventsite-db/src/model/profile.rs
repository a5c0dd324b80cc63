use diesel::{pg::Pg, prelude::*};

use crate::db::schema;

/// Per-user settings.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = schema::profile)]
#[diesel(check_for_backend(Pg))]
pub struct Profile {
    pub id: uuid::Uuid,
    pub user_id: uuid::Uuid,
    pub google_calendar_id: Option<String>,
}

impl Profile {
    /// ## Summary
    /// Returns the user's externally hosted calendar id, ignoring blank values.
    #[must_use]
    pub fn personal_calendar_id(&self) -> Option<&str> {
        self.google_calendar_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::profile)]
pub struct NewProfile<'a> {
    pub id: uuid::Uuid,
    pub user_id: uuid::Uuid,
    pub google_calendar_id: Option<&'a str>,
}
