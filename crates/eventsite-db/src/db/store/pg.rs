use async_trait::async_trait;

use super::{CalendarStore, EventQuery};
use crate::db::DbProvider;
use crate::db::connection::DbPool;
use crate::db::query::{access_mapping, event, feed_view, profile, user};
use crate::error::DbResult;
use crate::model::{
    event::{EventListing, EventType},
    feed_view::FeedView,
    profile::Profile,
    user::User,
};
use eventsite_core::types::AccessLevel;

/// `CalendarStore` over a pooled PostgreSQL connection.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CalendarStore for PgStore {
    #[tracing::instrument(skip(self))]
    async fn find_or_create_user(&self, name: &str, email: &str) -> DbResult<User> {
        let mut conn = self.pool.get_connection().await?;
        user::find_or_create(&mut conn, name, email).await
    }

    async fn user_by_email(&self, email: &str) -> DbResult<Option<User>> {
        let mut conn = self.pool.get_connection().await?;
        user::by_email(&mut conn, email).await
    }

    async fn user_by_id(&self, id: uuid::Uuid) -> DbResult<Option<User>> {
        let mut conn = self.pool.get_connection().await?;
        user::by_id(&mut conn, id).await
    }

    async fn group_names_for_user(&self, user_id: uuid::Uuid) -> DbResult<Vec<String>> {
        let mut conn = self.pool.get_connection().await?;
        user::group_names(&mut conn, user_id).await
    }

    async fn visible_events(&self, query: &EventQuery) -> DbResult<Vec<EventListing>> {
        let mut conn = self.pool.get_connection().await?;
        event::visible(&mut conn, query).await
    }

    async fn event_types(&self, names: Option<&[String]>) -> DbResult<Vec<EventType>> {
        let mut conn = self.pool.get_connection().await?;
        event::types(&mut conn, names).await
    }

    async fn calendar_id_for_access_level(&self, level: AccessLevel) -> DbResult<Option<String>> {
        let mut conn = self.pool.get_connection().await?;
        access_mapping::calendar_id(&mut conn, level).await
    }

    async fn profile_for_user(&self, user_id: uuid::Uuid) -> DbResult<Option<Profile>> {
        let mut conn = self.pool.get_connection().await?;
        profile::for_user(&mut conn, user_id).await
    }

    #[tracing::instrument(skip(self))]
    async fn get_or_create_feed_view(&self, user_id: uuid::Uuid) -> DbResult<FeedView> {
        let mut conn = self.pool.get_connection().await?;
        feed_view::get_or_create(&mut conn, user_id).await
    }

    async fn feed_view_by_id(&self, id: uuid::Uuid) -> DbResult<Option<FeedView>> {
        let mut conn = self.pool.get_connection().await?;
        feed_view::by_id(&mut conn, id).await
    }
}
