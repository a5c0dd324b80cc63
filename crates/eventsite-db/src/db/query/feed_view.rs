use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::ical_view;
use crate::error::DbResult;
use crate::model::feed_view::{FeedView, NewFeedView};

/// ## Summary
/// Returns the user's feed view, creating it on first use.
///
/// The insert is a no-op when a concurrent request already created the row,
/// so the follow-up read always sees exactly one view per user.
///
/// ## Errors
/// Returns an error if the database operation fails.
pub async fn get_or_create(conn: &mut DbConnection<'_>, user_id: uuid::Uuid) -> DbResult<FeedView> {
    let inserted = diesel::insert_into(ical_view::table)
        .values(&NewFeedView {
            id: uuid::Uuid::new_v4(),
            user_id,
        })
        .on_conflict(ical_view::user_id)
        .do_nothing()
        .execute(conn)
        .await?;

    if inserted > 0 {
        tracing::debug!(%user_id, "Created feed view");
    }

    Ok(ical_view::table
        .filter(ical_view::user_id.eq(user_id))
        .select(FeedView::as_select())
        .first::<FeedView>(conn)
        .await?)
}

/// ## Summary
/// Finds a feed view by its public id.
///
/// ## Errors
/// Returns an error if the database operation fails.
pub async fn by_id(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> DbResult<Option<FeedView>> {
    Ok(ical_view::table
        .find(id)
        .select(FeedView::as_select())
        .first::<FeedView>(conn)
        .await
        .optional()?)
}
