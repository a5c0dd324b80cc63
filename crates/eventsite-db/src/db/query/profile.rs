use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::profile;
use crate::error::DbResult;
use crate::model::profile::Profile;

/// ## Summary
/// Returns the profile belonging to `user_id`, if one exists.
///
/// ## Errors
/// Returns an error if the database operation fails.
pub async fn for_user(conn: &mut DbConnection<'_>, user_id: uuid::Uuid) -> DbResult<Option<Profile>> {
    Ok(profile::table
        .filter(profile::user_id.eq(user_id))
        .select(Profile::as_select())
        .first::<Profile>(conn)
        .await
        .optional()?)
}
