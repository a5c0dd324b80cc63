use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::gcal_access_level_mapping;
use crate::error::DbResult;
use eventsite_core::types::AccessLevel;

/// ## Summary
/// Returns the external calendar id configured for an access level.
///
/// ## Errors
/// Returns an error if the database operation fails.
pub async fn calendar_id(conn: &mut DbConnection<'_>, level: AccessLevel) -> DbResult<Option<String>> {
    Ok(gcal_access_level_mapping::table
        .find(level.value())
        .select(gcal_access_level_mapping::calendar_id)
        .first::<String>(conn)
        .await
        .optional()?)
}
