//! User, group membership, and profile bootstrap queries.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt;

use crate::db::connection::DbConnection;
use crate::db::schema::{group, membership, profile, user};
use crate::db::transaction::with_transaction;
use crate::error::DbResult;
use crate::model::profile::NewProfile;
use crate::model::user::{NewUser, User};

/// ## Summary
/// Returns the user with `email`, creating the user and an empty profile if
/// neither exists yet.
///
/// ## Side Effects
/// - Inserts a user row when none matches `email`
/// - Inserts a profile row when the user has none
///
/// ## Errors
/// Returns an error if any statement or the transaction fails.
pub async fn find_or_create(conn: &mut DbConnection<'_>, name: &str, email: &str) -> DbResult<User> {
    let name = name.to_owned();
    let email = email.to_owned();

    with_transaction(conn, move |conn| {
        async move {
            diesel::insert_into(user::table)
                .values(&NewUser {
                    id: uuid::Uuid::now_v7(),
                    name: &name,
                    email: &email,
                })
                .on_conflict(user::email)
                .do_nothing()
                .execute(conn)
                .await?;

            let found = user::table
                .filter(user::email.eq(&email))
                .select(User::as_select())
                .first::<User>(conn)
                .await?;

            diesel::insert_into(profile::table)
                .values(&NewProfile {
                    id: uuid::Uuid::now_v7(),
                    user_id: found.id,
                    google_calendar_id: None,
                })
                .on_conflict(profile::user_id)
                .do_nothing()
                .execute(conn)
                .await?;

            Ok(found)
        }
        .scope_boxed()
    })
    .await
}

/// ## Summary
/// Finds a user by email.
///
/// ## Errors
/// Returns an error if the database operation fails.
pub async fn by_email(conn: &mut DbConnection<'_>, email: &str) -> DbResult<Option<User>> {
    Ok(user::table
        .filter(user::email.eq(email))
        .select(User::as_select())
        .first::<User>(conn)
        .await
        .optional()?)
}

/// ## Summary
/// Finds a user by id.
///
/// ## Errors
/// Returns an error if the database operation fails.
pub async fn by_id(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> DbResult<Option<User>> {
    Ok(user::table
        .find(id)
        .select(User::as_select())
        .first::<User>(conn)
        .await
        .optional()?)
}

/// ## Summary
/// Returns the names of every group the user belongs to.
///
/// ## Errors
/// Returns an error if the database operation fails.
pub async fn group_names(conn: &mut DbConnection<'_>, user_id: uuid::Uuid) -> DbResult<Vec<String>> {
    Ok(membership::table
        .inner_join(group::table)
        .filter(membership::user_id.eq(user_id))
        .select(group::name)
        .load::<String>(conn)
        .await?)
}
