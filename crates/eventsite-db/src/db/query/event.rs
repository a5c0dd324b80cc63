//! Event and event type queries.

use diesel::dsl::not;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::{event, event_type, rsvp};
use crate::db::store::EventQuery;
use crate::error::DbResult;
use crate::model::event::{Event, EventListing, EventType};

/// ## Summary
/// Loads the events matching `query`, joined with their type and ordered by
/// start time.
///
/// ## Errors
/// Returns an error if the database operation fails.
#[tracing::instrument(skip(conn))]
pub async fn visible(conn: &mut DbConnection<'_>, query: &EventQuery) -> DbResult<Vec<EventListing>> {
    if query.excludes_everything() {
        return Ok(Vec::new());
    }

    let mut statement = event::table
        .inner_join(event_type::table)
        .filter(event::access_level.ge(query.access_level.value()))
        .order((event::start_time.asc(), event::name.asc()))
        .select((Event::as_select(), EventType::as_select()))
        .into_boxed();

    if let Some(names) = &query.event_types {
        statement = statement.filter(event_type::name.eq_any(names.clone()));
    }

    if let Some(viewer) = query.viewer {
        if !query.include_rsvpd {
            statement = statement.filter(not(event::id.eq_any(
                rsvp::table
                    .filter(rsvp::user_id.eq(viewer))
                    .select(rsvp::event_id),
            )));
        }
        if !query.include_not_rsvpd {
            statement = statement.filter(
                event::id.eq_any(
                    rsvp::table
                        .filter(rsvp::user_id.eq(viewer))
                        .select(rsvp::event_id),
                ),
            );
        }
    }

    let rows = statement.load::<(Event, EventType)>(conn).await?;

    tracing::debug!(count = rows.len(), "Loaded visible events");

    Ok(rows.into_iter().map(EventListing::from).collect())
}

/// ## Summary
/// Returns event types ordered by name, optionally restricted to `names`.
///
/// ## Errors
/// Returns an error if the database operation fails.
pub async fn types(conn: &mut DbConnection<'_>, names: Option<&[String]>) -> DbResult<Vec<EventType>> {
    let mut statement = event_type::table
        .order(event_type::name.asc())
        .select(EventType::as_select())
        .into_boxed();

    if let Some(names) = names {
        statement = statement.filter(event_type::name.eq_any(names.to_vec()));
    }

    Ok(statement.load::<EventType>(conn).await?)
}
