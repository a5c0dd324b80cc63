use serde::Serialize;

use super::filters::EventFilters;
use crate::{
    auth::access::resolve_access_level,
    calendar::links::{CalendarLink, assemble_calendar_links},
    error::ServiceResult,
};
use eventsite_core::{config::Settings, constants::ACCESS_TIERS};
use eventsite_db::{
    db::store::{CalendarStore, EventQuery},
    model::event::{EventListing, EventType},
    viewer::Viewer,
};

/// Everything the events page renders.
#[derive(Debug, Clone, Serialize)]
pub struct PageContext {
    pub title: String,
    pub events: Vec<EventListing>,
    /// Types currently shown; narrowed by the type filter.
    pub event_types: Vec<EventType>,
    /// Every type, for the filter controls.
    pub all_event_types: Vec<EventType>,
    pub calendars: Vec<CalendarLink>,
    pub show_sidebar: bool,
    /// Zone event times are displayed in.
    pub timezone: chrono_tz::Tz,
}

/// ## Summary
/// Assembles the events page for `viewer`.
///
/// ## Side Effects
/// Creates the viewer's feed view on first use.
///
/// ## Errors
/// Returns an error if a store lookup fails.
#[tracing::instrument(skip(store, settings, viewer, origin), fields(user_id = ?viewer.user_id()))]
pub async fn build_page_context(
    store: &dyn CalendarStore,
    settings: &Settings,
    viewer: &Viewer,
    origin: &str,
    title: &str,
    filters: &EventFilters,
    show_sidebar: bool,
) -> ServiceResult<PageContext> {
    let level = resolve_access_level(store, &settings.access, viewer).await?;

    let query = EventQuery {
        access_level: level,
        viewer: viewer.user_id(),
        include_rsvpd: filters.rsvpd,
        include_not_rsvpd: filters.not_rsvpd,
        event_types: filters.event_types.clone(),
    };
    let events = store.visible_events(&query).await?;

    let all_event_types = store.event_types(None).await?;
    let event_types = match filters.event_types.as_deref() {
        Some(names) => store.event_types(Some(names)).await?,
        None => all_event_types.clone(),
    };

    let calendars = assemble_calendar_links(
        store,
        ACCESS_TIERS,
        &settings.calendar,
        viewer,
        level,
        origin,
    )
    .await?;

    tracing::debug!(
        %level,
        event_count = events.len(),
        calendar_count = calendars.len(),
        "Built page context"
    );

    Ok(PageContext {
        title: title.to_string(),
        events,
        event_types,
        all_event_types,
        calendars,
        show_sidebar: show_sidebar && viewer.is_authenticated(),
        timezone: settings.calendar.display_timezone,
    })
}
