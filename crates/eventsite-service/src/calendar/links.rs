//! Calendar subscription links shown next to the events list.

use serde::Serialize;

use crate::error::ServiceResult;
use eventsite_core::{
    config::CalendarConfig,
    constants::CALENDAR_LINK_SEPARATOR,
    types::{AccessLevel, AccessTier},
};
use eventsite_db::{db::store::CalendarStore, viewer::Viewer};

pub const PERSONAL_GCAL_NAME: &str = "personal (gcal)";
pub const PERSONAL_ICS_NAME: &str = "personal (ics)";

/// One entry of the subscription link list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarLink {
    pub name: String,
    pub link: String,
    /// Rendered after the link; empty for the last entry.
    pub separator: &'static str,
}

impl CalendarLink {
    fn new(name: impl Into<String>, link: String) -> Self {
        Self {
            name: name.into(),
            link,
            separator: "",
        }
    }
}

/// ## Summary
/// Builds the absolute feed URL for `path`, rewriting `https://` to `webcal://`.
#[must_use]
pub fn subscription_url(origin: &str, path: &str) -> String {
    let url = format!("{}{path}", origin.trim_end_matches('/'));
    match url.strip_prefix("https://") {
        Some(rest) => format!("webcal://{rest}"),
        None => url,
    }
}

/// Marks every link but the last with the separator glyph.
pub fn apply_separators(links: &mut [CalendarLink]) {
    let Some((last, rest)) = links.split_last_mut() else {
        return;
    };
    for link in rest {
        link.separator = CALENDAR_LINK_SEPARATOR;
    }
    last.separator = "";
}

/// ## Summary
/// Produces the ordered subscription links for a viewer.
///
/// Tier calendars come first, in `tiers` order, skipping tiers the viewer may
/// not see and tiers without a configured calendar. Authenticated viewers then
/// get their personal external calendar (if set) and their personal feed.
///
/// ## Side Effects
/// Creates the viewer's feed view on first use.
///
/// ## Errors
/// Returns an error if a store lookup fails.
#[tracing::instrument(skip(store, tiers, calendar, viewer), fields(user_id = ?viewer.user_id()))]
pub async fn assemble_calendar_links(
    store: &dyn CalendarStore,
    tiers: &[AccessTier],
    calendar: &CalendarConfig,
    viewer: &Viewer,
    level: AccessLevel,
    origin: &str,
) -> ServiceResult<Vec<CalendarLink>> {
    let mut links = Vec::new();

    for tier in tiers {
        if !level.can_view(tier.level) {
            continue;
        }

        let Some(calendar_id) = store
            .calendar_id_for_access_level(tier.level)
            .await?
            .filter(|id| !id.trim().is_empty())
        else {
            tracing::trace!(tier = tier.name, "No calendar configured for tier");
            continue;
        };

        links.push(CalendarLink::new(
            tier.name,
            calendar.calendar_link(&calendar_id),
        ));
    }

    if let Some(user) = viewer.user() {
        match store.profile_for_user(user.id).await? {
            Some(profile) => {
                if let Some(calendar_id) = profile.personal_calendar_id() {
                    links.push(CalendarLink::new(
                        PERSONAL_GCAL_NAME,
                        calendar.calendar_link(calendar_id),
                    ));
                }
            }
            None => {
                tracing::warn!(user_id = %user.id, "User has no profile; skipping personal calendar");
            }
        }

        let feed_view = store.get_or_create_feed_view(user.id).await?;
        let feed_url = subscription_url(origin, &feed_view.path());
        links.push(CalendarLink::new(
            PERSONAL_ICS_NAME,
            calendar.calendar_link(&feed_url),
        ));
    }

    apply_separators(&mut links);

    tracing::debug!(link_count = links.len(), "Assembled calendar links");

    Ok(links)
}
