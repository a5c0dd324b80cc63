//! Viewer access-level resolution.

use crate::error::ServiceResult;
use eventsite_core::{config::AccessConfig, types::AccessLevel};
use eventsite_db::{db::store::CalendarStore, viewer::Viewer};

/// ## Summary
/// Picks the most privileged access level granted by `groups`.
///
/// Officer membership wins over candidate membership; anything else is external.
#[must_use]
pub fn access_level_for_groups(groups: &[String], access: &AccessConfig) -> AccessLevel {
    let member_of = |name: &str| groups.iter().any(|group| group == name);

    if member_of(&access.officer_group) {
        AccessLevel::INTERNAL
    } else if member_of(&access.candidate_group) {
        AccessLevel::CANDIDATE
    } else {
        AccessLevel::EXTERNAL
    }
}

/// ## Summary
/// Resolves the access level of `viewer`. Anonymous viewers are external.
///
/// ## Errors
/// Returns an error if the group membership lookup fails.
#[tracing::instrument(skip(store, access, viewer), fields(user_id = ?viewer.user_id()))]
pub async fn resolve_access_level(
    store: &dyn CalendarStore,
    access: &AccessConfig,
    viewer: &Viewer,
) -> ServiceResult<AccessLevel> {
    let Some(user) = viewer.user() else {
        return Ok(AccessLevel::EXTERNAL);
    };

    let groups = store.group_names_for_user(user.id).await?;
    let level = access_level_for_groups(&groups, access);

    tracing::trace!(%level, group_count = groups.len(), "Resolved access level");

    Ok(level)
}
