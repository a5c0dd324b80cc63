//! Depot helpers for extracting the authenticated viewer from Salvo requests.

use eventsite_db::viewer::Viewer;

pub mod depot_keys {
    pub const AUTHENTICATED_PRINCIPAL: &str = "__authenticated_principal";
}

/// Get the viewer from the depot, falling back to public access when the
/// auth middleware did not run.
#[must_use]
pub fn get_viewer_from_depot(depot: &salvo::Depot) -> Viewer {
    match depot.get::<Viewer>(depot_keys::AUTHENTICATED_PRINCIPAL) {
        Ok(viewer) => viewer.clone(),
        Err(_missing) => {
            tracing::warn!("Depot missing viewer context; defaulting to public");
            Viewer::Public
        }
    }
}
