use salvo::http::StatusCode;
use salvo::writing::Text;
use salvo::{Depot, Request, Response, Router, handler};
use tracing::error;

use crate::{
    config::get_config_from_depot, middleware::auth::AuthMiddleware,
    render::render_events_page, store_handler::get_store_from_depot, util::request_origin,
};
use eventsite_service::{
    auth::get_viewer_from_depot,
    events::{EventFilters, build_page_context},
};

const PAGE_TITLE: &str = "Events";

/// ## Summary
/// Renders the events calendar page for the current viewer.
///
/// Query parameters: `event_types` (comma-separated names), `rsvpd` and
/// `not_rsvpd` (`show` | `hide`).
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
async fn index(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let config = match get_config_from_depot(depot) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = ?e, "Failed to get config from depot");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };

    let store = match get_store_from_depot(depot) {
        Ok(s) => s,
        Err(e) => {
            error!(error = ?e, "Failed to get calendar store from depot");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };

    let viewer = get_viewer_from_depot(depot);
    let filters = EventFilters::from_request(req);
    let origin = request_origin(req, &config);

    tracing::debug!(?filters, authenticated = viewer.is_authenticated(), "Rendering events page");

    match build_page_context(
        store.as_ref(),
        &config,
        &viewer,
        &origin,
        PAGE_TITLE,
        &filters,
        true,
    )
    .await
    {
        Ok(context) => {
            res.status_code(StatusCode::OK);
            res.render(Text::Html(render_events_page(&context).into_string()));
        }
        Err(e) => {
            error!(error = ?e, "Failed to build events page");
            res.status_code(if e.is_unavailable() {
                StatusCode::SERVICE_UNAVAILABLE
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            });
        }
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::new().hoop(AuthMiddleware).get(index)
}
