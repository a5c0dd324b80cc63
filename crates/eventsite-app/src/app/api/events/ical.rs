use salvo::http::{HeaderValue, StatusCode};
use salvo::{Depot, Request, Response, Router, handler};
use tracing::error;

use crate::{config::get_config_from_depot, store_handler::get_store_from_depot};
use eventsite_core::constants::ICAL_ROUTE_COMPONENT;
use eventsite_service::calendar::render_feed;

const ICS_CONTENT_TYPE: &str = "text/calendar; charset=utf-8";

/// ## Summary
/// Serves a personal calendar feed. The feed id in the path is the only
/// credential; unknown or malformed ids are 404.
#[handler]
#[tracing::instrument(skip_all, fields(feed_id = tracing::field::Empty))]
async fn feed(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Some(feed_id) = req
        .param::<String>("id")
        .and_then(|raw| uuid::Uuid::parse_str(&raw).ok())
    else {
        tracing::debug!("Feed id missing or not a UUID");
        res.status_code(StatusCode::NOT_FOUND);
        return;
    };
    tracing::Span::current().record("feed_id", tracing::field::display(feed_id));

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

    match render_feed(store.as_ref(), &config, feed_id).await {
        Ok(Some(ics)) => {
            res.status_code(StatusCode::OK);
            #[expect(
                clippy::let_underscore_must_use,
                reason = "Header addition failure is non-fatal"
            )]
            let _ = res.add_header(
                "Content-Type",
                HeaderValue::from_static(ICS_CONTENT_TYPE),
                true,
            );
            #[expect(
                clippy::let_underscore_must_use,
                reason = "Write body failure is non-fatal"
            )]
            let _ = res.write_body(ics);
        }
        Ok(None) => {
            res.status_code(StatusCode::NOT_FOUND);
        }
        Err(e) => {
            error!(error = ?e, "Failed to render feed");
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
    Router::with_path(ICAL_ROUTE_COMPONENT).push(Router::with_path("{id}").get(feed))
}
