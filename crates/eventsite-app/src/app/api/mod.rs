mod app_specific;
mod events;

use salvo::Router;

/// ## Summary
/// Constructs the main router with the events pages and operational endpoints.
#[must_use]
pub fn routes() -> Router {
    Router::new()
        .push(app_specific::routes())
        .push(events::routes())
}
