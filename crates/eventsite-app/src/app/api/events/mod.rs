use salvo::Router;

use eventsite_core::constants::EVENTS_ROUTE_COMPONENT;

mod ical;
mod index;

#[must_use]
pub fn routes() -> Router {
    Router::with_path(EVENTS_ROUTE_COMPONENT)
        .push(ical::routes())
        .push(index::routes())
}
