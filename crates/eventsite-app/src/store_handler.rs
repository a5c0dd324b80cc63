use salvo::async_trait;
use std::sync::Arc;

use crate::error::AppResult;
use eventsite_core::error::CoreError;
use eventsite_db::db::store::CalendarStore;

pub struct StoreHandler {
    pub store: Arc<dyn CalendarStore>,
}

#[async_trait]
impl salvo::Handler for StoreHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        // Insert a reference to the store into the depot
        depot.inject(Arc::clone(&self.store));
    }
}

/// ## Summary
/// Retrieves the calendar store from the depot.
///
/// ## Errors
/// Returns an error if the store is not found in the depot.
pub fn get_store_from_depot(depot: &salvo::Depot) -> AppResult<Arc<dyn CalendarStore>> {
    depot
        .obtain::<Arc<dyn CalendarStore>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Calendar store not found in depot").into())
}
