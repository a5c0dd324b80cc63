use salvo::Depot;
use tracing::error;

use crate::{config::get_config_from_depot, store_handler::get_store_from_depot};
use eventsite_db::viewer::Viewer;
use eventsite_service::{
    auth::{authenticate::authenticate, depot::depot_keys},
    error::ServiceError,
};

/// ## Summary
/// Authentication middleware that resolves the viewer and stores it in the depot.
/// Requests that do not authenticate continue as the public viewer.
///
/// ## Side Effects
/// Inserts the `Viewer` into the depot under `AUTHENTICATED_PRINCIPAL` for
/// downstream handlers to access.
///
/// ## Errors
/// Responds 503 if the store is unreachable and 500 on other failures.
#[salvo::async_trait]
impl salvo::Handler for AuthMiddleware {
    #[tracing::instrument(skip(self, req, depot, res, ctrl), fields(
        method = %req.method(),
        path = %req.uri().path()
    ))]
    async fn handle(
        &self,
        req: &mut salvo::Request,
        depot: &mut Depot,
        res: &mut salvo::Response,
        ctrl: &mut salvo::FlowCtrl,
    ) {
        tracing::trace!("Authenticating request");

        let config = match get_config_from_depot(depot) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!(error = ?e, "Failed to get config from depot");
                res.status_code(salvo::http::StatusCode::INTERNAL_SERVER_ERROR);
                ctrl.skip_rest();
                return;
            }
        };

        let store = match get_store_from_depot(depot) {
            Ok(s) => s,
            Err(e) => {
                error!(error = ?e, "Failed to get calendar store from depot");
                res.status_code(salvo::http::StatusCode::INTERNAL_SERVER_ERROR);
                ctrl.skip_rest();
                return;
            }
        };

        match authenticate(req, store.as_ref(), &config).await {
            Ok(user) => {
                tracing::debug!(user_email = %user.email, "User authenticated successfully");
                depot.insert(depot_keys::AUTHENTICATED_PRINCIPAL, Viewer::User(user));
            }
            Err(ServiceError::NotAuthenticated | ServiceError::InvalidConfiguration(_)) => {
                tracing::debug!("Request not authenticated or config error, treating as public");
                depot.insert(depot_keys::AUTHENTICATED_PRINCIPAL, Viewer::Public);
            }
            Err(service_err) if service_err.is_unavailable() => {
                error!(error = ?service_err, "Failed to get database connection");
                res.status_code(salvo::http::StatusCode::SERVICE_UNAVAILABLE);
                ctrl.skip_rest();
            }
            Err(service_err) => {
                error!(error = ?service_err, "Authentication failed with error");
                res.status_code(salvo::http::StatusCode::INTERNAL_SERVER_ERROR);
                res.body("Internal Server Error");
                ctrl.skip_rest();
            }
        }
    }
}

/// ## Summary
/// Middleware handler for authentication.
/// Use this as a hoop on routes that need to know the viewer.
pub struct AuthMiddleware;
