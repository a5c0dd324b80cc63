use crate::error::{ServiceError, ServiceResult};
use eventsite_core::config::{AuthMethod, Settings};
use eventsite_db::{db::store::CalendarStore, model::user::User};

/// Get the user configured in settings for single user authentication.
///
/// If it doesn't exist, insert it (and its profile) into the database.
///
/// ## Errors
///
/// Returns an error if the user cannot be created or retrieved from the database.
#[tracing::instrument(skip(store, config))]
async fn authenticate_single_user(
    store: &dyn CalendarStore,
    config: &Settings,
) -> ServiceResult<User> {
    tracing::debug!("Authenticating single user");

    let single_user_config =
        config
            .auth
            .single_user
            .as_ref()
            .ok_or(ServiceError::InvalidConfiguration(
                "Single user config is missing".to_string(),
            ))?;

    let user = store
        .find_or_create_user(&single_user_config.name, &single_user_config.email)
        .await?;

    tracing::debug!(user_id = %user.id, user_email = %user.email, "Single user resolved");

    Ok(user)
}

/// ## Summary
/// Resolves the user named by the trusted proxy header.
///
/// ## Errors
/// Returns `NotAuthenticated` if the header is absent, unreadable, or names an
/// unknown user.
#[tracing::instrument(skip(req, store, config))]
async fn authenticate_proxy(
    req: &salvo::Request,
    store: &dyn CalendarStore,
    config: &Settings,
) -> ServiceResult<User> {
    let proxy_config = config
        .auth
        .proxy
        .as_ref()
        .ok_or(ServiceError::InvalidConfiguration(
            "Proxy auth config is missing".to_string(),
        ))?;

    let Some(email) = req
        .headers()
        .get(proxy_config.header.as_str())
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
    else {
        tracing::trace!(header = %proxy_config.header, "Proxy header absent");
        return Err(ServiceError::NotAuthenticated);
    };

    match store.user_by_email(email).await? {
        Some(user) => Ok(user),
        None => {
            tracing::debug!(email = %email, "Proxy header names an unknown user");
            Err(ServiceError::NotAuthenticated)
        }
    }
}

/// ## Summary
/// Authenticate a user based on the configured authentication method.
///
/// ## Errors
/// Returns an error if authentication fails.
#[tracing::instrument(skip(req, store, config))]
pub async fn authenticate(
    req: &salvo::Request,
    store: &dyn CalendarStore,
    config: &Settings,
) -> ServiceResult<User> {
    tracing::trace!(auth_method = ?config.auth.method, "Authenticating request");

    match config.auth.method {
        AuthMethod::SingleUser => authenticate_single_user(store, config).await,
        AuthMethod::Proxy => authenticate_proxy(req, store, config).await,
    }
}
