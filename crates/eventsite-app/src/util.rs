use salvo::http::header;

use eventsite_core::config::Settings;

const FORWARDED_PROTO: &str = "x-forwarded-proto";

fn header_str<'a>(req: &'a salvo::Request, name: &str) -> Option<&'a str> {
    req.headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// ## Summary
/// Returns the origin (`scheme://host[:port]`) the client used to reach us.
///
/// The host comes from the `Host` header, then the request URI. The scheme
/// comes from `X-Forwarded-Proto`, then the request URI, defaulting to `http`.
/// Without a host, falls back to the configured server origin.
#[must_use]
pub fn request_origin(req: &salvo::Request, settings: &Settings) -> String {
    let host = header_str(req, header::HOST.as_str())
        .map(str::to_string)
        .or_else(|| req.uri().authority().map(ToString::to_string));

    let Some(host) = host else {
        return settings.server.origin();
    };

    let scheme = header_str(req, FORWARDED_PROTO)
        .or_else(|| req.uri().scheme_str())
        .unwrap_or("http");

    format!("{scheme}://{host}")
}
