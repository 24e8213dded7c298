//! Request-validation filter for the `/time` subtree.
//!
//! Every request entering `/time` passes through here before reaching a
//! handler. The filter allows at most one kind of query parameter
//! (`timezone`), validates its value against the IANA database, and rejects
//! anything else with a rendered HTML error page.

use super::AppState;
use crate::utils::logging;
use crate::utils::validation::{normalize_timezone, validate_timezone};
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

/// The only query parameter a `/time` request may carry.
pub const TIMEZONE_PARAM: &str = "timezone";
/// Cookie remembering the last successfully requested zone.
pub const LAST_TIMEZONE_COOKIE: &str = "lastTimezone";

/// Validate a request's query parameters before it reaches a time handler.
///
/// - Parameters present but none named `timezone`: reject with 400.
/// - `timezone` present: normalize, validate, forward if it names a real
///   zone, otherwise reject with 400. The first value wins if repeated.
/// - No `timezone` parameter: forward, with or without a `lastTimezone`
///   cookie. The cookie value is left for the handler to interpret.
pub async fn validate_request(
    State(state): State<AppState>,
    jar: CookieJar,
    req: Request,
    next: Next,
) -> Response {
    let query = req.uri().query().unwrap_or("");
    let params = parse_query(query);

    if !params.is_empty() && !params.iter().any(|(name, _)| name == TIMEZONE_PARAM) {
        logging::log_request_rejected(req.uri().path(), "unexpected query parameters");
        return error_page(&state, "Invalid parameter. Only 'timezone' is allowed.");
    }

    match timezone_param(&params) {
        None => {
            if let Some(cookie) = jar.get(LAST_TIMEZONE_COOKIE) {
                debug!(
                    "Forwarding request with {} cookie '{}'",
                    LAST_TIMEZONE_COOKIE,
                    cookie.value()
                );
            }
            next.run(req).await
        }
        Some(timezone) => match validate_timezone(&normalize_timezone(&timezone)) {
            Ok(_) => next.run(req).await,
            Err(e) => {
                logging::log_validation_error(TIMEZONE_PARAM, &timezone, &e.to_string());
                error_page(&state, "Invalid timezone")
            }
        },
    }
}

/// Decode a raw query string into name/value pairs.
///
/// `+` decodes to a space here; [`normalize_timezone`] restores it for
/// timezone values.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

/// First `timezone` parameter value, if any.
pub fn timezone_param(params: &[(String, String)]) -> Option<String> {
    params
        .iter()
        .find(|(name, _)| name == TIMEZONE_PARAM)
        .map(|(_, value)| value.clone())
}

/// Render the error template as a 400 response.
fn error_page(state: &AppState, message: &str) -> Response {
    match state.templates.render_error_page(message) {
        Ok(body) => (StatusCode::BAD_REQUEST, Html(body)).into_response(),
        Err(e) => {
            logging::log_render_error(crate::templates::ERROR_TEMPLATE, &e.to_string());
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to render error page",
            )
                .into_response()
        }
    }
}
