//! Handlers behind the timezone filter, plus service health.

use super::filter::{self, LAST_TIMEZONE_COOKIE};
use super::AppState;
use crate::utils::logging;
use crate::utils::validation::{normalize_timezone, validate_timezone};
use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render the current time for the resolved timezone.
///
/// Resolution order: validated `timezone` parameter, then the `lastTimezone`
/// cookie, then UTC. A valid parameter also refreshes the cookie so later
/// parameterless requests keep showing the same zone.
pub async fn show_time(
    State(state): State<AppState>,
    jar: CookieJar,
    RawQuery(query): RawQuery,
) -> Response {
    let params = filter::parse_query(query.as_deref().unwrap_or(""));
    let requested = filter::timezone_param(&params)
        .and_then(|raw| validate_timezone(&normalize_timezone(&raw)).ok());

    // The filter deliberately does not validate the cookie, so a stale or
    // garbage value falls back to UTC instead of failing the request.
    let zone = requested.unwrap_or_else(|| {
        jar.get(LAST_TIMEZONE_COOKIE)
            .and_then(|cookie| cookie.value().parse::<Tz>().ok())
            .unwrap_or(Tz::UTC)
    });

    let now = Utc::now().with_timezone(&zone);
    let body = match state
        .templates
        .render_time_page(&now.format(TIME_FORMAT).to_string(), zone.name())
    {
        Ok(body) => body,
        Err(e) => {
            logging::log_render_error(crate::templates::TIME_TEMPLATE, &e.to_string());
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render time page")
                .into_response();
        }
    };

    if requested.is_some() {
        let cookie = Cookie::build((LAST_TIMEZONE_COOKIE, zone.name().to_owned()))
            .path("/")
            .build();
        (jar.add(cookie), Html(body)).into_response()
    } else {
        Html(body).into_response()
    }
}

/// Health endpoint payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `healthy` while the service is able to respond.
    pub status: String,
    /// Time the response was produced.
    pub timestamp: DateTime<Utc>,
    /// Crate version.
    pub version: String,
    /// Seconds since the router was built.
    pub uptime_seconds: u64,
}

/// Simple liveness check - if this endpoint responds, the service is alive.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime = Utc::now()
        .signed_duration_since(state.start_time)
        .num_seconds()
        .max(0) as u64;

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: uptime,
    })
}

/// Fallback for anything outside `/time` and `/health`.
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 Not Found")
}
