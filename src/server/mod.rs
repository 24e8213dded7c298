//! HTTP server assembly: shared state, routes, and the timezone filter.

/// The request-validation filter guarding `/time`
pub mod filter;
/// Page and health handlers
pub mod handlers;

use crate::templates::TemplateEngine;
use axum::{middleware, routing::get, Router};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// State shared by handlers and the filter.
#[derive(Clone)]
pub struct AppState {
    /// Template engine for the time and error pages.
    pub templates: Arc<TemplateEngine>,
    /// Service start time, reported by the health endpoint.
    pub start_time: DateTime<Utc>,
}

/// The assembled service: a router with the timezone filter applied to the
/// `/time` subtree.
pub struct TimeService {
    /// Router ready to be served or driven by a test server.
    pub router: Router,
}

impl TimeService {
    /// Build the router around a loaded template engine.
    pub fn new(templates: Arc<TemplateEngine>) -> Self {
        let state = AppState {
            templates,
            start_time: Utc::now(),
        };

        // Every path under /time passes through the filter.
        let time_routes = Router::new()
            .route("/", get(handlers::show_time))
            .route("/*path", get(handlers::show_time))
            .layer(middleware::from_fn_with_state(
                state.clone(),
                filter::validate_request,
            ));

        let router = Router::new()
            .nest("/time", time_routes)
            .route("/health", get(handlers::health_check))
            .fallback(handlers::not_found)
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
            .with_state(state);

        Self { router }
    }
}
