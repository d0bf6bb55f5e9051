// Copyright (c) 2025 VERDANA GROW SYSTEMS s.r.o.
//
// This file is part of Orchis.
//
// Licensed under the MIT License. See the LICENSE file in the repository root for details.
//
// This software is provided "AS IS", without warranty of any kind.

mod export;
mod render;

pub use render::{DashboardTemplate, LiveTemplate};

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{
        Html, IntoResponse,
        sse::{Event, Sse},
    },
    routing::{delete, get, post},
};
use orchis_core::{DashboardHooks, DashboardState, DashboardTab, StateError, Tone};
use orchis_types::SubsystemName;
use parking_lot::RwLock;
use serde::Deserialize;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;
use tokio_stream::{StreamExt, wrappers::IntervalStream};
use tower_http::cors::CorsLayer;
use tracing::{debug, error, info, trace, warn};

/// Application state shared by all web handlers
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<RwLock<DashboardState>>,
    pub hooks: Arc<DashboardHooks>,
    pub greenhouse_name: Arc<str>,
}

impl AppState {
    pub fn new(state: DashboardState, hooks: DashboardHooks, greenhouse_name: &str) -> Self {
        Self {
            dashboard: Arc::new(RwLock::new(state)),
            hooks: Arc::new(hooks),
            greenhouse_name: Arc::from(greenhouse_name),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("greenhouse_name", &self.greenhouse_name)
            .finish_non_exhaustive()
    }
}

/// Build the dashboard router
///
/// Separated from `start_web_server` so tests can drive the routes directly
/// without binding a socket.
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/stream", get(stream_handler))
        .route("/health", get(health_handler))
        .route("/export", get(export::json_export_handler))
        .route("/export.csv", get(export::csv_export_handler))
        .route("/api/controls/{name}/auto", post(toggle_auto_handler))
        .route("/api/notifications/{id}", delete(dismiss_handler))
        .route("/api/notifications/{id}/read", post(mark_read_handler))
        .route("/api/actions/{action}", post(action_handler))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

/// Start the web server
///
/// # Errors
/// Returns error if the server fails to bind or serve
pub async fn start_web_server(
    app_state: AppState,
    bind: &str,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(app_state);

    let addr = format!("{bind}:{port}");
    info!("🌐 Starting web server on {addr}");
    info!("🌱 Dashboard: http://localhost:{}/", port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[derive(Debug, Deserialize)]
struct IndexQuery {
    tab: Option<String>,
}

/// Main dashboard page handler
///
/// An optional `?tab=` query switches the active tab before rendering; an
/// unrecognized tab name is rejected rather than silently ignored.
async fn index_handler(
    State(app_state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> impl IntoResponse {
    debug!("Dashboard page requested");

    if let Some(raw) = query.tab {
        match raw.parse::<DashboardTab>() {
            Ok(tab) => app_state.dashboard.write().select_tab(tab),
            Err(e) => {
                warn!("Rejected tab selection: {}", e);
                return (StatusCode::BAD_REQUEST, e.to_string()).into_response();
            }
        }
    }

    let template = {
        let state = app_state.dashboard.read();
        DashboardTemplate::from_state(&state, &app_state.greenhouse_name)
    };

    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Template render error: {}", e);
            Html(format!(
                "<html><body><h1>Error</h1><p>Failed to render template: {e}</p></body></html>"
            ))
            .into_response()
        }
    }
}

/// SSE stream handler for live updates
/// Re-renders the banner, metric cards, and subsystem pills every second
async fn stream_handler(
    State(app_state): State<AppState>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>>> {
    trace!("SSE stream connected");

    let interval = tokio::time::interval(Duration::from_secs(1));
    let stream = IntervalStream::new(interval).map(move |_| {
        let template = {
            let state = app_state.dashboard.read();
            LiveTemplate::from_state(&state)
        };
        let html = template
            .render()
            .unwrap_or_else(|e| format!("<div class='error'>Template error: {e}</div>"));
        Ok::<_, Infallible>(Event::default().event("update").data(html))
    });

    Sse::new(stream)
}

/// Health check endpoint
async fn health_handler(State(app_state): State<AppState>) -> impl IntoResponse {
    let state = app_state.dashboard.read();
    let degraded = state.error.is_some() || state.overall_tone() == Tone::Crit;
    if degraded {
        (StatusCode::SERVICE_UNAVAILABLE, "DEGRADED")
    } else {
        (StatusCode::OK, "OK")
    }
}

/// Toggle a subsystem between automatic and manual operation
async fn toggle_auto_handler(
    State(app_state): State<AppState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    let subsystem = match name.parse::<SubsystemName>() {
        Ok(subsystem) => subsystem,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };

    let result = app_state.dashboard.write().toggle_auto(subsystem);
    match result {
        Ok(auto) => {
            info!(
                "Subsystem {} switched to {}",
                subsystem.display_name(),
                if auto { "automatic" } else { "manual" }
            );
            Json(serde_json::json!({
                "name": subsystem.to_config_value(),
                "auto": auto,
            }))
            .into_response()
        }
        Err(e @ StateError::UnknownSubsystem(_)) => {
            warn!("Toggle rejected: {}", e);
            (StatusCode::NOT_FOUND, e.to_string()).into_response()
        }
    }
}

/// Dismiss a notification; dismissing an unknown id reports `removed: false`
async fn dismiss_handler(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let removed = app_state.dashboard.write().dismiss_notification(&id);
    debug!("Notification {} dismissed: {}", id, removed);
    Json(serde_json::json!({ "id": id, "removed": removed }))
}

/// Mark a notification as read (snooze)
async fn mark_read_handler(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let marked = app_state.dashboard.write().mark_notification_read(&id);
    Json(serde_json::json!({ "id": id, "read": marked }))
}

/// Dispatch a header action to its hook, falling back to the local placeholder
async fn action_handler(
    State(app_state): State<AppState>,
    Path(action): Path<String>,
) -> impl IntoResponse {
    let feedback = match action.as_str() {
        "add-orchid" => app_state.hooks.add_orchid(),
        "configure-sensors" => app_state.hooks.configure_sensors(),
        "export-data" => app_state.hooks.export_data(),
        other => {
            warn!("Unknown action requested: {}", other);
            return (StatusCode::NOT_FOUND, format!("Unknown action: {other}")).into_response();
        }
    };

    Json(serde_json::json!({ "action": action, "feedback": feedback })).into_response()
}
