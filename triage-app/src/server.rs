//! Dashboard web server.
//!
//! One content route: `GET /` runs the whole load protocol (fire both
//! fetches, join all-or-nothing, reduce, render) and responds with the
//! resulting page. Every request starts from a fresh `Loading` state, so a
//! reload re-fetches both collections. Upstream failures still answer 200:
//! the error is part of the page, not a transport-level failure.

use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Router};
use tracing::{info, warn};

use triage_core::render::render;
use triage_core::{ApiClient, DashboardState, LoadOutcome};

pub fn router(client: Arc<ApiClient>) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .route("/health", get(health))
        .with_state(client)
}

/// Bind and serve until ctrl-c.
pub async fn serve(client: Arc<ApiClient>, bind: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    axum::serve(listener, router(client))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;
    Ok(())
}

async fn dashboard(State(client): State<Arc<ApiClient>>) -> Html<String> {
    let state = DashboardState::default();
    let outcome = client.load_dashboard().await;
    match &outcome {
        LoadOutcome::Loaded { alerts, rules } => {
            info!(alerts = alerts.len(), rules = rules.len(), "Dashboard loaded");
        }
        LoadOutcome::Failed(message) => {
            warn!(error = %message, "Dashboard load failed");
        }
    }
    Html(render(&state.apply(outcome)))
}

async fn health() -> &'static str {
    "ok"
}
