//! # Triage Core — data access and rendering for the alert triage dashboard
//!
//! Everything the dashboard page is made of, minus the web server shell:
//! - **models** — typed `Alert` / `TriageRule` records as the backend serves them
//! - **client** — one GET per collection against the backend API, joined all-or-nothing
//! - **state** — the three display modes and the pure reducer between them
//! - **render** — state in, HTML markup out, nothing else
//!
//! The crate performs no writes anywhere: both collections are read-only
//! snapshots fetched once per page load and discarded afterwards.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod state;

pub use client::ApiClient;
pub use config::DashboardConfig;
pub use error::{ApiError, ApiResult};
pub use state::{DashboardState, LoadOutcome};
