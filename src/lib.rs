//! # Coleta TUI
//!
//! A terminal client for finding waste collection points: pick a Brazilian
//! state and city (sourced from the IBGE localities API), then proceed to
//! the collection points screen for that location.
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod config;
pub mod constants;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use config::Config;
pub use messages::ui_events::{Panel, Screen};
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{City, FetchKind, Uf};
pub use network::NetworkActor;
