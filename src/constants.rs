//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Base URL of the IBGE localities API
pub const DEFAULT_API_BASE_URL: &str = "https://servicodados.ibge.gov.br/api/v1/localidades";

/// File the tracing subscriber writes to (stdout belongs to the alternate screen)
pub const LOG_FILE: &str = "coleta.log";

/// Application name
pub const APP_NAME: &str = "Coleta TUI";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
