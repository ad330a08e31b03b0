//! lingo-bridge
//!
//! Multilingual translation HTTP service. Requests go to an external provider when one is
//! configured and fall back to a built-in dictionary translator otherwise.

pub mod config;
pub mod dictionary;
pub mod language;
pub mod logging;
pub mod provider;
pub mod server;
pub mod service;
pub mod state;
pub mod store;
pub mod translator;
pub mod types;

pub use server::build_router;
pub use state::AppState;
