//! Route handlers grouped by resource.

pub mod conversations;
pub mod languages;
pub mod phrases;
pub mod translate;
pub mod translations;

/// Liveness probe.
#[allow(clippy::unused_async)]
pub async fn health() -> &'static str {
    "OK"
}
