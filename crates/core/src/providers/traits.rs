use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::vehicle::CandidateVehicle;

/// Trait abstraction for the car search gateway.
///
/// The AI service behind the search box is an external collaborator:
/// query string in, candidate vehicles out. Anything satisfying this
/// contract works — the Gemini implementation for production, a
/// deterministic stub for tests. If the AI service changes, only the one
/// implementation is touched.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait CarSearchProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Look up candidate vehicles for a free-text query.
    ///
    /// Returns an empty list when the service answered but found nothing;
    /// errors are reserved for transport and payload failures.
    async fn search(&self, query: &str) -> Result<Vec<CandidateVehicle>, CoreError>;
}
