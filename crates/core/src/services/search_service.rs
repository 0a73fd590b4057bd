use crate::errors::CoreError;
use crate::models::vehicle::CandidateVehicle;
use crate::providers::traits::CarSearchProvider;

/// Maximum number of candidates surfaced per search.
pub const MAX_RESULTS: usize = 5;

/// Validates queries and runs them through the injected search gateway.
///
/// The provider is trusted for transport but not for content: results
/// are capped at `MAX_RESULTS` and candidates with unusable prices are
/// dropped before anything reaches the calculator.
pub struct SearchService {
    provider: Box<dyn CarSearchProvider>,
}

impl SearchService {
    pub fn new(provider: Box<dyn CarSearchProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Search for candidate vehicles.
    ///
    /// - Blank queries are rejected before the gateway is invoked.
    /// - Gateway failures propagate unchanged.
    /// - An empty (or fully filtered-out) result list becomes
    ///   `CoreError::NoMatches`, which callers surface differently from
    ///   a failure.
    pub async fn search(&self, query: &str) -> Result<Vec<CandidateVehicle>, CoreError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(CoreError::ValidationError(
                "Search query must not be blank".into(),
            ));
        }

        let mut vehicles = self.provider.search(trimmed).await?;

        // Validate gateway output: prices must be finite and positive.
        vehicles.retain(|v| v.price.is_finite() && v.price > 0.0);
        vehicles.truncate(MAX_RESULTS);

        if vehicles.is_empty() {
            return Err(CoreError::NoMatches(trimmed.to_string()));
        }

        Ok(vehicles)
    }
}
