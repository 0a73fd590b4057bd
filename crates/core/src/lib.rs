pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use errors::CoreError;
use models::{
    calculator::{CalculatorState, InputEdit},
    loan::{LoanResult, LoanTerm},
    vehicle::CandidateVehicle,
};
use providers::traits::CarSearchProvider;
use services::{
    calculator_service::CalculatorService, search_service::SearchService,
    share_service::ShareService,
};
use storage::backend::StorageBackend;
use storage::history::RecentSearchStore;

/// Main entry point for the car-finance-core library.
///
/// Holds the calculator state and the services that operate on it: the
/// AI search gateway, the down-payment synchronizer, the amortization
/// engine (via `calculate`), and the recent-search history. A thin
/// frontend (WASM or native) drives this struct and renders `state()`.
///
/// All state transitions happen through `&mut self` in response to
/// discrete user actions, so at most one search is in flight per
/// instance and a stale response can never overwrite a newer one.
#[must_use]
pub struct CarFinance {
    state: CalculatorState,
    calculator: CalculatorService,
    search: SearchService,
    history: RecentSearchStore,
}

impl CarFinance {
    /// Build a calculator around a search gateway and a persistence
    /// backend. Recent searches are loaded from the backend here, once.
    pub fn new(provider: Box<dyn CarSearchProvider>, backend: Box<dyn StorageBackend>) -> Self {
        Self {
            state: CalculatorState::default(),
            calculator: CalculatorService::new(),
            search: SearchService::new(provider),
            history: RecentSearchStore::new(backend),
        }
    }

    /// Convenience constructor wired to the Gemini gateway.
    pub fn with_gemini(api_key: impl Into<String>, backend: Box<dyn StorageBackend>) -> Self {
        let provider = providers::gemini::GeminiSearchProvider::new(api_key);
        Self::new(Box::new(provider), backend)
    }

    // ── Search ──────────────────────────────────────────────────────

    /// Search for candidate vehicles matching a free-text query.
    ///
    /// Blank queries fail validation before the gateway is invoked. A
    /// successful non-empty search is recorded into the recent-search
    /// history; `NoMatches` and gateway failures leave history alone.
    pub async fn search(&mut self, query: &str) -> Result<Vec<CandidateVehicle>, CoreError> {
        let vehicles = self.search.search(query).await?;

        // History persistence is best-effort; a failed write never
        // fails a search that already produced results.
        let _ = self.history.record(query.trim());

        Ok(vehicles)
    }

    /// Recent search queries, most recent first, at most 5.
    /// Selecting one in the UI simply re-issues `search` with it.
    #[must_use]
    pub fn recent_searches(&self) -> &[String] {
        self.history.all()
    }

    /// Name of the configured search gateway (for status messages).
    #[must_use]
    pub fn search_provider_name(&self) -> &str {
        self.search.provider_name()
    }

    // ── Calculator Form ─────────────────────────────────────────────

    /// Seed the calculator with a vehicle picked from search results.
    /// The down-payment amount is re-derived from the current percent
    /// and any previous result is cleared.
    pub fn select_vehicle(&mut self, vehicle: &CandidateVehicle) {
        self.calculator
            .apply(&mut self.state, InputEdit::CarPrice(Some(vehicle.price)));
    }

    /// Set the car price. `None` means the field is blank/non-numeric.
    pub fn set_car_price(&mut self, price: Option<f64>) {
        self.calculator.apply(&mut self.state, InputEdit::CarPrice(price));
    }

    /// Set the down-payment amount (direct numeric entry).
    pub fn set_down_payment_amount(&mut self, amount: Option<f64>) {
        self.calculator
            .apply(&mut self.state, InputEdit::DownPaymentAmount(amount));
    }

    /// Set the down-payment percent (slider, clamped to 0..=80).
    pub fn set_down_payment_percent(&mut self, percent: Option<f64>) {
        self.calculator
            .apply(&mut self.state, InputEdit::DownPaymentPercent(percent));
    }

    /// Set the annual interest rate in percent.
    pub fn set_interest_rate(&mut self, rate: Option<f64>) {
        self.calculator.apply(&mut self.state, InputEdit::InterestRate(rate));
    }

    /// Set the loan term.
    pub fn set_loan_term(&mut self, term: LoanTerm) {
        self.calculator.apply(&mut self.state, InputEdit::LoanTerm(term));
    }

    // ── Calculation & Results ───────────────────────────────────────

    /// Validate the form and compute the loan figures.
    ///
    /// Validation failures return an error and leave a previously
    /// computed result in place.
    pub fn calculate(&mut self) -> Result<&LoanResult, CoreError> {
        self.calculator.calculate(&mut self.state)
    }

    /// The last successful calculation, if any input hasn't changed since.
    #[must_use]
    pub fn last_result(&self) -> Option<&LoanResult> {
        self.state.result.as_ref()
    }

    /// Current form state for rendering.
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Shareable plain-text summary of the last result.
    /// `None` until a calculation has succeeded.
    #[must_use]
    pub fn share_summary(&self) -> Option<String> {
        self.state.result.as_ref().map(ShareService::summary_text)
    }
}

impl std::fmt::Debug for CarFinance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarFinance")
            .field("state", &self.state)
            .field("provider", &self.search.provider_name())
            .field("recent_searches", &self.history.all().len())
            .finish()
    }
}
