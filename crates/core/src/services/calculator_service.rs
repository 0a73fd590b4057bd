use crate::errors::CoreError;
use crate::models::calculator::{CalculatorState, InputEdit, MAX_DOWN_PAYMENT_PERCENT};
use crate::models::loan::LoanResult;

use super::amortization_service::AmortizationService;

/// Keeps the calculator form consistent and runs calculations.
///
/// Pure business logic — no I/O, no API calls. Easy to test.
///
/// The down-payment amount and percent are two views of one value. Every
/// edit flows through `apply`, which re-derives the passive field from
/// the edited one, so the pair can never drift or cycle.
pub struct CalculatorService;

impl CalculatorService {
    pub fn new() -> Self {
        Self
    }

    /// Apply a single form edit, re-deriving the dependent down-payment
    /// field and clearing any previously computed result.
    ///
    /// Derivation rules:
    /// - price edited: amount = round(price * percent / 100), or cleared
    ///   when either side is unusable
    /// - amount edited: percent = amount / price * 100 (2 decimals), or
    ///   cleared when the price is unusable
    /// - percent edited: clamped to the slider range 0..=80, then amount
    ///   recomputed as for a price edit
    ///
    /// A zero, negative, or missing price always clears the derived
    /// field instead of dividing by it.
    pub fn apply(&self, state: &mut CalculatorState, edit: InputEdit) {
        state.result = None;

        match edit {
            InputEdit::CarPrice(value) => {
                state.car_price = value;
                self.derive_amount(state);
            }
            InputEdit::DownPaymentAmount(value) => {
                state.down_payment_amount = value;
                state.down_payment_percent = match (valid_price(state), value) {
                    (Some(price), Some(amount)) if amount.is_finite() && amount >= 0.0 => {
                        Some(round2(amount / price * 100.0))
                    }
                    _ => None,
                };
            }
            InputEdit::DownPaymentPercent(value) => {
                state.down_payment_percent =
                    value.filter(|p| p.is_finite()).map(|p| p.clamp(0.0, MAX_DOWN_PAYMENT_PERCENT));
                self.derive_amount(state);
            }
            InputEdit::InterestRate(value) => {
                state.annual_interest_rate_percent = value;
            }
            InputEdit::LoanTerm(term) => {
                state.loan_term = term;
            }
        }
    }

    /// Validate the current inputs and compute the loan figures.
    ///
    /// On a validation failure the error is returned and the state is
    /// left untouched — in particular, a result from an earlier valid
    /// calculation stays displayed.
    pub fn calculate<'a>(
        &self,
        state: &'a mut CalculatorState,
    ) -> Result<&'a LoanResult, CoreError> {
        let price = valid_price(state).ok_or_else(|| {
            CoreError::ValidationError("Car price must be a positive number".into())
        })?;

        // A blank down payment means zero down.
        let down_payment = state.down_payment_amount.unwrap_or(0.0);
        if !down_payment.is_finite() || down_payment < 0.0 {
            return Err(CoreError::ValidationError(
                "Down payment must be a non-negative number".into(),
            ));
        }
        if down_payment >= price {
            return Err(CoreError::ValidationError(
                "Down payment must be less than the car price".into(),
            ));
        }

        let rate = state
            .annual_interest_rate_percent
            .filter(|r| r.is_finite() && *r >= 0.0)
            .ok_or_else(|| {
                CoreError::ValidationError("Interest rate must be a non-negative number".into())
            })?;

        let financed_amount = price - down_payment;
        let schedule = AmortizationService::compute(financed_amount, rate, state.loan_term);

        let result = LoanResult {
            car_price: price,
            down_payment,
            financed_amount,
            annual_interest_rate_percent: rate,
            loan_term: state.loan_term,
            monthly_installment: schedule.monthly_installment,
            total_interest: schedule.total_interest,
            total_payment: schedule.total_payment,
        };
        Ok(&*state.result.insert(result))
    }

    /// Recompute the down-payment amount from price and percent.
    /// Amount is rounded to a whole baht for display.
    fn derive_amount(&self, state: &mut CalculatorState) {
        state.down_payment_amount = match (valid_price(state), state.down_payment_percent) {
            (Some(price), Some(percent)) if percent.is_finite() && percent >= 0.0 => {
                Some((price * percent / 100.0).round())
            }
            _ => None,
        };
    }
}

impl Default for CalculatorService {
    fn default() -> Self {
        Self::new()
    }
}

/// A usable price: present, finite, strictly positive.
fn valid_price(state: &CalculatorState) -> Option<f64> {
    state.car_price.filter(|p| p.is_finite() && *p > 0.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
