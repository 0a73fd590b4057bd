use serde::{Deserialize, Serialize};

use super::loan::{LoanResult, LoanTerm};

/// Upper bound of the down-payment percent slider.
pub const MAX_DOWN_PAYMENT_PERCENT: f64 = 80.0;

/// The calculator form state.
///
/// `None` models a blank or non-numeric field — the frontend parses raw
/// input and hands the core either a number or nothing. The invariant
/// maintained by `CalculatorService` is that `down_payment_amount` and
/// `down_payment_percent` always describe the same fraction of a valid
/// `car_price` (to within display rounding); whichever field the user
/// last edited is authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    pub car_price: Option<f64>,
    pub down_payment_amount: Option<f64>,
    pub down_payment_percent: Option<f64>,
    pub annual_interest_rate_percent: Option<f64>,
    pub loan_term: LoanTerm,

    /// Last successful calculation. Cleared whenever any input changes.
    pub result: Option<LoanResult>,
}

impl Default for CalculatorState {
    /// Initial form state: 25% down, 5% annual interest, 5-year term,
    /// price and amount empty until the user types or selects a vehicle.
    fn default() -> Self {
        Self {
            car_price: None,
            down_payment_amount: None,
            down_payment_percent: Some(25.0),
            annual_interest_rate_percent: Some(5.0),
            loan_term: LoanTerm::default(),
            result: None,
        }
    }
}

/// A single user edit to the calculator form.
///
/// Modelled as a reducer input (edited field + new value) rather than
/// bidirectional observers, so the amount/percent synchronization cannot
/// cycle and is testable without any UI.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEdit {
    CarPrice(Option<f64>),
    DownPaymentAmount(Option<f64>),
    DownPaymentPercent(Option<f64>),
    InterestRate(Option<f64>),
    LoanTerm(LoanTerm),
}
