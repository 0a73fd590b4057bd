use crate::models::loan::LoanTerm;

/// Output of the amortization engine. Figures are unrounded — rounding
/// and formatting for display belong to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmortizationSchedule {
    pub monthly_installment: f64,
    pub total_interest: f64,
    pub total_payment: f64,
}

/// Fixed-rate, fixed-term, monthly-compounding amortization.
///
/// Pure function of its inputs — no validation, no I/O, deterministic.
/// Callers are responsible for rejecting invalid inputs (negative
/// principal, negative rate) before invoking the engine.
pub struct AmortizationService;

impl AmortizationService {
    /// Compute the constant monthly installment for `principal` borrowed
    /// at `annual_rate_percent` over `term`, using the standard annuity
    /// formula:
    ///
    /// installment = P * r * (1 + r)^n / ((1 + r)^n - 1)
    ///
    /// where r is the monthly rate and n the number of monthly periods.
    /// A zero rate degenerates to straight division.
    #[must_use]
    pub fn compute(
        principal: f64,
        annual_rate_percent: f64,
        term: LoanTerm,
    ) -> AmortizationSchedule {
        let months = f64::from(term.months());
        let monthly_rate = annual_rate_percent / 100.0 / 12.0;

        if monthly_rate == 0.0 {
            return AmortizationSchedule {
                monthly_installment: principal / months,
                total_interest: 0.0,
                total_payment: principal,
            };
        }

        let growth = (1.0 + monthly_rate).powf(months);
        let monthly_installment = principal * (monthly_rate * growth) / (growth - 1.0);
        let total_payment = monthly_installment * months;

        AmortizationSchedule {
            monthly_installment,
            total_interest: total_payment - principal,
            total_payment,
        }
    }
}
