use serde::{Deserialize, Serialize};

/// Allowed loan terms. The product offers exactly these four, so the
/// term is an enum rather than a free integer — an out-of-range term is
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanTerm {
    FourYears,
    FiveYears,
    SixYears,
    SevenYears,
}

impl LoanTerm {
    /// All terms in display order.
    pub const ALL: [LoanTerm; 4] = [
        LoanTerm::FourYears,
        LoanTerm::FiveYears,
        LoanTerm::SixYears,
        LoanTerm::SevenYears,
    ];

    #[must_use]
    pub fn years(self) -> u32 {
        match self {
            LoanTerm::FourYears => 4,
            LoanTerm::FiveYears => 5,
            LoanTerm::SixYears => 6,
            LoanTerm::SevenYears => 7,
        }
    }

    /// Number of monthly installments over the term.
    #[must_use]
    pub fn months(self) -> u32 {
        self.years() * 12
    }

    /// Map a year count back to a term. `None` for unsupported values.
    #[must_use]
    pub fn from_years(years: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.years() == years)
    }
}

impl Default for LoanTerm {
    /// 5 years — the pre-selected term in the calculator form.
    fn default() -> Self {
        LoanTerm::FiveYears
    }
}

impl std::fmt::Display for LoanTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.years())
    }
}

/// A completed loan calculation.
///
/// Carries the full input snapshot alongside the computed figures so the
/// share summary can be rendered later even if the form fields have since
/// been edited. Absent until a successful calculation; cleared by every
/// input edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    /// Car price at calculation time (baht)
    pub car_price: f64,

    /// Down payment at calculation time (baht)
    pub down_payment: f64,

    /// Amount actually borrowed: car_price - down_payment
    pub financed_amount: f64,

    /// Annual interest rate used (percent)
    pub annual_interest_rate_percent: f64,

    /// Term used
    pub loan_term: LoanTerm,

    /// Constant monthly installment (baht, unrounded)
    pub monthly_installment: f64,

    /// Total interest paid over the full term (baht, unrounded)
    pub total_interest: f64,

    /// Total amount paid over the full term (baht, unrounded)
    pub total_payment: f64,
}
