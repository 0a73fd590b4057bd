pub mod calculator;
pub mod loan;
pub mod vehicle;
