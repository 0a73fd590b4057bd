pub mod amortization_service;
pub mod calculator_service;
pub mod search_service;
pub mod share_service;
