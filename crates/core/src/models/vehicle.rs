use serde::{Deserialize, Serialize};

/// A candidate vehicle returned by the search gateway.
///
/// Immutable and never persisted — the user either selects one (seeding
/// the calculator with its price) or discards the whole result list.
///
/// Field names on the wire are camelCase, matching the JSON contract the
/// AI gateway is instructed to produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateVehicle {
    /// Manufacturer (e.g., "Toyota", "Honda") — Thai or English
    pub brand: String,

    /// Model name (e.g., "Yaris Ativ")
    pub model: String,

    /// Trim level. Empty string when the gateway has no trim information.
    #[serde(default)]
    pub trim: String,

    /// Estimated price in Thai baht (always positive)
    pub price: f64,

    /// Optional URL of an exterior photo of the vehicle
    #[serde(default)]
    pub image_url: Option<String>,

    /// Optional URL of the brand logo
    #[serde(default)]
    pub brand_logo_url: Option<String>,
}

impl CandidateVehicle {
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        trim: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            trim: trim.into(),
            price,
            image_url: None,
            brand_logo_url: None,
        }
    }

    /// Full display name: "Brand Model Trim", with an empty trim elided.
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.trim.trim().is_empty() {
            format!("{} {}", self.brand, self.model)
        } else {
            format!("{} {} {}", self.brand, self.model, self.trim)
        }
    }
}
