//! Invoice value objects.

use serde::{Deserialize, Serialize};

use crate::validate::{Validate, ValidationErrors};

// ─── LabeledPrice ────────────────────────────────────────────────────────────

/// One line item of an invoice's price breakdown.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabeledPrice {
    pub label: String,
    /// Price in the smallest units of the currency (cents for USD).
    /// May be negative for discount lines.
    pub amount: i64,
}

impl LabeledPrice {
    pub fn new(label: impl Into<String>, amount: i64) -> Self {
        Self { label: label.into(), amount }
    }
}

impl Validate for LabeledPrice {
    fn check(&self, errors: &mut ValidationErrors) {
        errors.non_empty("label", &self.label);
    }
}

// ─── ShippingOption ──────────────────────────────────────────────────────────

/// One shipping choice offered in reply to a shipping query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShippingOption {
    pub id: String,
    pub title: String,
    pub prices: Vec<LabeledPrice>,
}

impl ShippingOption {
    pub fn new(id: impl Into<String>, title: impl Into<String>, prices: Vec<LabeledPrice>) -> Self {
        Self { id: id.into(), title: title.into(), prices }
    }
}

impl Validate for ShippingOption {
    fn check(&self, errors: &mut ValidationErrors) {
        errors.non_empty("id", &self.id);
        errors.non_empty("title", &self.title);
        if self.prices.is_empty() {
            errors.push("prices", "must not be empty");
        }
        errors.nested_each("prices", &self.prices);
    }
}
