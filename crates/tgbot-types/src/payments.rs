use serde::{Deserialize, Serialize};
use tgbot_core::Entity;

/// A portion of the price for goods or services. Price breakdowns are
/// ordered and shown in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledPrice {
    pub label: String,
    /// In the smallest units of the currency.
    pub amount: i64,
}

impl LabeledPrice {
    pub fn new(label: impl Into<String>, amount: i64) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

impl Entity for LabeledPrice {}
