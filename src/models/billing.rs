use serde::{Deserialize, Serialize};

use super::enums::{TestCategory, TestStatus};

/// A cart line: one test or service staged for checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillItem {
    pub id: String,
    pub test_name: String,
    pub price: f64,
    /// Always >= 1; removal is a separate operation.
    pub quantity: u32,
    /// Percentage, 0-100.
    pub discount: f64,
    pub category: Option<TestCategory>,
    pub representative_id: Option<String>,
    /// Live mirror of the created test's status while still shown in-cart.
    pub status: Option<TestStatus>,
    pub estimated_time: Option<String>,
}

impl BillItem {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity) * (1.0 - self.discount / 100.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub mobile: String,
    pub address: String,
    pub email: Option<String>,
}
