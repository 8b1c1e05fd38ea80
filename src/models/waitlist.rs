use serde::{Deserialize, Serialize};

use super::billing::BillItem;

/// A pre-staged patient with recommended tests, shown next to the cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitlistPatient {
    pub id: String,
    pub name: String,
    pub items: u32,
    pub is_highlighted: bool,
    pub tests: Vec<BillItem>,
}
