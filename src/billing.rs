//! Billing cart and checkout.
//!
//! Cart lines plus the customer directory and the active customer.
//! "Print bill" is the handoff into the lab workflow: every cart line
//! becomes one test queued for sampling under a shared bill id, then the
//! cart resets for the next walk-in.

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::models::{BillItem, Customer, LabTest, TestStatus, WorkflowEntry};
use crate::workflow::TestRegistry;

/// Validation errors surfaced to the user as non-fatal notices.
/// None of them mutate any state.
#[derive(Debug, thiserror::Error)]
pub enum BillingError {
    #[error("Cart is empty")]
    EmptyCart,
    #[error("No customer selected")]
    NoCustomer,
    #[error("Customer name cannot be blank")]
    BlankCustomerName,
}

/// Receipt view returned by a successful checkout.
#[derive(Debug, Clone, Serialize)]
pub struct BillSummary {
    pub bill_id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub test_count: usize,
    pub total: f64,
}

// ═══════════════════════════════════════════
// BillingCart
// ═══════════════════════════════════════════

/// The active billing cart plus the known-customer directory.
pub struct BillingCart {
    items: Vec<BillItem>,
    customers: Vec<Customer>,
    /// Id of the selected customer, if any.
    active_customer: Option<String>,
    /// True while a freshly synthesized customer awaits its contact details.
    editing_customer: bool,
}

impl BillingCart {
    pub fn new() -> Self {
        Self::with_customers(Vec::new())
    }

    /// Start with a pre-seeded customer directory.
    pub fn with_customers(customers: Vec<Customer>) -> Self {
        Self {
            items: Vec::new(),
            customers,
            active_customer: None,
            editing_customer: false,
        }
    }

    pub fn items(&self) -> &[BillItem] {
        &self.items
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn active_customer(&self) -> Option<&Customer> {
        self.active_customer
            .as_deref()
            .and_then(|id| self.customers.iter().find(|c| c.id == id))
    }

    pub fn is_editing_customer(&self) -> bool {
        self.editing_customer
    }

    // ── Cart lines ──────────────────────────────────────────

    /// Add a line. A line with the same id already in the cart just gets
    /// its quantity bumped; the newly supplied record is ignored.
    pub fn add_item(&mut self, item: BillItem) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            existing.quantity += 1;
        } else {
            self.items.push(item);
        }
    }

    /// Adjust a line's quantity by `delta`, floor-clamped at 1.
    /// Removal is [`Self::remove_item`], not a quantity of zero.
    pub fn update_quantity(&mut self, id: &str, delta: i32) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            let quantity = i64::from(item.quantity) + i64::from(delta);
            item.quantity = quantity.max(1) as u32;
        }
    }

    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|i| i.id != id);
    }

    /// Σ price × quantity × (1 − discount/100) over the cart.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(BillItem::line_total).sum()
    }

    /// Replace the cart contents and select or synthesize the customer —
    /// the waitlist handoff (full overwrite, not a merge).
    pub fn stage_patient(&mut self, name: &str, tests: Vec<BillItem>) {
        self.items = tests;
        match self.find_customer(name).map(|c| c.id.clone()) {
            Some(id) => self.active_customer = Some(id),
            None => {
                let customer = self.synthesize_customer(name);
                tracing::info!(
                    customer_id = %customer.id,
                    "Synthesized customer for waitlist patient"
                );
                self.active_customer = Some(customer.id);
            }
        }
        self.editing_customer = false;
    }

    // ── Customers ───────────────────────────────────────────

    fn find_customer(&self, name: &str) -> Option<&Customer> {
        self.customers
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Mint a `C{n+1}` customer with placeholder contact fields.
    fn synthesize_customer(&mut self, name: &str) -> Customer {
        let customer = Customer {
            id: format!("C{}", self.customers.len() + 1),
            name: name.to_string(),
            mobile: String::new(),
            address: String::new(),
            email: None,
        };
        self.customers.push(customer.clone());
        customer
    }

    /// Exact case-insensitive name lookup. A match selects the customer;
    /// an empty term with no match clears the selection; a non-empty miss
    /// leaves the previous selection in place.
    pub fn search_customer(&mut self, term: &str) {
        let term = term.trim();
        match self.find_customer(term).map(|c| c.id.clone()) {
            Some(id) => self.active_customer = Some(id),
            None if term.is_empty() => self.active_customer = None,
            None => {}
        }
    }

    /// Register a walk-in customer by name.
    ///
    /// Selects the existing row on a case-insensitive name match instead
    /// of duplicating it; otherwise synthesizes a placeholder customer
    /// and enters edit mode so the desk can fill in contact details.
    pub fn add_new_customer(&mut self, name: &str) -> Result<Customer, BillingError> {
        let name = name.trim();
        if name.is_empty() {
            tracing::warn!("Rejected new customer with blank name");
            return Err(BillingError::BlankCustomerName);
        }

        if let Some(existing) = self.find_customer(name).cloned() {
            self.active_customer = Some(existing.id.clone());
            self.editing_customer = false;
            return Ok(existing);
        }

        let customer = self.synthesize_customer(name);
        self.active_customer = Some(customer.id.clone());
        self.editing_customer = true;
        tracing::info!(customer_id = %customer.id, "New customer created");
        Ok(customer)
    }

    /// Fill in a placeholder customer's contact details and leave edit
    /// mode. Returns `false` on unknown id.
    pub fn update_customer(
        &mut self,
        id: &str,
        mobile: &str,
        address: &str,
        email: Option<&str>,
    ) -> bool {
        let Some(customer) = self.customers.iter_mut().find(|c| c.id == id) else {
            tracing::debug!(customer_id = id, "update_customer: unknown customer");
            return false;
        };
        customer.mobile = mobile.to_string();
        customer.address = address.to_string();
        customer.email = email.map(String::from);
        self.editing_customer = false;
        true
    }

    // ── Checkout ────────────────────────────────────────────

    /// Convert the cart into pending lab work.
    ///
    /// Each line becomes one test in `Sampling` carrying the unit price
    /// and a single `Pending → Sampling` history entry, all grouped under
    /// one generated bill id. The cart and customer selection reset on
    /// success; validation failures change nothing.
    pub fn print_bill(
        &mut self,
        registry: &mut TestRegistry,
    ) -> Result<BillSummary, BillingError> {
        if self.items.is_empty() {
            tracing::warn!("print_bill rejected: cart is empty");
            return Err(BillingError::EmptyCart);
        }
        let Some(customer) = self.active_customer().cloned() else {
            tracing::warn!("print_bill rejected: no customer selected");
            return Err(BillingError::NoCustomer);
        };

        let bill_id = Uuid::new_v4().to_string();
        let now = Utc::now();
        let total = self.subtotal();
        let test_count = self.items.len();

        for item in self.items.drain(..) {
            registry.insert(LabTest {
                id: Uuid::new_v4().to_string(),
                patient_id: customer.id.clone(),
                patient_name: customer.name.clone(),
                test_name: item.test_name,
                status: TestStatus::Sampling,
                ordered_date: now,
                completed_date: None,
                result_url: None,
                price: Some(item.price),
                category: item.category,
                bill_id: Some(bill_id.clone()),
                representative_id: item.representative_id,
                sample_id: None,
                sample_details: None,
                workflow_history: vec![WorkflowEntry {
                    from_status: TestStatus::Pending,
                    to_status: TestStatus::Sampling,
                    timestamp: now,
                    performed_by: None,
                    notes: None,
                }],
            });
        }

        self.active_customer = None;
        self.editing_customer = false;

        tracing::info!(%bill_id, test_count, total, "Bill printed, tests queued");
        Ok(BillSummary {
            bill_id,
            customer_id: customer.id,
            customer_name: customer.name,
            test_count,
            total,
        })
    }
}

impl Default for BillingCart {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════
