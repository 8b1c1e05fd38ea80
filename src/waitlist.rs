//! Patient waitlist.
//!
//! Pre-staged patients with recommended tests. Selecting one replaces the
//! billing cart wholesale and highlights that patient alone.

use crate::billing::BillingCart;
use crate::models::WaitlistPatient;

pub struct Waitlist {
    patients: Vec<WaitlistPatient>,
}

impl Waitlist {
    pub fn new(patients: Vec<WaitlistPatient>) -> Self {
        Self { patients }
    }

    pub fn patients(&self) -> &[WaitlistPatient] {
        &self.patients
    }

    pub fn highlighted(&self) -> Option<&WaitlistPatient> {
        self.patients.iter().find(|p| p.is_highlighted)
    }

    /// Stage a patient into the cart: full overwrite of the cart lines,
    /// customer resolved or synthesized by name, single-select highlight.
    /// Returns `false` on unknown id.
    pub fn select_patient(&mut self, id: &str, cart: &mut BillingCart) -> bool {
        let Some(index) = self.patients.iter().position(|p| p.id == id) else {
            tracing::debug!(patient_id = id, "select_patient: unknown patient");
            return false;
        };

        for patient in &mut self.patients {
            patient.is_highlighted = false;
        }
        self.patients[index].is_highlighted = true;

        let patient = self.patients[index].clone();
        cart.stage_patient(&patient.name, patient.tests);
        tracing::info!(patient_id = id, "Waitlist patient staged into cart");
        true
    }

    /// Case-insensitive removal by name. Returns whether a row went away.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.patients.len();
        self.patients
            .retain(|p| !p.name.eq_ignore_ascii_case(name));
        self.patients.len() != before
    }
}

impl Default for Waitlist {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BillItem;

    fn patient(id: &str, name: &str, test_ids: &[&str]) -> WaitlistPatient {
        let tests: Vec<BillItem> = test_ids
            .iter()
            .map(|tid| BillItem {
                id: tid.to_string(),
                test_name: format!("Test {tid}"),
                price: 120.0,
                quantity: 1,
                discount: 0.0,
                category: None,
                representative_id: None,
                status: None,
                estimated_time: None,
            })
            .collect();
        WaitlistPatient {
            id: id.to_string(),
            name: name.to_string(),
            items: tests.len() as u32,
            is_highlighted: false,
            tests,
        }
    }

    fn seeded() -> Waitlist {
        Waitlist::new(vec![
            patient("W1", "Ravi Kumar", &["T1", "T2"]),
            patient("W2", "Meena Pillai", &["T3"]),
        ])
    }

    #[test]
    fn selection_replaces_cart_and_single_selects() {
        let mut waitlist = seeded();
        let mut cart = BillingCart::new();
        cart.add_item(BillItem {
            id: "OLD".to_string(),
            test_name: "Stale line".to_string(),
            price: 999.0,
            quantity: 1,
            discount: 0.0,
            category: None,
            representative_id: None,
            status: None,
            estimated_time: None,
        });

        assert!(waitlist.select_patient("W1", &mut cart));
        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["T1", "T2"]);
        assert_eq!(waitlist.highlighted().unwrap().id, "W1");

        // Switching patients moves the highlight, it never accumulates.
        assert!(waitlist.select_patient("W2", &mut cart));
        assert_eq!(cart.items().len(), 1);
        assert_eq!(waitlist.highlighted().unwrap().id, "W2");
        assert_eq!(
            waitlist.patients().iter().filter(|p| p.is_highlighted).count(),
            1
        );
    }

    #[test]
    fn selection_synthesizes_missing_customer() {
        let mut waitlist = seeded();
        let mut cart = BillingCart::new();
        waitlist.select_patient("W2", &mut cart);
        let customer = cart.active_customer().unwrap();
        assert_eq!(customer.name, "Meena Pillai");
        assert_eq!(customer.id, "C1");
    }

    #[test]
    fn unknown_patient_is_silent_noop() {
        let mut waitlist = seeded();
        let mut cart = BillingCart::new();
        assert!(!waitlist.select_patient("nope", &mut cart));
        assert!(cart.items().is_empty());
        assert!(waitlist.highlighted().is_none());
    }

    #[test]
    fn remove_is_case_insensitive() {
        let mut waitlist = seeded();
        assert!(waitlist.remove("ravi KUMAR"));
        assert_eq!(waitlist.patients().len(), 1);
        assert!(!waitlist.remove("Ravi Kumar"));
    }
}
