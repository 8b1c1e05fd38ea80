//! Startup seed data.
//!
//! Nothing survives a restart; the UI shell supplies these arrays when it
//! builds the state. `demo()` is the bundled sample set used by
//! `LabState::default()` and by tests.

use chrono::{Duration, Utc};

use crate::models::{
    BillItem, Customer, LabTest, TestCategory, TestStatus, WaitlistPatient, WorkflowEntry,
};

/// The initial arrays for all three stores.
#[derive(Debug, Clone, Default)]
pub struct Seed {
    pub tests: Vec<LabTest>,
    pub customers: Vec<Customer>,
    pub waitlist: Vec<WaitlistPatient>,
}

impl Seed {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The demo hospital: a small lab queue, a finished report, two
    /// walk-in regulars and a short waitlist of recommended panels.
    pub fn demo() -> Self {
        let now = Utc::now();

        let mut hba1c = test(
            "LT-1003",
            "P3",
            "Suresh Iyer",
            "HbA1c",
            TestStatus::Completed,
            420.0,
            TestCategory::Pathology,
        );
        hba1c.ordered_date = now - Duration::days(2);
        hba1c.completed_date = Some(now - Duration::days(1));
        hba1c.result_url = Some("/lab-results/LT-1003/hba1c.pdf".to_string());
        hba1c.workflow_history = vec![
            entry(TestStatus::Pending, TestStatus::Sampling, now - Duration::days(2)),
            entry(TestStatus::Sampling, TestStatus::Processing, now - Duration::days(2)),
            entry(TestStatus::Processing, TestStatus::Completed, now - Duration::days(1)),
        ];

        let mut xray = test(
            "LT-1002",
            "P2",
            "Meena Pillai",
            "Chest X-Ray",
            TestStatus::Processing,
            650.0,
            TestCategory::Radiology,
        );
        xray.ordered_date = now - Duration::hours(6);
        xray.workflow_history = vec![
            entry(TestStatus::Pending, TestStatus::Sampling, now - Duration::hours(6)),
            entry(TestStatus::Sampling, TestStatus::Processing, now - Duration::hours(4)),
        ];

        let mut cbc = test(
            "LT-1001",
            "P1",
            "Ravi Kumar",
            "Complete Blood Count",
            TestStatus::Pending,
            350.0,
            TestCategory::Pathology,
        );
        cbc.ordered_date = now - Duration::hours(1);

        Self {
            tests: vec![cbc, xray, hba1c],
            customers: vec![
                Customer {
                    id: "C1".to_string(),
                    name: "Ravi Kumar".to_string(),
                    mobile: "98400 11223".to_string(),
                    address: "14 MG Road, Chennai".to_string(),
                    email: Some("ravi.kumar@example.com".to_string()),
                },
                Customer {
                    id: "C2".to_string(),
                    name: "Meena Pillai".to_string(),
                    mobile: "98400 44556".to_string(),
                    address: "8 Beach Road, Chennai".to_string(),
                    email: None,
                },
            ],
            waitlist: vec![
                WaitlistPatient {
                    id: "W1".to_string(),
                    name: "Lakshmi Nair".to_string(),
                    items: 2,
                    is_highlighted: false,
                    tests: vec![
                        bill_item("T-CBC", "Complete Blood Count", 350.0, TestCategory::Pathology),
                        bill_item("T-LIPID", "Lipid Profile", 800.0, TestCategory::Pathology),
                    ],
                },
                WaitlistPatient {
                    id: "W2".to_string(),
                    name: "Arjun Menon".to_string(),
                    items: 1,
                    is_highlighted: false,
                    tests: vec![bill_item(
                        "T-XRAY",
                        "Chest X-Ray",
                        650.0,
                        TestCategory::Radiology,
                    )],
                },
            ],
        }
    }
}

fn test(
    id: &str,
    patient_id: &str,
    patient_name: &str,
    test_name: &str,
    status: TestStatus,
    price: f64,
    category: TestCategory,
) -> LabTest {
    LabTest {
        id: id.to_string(),
        patient_id: patient_id.to_string(),
        patient_name: patient_name.to_string(),
        test_name: test_name.to_string(),
        status,
        ordered_date: Utc::now(),
        completed_date: None,
        result_url: None,
        price: Some(price),
        category: Some(category),
        bill_id: None,
        representative_id: None,
        sample_id: None,
        sample_details: None,
        workflow_history: Vec::new(),
    }
}

fn entry(
    from: TestStatus,
    to: TestStatus,
    timestamp: chrono::DateTime<Utc>,
) -> WorkflowEntry {
    WorkflowEntry {
        from_status: from,
        to_status: to,
        timestamp,
        performed_by: None,
        notes: None,
    }
}

fn bill_item(id: &str, name: &str, price: f64, category: TestCategory) -> BillItem {
    BillItem {
        id: id.to_string(),
        test_name: name.to_string(),
        price,
        quantity: 1,
        discount: 0.0,
        category: Some(category),
        representative_id: None,
        status: None,
        estimated_time: None,
    }
}
