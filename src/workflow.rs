//! Lab test registry and workflow transitions.
//!
//! One collection keyed by test id; the pending and completed screens are
//! derived views over `status`, so a record can never sit in both buckets
//! (or neither). A transition appends to the test's workflow history and
//! updates `completed_date` bookkeeping; any `(from, to)` pair is accepted,
//! including reopening a completed or cancelled test.

use std::collections::HashMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::models::{LabTest, TestFilter, TestStatus, WorkflowEntry};

// ═══════════════════════════════════════════
// View types
// ═══════════════════════════════════════════

/// Per-bucket totals for the workflow screen's tab bar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub pending: u32,
    /// Sampling, processing or reporting.
    pub in_progress: u32,
    pub completed: u32,
    pub cancelled: u32,
}

/// Side updates applied together with a workflow transition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkflowUpdate {
    pub performed_by: Option<String>,
    pub sample_details: Option<String>,
    pub sample_id: Option<String>,
}

// ═══════════════════════════════════════════
// TestRegistry
// ═══════════════════════════════════════════

/// In-memory lab test store.
///
/// Owned by [`crate::state::LabState`] for the lifetime of the app;
/// nothing is persisted. Unknown-id operations are silent no-ops that
/// return `false` (the UI never surfaces them).
pub struct TestRegistry {
    tests: HashMap<String, LabTest>,
    /// Insertion order, so derived views render in a stable order.
    order: Vec<String>,
    /// Currently viewed test (read-only pointer for the detail panel).
    selected: Option<String>,
}

impl TestRegistry {
    pub fn new() -> Self {
        Self {
            tests: HashMap::new(),
            order: Vec::new(),
            selected: None,
        }
    }

    /// Seed or append a test. Replaces in place on id collision.
    pub fn insert(&mut self, test: LabTest) {
        if !self.tests.contains_key(&test.id) {
            self.order.push(test.id.clone());
        }
        self.tests.insert(test.id.clone(), test);
    }

    pub fn get(&self, id: &str) -> Option<&LabTest> {
        self.tests.get(id)
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    fn iter_ordered(&self) -> impl Iterator<Item = &LabTest> {
        self.order.iter().filter_map(|id| self.tests.get(id))
    }

    // ── Derived views ───────────────────────────────────────

    /// Everything not yet completed, cancelled tests included.
    pub fn pending_tests(&self) -> Vec<&LabTest> {
        self.iter_ordered()
            .filter(|t| t.status != TestStatus::Completed)
            .collect()
    }

    pub fn completed_tests(&self) -> Vec<&LabTest> {
        self.iter_ordered()
            .filter(|t| t.status == TestStatus::Completed)
            .collect()
    }

    /// Bucket totals for the tab bar.
    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for test in self.tests.values() {
            match test.status {
                TestStatus::Pending => counts.pending += 1,
                TestStatus::Sampling | TestStatus::Processing | TestStatus::Reporting => {
                    counts.in_progress += 1
                }
                TestStatus::Completed => counts.completed += 1,
                TestStatus::Cancelled => counts.cancelled += 1,
            }
        }
        counts
    }

    /// Filter by status, category and case-insensitive search over the
    /// test and patient names.
    pub fn filtered(&self, filter: &TestFilter) -> Vec<&LabTest> {
        let query = filter
            .search_query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);

        self.iter_ordered()
            .filter(|t| {
                if let Some(status) = &filter.status {
                    if t.status != *status {
                        return false;
                    }
                }
                if let Some(category) = &filter.category {
                    if t.category.as_ref() != Some(category) {
                        return false;
                    }
                }
                if let Some(q) = &query {
                    if !t.test_name.to_lowercase().contains(q)
                        && !t.patient_name.to_lowercase().contains(q)
                    {
                        return false;
                    }
                }
                true
            })
            .collect()
    }

    // ── Selection ───────────────────────────────────────────

    /// Point the detail panel at a test, or clear it with `None`.
    pub fn select_test(&mut self, id: Option<&str>) {
        self.selected = id
            .filter(|id| self.tests.contains_key(*id))
            .map(String::from);
    }

    pub fn selected_test(&self) -> Option<&LabTest> {
        self.selected.as_deref().and_then(|id| self.tests.get(id))
    }

    // ── Workflow transitions ────────────────────────────────

    /// Attach an uploaded result file and complete the test.
    ///
    /// No-op returning `false` if the id is unknown or the test is
    /// already completed. Clears the selection on success.
    pub fn upload_result(&mut self, id: &str, file_name: &str) -> bool {
        let Some(test) = self.tests.get_mut(id) else {
            tracing::debug!(test_id = id, "upload_result: unknown test");
            return false;
        };
        if test.status == TestStatus::Completed {
            tracing::debug!(test_id = id, "upload_result: already completed");
            return false;
        }

        let now = Utc::now();
        test.workflow_history.push(WorkflowEntry {
            from_status: test.status.clone(),
            to_status: TestStatus::Completed,
            timestamp: now,
            performed_by: None,
            notes: None,
        });
        test.status = TestStatus::Completed;
        test.completed_date = Some(now);
        test.result_url = Some(format!("/lab-results/{id}/{file_name}"));
        self.selected = None;

        tracing::info!(test_id = id, file_name, "Result uploaded, test completed");
        true
    }

    /// Complete a test from a typed-in report instead of a file upload.
    /// The report payload is serialized into the history entry's notes.
    pub fn create_report(&mut self, id: &str, report: &serde_json::Value) -> bool {
        let Some(test) = self.tests.get_mut(id) else {
            tracing::debug!(test_id = id, "create_report: unknown test");
            return false;
        };
        if test.status == TestStatus::Completed {
            tracing::debug!(test_id = id, "create_report: already completed");
            return false;
        }

        let now = Utc::now();
        test.workflow_history.push(WorkflowEntry {
            from_status: test.status.clone(),
            to_status: TestStatus::Completed,
            timestamp: now,
            performed_by: None,
            notes: Some(report.to_string()),
        });
        test.status = TestStatus::Completed;
        test.completed_date = Some(now);
        self.selected = None;

        tracing::info!(test_id = id, "Report created, test completed");
        true
    }

    /// Move a test to `new_status`, recording the transition.
    ///
    /// Any `(from, to)` pair is accepted. Moving into `Completed` stamps
    /// `completed_date` (if not already set); moving a completed test
    /// anywhere else clears it, returning the record to the pending view.
    pub fn update_workflow(
        &mut self,
        id: &str,
        new_status: TestStatus,
        notes: Option<&str>,
        update: WorkflowUpdate,
    ) -> bool {
        let Some(test) = self.tests.get_mut(id) else {
            tracing::debug!(test_id = id, "update_workflow: unknown test");
            return false;
        };

        let now = Utc::now();
        let from = test.status.clone();
        test.workflow_history.push(WorkflowEntry {
            from_status: from.clone(),
            to_status: new_status.clone(),
            timestamp: now,
            performed_by: update.performed_by.clone(),
            notes: notes.map(String::from),
        });

        if let Some(performed_by) = update.performed_by {
            test.representative_id = Some(performed_by);
        }
        if let Some(details) = update.sample_details {
            test.sample_details = Some(details);
        }
        if let Some(sample_id) = update.sample_id {
            test.sample_id = Some(sample_id);
        }

        if new_status == TestStatus::Completed {
            if test.completed_date.is_none() {
                test.completed_date = Some(now);
            }
        } else if from == TestStatus::Completed {
            test.completed_date = None;
        }
        test.status = new_status.clone();

        tracing::info!(
            test_id = id,
            from = from.as_str(),
            to = new_status.as_str(),
            "Workflow transition"
        );
        true
    }

    /// In-place sample update; pending records only.
    pub fn update_sample_details(
        &mut self,
        id: &str,
        details: &str,
        sample_id: Option<&str>,
    ) -> bool {
        let Some(test) = self.tests.get_mut(id) else {
            tracing::debug!(test_id = id, "update_sample_details: unknown test");
            return false;
        };
        if test.status == TestStatus::Completed {
            tracing::debug!(test_id = id, "update_sample_details: test completed");
            return false;
        }

        test.sample_details = Some(details.to_string());
        if let Some(sample_id) = sample_id {
            test.sample_id = Some(sample_id.to_string());
        }
        true
    }
}

impl Default for TestRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════
