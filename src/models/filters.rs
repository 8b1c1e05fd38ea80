use super::enums::{TestCategory, TestStatus};

#[derive(Debug, Default)]
pub struct TestFilter {
    pub status: Option<TestStatus>,
    pub category: Option<TestCategory>,
    pub search_query: Option<String>,
}
