pub mod billing;
pub mod enums;
pub mod filters;
pub mod waitlist;

pub use billing::{BillItem, Customer};
pub use enums::{TestCategory, TestStatus};
pub use filters::TestFilter;
pub use lab_test::{LabTest, WorkflowEntry};
pub use waitlist::WaitlistPatient;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}
