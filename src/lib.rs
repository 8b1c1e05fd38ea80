//! Labcore — lab workflow, billing and waitlist state engine.
//!
//! The state core behind a hospital-management desktop front-end. The UI
//! shell owns a [`LabState`], calls store operations in response to
//! discrete user events, and re-renders from the derived views after each
//! mutation. Everything lives in memory for the lifetime of the process;
//! a restart resets to the seed arrays.

pub mod billing;
pub mod config;
pub mod models;
pub mod seed;
pub mod state;
pub mod waitlist;
pub mod workflow;

pub use state::LabState;
