//! integrated tests
pub mod toolkit;

mod errors;
