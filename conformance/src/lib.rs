//! Conformance checks for the Binance spot REST API.
//!
//! [`validator`] classifies single field values, [`contract`] asserts whole
//! responses, and [`Harness`] pairs a configured client with those checks.

pub mod config;
pub mod contract;
pub mod error;
pub mod harness;
pub mod validator;

pub use config::HarnessConfig;
pub use contract::ContractViolation;
pub use error::Error;
pub use harness::Harness;
