//! Shared types and rule tables for the Smart Farming Advisor
//!
//! This crate contains the domain model shared between the backend server
//! and other components of the system: condition enumerations, the disease
//! catalog, and the static water-requirement tables.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::*;
