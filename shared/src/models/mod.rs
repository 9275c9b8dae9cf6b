//! Domain models for the Smart Farming Advisor

pub mod conditions;
pub mod disease;
pub mod water;

pub use conditions::*;
pub use disease::*;
pub use water::*;
