//! Domain models for HomeValue.

pub mod assessment;
pub mod enhancement;
pub mod history;
pub mod quote;
pub mod session;
