//! Shared types used across the trip booking workspace.

pub mod types;

pub use types::OrderId;
