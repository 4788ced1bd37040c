//! Redemptions

pub mod data;
pub mod errors;
pub mod records;
mod repositories;
pub mod service;

pub use errors::RedemptionsServiceError;
pub use service::*;
