//! Core domain models for scrub
//!
//! This crate contains:
//! - Categories of sensitive data and their placeholders
//! - Redaction results, per-category counts and the risk score
//! - Input limits enforced by the outer layers

pub mod category;
pub mod error;
pub mod limits;
pub mod report;

pub use category::Category;
pub use error::{Error, Result};
pub use limits::Limits;
pub use report::{EntitySpan, RedactionCounts, RedactionResult, RiskScore};
