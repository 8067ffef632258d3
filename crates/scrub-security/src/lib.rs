//! Pattern-based redaction engine
//!
//! A fixed, ordered table of detectors replaces emails, IPv4 addresses, URLs,
//! AWS access keys, JWTs, phone numbers and `key=value` secrets with
//! placeholders. An optional [`EntityDetector`] can flag extra spans after the
//! built-in patterns have run.

pub mod entities;
pub mod patterns;
pub mod redactor;

pub use entities::{EntityDetector, NoEntities, TermDetector};
pub use patterns::{Rule, rules};
pub use redactor::Redactor;
