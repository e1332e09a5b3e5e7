//! Veracity Core
//!
//! Core types shared across veracity components.
//!
//! This crate provides:
//! - Error types and result handling
//! - The explanation result model (verdict, per-class confidence, ranked
//!   word list) in its outbound serialized shape

pub mod error;
pub mod report;

pub use error::{Error, Result};
pub use report::{Confidence, Explanation, WordWeight};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::report::{Confidence, Explanation, WordWeight};
}
