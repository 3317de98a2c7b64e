#![no_std]
//! # Shared Election Library
//!
//! Reusable types, errors, constants and validation helpers for the election
//! contracts.
//!
//! ## Modules
//!
//! - `errors` - `ElectionError`, the error codes of every entry point
//! - `types` - `ElectionPhase`, `Participant`, `Proposal`
//! - `constants` - Sentinels and ledger TTL configuration
//! - `validation` - Phase, description and index checks
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::errors::ElectionError;
//! use shared::types::ElectionPhase;
//! use shared::validation::validate_phase;
//! ```

pub mod constants;
pub mod errors;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use errors::ElectionError;
pub use types::{ElectionPhase, Participant, Proposal};
pub use validation::{
    safe_increment, validate_description, validate_phase, validate_proposal_index,
};
