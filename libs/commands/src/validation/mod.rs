//! # Proposal Validation System
//!
//! ## Purpose
//!
//! Rule tree checking every field of a governance proposal submission and
//! collecting all violations under dotted field paths.
//!
//! ## Architecture
//!
//! ```text
//! ProposalSubmission → ProposalValidator → change dispatch → Errors
//!        ↓                    ↓                  ↓              ↓
//!   reference/rationale   root rules      per-kind rules   path → violations
//!   terms timestamps      ValidationConfig  (domain/*)      ProposalError
//! ```
//!
//! ## Paths
//!
//! Paths are dotted field names rooted at `proposal_submission`, with list
//! indices as numeric segments:
//! `proposal_submission.terms.change.new_market.changes.price_monitoring_parameters.triggers.0.horizon`.
//! Domain rules build paths relative to the change payload and are prefixed
//! once at dispatch.
//!
//! ## Limits
//!
//! Numeric ceilings (title length, decimal places, trigger counts) come from
//! [`ValidationConfig`]; defaults match the network's governance rules.

// Submodules
pub mod config;
pub mod domain;
pub mod errors;
pub mod numeric;
pub mod validator;

// Re-export main types for convenience
pub use config::{MarketLimits, ProgramLimits, TextLimits, ValidationConfig};

pub use errors::Errors;

pub use numeric::{
    cmp_uint, is_valid_duration, parse_decimal, parse_float, parse_integer, parse_uint,
    NumberError, Sign,
};

pub use validator::{check_proposal_submission, ProposalValidator};
