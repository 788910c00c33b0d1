//! # Proposal Commands
//!
//! Validation of governance proposal submissions before they reach the
//! ledger.
//!
//! ## Architecture Role
//!
//! ```text
//! decoded ProposalSubmission
//!        │
//!        ▼
//! [ProposalValidator] ── root rules (reference, rationale, timestamps)
//!        │
//!        ▼
//! change dispatch ── one rule tree per proposal kind
//!        │
//!        ▼
//! Errors (path → violations) ── empty means accepted
//! ```
//!
//! Every rule that can run does run: a submission is never rejected on its
//! first problem, so a proposer gets the complete list in one round trip.
//! Rules for a sub-object stop early only when the sub-object itself is
//! missing and nothing below it could be evaluated.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use commands::check_proposal_submission;
//!
//! match check_proposal_submission(Some(&submission)) {
//!     Ok(()) => submit(submission),
//!     Err(err) => eprintln!("rejected: {err}"),
//! }
//! ```

pub mod error;
pub mod validation;

pub use error::{ProposalError, ProposalResult, Violation};
pub use validation::{
    check_proposal_submission, Errors, ProposalValidator, ValidationConfig,
};
