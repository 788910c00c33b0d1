//! # Proposal Checker
//!
//! Reads decoded proposal submissions from JSON files, runs them through
//! [`commands::ProposalValidator`] and reports every violation found.
//!
//! ```text
//! files / proposal_dir ──► input ──► ProposalValidator ──► report ──► stdout
//!                                        ▲
//!                       CheckerConfig.validation
//! ```

pub mod input;
pub mod report;

pub use input::{collect_files, read_proposals};
pub use report::{Outcome, Report};
