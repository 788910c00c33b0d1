//! # Proposal Checker Configuration
//!
//! Layered settings for the proposal checker binary.
//!
//! ## Sources
//!
//! Later sources override earlier ones:
//!
//! 1. `config/checker.toml` (or the path given on the command line)
//! 2. `config/environments/<env>.toml`, next to the base file, when an
//!    environment is selected
//! 3. `CHECKER_`-prefixed environment variables, nested with `__`
//!    (`CHECKER_VALIDATION__TEXT__TITLE_MAX_LEN=64`)
//!
//! Every section has defaults, so an empty file (or none at all when the
//! default path is used) yields the network's governance limits.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use checker_config::CheckerConfig;
//!
//! let config = CheckerConfig::load(None, Some("testnet"))?;
//! let validator = commands::ProposalValidator::with_config(config.validation.clone());
//! ```

pub mod checker_config;

pub use checker_config::{load_config, CheckerConfig, InputConfig, LoggingConfig};
