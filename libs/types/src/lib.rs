//! # Proposal Types
//!
//! Decoded, language-native data model of a governance proposal submission.
//!
//! ## Design
//!
//! - **Decoded, not encoded**: the wire schema is handled upstream; these
//!   structs are what a decoder hands over.
//! - **Oneofs as sum types**: every mutually exclusive group is an enum, so
//!   consumers match exhaustively. A populated discriminant with an empty
//!   body is `Some(Variant(None))`, absence is `None`.
//! - **Raw enum codes**: enumerated fields keep their `i32` wire codes and
//!   convert through `num_enum::TryFromPrimitive`, so unknown codes survive
//!   decoding and can be reported instead of rejected by the decoder.
//! - **Decimal strings**: financial quantities stay strings until validated.
//!
//! ## Layout
//!
//! ```text
//! proposal            ProposalSubmission, ProposalTerms, ProposalChange
//!   ├─ market         new/update market, spot market, market state
//!   │    ├─ instrument       products and oracle bindings
//!   │    ├─ parameters       risk, monitoring, SLA, fees, composite price
//!   │    └─ commitment       liquidity commitment orders
//!   ├─ data_source    oracle and internal time sources
//!   ├─ asset          new/update asset
//!   ├─ transfer       governance transfers, account types
//!   ├─ program        referral / volume discount / volume rebate
//!   └─ automated_purchase
//! ```

pub mod asset;
pub mod automated_purchase;
pub mod common;
pub mod data_source;
pub mod market;
pub mod program;
pub mod proposal;
pub mod transfer;

pub use common::identifiers::{is_valid_ethereum_address, is_valid_id, is_valid_public_key};
pub use proposal::{
    NetworkParameter, NewFreeform, ProposalChange, ProposalRationale, ProposalSubmission,
    ProposalTerms, UpdateNetworkParameter,
};
