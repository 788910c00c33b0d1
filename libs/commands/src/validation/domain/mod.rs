//! # Per-kind proposal rules
//!
//! One module per family of proposal change. Every rule function takes the
//! (possibly absent) payload and returns an [`Errors`] whose paths start at
//! the change variant name (`new_market.changes.decimal_places`); the
//! dispatcher prefixes them with `proposal_submission.terms.change.`.

mod asset;
mod automated_purchase;
mod composite_price;
mod data_source;
mod dispatch_strategy;
mod instrument;
mod liquidity;
mod market;
mod market_state;
mod monitoring;
mod network_parameter;
mod program;
mod risk;
mod sla;
mod spot_market;
mod transfer;

use super::config::ValidationConfig;
use super::errors::Errors;
use crate::error::Violation;
use num_enum::TryFromPrimitive;
use types::{ProposalChange, ProposalTerms};

/// Path prefix shared by every change payload
pub const CHANGE_PREFIX: &str = "proposal_submission.terms.change.";

const CHANGE_PATH: &str = "proposal_submission.terms.change";

/// Product family a market rule is evaluated for.
///
/// Spot markets share parameter shapes with futures but accept narrower
/// ranges for some of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MarketFamily {
    Futures,
    Spot,
}

/// Dispatch the populated change to its rules.
pub fn check_change(terms: &ProposalTerms, config: &ValidationConfig) -> Errors {
    let Some(change) = terms.change.as_ref() else {
        return Errors::new().final_add_for_property(CHANGE_PATH, Violation::IsRequired);
    };

    let errs = match change {
        ProposalChange::NewMarket(payload) => market::check_new_market(payload.as_ref(), config),
        ProposalChange::UpdateMarket(payload) => {
            market::check_update_market(payload.as_ref(), config)
        }
        ProposalChange::NewSpotMarket(payload) => {
            spot_market::check_new_spot_market(payload.as_ref(), config)
        }
        ProposalChange::UpdateSpotMarket(payload) => {
            spot_market::check_update_spot_market(payload.as_ref(), config)
        }
        ProposalChange::UpdateNetworkParameter(payload) => {
            network_parameter::check_update_network_parameter(payload.as_ref())
        }
        ProposalChange::NewAsset(payload) => asset::check_new_asset(payload.as_ref()),
        ProposalChange::UpdateAsset(payload) => asset::check_update_asset(payload.as_ref()),
        ProposalChange::NewFreeform(payload) => match payload {
            Some(_) => Errors::new(),
            None => Errors::new().final_add_for_property("new_freeform", Violation::IsRequired),
        },
        ProposalChange::NewTransfer(payload) => {
            transfer::check_new_transfer(payload.as_ref(), config)
        }
        ProposalChange::CancelTransfer(payload) => {
            transfer::check_cancel_transfer(payload.as_ref())
        }
        ProposalChange::UpdateMarketState(payload) => {
            market_state::check_update_market_state(payload.as_ref())
        }
        ProposalChange::UpdateReferralProgram(payload) => {
            program::check_update_referral_program(payload.as_ref(), terms, config)
        }
        ProposalChange::UpdateVolumeDiscountProgram(payload) => {
            program::check_update_volume_discount_program(payload.as_ref(), terms, config)
        }
        ProposalChange::UpdateVolumeRebateProgram(payload) => {
            program::check_update_volume_rebate_program(payload.as_ref(), terms, config)
        }
        ProposalChange::NewProtocolAutomatedPurchase(payload) => {
            automated_purchase::check_automated_purchase(payload.as_ref())
        }
        ProposalChange::Unsupported => {
            return Errors::new().final_add_for_property(CHANGE_PATH, Violation::IsNotValid);
        }
    };

    errs.add_prefix(CHANGE_PREFIX)
}

/// Required enum code: zero is unset, unknown codes are invalid.
pub(crate) fn check_enum<T>(errs: &mut Errors, path: &str, code: i32) -> Option<T>
where
    T: TryFromPrimitive<Primitive = i32>,
{
    if code == 0 {
        errs.add(path, Violation::IsRequired);
        return None;
    }
    match T::try_from_primitive(code) {
        Ok(value) => Some(value),
        Err(_) => {
            errs.add(path, Violation::IsNotValid);
            None
        }
    }
}

/// Required free text field.
pub(crate) fn require_text(errs: &mut Errors, path: &str, value: &str) {
    if value.is_empty() {
        errs.add(path, Violation::IsRequired);
    }
}

/// Required entity id field: empty is missing, malformed is invalid.
pub(crate) fn check_id(errs: &mut Errors, path: &str, value: &str) {
    if value.is_empty() {
        errs.add(path, Violation::IsRequired);
    } else if !types::is_valid_id(value) {
        errs.add(path, Violation::ShouldBeAValidId);
    }
}
