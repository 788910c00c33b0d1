//! # Proposal Submission
//!
//! Root of the decoded governance command.
//!
//! ```text
//! ProposalSubmission
//!   ├─ reference
//!   ├─ rationale { title, description }
//!   └─ terms { closing, enactment, validation timestamps }
//!        └─ change: one of ProposalChange
//! ```

use crate::asset::{NewAsset, UpdateAsset};
use crate::automated_purchase::NewProtocolAutomatedPurchase;
use crate::market::{NewMarket, NewSpotMarket, UpdateMarket, UpdateMarketState, UpdateSpotMarket};
use crate::program::{UpdateReferralProgram, UpdateVolumeDiscountProgram, UpdateVolumeRebateProgram};
use crate::transfer::{CancelTransfer, NewTransfer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProposalSubmission {
    pub reference: String,
    pub terms: Option<ProposalTerms>,
    pub rationale: Option<ProposalRationale>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProposalRationale {
    pub description: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProposalTerms {
    /// Unix seconds
    pub closing_timestamp: i64,
    /// Unix seconds
    pub enactment_timestamp: i64,
    /// Unix seconds, zero when no validation phase
    pub validation_timestamp: i64,
    pub change: Option<ProposalChange>,
}

/// The single populated alternative of `terms.change`.
///
/// Every variant carries an optional payload: a discriminant set on the wire
/// with no body decodes to `Some(variant(None))`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalChange {
    NewMarket(Option<NewMarket>),
    UpdateMarket(Option<UpdateMarket>),
    NewSpotMarket(Option<NewSpotMarket>),
    UpdateSpotMarket(Option<UpdateSpotMarket>),
    UpdateNetworkParameter(Option<UpdateNetworkParameter>),
    NewAsset(Option<NewAsset>),
    UpdateAsset(Option<UpdateAsset>),
    NewFreeform(Option<NewFreeform>),
    NewTransfer(Option<NewTransfer>),
    CancelTransfer(Option<CancelTransfer>),
    UpdateMarketState(Option<UpdateMarketState>),
    UpdateReferralProgram(Option<UpdateReferralProgram>),
    UpdateVolumeDiscountProgram(Option<UpdateVolumeDiscountProgram>),
    UpdateVolumeRebateProgram(Option<UpdateVolumeRebateProgram>),
    #[serde(rename = "protocol_automated_purchase")]
    NewProtocolAutomatedPurchase(Option<NewProtocolAutomatedPurchase>),
    /// Discriminant not understood by the decoder.
    Unsupported,
}

impl ProposalChange {
    /// Wire name of the variant, used as its path segment.
    pub fn name(&self) -> &'static str {
        match self {
            ProposalChange::NewMarket(_) => "new_market",
            ProposalChange::UpdateMarket(_) => "update_market",
            ProposalChange::NewSpotMarket(_) => "new_spot_market",
            ProposalChange::UpdateSpotMarket(_) => "update_spot_market",
            ProposalChange::UpdateNetworkParameter(_) => "update_network_parameter",
            ProposalChange::NewAsset(_) => "new_asset",
            ProposalChange::UpdateAsset(_) => "update_asset",
            ProposalChange::NewFreeform(_) => "new_freeform",
            ProposalChange::NewTransfer(_) => "new_transfer",
            ProposalChange::CancelTransfer(_) => "cancel_transfer",
            ProposalChange::UpdateMarketState(_) => "update_market_state",
            ProposalChange::UpdateReferralProgram(_) => "update_referral_program",
            ProposalChange::UpdateVolumeDiscountProgram(_) => "update_volume_discount_program",
            ProposalChange::UpdateVolumeRebateProgram(_) => "update_volume_rebate_program",
            ProposalChange::NewProtocolAutomatedPurchase(_) => "protocol_automated_purchase",
            ProposalChange::Unsupported => "unsupported",
        }
    }

    /// Whether the rationale must carry a title for this kind of change.
    ///
    /// Freeform text proposals and transfer cancellations have no economic
    /// effect of their own and may be submitted untitled.
    pub fn requires_title(&self) -> bool {
        match self {
            ProposalChange::NewFreeform(_)
            | ProposalChange::CancelTransfer(_)
            | ProposalChange::Unsupported => false,
            ProposalChange::NewMarket(_)
            | ProposalChange::UpdateMarket(_)
            | ProposalChange::NewSpotMarket(_)
            | ProposalChange::UpdateSpotMarket(_)
            | ProposalChange::UpdateNetworkParameter(_)
            | ProposalChange::NewAsset(_)
            | ProposalChange::UpdateAsset(_)
            | ProposalChange::NewTransfer(_)
            | ProposalChange::UpdateMarketState(_)
            | ProposalChange::UpdateReferralProgram(_)
            | ProposalChange::UpdateVolumeDiscountProgram(_)
            | ProposalChange::UpdateVolumeRebateProgram(_)
            | ProposalChange::NewProtocolAutomatedPurchase(_) => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateNetworkParameter {
    pub changes: Option<NetworkParameter>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkParameter {
    pub key: String,
    pub value: String,
}

/// Text-only proposal; its content lives in the rationale.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewFreeform {}
