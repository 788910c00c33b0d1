//! Referral, volume discount and volume rebate program updates

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateReferralProgram {
    pub changes: Option<ReferralProgramChanges>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferralProgramChanges {
    pub benefit_tiers: Vec<BenefitTier>,
    /// Unix seconds
    pub end_of_program_timestamp: i64,
    /// Epochs
    pub window_length: u64,
    pub staking_tiers: Vec<StakingTier>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BenefitTier {
    /// Integer string
    pub minimum_running_notional_taker_volume: String,
    /// Integer string
    pub minimum_epochs: String,
    /// Decimal string
    pub referral_reward_factor: String,
    /// Decimal string
    pub referral_discount_factor: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StakingTier {
    /// Integer string
    pub minimum_staked_tokens: String,
    /// Decimal string
    pub referral_reward_multiplier: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateVolumeDiscountProgram {
    pub changes: Option<VolumeDiscountProgramChanges>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeDiscountProgramChanges {
    pub benefit_tiers: Vec<VolumeBenefitTier>,
    pub end_of_program_timestamp: i64,
    pub window_length: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeBenefitTier {
    pub minimum_running_notional_taker_volume: String,
    pub volume_discount_factor: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateVolumeRebateProgram {
    pub changes: Option<VolumeRebateProgramChanges>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeRebateProgramChanges {
    pub benefit_tiers: Vec<VolumeRebateBenefitTier>,
    pub end_of_program_timestamp: i64,
    pub window_length: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeRebateBenefitTier {
    /// Decimal string, share of total maker volume
    pub minimum_party_maker_volume_fraction: String,
    /// Decimal string
    pub additional_maker_rebate: String,
}
