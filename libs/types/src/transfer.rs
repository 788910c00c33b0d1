//! # Governance Transfers
//!
//! Transfers initiated by governance out of protocol-owned accounts, and the
//! cancellation of recurring ones.

use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum AccountType {
    Unspecified = 0,
    Insurance = 1,
    Settlement = 2,
    Margin = 3,
    General = 4,
    FeesInfrastructure = 5,
    FeesLiquidity = 6,
    FeesMaker = 7,
    Bond = 9,
    External = 10,
    GlobalInsurance = 11,
    GlobalReward = 12,
    PendingTransfers = 13,
    RewardMakerPaidFees = 14,
    RewardMakerReceivedFees = 15,
    RewardLpReceivedFees = 16,
    RewardMarketProposers = 17,
    Holding = 18,
    NetworkTreasury = 21,
    VestingRewards = 22,
    VestedRewards = 23,
    RewardAveragePosition = 25,
    RewardRelativeReturn = 26,
    RewardReturnVolatility = 27,
    RewardValidatorRanking = 28,
    BuyBackFees = 32,
}

impl AccountType {
    /// Reward pools distributed according to a dispatch metric.
    pub const METRIC_REWARDS: [AccountType; 8] = [
        AccountType::RewardMakerPaidFees,
        AccountType::RewardMakerReceivedFees,
        AccountType::RewardLpReceivedFees,
        AccountType::RewardMarketProposers,
        AccountType::RewardAveragePosition,
        AccountType::RewardRelativeReturn,
        AccountType::RewardReturnVolatility,
        AccountType::RewardValidatorRanking,
    ];

    pub fn is_metric_reward(&self) -> bool {
        Self::METRIC_REWARDS.contains(self)
    }

    /// Dispatch metric a metric-based reward pool is paid out by.
    pub fn dispatch_metric(&self) -> Option<DispatchMetric> {
        match self {
            AccountType::RewardMakerPaidFees => Some(DispatchMetric::MakerFeesPaid),
            AccountType::RewardMakerReceivedFees => Some(DispatchMetric::MakerFeesReceived),
            AccountType::RewardLpReceivedFees => Some(DispatchMetric::LpFeesReceived),
            AccountType::RewardMarketProposers => Some(DispatchMetric::MarketValue),
            AccountType::RewardAveragePosition => Some(DispatchMetric::AveragePosition),
            AccountType::RewardRelativeReturn => Some(DispatchMetric::RelativeReturn),
            AccountType::RewardReturnVolatility => Some(DispatchMetric::ReturnVolatility),
            AccountType::RewardValidatorRanking => Some(DispatchMetric::ValidatorRanking),
            _ => None,
        }
    }

    /// Canonical wire name, as rendered in diagnostics.
    pub fn wire_name(&self) -> &'static str {
        match self {
            AccountType::Unspecified => "ACCOUNT_TYPE_UNSPECIFIED",
            AccountType::Insurance => "ACCOUNT_TYPE_INSURANCE",
            AccountType::Settlement => "ACCOUNT_TYPE_SETTLEMENT",
            AccountType::Margin => "ACCOUNT_TYPE_MARGIN",
            AccountType::General => "ACCOUNT_TYPE_GENERAL",
            AccountType::FeesInfrastructure => "ACCOUNT_TYPE_FEES_INFRASTRUCTURE",
            AccountType::FeesLiquidity => "ACCOUNT_TYPE_FEES_LIQUIDITY",
            AccountType::FeesMaker => "ACCOUNT_TYPE_FEES_MAKER",
            AccountType::Bond => "ACCOUNT_TYPE_BOND",
            AccountType::External => "ACCOUNT_TYPE_EXTERNAL",
            AccountType::GlobalInsurance => "ACCOUNT_TYPE_GLOBAL_INSURANCE",
            AccountType::GlobalReward => "ACCOUNT_TYPE_GLOBAL_REWARD",
            AccountType::PendingTransfers => "ACCOUNT_TYPE_PENDING_TRANSFERS",
            AccountType::RewardMakerPaidFees => "ACCOUNT_TYPE_REWARD_MAKER_PAID_FEES",
            AccountType::RewardMakerReceivedFees => "ACCOUNT_TYPE_REWARD_MAKER_RECEIVED_FEES",
            AccountType::RewardLpReceivedFees => "ACCOUNT_TYPE_REWARD_LP_RECEIVED_FEES",
            AccountType::RewardMarketProposers => "ACCOUNT_TYPE_REWARD_MARKET_PROPOSERS",
            AccountType::Holding => "ACCOUNT_TYPE_HOLDING",
            AccountType::NetworkTreasury => "ACCOUNT_TYPE_NETWORK_TREASURY",
            AccountType::VestingRewards => "ACCOUNT_TYPE_VESTING_REWARDS",
            AccountType::VestedRewards => "ACCOUNT_TYPE_VESTED_REWARDS",
            AccountType::RewardAveragePosition => "ACCOUNT_TYPE_REWARD_AVERAGE_POSITION",
            AccountType::RewardRelativeReturn => "ACCOUNT_TYPE_REWARD_RELATIVE_RETURN",
            AccountType::RewardReturnVolatility => "ACCOUNT_TYPE_REWARD_RETURN_VOLATILITY",
            AccountType::RewardValidatorRanking => "ACCOUNT_TYPE_REWARD_VALIDATOR_RANKING",
            AccountType::BuyBackFees => "ACCOUNT_TYPE_BUY_BACK_FEES",
        }
    }
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
pub enum GovernanceTransferType {
    Unspecified = 0,
    AllOrNothing = 1,
    BestEffort = 2,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewTransfer {
    pub changes: Option<NewTransferConfiguration>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewTransferConfiguration {
    /// [`AccountType`] code
    pub source_type: i32,
    /// Market id for per-market accounts, empty for global accounts
    pub source: String,
    /// [`GovernanceTransferType`] code
    pub transfer_type: i32,
    /// Integer string
    pub amount: String,
    pub asset: String,
    /// Decimal string
    pub fraction_of_balance: String,
    /// [`AccountType`] code
    pub destination_type: i32,
    pub destination: String,
    pub kind: Option<TransferKind>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferKind {
    OneOff(OneOffTransfer),
    Recurring(RecurringTransfer),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OneOffTransfer {
    /// Unix seconds, zero means at enactment
    pub deliver_on: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecurringTransfer {
    pub start_epoch: u64,
    pub end_epoch: Option<u64>,
    pub dispatch_strategy: Option<DispatchStrategy>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchStrategy {
    pub asset_for_metric: String,
    /// [`DispatchMetric`] code
    pub metric: i32,
    pub markets: Vec<String>,
    /// [`EntityScope`] code
    pub entity_scope: i32,
    /// [`IndividualScope`] code
    pub individual_scope: i32,
    pub team_scope: Vec<String>,
    /// Decimal string
    pub n_top_performers: String,
    /// Integer string
    pub staking_requirement: String,
    /// Integer string
    pub notional_time_weighted_average_position_requirement: String,
    pub window_length: u64,
    pub lock_period: u64,
    /// [`DistributionStrategy`] code
    pub distribution_strategy: i32,
    pub rank_table: Vec<Rank>,
    pub cap_reward_fee_multiple: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rank {
    pub start_rank: u32,
    pub share_ratio: u32,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
pub enum DispatchMetric {
    Unspecified = 0,
    MakerFeesPaid = 1,
    MakerFeesReceived = 2,
    LpFeesReceived = 3,
    MarketValue = 4,
    AveragePosition = 5,
    RelativeReturn = 6,
    ReturnVolatility = 7,
    ValidatorRanking = 8,
}

impl DispatchMetric {
    pub fn wire_name(&self) -> &'static str {
        match self {
            DispatchMetric::Unspecified => "DISPATCH_METRIC_UNSPECIFIED",
            DispatchMetric::MakerFeesPaid => "DISPATCH_METRIC_MAKER_FEES_PAID",
            DispatchMetric::MakerFeesReceived => "DISPATCH_METRIC_MAKER_FEES_RECEIVED",
            DispatchMetric::LpFeesReceived => "DISPATCH_METRIC_LP_FEES_RECEIVED",
            DispatchMetric::MarketValue => "DISPATCH_METRIC_MARKET_VALUE",
            DispatchMetric::AveragePosition => "DISPATCH_METRIC_AVERAGE_POSITION",
            DispatchMetric::RelativeReturn => "DISPATCH_METRIC_RELATIVE_RETURN",
            DispatchMetric::ReturnVolatility => "DISPATCH_METRIC_RETURN_VOLATILITY",
            DispatchMetric::ValidatorRanking => "DISPATCH_METRIC_VALIDATOR_RANKING",
        }
    }
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
pub enum EntityScope {
    Unspecified = 0,
    Individuals = 1,
    Teams = 2,
}

impl EntityScope {
    pub fn wire_name(&self) -> &'static str {
        match self {
            EntityScope::Unspecified => "ENTITY_SCOPE_UNSPECIFIED",
            EntityScope::Individuals => "ENTITY_SCOPE_INDIVIDUALS",
            EntityScope::Teams => "ENTITY_SCOPE_TEAMS",
        }
    }
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
pub enum IndividualScope {
    Unspecified = 0,
    All = 1,
    InTeam = 2,
    NotInTeam = 3,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
pub enum DistributionStrategy {
    Unspecified = 0,
    ProRata = 1,
    Rank = 2,
}

impl DistributionStrategy {
    pub fn wire_name(&self) -> &'static str {
        match self {
            DistributionStrategy::Unspecified => "DISTRIBUTION_STRATEGY_UNSPECIFIED",
            DistributionStrategy::ProRata => "DISTRIBUTION_STRATEGY_PRO_RATA",
            DistributionStrategy::Rank => "DISTRIBUTION_STRATEGY_RANK",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CancelTransfer {
    pub changes: Option<CancelTransferConfiguration>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CancelTransferConfiguration {
    pub transfer_id: String,
}
