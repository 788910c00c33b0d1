//! # Market Proposals
//!
//! Configurations carried by the new/update market, new/update spot market
//! and market state change variants.

pub mod commitment;
pub mod instrument;
pub mod parameters;

use commitment::NewMarketCommitment;
use instrument::{InstrumentConfiguration, UpdateInstrumentConfiguration};
use num_enum::TryFromPrimitive;
use parameters::{
    CompositePriceConfiguration, LiquidationStrategy, LiquidityFeeSettings,
    LiquidityMonitoringParameters, LiquiditySlaParameters, PriceMonitoringParameters,
    RiskParameters, SuccessorConfiguration, TargetStakeParameters,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewMarket {
    pub changes: Option<NewMarketConfiguration>,
    pub liquidity_commitment: Option<NewMarketCommitment>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewMarketConfiguration {
    pub instrument: Option<InstrumentConfiguration>,
    pub decimal_places: u64,
    pub position_decimal_places: i64,
    pub metadata: Vec<String>,
    pub price_monitoring_parameters: Option<PriceMonitoringParameters>,
    pub liquidity_monitoring_parameters: Option<LiquidityMonitoringParameters>,
    pub risk_parameters: Option<RiskParameters>,
    /// Decimal string, empty means unset
    pub linear_slippage_factor: String,
    pub successor: Option<SuccessorConfiguration>,
    pub liquidation_strategy: Option<LiquidationStrategy>,
    pub sla_params: Option<LiquiditySlaParameters>,
    pub liquidity_fee_settings: Option<LiquidityFeeSettings>,
    pub mark_price_configuration: Option<CompositePriceConfiguration>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateMarket {
    pub market_id: String,
    pub changes: Option<UpdateMarketConfiguration>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateMarketConfiguration {
    pub instrument: Option<UpdateInstrumentConfiguration>,
    pub metadata: Vec<String>,
    pub price_monitoring_parameters: Option<PriceMonitoringParameters>,
    pub liquidity_monitoring_parameters: Option<LiquidityMonitoringParameters>,
    pub risk_parameters: Option<RiskParameters>,
    pub linear_slippage_factor: String,
    pub liquidation_strategy: Option<LiquidationStrategy>,
    pub sla_params: Option<LiquiditySlaParameters>,
    pub liquidity_fee_settings: Option<LiquidityFeeSettings>,
    pub mark_price_configuration: Option<CompositePriceConfiguration>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewSpotMarket {
    pub changes: Option<NewSpotMarketConfiguration>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewSpotMarketConfiguration {
    pub instrument: Option<InstrumentConfiguration>,
    pub decimal_places: u64,
    pub position_decimal_places: i64,
    pub metadata: Vec<String>,
    pub price_monitoring_parameters: Option<PriceMonitoringParameters>,
    pub target_stake_parameters: Option<TargetStakeParameters>,
    pub risk_parameters: Option<RiskParameters>,
    pub sla_params: Option<LiquiditySlaParameters>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateSpotMarket {
    pub market_id: String,
    pub changes: Option<UpdateSpotMarketConfiguration>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateSpotMarketConfiguration {
    pub metadata: Vec<String>,
    pub price_monitoring_parameters: Option<PriceMonitoringParameters>,
    pub target_stake_parameters: Option<TargetStakeParameters>,
    pub risk_parameters: Option<RiskParameters>,
    pub sla_params: Option<LiquiditySlaParameters>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateMarketState {
    pub changes: Option<UpdateMarketStateConfiguration>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateMarketStateConfiguration {
    pub market_id: String,
    /// [`MarketStateUpdateType`] code
    pub update_type: i32,
    /// Final settlement price, only meaningful when terminating
    pub price: Option<String>,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
pub enum MarketStateUpdateType {
    Unspecified = 0,
    Terminate = 1,
    Suspend = 2,
    Resume = 3,
}
