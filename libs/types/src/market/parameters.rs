//! # Market Parameters
//!
//! Risk models, monitoring triggers, liquidity SLA and fee settings shared by
//! futures and spot market configurations.
//!
//! Financial quantities that must not lose precision (fractions, factors,
//! amounts) travel as decimal strings. Model parameters of the risk models
//! travel as `f64`, matching how the risk engine consumes them.

use crate::data_source::{DataSourceDefinition, SpecBindingForCompositePrice};
use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskParameters {
    Simple(Option<SimpleModelParams>),
    LogNormal(Option<LogNormalRiskModel>),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleModelParams {
    pub factor_long: f64,
    pub factor_short: f64,
    pub max_move_up: f64,
    pub min_move_down: f64,
    pub probability_of_trading: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogNormalRiskModel {
    pub risk_aversion_parameter: f64,
    pub tau: f64,
    pub params: Option<LogNormalModelParams>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogNormalModelParams {
    pub mu: f64,
    pub r: f64,
    pub sigma: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceMonitoringParameters {
    pub triggers: Vec<PriceMonitoringTrigger>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceMonitoringTrigger {
    /// Seconds
    pub horizon: i64,
    /// Decimal string
    pub probability: String,
    /// Seconds
    pub auction_extension: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LiquidityMonitoringParameters {
    pub target_stake_parameters: Option<TargetStakeParameters>,
    /// Decimal string, empty means unset
    pub triggering_ratio: String,
    pub auction_extension: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetStakeParameters {
    pub time_window: i64,
    pub scaling_factor: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LiquiditySlaParameters {
    pub price_range: String,
    pub commitment_min_time_fraction: String,
    pub performance_hysteresis_epochs: u64,
    pub sla_competition_factor: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LiquidityFeeSettings {
    /// [`LiquidityFeeMethod`] code
    pub method: i32,
    pub fee_constant: Option<String>,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
pub enum LiquidityFeeMethod {
    Unspecified = 0,
    MarginalCost = 1,
    WeightedAverage = 2,
    Constant = 3,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LiquidationStrategy {
    /// Seconds between disposal attempts
    pub disposal_time_step: i64,
    pub disposal_fraction: String,
    pub full_disposal_size: u64,
    pub max_fraction_consumed: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SuccessorConfiguration {
    pub parent_market_id: String,
    pub insurance_pool_fraction: String,
}

/// How the mark price (or a perpetual's internal price) is composed from sources.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositePriceConfiguration {
    pub decay_weight: String,
    pub decay_power: u64,
    pub cash_amount: String,
    pub source_weights: Vec<String>,
    pub source_staleness_tolerance: Vec<String>,
    /// [`CompositePriceType`] code
    pub composite_price_type: i32,
    pub data_sources_spec: Vec<DataSourceDefinition>,
    pub data_sources_spec_binding: Vec<SpecBindingForCompositePrice>,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
pub enum CompositePriceType {
    Unspecified = 0,
    Weighted = 1,
    Median = 2,
    LastTrade = 3,
}

impl CompositePriceConfiguration {
    /// Built-in price sources (trades, book, funding) preceding any oracle sources.
    pub const BUILTIN_SOURCES: usize = 3;

    /// Total number of price sources the weights and tolerances must cover.
    pub fn source_count(&self) -> usize {
        Self::BUILTIN_SOURCES + self.data_sources_spec.len()
    }
}
