//! # Validation Configuration Module
//!
//! Numeric ceilings used by the proposal rules. Defaults are the network's
//! governance limits; deployments running a network with different limits
//! override them from the config file or the environment.

use serde::{Deserialize, Serialize};

/// Limits applied while validating a proposal submission
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Free text length limits (reference, title, description)
    pub text: TextLimits,

    /// Market configuration limits
    pub market: MarketLimits,

    /// Referral / discount / rebate program and reward dispatch limits
    pub program: ProgramLimits,
}

/// Free text limits, counted in characters not bytes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextLimits {
    pub reference_max_len: usize,
    pub title_max_len: usize,
    pub description_max_len: usize,
}

impl Default for TextLimits {
    fn default() -> Self {
        Self {
            reference_max_len: 100,
            title_max_len: 100,
            description_max_len: 20_000, // Long form rationale
        }
    }
}

/// Market configuration limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketLimits {
    /// Exclusive upper bound on price decimal places
    pub max_decimal_places: u64,
    pub max_price_monitoring_triggers: usize,
    pub max_linear_slippage_factor: u64,
    /// Seconds
    pub max_disposal_time_step: i64,
    /// Epochs
    pub max_performance_hysteresis_epochs: u64,
    /// Oracle sources on top of the built-in composite price sources
    pub max_composite_data_sources: usize,
}

impl Default for MarketLimits {
    fn default() -> Self {
        Self {
            max_decimal_places: 150,
            max_price_monitoring_triggers: 5,
            max_linear_slippage_factor: 1_000_000,
            max_disposal_time_step: 3600, // 1 hour
            max_performance_hysteresis_epochs: 366,
            max_composite_data_sources: 5,
        }
    }
}

/// Program and reward dispatch limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramLimits {
    /// Epochs
    pub max_window_length: u64,
    pub max_rank_table_size: usize,
}

impl Default for ProgramLimits {
    fn default() -> Self {
        Self {
            max_window_length: 100,
            max_rank_table_size: 500,
        }
    }
}
