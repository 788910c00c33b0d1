//! Instruments and the products they trade

use crate::data_source::DataSourceDefinition;
use crate::market::parameters::CompositePriceConfiguration;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InstrumentConfiguration {
    pub name: String,
    pub code: String,
    pub product: Option<Product>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Product {
    Future(Option<FutureProduct>),
    Perpetual(Option<PerpetualProduct>),
    Spot(Option<SpotProduct>),
}

impl Product {
    /// Path segment of the populated product.
    pub fn name(&self) -> &'static str {
        match self {
            Product::Future(_) => "future",
            Product::Perpetual(_) => "perps",
            Product::Spot(_) => "spot",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FutureProduct {
    pub settlement_asset: String,
    pub quote_name: String,
    /// RFC3339 timestamp
    pub maturity: String,
    pub data_source_spec_for_settlement_data: Option<DataSourceDefinition>,
    pub data_source_spec_for_trading_termination: Option<DataSourceDefinition>,
    pub data_source_spec_binding: Option<DataSourceSpecToFutureBinding>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSourceSpecToFutureBinding {
    pub settlement_data_property: String,
    pub trading_termination_property: String,
}

/// Perpetual futures. On market updates `settlement_asset` is not changeable and is ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PerpetualProduct {
    pub settlement_asset: String,
    pub quote_name: String,
    pub margin_funding_factor: String,
    pub interest_rate: String,
    pub clamp_lower_bound: String,
    pub clamp_upper_bound: String,
    pub funding_rate_scaling_factor: Option<String>,
    pub funding_rate_lower_bound: Option<String>,
    pub funding_rate_upper_bound: Option<String>,
    pub data_source_spec_for_settlement_schedule: Option<DataSourceDefinition>,
    pub data_source_spec_for_settlement_data: Option<DataSourceDefinition>,
    pub data_source_spec_binding: Option<DataSourceSpecToPerpetualBinding>,
    pub internal_composite_price_configuration: Option<CompositePriceConfiguration>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSourceSpecToPerpetualBinding {
    pub settlement_data_property: String,
    pub settlement_schedule_property: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpotProduct {
    pub base_asset: String,
    pub quote_asset: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateInstrumentConfiguration {
    pub code: String,
    pub name: String,
    pub product: Option<UpdateProduct>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateProduct {
    Future(Option<UpdateFutureProduct>),
    Perpetual(Option<PerpetualProduct>),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateFutureProduct {
    pub quote_name: String,
    pub data_source_spec_for_settlement_data: Option<DataSourceDefinition>,
    pub data_source_spec_for_trading_termination: Option<DataSourceDefinition>,
    pub data_source_spec_binding: Option<DataSourceSpecToFutureBinding>,
}
