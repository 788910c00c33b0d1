//! Protocol automated purchase: periodic auctions buying back an asset with protocol funds

use crate::data_source::{DataSourceDefinition, SpecBindingForCompositePrice};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewProtocolAutomatedPurchase {
    pub changes: Option<NewProtocolAutomatedPurchaseChanges>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewProtocolAutomatedPurchaseChanges {
    /// Asset being sold
    pub from: String,
    /// [`AccountType`](crate::transfer::AccountType) code
    pub from_account_type: i32,
    /// [`AccountType`](crate::transfer::AccountType) code
    pub to_account_type: i32,
    pub market_id: String,
    pub price_oracle: Option<DataSourceDefinition>,
    pub price_oracle_spec_binding: Option<SpecBindingForCompositePrice>,
    /// Float string
    pub oracle_offset_factor: String,
    pub auction_schedule: Option<DataSourceDefinition>,
    pub auction_volume_snapshot_schedule: Option<DataSourceDefinition>,
    /// Duration string such as `"1h30m"`
    pub auction_duration: String,
    /// Integer string
    pub minimum_auction_size: String,
    /// Integer string
    pub maximum_auction_size: String,
    /// Unix seconds, zero means never
    pub expiry_timestamp: i64,
}
