//! Asset listing and asset update proposals

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewAsset {
    pub changes: Option<AssetDetails>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetDetails {
    pub name: String,
    pub symbol: String,
    pub decimals: u64,
    /// Decimal string
    pub quantum: String,
    pub source: Option<AssetSource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetSource {
    BuiltinAsset(Option<BuiltinAsset>),
    Erc20(Option<Erc20>),
}

/// Test-network asset minted by a faucet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuiltinAsset {
    /// Integer string
    pub max_faucet_amount_mint: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Erc20 {
    pub contract_address: String,
    /// Integer string
    pub lifetime_limit: String,
    /// Integer string
    pub withdraw_threshold: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateAsset {
    pub asset_id: String,
    pub changes: Option<AssetDetailsUpdate>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetDetailsUpdate {
    pub quantum: String,
    pub source: Option<AssetSourceUpdate>,
}

/// Only bridged assets carry updatable source parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetSourceUpdate {
    Erc20(Option<Erc20Update>),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Erc20Update {
    pub lifetime_limit: String,
    pub withdraw_threshold: String,
}
