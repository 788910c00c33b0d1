//! Liquidity commitment submitted alongside a new market

use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewMarketCommitment {
    pub commitment_amount: u64,
    /// Decimal string
    pub fee: String,
    pub sells: Vec<LiquidityOrder>,
    pub buys: Vec<LiquidityOrder>,
    pub reference: String,
}

/// Pegged order shape. The side is given by the list holding the order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LiquidityOrder {
    /// [`PeggedReference`] code
    pub reference: i32,
    pub proportion: u32,
    pub offset: i64,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
pub enum PeggedReference {
    Unspecified = 0,
    Mid = 1,
    BestBid = 2,
    BestAsk = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Path segment of the order list for this side.
    pub fn orders_field(&self) -> &'static str {
        match self {
            Side::Buy => "buys",
            Side::Sell => "sells",
        }
    }
}

impl NewMarketCommitment {
    /// Orders of one side.
    pub fn orders(&self, side: Side) -> &[LiquidityOrder] {
        match side {
            Side::Buy => &self.buys,
            Side::Sell => &self.sells,
        }
    }
}
