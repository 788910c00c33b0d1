//! Common Test Utilities for Proposal Validation
//!
//! Builders for submissions that pass every rule. Tests take a baseline,
//! break one field and assert on the resulting paths.

#![allow(dead_code)]

use commands::validation::domain::CHANGE_PREFIX;
use types::asset::{AssetDetails, AssetSource, Erc20, NewAsset};
use types::automated_purchase::{NewProtocolAutomatedPurchase, NewProtocolAutomatedPurchaseChanges};
use types::data_source::{
    Condition, ConditionOperator, DataSourceDefinition, Filter, InternalTimeTrigger, PropertyKey,
    PropertyKeyType, Signer, SpecBindingForCompositePrice, BUILTIN_TIMESTAMP_PROPERTY,
};
use types::market::commitment::{LiquidityOrder, NewMarketCommitment, PeggedReference};
use types::market::instrument::{
    DataSourceSpecToFutureBinding, FutureProduct, InstrumentConfiguration, Product, SpotProduct,
};
use types::market::parameters::{
    CompositePriceConfiguration, CompositePriceType, LiquidationStrategy, LiquidityFeeMethod,
    LiquidityFeeSettings, LiquidityMonitoringParameters, LiquiditySlaParameters,
    LogNormalModelParams, LogNormalRiskModel, PriceMonitoringParameters, PriceMonitoringTrigger,
    RiskParameters, TargetStakeParameters,
};
use types::market::{NewMarket, NewMarketConfiguration, NewSpotMarket, NewSpotMarketConfiguration};
use types::program::{
    BenefitTier, ReferralProgramChanges, StakingTier, UpdateReferralProgram,
};
use types::transfer::{
    AccountType, DispatchMetric, DispatchStrategy, DistributionStrategy, EntityScope,
    GovernanceTransferType, IndividualScope, NewTransfer, NewTransferConfiguration,
    RecurringTransfer, TransferKind,
};
use types::{ProposalChange, ProposalRationale, ProposalSubmission, ProposalTerms};

pub const CLOSING: i64 = 1_700_000_000;
pub const ENACTMENT: i64 = CLOSING + 86_400;

pub const MARKET_ID: &str = "4e3b7a9c1f2d5e6a8b0c3d4e5f6a7b8c9d0e1f2a3b4c5d6e7f8a9b0c1d2e3f4a";
pub const ASSET_ID: &str = "b4f2726571fbe8e33b442dc92ed2d7f0d810e21835b7371a7915a365f07ccd9b";
pub const PARTY_KEY: &str = "7c3b8a0c1a7e3d9f5b2e4a6c8d0f1e3a5c7b9d1f3e5a7c9b1d3f5e7a9c1b3d5e";
pub const ORACLE_PROPERTY: &str = "prices.BTC.value";

/// Full path of a field inside the change payload
pub fn change_path(relative: &str) -> String {
    format!("{CHANGE_PREFIX}{relative}")
}

/// Wrap a change in valid terms and rationale. Asset listings get a
/// validation phase ending an hour before close.
pub fn create_submission(change: ProposalChange) -> ProposalSubmission {
    let validation_timestamp = match change {
        ProposalChange::NewAsset(_) => CLOSING - 3_600,
        _ => 0,
    };
    ProposalSubmission {
        reference: "governance-test".to_string(),
        terms: Some(ProposalTerms {
            closing_timestamp: CLOSING,
            enactment_timestamp: ENACTMENT,
            validation_timestamp,
            change: Some(change),
        }),
        rationale: Some(ProposalRationale {
            description: "Lists a new market for the community to trade".to_string(),
            title: "New BTC market".to_string(),
        }),
    }
}

/// Oracle publishing a single integer price property
pub fn create_oracle_source() -> DataSourceDefinition {
    DataSourceDefinition::external_oracle(
        vec![Signer::PubKey(PARTY_KEY.to_string())],
        vec![Filter {
            key: Some(PropertyKey {
                name: ORACLE_PROPERTY.to_string(),
                r#type: PropertyKeyType::Integer as i32,
                number_decimal_places: Some(5),
            }),
            conditions: Vec::new(),
        }],
    )
}

pub fn create_time_trigger_source() -> DataSourceDefinition {
    DataSourceDefinition::internal_time_trigger(vec![InternalTimeTrigger {
        initial: Some(ENACTMENT),
        every: 3600,
    }])
}

pub fn create_future_product() -> FutureProduct {
    FutureProduct {
        settlement_asset: ASSET_ID.to_string(),
        quote_name: "USD".to_string(),
        maturity: "2026-12-31T23:59:59Z".to_string(),
        data_source_spec_for_settlement_data: Some(create_oracle_source()),
        data_source_spec_for_trading_termination: Some(DataSourceDefinition::internal_time(
            vec![Condition {
                operator: ConditionOperator::GreaterThanOrEqual as i32,
                value: "1798761599".to_string(),
            }],
        )),
        data_source_spec_binding: Some(DataSourceSpecToFutureBinding {
            settlement_data_property: ORACLE_PROPERTY.to_string(),
            trading_termination_property: BUILTIN_TIMESTAMP_PROPERTY.to_string(),
        }),
    }
}

pub fn create_price_monitoring(probability: &str) -> PriceMonitoringParameters {
    PriceMonitoringParameters {
        triggers: vec![PriceMonitoringTrigger {
            horizon: 60,
            probability: probability.to_string(),
            auction_extension: 30,
        }],
    }
}

pub fn create_target_stake() -> TargetStakeParameters {
    TargetStakeParameters {
        time_window: 3600,
        scaling_factor: 10.0,
    }
}

pub fn create_log_normal(tau: f64, sigma: f64) -> RiskParameters {
    RiskParameters::LogNormal(Some(LogNormalRiskModel {
        risk_aversion_parameter: 0.01,
        tau,
        params: Some(LogNormalModelParams {
            mu: 0.0,
            r: 0.016,
            sigma,
        }),
    }))
}

pub fn create_sla() -> LiquiditySlaParameters {
    LiquiditySlaParameters {
        price_range: "0.1".to_string(),
        commitment_min_time_fraction: "0.5".to_string(),
        performance_hysteresis_epochs: 1,
        sla_competition_factor: "0.5".to_string(),
    }
}

/// Median mark price over the built-in sources
pub fn create_mark_price() -> CompositePriceConfiguration {
    CompositePriceConfiguration {
        decay_weight: "0.5".to_string(),
        decay_power: 1,
        cash_amount: "100".to_string(),
        source_weights: Vec::new(),
        source_staleness_tolerance: vec!["10s".to_string(); 3],
        composite_price_type: CompositePriceType::Median as i32,
        data_sources_spec: Vec::new(),
        data_sources_spec_binding: Vec::new(),
    }
}

pub fn create_commitment() -> NewMarketCommitment {
    NewMarketCommitment {
        commitment_amount: 1000,
        fee: "0.01".to_string(),
        buys: vec![LiquidityOrder {
            reference: PeggedReference::BestBid as i32,
            proportion: 10,
            offset: -1,
        }],
        sells: vec![LiquidityOrder {
            reference: PeggedReference::BestAsk as i32,
            proportion: 10,
            offset: 1,
        }],
        reference: "lp-commitment".to_string(),
    }
}

pub fn create_new_market_configuration() -> NewMarketConfiguration {
    NewMarketConfiguration {
        instrument: Some(InstrumentConfiguration {
            name: "BTC/USD December 2026".to_string(),
            code: "BTCUSD.DEC26".to_string(),
            product: Some(Product::Future(Some(create_future_product()))),
        }),
        decimal_places: 5,
        position_decimal_places: 2,
        metadata: vec!["base:BTC".to_string(), "quote:USD".to_string()],
        price_monitoring_parameters: Some(create_price_monitoring("0.95")),
        liquidity_monitoring_parameters: Some(LiquidityMonitoringParameters {
            target_stake_parameters: Some(create_target_stake()),
            triggering_ratio: "0.7".to_string(),
            auction_extension: 1,
        }),
        risk_parameters: Some(create_log_normal(0.0001140771161, 0.8)),
        linear_slippage_factor: "0.001".to_string(),
        successor: None,
        liquidation_strategy: Some(LiquidationStrategy {
            disposal_time_step: 10,
            disposal_fraction: "0.1".to_string(),
            full_disposal_size: 1000,
            max_fraction_consumed: "0.5".to_string(),
        }),
        sla_params: Some(create_sla()),
        liquidity_fee_settings: Some(LiquidityFeeSettings {
            method: LiquidityFeeMethod::MarginalCost as i32,
            fee_constant: None,
        }),
        mark_price_configuration: Some(create_mark_price()),
    }
}

pub fn create_new_market() -> NewMarket {
    NewMarket {
        changes: Some(create_new_market_configuration()),
        liquidity_commitment: Some(create_commitment()),
    }
}

pub fn create_new_spot_market_configuration() -> NewSpotMarketConfiguration {
    NewSpotMarketConfiguration {
        instrument: Some(InstrumentConfiguration {
            name: "BTC/USDT spot".to_string(),
            code: "BTCUSDT".to_string(),
            product: Some(Product::Spot(Some(SpotProduct {
                base_asset: ASSET_ID.to_string(),
                quote_asset: MARKET_ID.to_string(),
                name: "BTC/USDT".to_string(),
            }))),
        }),
        decimal_places: 2,
        position_decimal_places: -2,
        metadata: Vec::new(),
        price_monitoring_parameters: Some(create_price_monitoring("0.99")),
        target_stake_parameters: Some(create_target_stake()),
        risk_parameters: Some(create_log_normal(0.0001, 1.0)),
        sla_params: Some(create_sla()),
    }
}

pub fn create_new_spot_market() -> NewSpotMarket {
    NewSpotMarket {
        changes: Some(create_new_spot_market_configuration()),
    }
}

pub fn create_new_asset() -> NewAsset {
    NewAsset {
        changes: Some(AssetDetails {
            name: "Tether USD".to_string(),
            symbol: "USDT".to_string(),
            decimals: 6,
            quantum: "1000000".to_string(),
            source: Some(AssetSource::Erc20(Some(Erc20 {
                contract_address: "0xdAC17F958D2ee523a2206206994597C13D831ec7".to_string(),
                lifetime_limit: "1000000000000".to_string(),
                withdraw_threshold: "10000000".to_string(),
            }))),
        }),
    }
}

/// One-off treasury payout to a party
pub fn create_treasury_transfer() -> NewTransferConfiguration {
    NewTransferConfiguration {
        source_type: AccountType::NetworkTreasury as i32,
        source: String::new(),
        transfer_type: GovernanceTransferType::AllOrNothing as i32,
        amount: "1000000".to_string(),
        asset: ASSET_ID.to_string(),
        fraction_of_balance: "0.5".to_string(),
        destination_type: AccountType::General as i32,
        destination: PARTY_KEY.to_string(),
        kind: Some(TransferKind::OneOff(Default::default())),
    }
}

/// Recurring treasury funding of the maker fees paid reward pool
pub fn create_reward_transfer() -> NewTransferConfiguration {
    NewTransferConfiguration {
        destination_type: AccountType::RewardMakerPaidFees as i32,
        destination: String::new(),
        kind: Some(TransferKind::Recurring(RecurringTransfer {
            start_epoch: 10,
            end_epoch: Some(20),
            dispatch_strategy: Some(create_dispatch_strategy()),
        })),
        ..create_treasury_transfer()
    }
}

pub fn create_dispatch_strategy() -> DispatchStrategy {
    DispatchStrategy {
        asset_for_metric: ASSET_ID.to_string(),
        metric: DispatchMetric::MakerFeesPaid as i32,
        markets: vec![MARKET_ID.to_string()],
        entity_scope: EntityScope::Individuals as i32,
        individual_scope: IndividualScope::All as i32,
        window_length: 5,
        distribution_strategy: DistributionStrategy::ProRata as i32,
        ..Default::default()
    }
}

pub fn create_new_transfer(changes: NewTransferConfiguration) -> NewTransfer {
    NewTransfer {
        changes: Some(changes),
    }
}

pub fn create_referral_program() -> UpdateReferralProgram {
    UpdateReferralProgram {
        changes: Some(ReferralProgramChanges {
            benefit_tiers: vec![
                BenefitTier {
                    minimum_running_notional_taker_volume: "10000".to_string(),
                    minimum_epochs: "1".to_string(),
                    referral_reward_factor: "0.001".to_string(),
                    referral_discount_factor: "0.002".to_string(),
                },
                BenefitTier {
                    minimum_running_notional_taker_volume: "50000".to_string(),
                    minimum_epochs: "5".to_string(),
                    referral_reward_factor: "0.002".to_string(),
                    referral_discount_factor: "0.004".to_string(),
                },
            ],
            end_of_program_timestamp: ENACTMENT + 86_400 * 30,
            window_length: 7,
            staking_tiers: vec![StakingTier {
                minimum_staked_tokens: "1000".to_string(),
                referral_reward_multiplier: "1.5".to_string(),
            }],
        }),
    }
}

pub fn create_automated_purchase() -> NewProtocolAutomatedPurchase {
    NewProtocolAutomatedPurchase {
        changes: Some(NewProtocolAutomatedPurchaseChanges {
            from: ASSET_ID.to_string(),
            from_account_type: AccountType::BuyBackFees as i32,
            to_account_type: AccountType::NetworkTreasury as i32,
            market_id: MARKET_ID.to_string(),
            price_oracle: Some(create_oracle_source()),
            price_oracle_spec_binding: Some(SpecBindingForCompositePrice {
                price_source_property: ORACLE_PROPERTY.to_string(),
            }),
            oracle_offset_factor: "1.05".to_string(),
            auction_schedule: Some(create_time_trigger_source()),
            auction_volume_snapshot_schedule: Some(create_time_trigger_source()),
            auction_duration: "1h".to_string(),
            minimum_auction_size: "100".to_string(),
            maximum_auction_size: "1000".to_string(),
            expiry_timestamp: 0,
        }),
    }
}
