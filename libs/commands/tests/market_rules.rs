//! Market Proposal Tests
//!
//! Futures and spot market listings and updates, checked through the full
//! validator so paths carry the change prefix.

mod common;

use commands::{Errors, ProposalValidator, ValidationConfig, Violation};
use common::*;
use types::data_source::{
    DataSourceDefinition, EthCallSpec, EthCallTrigger, EthTimeTrigger, Filter, Normaliser,
    PropertyKey, PropertyKeyType,
};
use types::market::instrument::{
    DataSourceSpecToPerpetualBinding, PerpetualProduct, Product, UpdateInstrumentConfiguration,
    UpdateProduct,
};
use types::market::parameters::{
    CompositePriceType, LiquidityFeeMethod, LiquidityFeeSettings, PriceMonitoringParameters,
    PriceMonitoringTrigger, RiskParameters, SimpleModelParams, SuccessorConfiguration,
};
use types::market::{
    NewMarket, NewMarketConfiguration, UpdateMarket, UpdateMarketConfiguration,
    UpdateSpotMarket, UpdateSpotMarketConfiguration,
};
use types::ProposalChange;

fn check_new_market(market: NewMarket) -> Errors {
    ProposalValidator::new().check(Some(&create_submission(ProposalChange::NewMarket(Some(
        market,
    )))))
}

fn with_changes(edit: impl FnOnce(&mut NewMarketConfiguration)) -> Errors {
    let mut market = create_new_market();
    if let Some(changes) = market.changes.as_mut() {
        edit(changes);
    }
    check_new_market(market)
}

const CHANGES: &str = "new_market.changes";

fn path(field: &str) -> String {
    change_path(&format!("{CHANGES}.{field}"))
}

#[test]
fn test_changes_and_commitment_reported_together() {
    let errs = check_new_market(NewMarket::default());
    assert!(errs.contains(&change_path("new_market.changes"), &Violation::IsRequired));
    assert!(errs.contains(
        &change_path("new_market.liquidity_commitment"),
        &Violation::IsRequired
    ));
}

#[test]
fn test_decimal_places() {
    let errs = with_changes(|c| {
        c.decimal_places = 150;
        c.position_decimal_places = 7;
    });
    assert!(errs.contains(&path("decimal_places"), &Violation::MustBeLessThan(150)));
    assert!(errs.contains(&path("position_decimal_places"), &Violation::MustBeWithinRange7));

    let mut config = ValidationConfig::default();
    config.market.max_decimal_places = 4;
    let mut market = create_new_market();
    if let Some(changes) = market.changes.as_mut() {
        changes.decimal_places = 4;
    }
    let errs = ProposalValidator::with_config(config)
        .check(Some(&create_submission(ProposalChange::NewMarket(Some(market)))));
    assert!(errs.contains(&path("decimal_places"), &Violation::MustBeLessThan(4)));
}

#[test]
fn test_linear_slippage_factor() {
    let errs = with_changes(|c| c.linear_slippage_factor = "-0.1".to_string());
    assert!(errs.contains(&path("linear_slippage_factor"), &Violation::MustBePositiveOrZero));

    let errs = with_changes(|c| c.linear_slippage_factor = "1000001".to_string());
    assert!(errs.contains(
        &path("linear_slippage_factor"),
        &Violation::MustBeAtMost(1_000_000)
    ));

    let errs = with_changes(|c| c.linear_slippage_factor = String::new());
    assert!(errs.is_empty(), "{errs}");
}

#[test]
fn test_successor() {
    let errs = with_changes(|c| {
        c.successor = Some(SuccessorConfiguration {
            parent_market_id: String::new(),
            insurance_pool_fraction: "1.5".to_string(),
        })
    });
    assert!(errs.get(&path("successor.parent_market_id")).is_empty());
    assert!(errs.contains(
        &path("successor.insurance_pool_fraction"),
        &Violation::MustBeWithinRange01
    ));

    let errs = with_changes(|c| {
        c.successor = Some(SuccessorConfiguration {
            parent_market_id: String::new(),
            insurance_pool_fraction: String::new(),
        })
    });
    assert_eq!(errs.len(), 1);
    assert!(errs.contains(&path("successor.insurance_pool_fraction"), &Violation::IsRequired));
}

#[test]
fn test_price_monitoring_triggers() {
    let errs = with_changes(|c| {
        let mut params = create_price_monitoring("1");
        params.triggers.push(PriceMonitoringTrigger {
            horizon: 0,
            probability: "abc".to_string(),
            auction_extension: 0,
        });
        c.price_monitoring_parameters = Some(params);
    });
    let triggers = path("price_monitoring_parameters.triggers");
    assert!(errs.contains(
        &format!("{triggers}.0.probability"),
        &Violation::custom("should be between 0 (exclusive) and 1 (exclusive)")
    ));
    assert!(errs.contains(&format!("{triggers}.1.horizon"), &Violation::MustBePositive));
    assert!(errs.contains(
        &format!("{triggers}.1.auction_extension"),
        &Violation::MustBePositive
    ));
    assert!(errs.contains(
        &format!("{triggers}.1.probability"),
        &Violation::custom("must be numeric and be between 0 (exclusive) and 1 (exclusive)")
    ));

    let errs = with_changes(|c| {
        let trigger = create_price_monitoring("0.9").triggers.remove(0);
        c.price_monitoring_parameters = Some(PriceMonitoringParameters {
            triggers: vec![trigger; 6],
        })
    });
    assert!(errs.contains(&triggers, &Violation::TooManyTriggers(5)));
}

#[test]
fn test_liquidity_monitoring() {
    let errs = with_changes(|c| {
        if let Some(params) = c.liquidity_monitoring_parameters.as_mut() {
            params.triggering_ratio = "1.2".to_string();
            params.target_stake_parameters = None;
        }
    });
    assert!(errs.contains(
        &path("liquidity_monitoring_parameters.triggering_ratio"),
        &Violation::MustBeWithinRange01
    ));
    assert!(errs.contains(
        &path("liquidity_monitoring_parameters.target_stake_parameters"),
        &Violation::IsRequired
    ));

    let errs = with_changes(|c| c.liquidity_monitoring_parameters = None);
    assert!(errs.contains(&path("liquidity_monitoring_parameters"), &Violation::IsRequired));
}

#[test]
fn test_risk_parameters() {
    let errs = with_changes(|c| c.risk_parameters = None);
    assert!(errs.contains(&path("risk_parameters"), &Violation::IsRequired));

    let errs = with_changes(|c| c.risk_parameters = Some(create_log_normal(0.0, -1.0)));
    // First failing field only
    assert!(errs.contains(&path("risk_parameters.log_normal.tau"), &Violation::MustBePositive));
    assert!(errs.get(&path("risk_parameters.log_normal.params.sigma")).is_empty());

    let errs = with_changes(|c| {
        c.risk_parameters = Some(RiskParameters::Simple(Some(SimpleModelParams {
            factor_long: 0.15,
            factor_short: 0.25,
            max_move_up: -1.0,
            min_move_down: 1.0,
            probability_of_trading: 1.5,
        })))
    });
    assert!(errs.contains(
        &path("risk_parameters.simple.min_move_down"),
        &Violation::MustBeNegativeOrZero
    ));
    assert!(errs.contains(
        &path("risk_parameters.simple.max_move_up"),
        &Violation::MustBePositiveOrZero
    ));
    assert!(errs.contains(
        &path("risk_parameters.simple.probability_of_trading"),
        &Violation::custom("should be between 0 (inclusive) and 1 (inclusive)")
    ));
}

#[test]
fn test_future_product() {
    let errs = with_changes(|c| {
        if let Some(Product::Future(Some(future))) =
            c.instrument.as_mut().and_then(|i| i.product.as_mut())
        {
            future.maturity = "next year".to_string();
            future.data_source_spec_for_trading_termination = None;
            if let Some(binding) = future.data_source_spec_binding.as_mut() {
                binding.settlement_data_property = "prices.ETH.value".to_string();
            }
        }
    });
    let future = path("instrument.product.future");
    assert!(errs.contains(&format!("{future}.maturity"), &Violation::MustBeValidDate));
    assert!(errs.contains(
        &format!("{future}.data_source_spec_for_trading_termination"),
        &Violation::IsRequired
    ));
    assert!(errs.contains(
        &format!("{future}.data_source_spec_binding.settlement_data_property"),
        &Violation::IsMismatching
    ));
}

#[test]
fn test_binding_to_unset_settlement_source() {
    let errs = with_changes(|c| {
        if let Some(Product::Future(Some(future))) =
            c.instrument.as_mut().and_then(|i| i.product.as_mut())
        {
            future.data_source_spec_for_settlement_data = None;
        }
    });
    let future = path("instrument.product.future");
    assert_eq!(
        errs.get(&format!("{future}.data_source_spec_for_settlement_data")),
        &[Violation::IsRequired]
    );
    assert!(errs
        .get(&format!("{future}.data_source_spec_binding.settlement_data_property"))
        .is_empty());
    assert_eq!(errs.len(), 1, "{errs}");
}

#[test]
fn test_settlement_source_cannot_be_internal_time() {
    let errs = with_changes(|c| {
        if let Some(Product::Future(Some(future))) =
            c.instrument.as_mut().and_then(|i| i.product.as_mut())
        {
            future.data_source_spec_for_settlement_data =
                future.data_source_spec_for_trading_termination.clone();
        }
    });
    assert!(errs.contains(
        &path("instrument.product.future.data_source_spec_for_settlement_data"),
        &Violation::IsNotValid
    ));
}

#[test]
fn test_spot_product_on_futures_market() {
    let spot = create_new_spot_market_configuration().instrument;
    let errs = with_changes(|c| c.instrument = spot);
    assert!(errs.contains(&path("instrument.product"), &Violation::IsMismatching));
}

#[test]
fn test_perpetual_product() {
    let perps = PerpetualProduct {
        settlement_asset: ASSET_ID.to_string(),
        quote_name: "USD".to_string(),
        margin_funding_factor: "0.5".to_string(),
        interest_rate: "0.01".to_string(),
        clamp_lower_bound: "0.5".to_string(),
        clamp_upper_bound: "-0.5".to_string(),
        funding_rate_scaling_factor: Some("0".to_string()),
        funding_rate_lower_bound: Some("0.1".to_string()),
        funding_rate_upper_bound: Some("-0.1".to_string()),
        data_source_spec_for_settlement_schedule: Some(create_time_trigger_source()),
        data_source_spec_for_settlement_data: Some(create_oracle_source()),
        data_source_spec_binding: Some(DataSourceSpecToPerpetualBinding {
            settlement_data_property: ORACLE_PROPERTY.to_string(),
            settlement_schedule_property: String::new(),
        }),
        internal_composite_price_configuration: None,
    };
    let errs = with_changes(|c| {
        if let Some(instrument) = c.instrument.as_mut() {
            instrument.product = Some(Product::Perpetual(Some(perps)));
        }
    });
    let perps = path("instrument.product.perps");
    assert!(errs.contains(
        &format!("{perps}.clamp_upper_bound"),
        &Violation::MustBeGTEClampLowerBound
    ));
    assert!(errs.contains(
        &format!("{perps}.funding_rate_scaling_factor"),
        &Violation::MustBePositive
    ));
    assert!(errs.contains(
        &format!("{perps}.funding_rate_lower_bound"),
        &Violation::IsNotValid
    ));
    assert_eq!(errs.len(), 3, "{errs}");
}

#[test]
fn test_perpetual_settles_from_eth_call() {
    let call = EthCallSpec {
        address: "0xb89A165EA8b619c14312dB316BaAa80D2a98B493".to_string(),
        abi: r#"[{"type": "function", "name": "latestAnswer", "inputs": []}]"#.to_string(),
        method: "latestAnswer".to_string(),
        args: Vec::new(),
        trigger: Some(EthCallTrigger::TimeTrigger(Some(EthTimeTrigger {
            initial: None,
            every: Some(30),
            until: None,
        }))),
        required_confirmations: 3,
        filters: vec![Filter {
            key: Some(PropertyKey {
                name: "eth.price".to_string(),
                r#type: PropertyKeyType::Integer as i32,
                number_decimal_places: Some(8),
            }),
            conditions: Vec::new(),
        }],
        normalisers: vec![Normaliser {
            name: "eth.price".to_string(),
            expression: "$[0]".to_string(),
        }],
        source_chain_id: 1,
    };
    let perps = |property: &str| PerpetualProduct {
        settlement_asset: ASSET_ID.to_string(),
        quote_name: "USD".to_string(),
        margin_funding_factor: "0.5".to_string(),
        interest_rate: "0.01".to_string(),
        clamp_lower_bound: "-0.5".to_string(),
        clamp_upper_bound: "0.5".to_string(),
        funding_rate_scaling_factor: None,
        funding_rate_lower_bound: None,
        funding_rate_upper_bound: None,
        data_source_spec_for_settlement_schedule: Some(create_time_trigger_source()),
        data_source_spec_for_settlement_data: Some(DataSourceDefinition::external_eth_oracle(
            call.clone(),
        )),
        data_source_spec_binding: Some(DataSourceSpecToPerpetualBinding {
            settlement_data_property: property.to_string(),
            settlement_schedule_property: String::new(),
        }),
        internal_composite_price_configuration: None,
    };

    let errs = with_changes(|c| {
        if let Some(instrument) = c.instrument.as_mut() {
            instrument.product = Some(Product::Perpetual(Some(perps("eth.price"))));
        }
    });
    assert!(errs.is_empty(), "{errs}");

    let errs = with_changes(|c| {
        if let Some(instrument) = c.instrument.as_mut() {
            instrument.product = Some(Product::Perpetual(Some(perps("btc.price"))));
        }
    });
    assert_eq!(
        errs.get(&path(
            "instrument.product.perps.data_source_spec_binding.settlement_data_property"
        )),
        &[Violation::IsMismatching]
    );
}

#[test]
fn test_sla_and_fee_settings() {
    let errs = with_changes(|c| {
        if let Some(sla) = c.sla_params.as_mut() {
            sla.price_range = "21".to_string();
            sla.commitment_min_time_fraction = "-0.1".to_string();
            sla.performance_hysteresis_epochs = 367;
        }
        c.liquidity_fee_settings = Some(LiquidityFeeSettings {
            method: LiquidityFeeMethod::Constant as i32,
            fee_constant: None,
        });
    });
    assert!(errs.contains(
        &path("sla_params.price_range"),
        &Violation::MustBeWithinRangeGT0LT20
    ));
    assert!(errs.contains(
        &path("sla_params.commitment_min_time_fraction"),
        &Violation::MustBeWithinRange01
    ));
    assert!(errs.contains(
        &path("sla_params.performance_hysteresis_epochs"),
        &Violation::MustBeAtMost(366)
    ));
    assert!(errs.contains(
        &path("liquidity_fee_settings.fee_constant"),
        &Violation::IsRequired
    ));

    let errs = with_changes(|c| {
        c.liquidity_fee_settings = Some(LiquidityFeeSettings {
            method: LiquidityFeeMethod::MarginalCost as i32,
            fee_constant: Some("0.5".to_string()),
        })
    });
    assert!(errs.contains(&path("liquidity_fee_settings.method"), &Violation::IsNotValid));
}

#[test]
fn test_liquidation_strategy() {
    let errs = with_changes(|c| {
        if let Some(strategy) = c.liquidation_strategy.as_mut() {
            strategy.disposal_fraction = "0".to_string();
            strategy.max_fraction_consumed = "abc".to_string();
            strategy.disposal_time_step = 3601;
        }
    });
    assert!(errs.contains(
        &path("liquidation_strategy.disposal_fraction"),
        &Violation::MustBeBetween01
    ));
    assert!(errs.contains(
        &path("liquidation_strategy.max_fraction_consumed"),
        &Violation::MustBeBetween01
    ));
    assert!(errs.contains(
        &path("liquidation_strategy.disposal_time_step"),
        &Violation::MustBeAtMost(3600)
    ));
}

#[test]
fn test_mark_price_configuration() {
    let errs = with_changes(|c| {
        if let Some(mark) = c.mark_price_configuration.as_mut() {
            mark.composite_price_type = CompositePriceType::Weighted as i32;
            mark.source_weights = vec!["0".to_string(), "0".to_string()];
            mark.decay_power = 4;
        }
    });
    let mark = path("mark_price_configuration");
    assert!(errs.contains(
        &format!("{mark}.source_weights"),
        &Violation::custom("must be defined for all price sources")
    ));
    assert!(errs.contains(
        &format!("{mark}.source_weights"),
        &Violation::custom("must have at least one none zero weight")
    ));
    assert!(errs.contains(
        &format!("{mark}.decay_power"),
        &Violation::custom("must be in {1, 2, 3}")
    ));

    let errs = with_changes(|c| {
        if let Some(mark) = c.mark_price_configuration.as_mut() {
            mark.composite_price_type = CompositePriceType::LastTrade as i32;
            mark.data_sources_spec = vec![create_oracle_source()];
        }
    });
    assert!(errs.contains(
        &format!("{mark}.cash_amount"),
        &Violation::custom("must not be defined for price type last trade")
    ));
    assert!(errs.contains(
        &format!("{mark}.data_sources_spec"),
        &Violation::custom("are not supported for last trade composite price type")
    ));
}

#[test]
fn test_liquidity_commitment() {
    let mut market = create_new_market();
    if let Some(commitment) = market.liquidity_commitment.as_mut() {
        commitment.commitment_amount = 0;
        commitment.fee = "-0.1".to_string();
        commitment.sells.clear();
        if let Some(order) = commitment.buys.first_mut() {
            order.offset = 5;
        }
    }
    let errs = check_new_market(market);
    let commitment = change_path("new_market.liquidity_commitment");
    assert!(errs.contains(
        &format!("{commitment}.commitment_amount"),
        &Violation::MustBePositive
    ));
    assert!(errs.contains(&format!("{commitment}.fee"), &Violation::MustBePositiveOrZero));
    assert!(errs.contains(&format!("{commitment}.sells"), &Violation::IsRequired));
    assert!(errs.contains(
        &format!("{commitment}.buys.0.offset"),
        &Violation::MustBeNegativeOrZero
    ));
}

#[test]
fn test_update_market() {
    let change = ProposalChange::UpdateMarket(Some(UpdateMarket {
        market_id: MARKET_ID.to_string(),
        changes: Some(UpdateMarketConfiguration {
            instrument: Some(UpdateInstrumentConfiguration {
                code: "BTCUSD.DEC26".to_string(),
                name: String::new(),
                product: Some(UpdateProduct::Future(None)),
            }),
            liquidity_monitoring_parameters: create_new_market_configuration()
                .liquidity_monitoring_parameters,
            risk_parameters: Some(create_log_normal(0.0001, 0.8)),
            ..Default::default()
        }),
    }));
    let errs = ProposalValidator::new().check(Some(&create_submission(change)));
    let instrument = change_path("update_market.changes.instrument");
    assert!(errs.contains(&format!("{instrument}.name"), &Violation::IsRequired));
    assert!(errs.contains(&format!("{instrument}.product.future"), &Violation::IsRequired));
    assert_eq!(errs.len(), 2, "{errs}");
}

#[test]
fn test_new_spot_market() {
    let mut market = create_new_spot_market();
    if let Some(changes) = market.changes.as_mut() {
        changes.position_decimal_places = -7;
        changes.price_monitoring_parameters = Some(create_price_monitoring("0.5"));
        changes.risk_parameters = Some(create_log_normal(2.0, 100.0));
    }
    let errs = ProposalValidator::new().check(Some(&create_submission(
        ProposalChange::NewSpotMarket(Some(market)),
    )));
    let changes = change_path("new_spot_market.changes");
    assert!(errs.contains(
        &format!("{changes}.position_decimal_places"),
        &Violation::MustBeWithinSignedRange7
    ));
    assert!(errs.contains(
        &format!("{changes}.price_monitoring_parameters.triggers.0.probability"),
        &Violation::custom("should be between 0.9 (exclusive) and 1 (exclusive)")
    ));
    assert!(errs.contains(
        &format!("{changes}.risk_parameters.log_normal.tau"),
        &Violation::custom("must be between [1e-8, 1]")
    ));
}

#[test]
fn test_new_spot_market_requires_spot_product() {
    let mut market = create_new_spot_market();
    if let Some(changes) = market.changes.as_mut() {
        changes.instrument = create_new_market_configuration().instrument;
        changes.decimal_places = 500;
    }
    let errs = ProposalValidator::new().check(Some(&create_submission(
        ProposalChange::NewSpotMarket(Some(market)),
    )));
    assert_eq!(errs.len(), 1, "{errs}");
    assert!(errs.contains(
        &change_path("new_spot_market.changes.instrument.product"),
        &Violation::IsMismatching
    ));
}

#[test]
fn test_update_spot_market() {
    let change = ProposalChange::UpdateSpotMarket(Some(UpdateSpotMarket {
        market_id: String::new(),
        changes: Some(UpdateSpotMarketConfiguration {
            target_stake_parameters: None,
            risk_parameters: Some(create_log_normal(0.0001, 1.0)),
            ..Default::default()
        }),
    }));
    let errs = ProposalValidator::new().check(Some(&create_submission(change)));
    assert!(errs.contains(
        &change_path("update_spot_market.market_id"),
        &Violation::IsRequired
    ));
    assert!(errs.contains(
        &change_path("update_spot_market.changes.target_stake_parameters"),
        &Violation::IsRequired
    ));
}

#[test]
fn test_oracle_signers() {
    let errs = with_changes(|c| {
        if let Some(Product::Future(Some(future))) =
            c.instrument.as_mut().and_then(|i| i.product.as_mut())
        {
            future.data_source_spec_for_settlement_data = Some(DataSourceDefinition::external_oracle(
                vec![
                    types::data_source::Signer::PubKey("zz".to_string()),
                    types::data_source::Signer::EthAddress("0x1234".to_string()),
                ],
                Vec::new(),
            ));
        }
    });
    let oracle = path("instrument.product.future.data_source_spec_for_settlement_data.external.oracle");
    assert!(errs.contains(
        &format!("{oracle}.signers.0"),
        &Violation::ShouldBeAValidPublicKey
    ));
    assert!(errs.contains(
        &format!("{oracle}.signers.1"),
        &Violation::IsNotValidEthereumAddress
    ));
    assert!(errs.contains(&format!("{oracle}.filters"), &Violation::IsRequired));
}
