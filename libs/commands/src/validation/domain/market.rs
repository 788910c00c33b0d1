//! # Futures Market Rules
//!
//! New market and update market proposals. Futures markets carry the full
//! set of parameter blocks; the optional ones (successor, liquidation, SLA,
//! fee settings, mark price) are checked only when present.

use super::composite_price::check_composite_price;
use super::instrument::{check_new_instrument, check_update_instrument};
use super::liquidity::check_liquidity_commitment;
use super::monitoring::{check_liquidity_monitoring, check_price_monitoring};
use super::risk::check_risk;
use super::sla::{check_fee_settings, check_liquidation, check_sla};
use super::{check_id, MarketFamily};
use crate::error::Violation;
use crate::validation::config::{MarketLimits, ValidationConfig};
use crate::validation::numeric::{check_decimal, parse_decimal};
use crate::validation::Errors;
use rust_decimal::Decimal;
use types::market::parameters::{CompositePriceConfiguration, SuccessorConfiguration};
use types::market::{NewMarket, NewMarketConfiguration, UpdateMarket, UpdateMarketConfiguration};

pub(crate) fn check_new_market(market: Option<&NewMarket>, config: &ValidationConfig) -> Errors {
    let mut errs = Errors::new();
    let Some(market) = market else {
        return errs.final_add_for_property("new_market", Violation::IsRequired);
    };

    match market.changes.as_ref() {
        None => errs.add("new_market.changes", Violation::IsRequired),
        Some(changes) => errs.merge(check_new_market_configuration(
            changes,
            "new_market.changes",
            config,
        )),
    }

    match market.liquidity_commitment.as_ref() {
        None => errs.add("new_market.liquidity_commitment", Violation::IsRequired),
        Some(commitment) => errs.merge(check_liquidity_commitment(
            commitment,
            "new_market.liquidity_commitment",
            &config.text,
        )),
    }
    errs
}

fn check_new_market_configuration(
    changes: &NewMarketConfiguration,
    path: &str,
    config: &ValidationConfig,
) -> Errors {
    let mut errs = Errors::new();
    let limits = &config.market;

    if changes.decimal_places >= limits.max_decimal_places {
        errs.add(
            format!("{path}.decimal_places"),
            Violation::MustBeLessThan(limits.max_decimal_places),
        );
    }

    if !(0..7).contains(&changes.position_decimal_places) {
        errs.add(
            format!("{path}.position_decimal_places"),
            Violation::MustBeWithinRange7,
        );
    }

    check_linear_slippage(&mut errs, path, &changes.linear_slippage_factor, limits);

    if let Some(successor) = changes.successor.as_ref() {
        check_successor(&mut errs, successor, &format!("{path}.successor"));
    }

    errs.merge(check_liquidation(changes.liquidation_strategy.as_ref(), path, limits));
    errs.merge(check_price_monitoring(
        changes.price_monitoring_parameters.as_ref(),
        path,
        MarketFamily::Futures,
        limits,
    ));
    errs.merge(check_liquidity_monitoring(
        changes.liquidity_monitoring_parameters.as_ref(),
        path,
    ));
    errs.merge(check_new_instrument(
        changes.instrument.as_ref(),
        &format!("{path}.instrument"),
        MarketFamily::Futures,
        config,
    ));
    errs.merge(check_risk(
        changes.risk_parameters.as_ref(),
        path,
        MarketFamily::Futures,
    ));
    errs.merge(check_sla(changes.sla_params.as_ref(), path, limits));
    errs.merge(check_fee_settings(changes.liquidity_fee_settings.as_ref(), path));
    errs.merge(check_mark_price(changes.mark_price_configuration.as_ref(), path, limits));
    errs
}

pub(crate) fn check_update_market(
    market: Option<&UpdateMarket>,
    config: &ValidationConfig,
) -> Errors {
    let mut errs = Errors::new();
    let Some(market) = market else {
        return errs.final_add_for_property("update_market", Violation::IsRequired);
    };

    check_id(&mut errs, "update_market.market_id", &market.market_id);

    let Some(changes) = market.changes.as_ref() else {
        return errs.final_add_for_property("update_market.changes", Violation::IsRequired);
    };
    errs.merge(check_update_market_configuration(
        changes,
        "update_market.changes",
        config,
    ));
    errs
}

fn check_update_market_configuration(
    changes: &UpdateMarketConfiguration,
    path: &str,
    config: &ValidationConfig,
) -> Errors {
    let mut errs = Errors::new();
    let limits = &config.market;

    check_linear_slippage(&mut errs, path, &changes.linear_slippage_factor, limits);

    errs.merge(check_liquidation(changes.liquidation_strategy.as_ref(), path, limits));
    errs.merge(check_price_monitoring(
        changes.price_monitoring_parameters.as_ref(),
        path,
        MarketFamily::Futures,
        limits,
    ));
    errs.merge(check_liquidity_monitoring(
        changes.liquidity_monitoring_parameters.as_ref(),
        path,
    ));
    errs.merge(check_update_instrument(
        changes.instrument.as_ref(),
        &format!("{path}.instrument"),
        config,
    ));
    errs.merge(check_risk(
        changes.risk_parameters.as_ref(),
        path,
        MarketFamily::Futures,
    ));
    errs.merge(check_sla(changes.sla_params.as_ref(), path, limits));
    errs.merge(check_fee_settings(changes.liquidity_fee_settings.as_ref(), path));
    errs.merge(check_mark_price(changes.mark_price_configuration.as_ref(), path, limits));
    errs
}

/// Optional slippage factor, `[0, max]` when set.
fn check_linear_slippage(errs: &mut Errors, parent: &str, value: &str, limits: &MarketLimits) {
    if value.is_empty() {
        return;
    }
    let path = format!("{parent}.linear_slippage_factor");
    match parse_decimal(value) {
        Err(_) => errs.add(path, Violation::IsNotValidNumber),
        Ok(factor) if factor.is_sign_negative() && !factor.is_zero() => {
            errs.add(path, Violation::MustBePositiveOrZero)
        }
        Ok(factor) if factor > Decimal::from(limits.max_linear_slippage_factor) => errs.add(
            path,
            Violation::MustBeAtMost(limits.max_linear_slippage_factor),
        ),
        Ok(_) => {}
    }
}

/// Only the insurance pool share is checked; the parent market is resolved
/// when the proposal is enacted.
fn check_successor(errs: &mut Errors, successor: &SuccessorConfiguration, path: &str) {
    let fraction_path = format!("{path}.insurance_pool_fraction");
    if let Some(fraction) = check_decimal(errs, &fraction_path, &successor.insurance_pool_fraction)
    {
        if fraction < Decimal::ZERO || fraction > Decimal::ONE {
            errs.add(fraction_path, Violation::MustBeWithinRange01);
        }
    }
}

fn check_mark_price(
    mark_price: Option<&CompositePriceConfiguration>,
    parent: &str,
    limits: &MarketLimits,
) -> Errors {
    match mark_price {
        Some(mark_price) => check_composite_price(
            mark_price,
            &format!("{parent}.mark_price_configuration"),
            limits,
        ),
        None => Errors::new(),
    }
}
