//! # Spot Market Rules
//!
//! Spot markets have no liquidity monitoring block; target stake parameters
//! sit directly on the configuration. A spot market must trade a spot
//! product, and anything else stops the check before other rules run.

use super::instrument::check_new_instrument;
use super::monitoring::{check_price_monitoring, check_target_stake};
use super::risk::check_risk;
use super::sla::check_sla;
use super::{check_id, MarketFamily};
use crate::error::Violation;
use crate::validation::config::ValidationConfig;
use crate::validation::Errors;
use types::market::instrument::Product;
use types::market::{NewSpotMarket, UpdateSpotMarket};

pub(crate) fn check_new_spot_market(
    market: Option<&NewSpotMarket>,
    config: &ValidationConfig,
) -> Errors {
    let mut errs = Errors::new();
    let Some(market) = market else {
        return errs.final_add_for_property("new_spot_market", Violation::IsRequired);
    };
    let path = "new_spot_market.changes";
    let Some(changes) = market.changes.as_ref() else {
        return errs.final_add_for_property(path, Violation::IsRequired);
    };

    let Some(instrument) = changes.instrument.as_ref() else {
        return errs.final_add_for_property(format!("{path}.instrument"), Violation::IsRequired);
    };
    match instrument.product.as_ref() {
        None => {
            return errs.final_add_for_property(
                format!("{path}.instrument.product"),
                Violation::IsRequired,
            );
        }
        Some(Product::Spot(_)) => {}
        Some(_) => {
            return errs.final_add_for_property(
                format!("{path}.instrument.product"),
                Violation::IsMismatching,
            );
        }
    }

    let limits = &config.market;
    if changes.decimal_places >= limits.max_decimal_places {
        errs.add(
            format!("{path}.decimal_places"),
            Violation::MustBeLessThan(limits.max_decimal_places),
        );
    }
    if !(-6..=6).contains(&changes.position_decimal_places) {
        errs.add(
            format!("{path}.position_decimal_places"),
            Violation::MustBeWithinSignedRange7,
        );
    }

    errs.merge(check_price_monitoring(
        changes.price_monitoring_parameters.as_ref(),
        path,
        MarketFamily::Spot,
        limits,
    ));
    errs.merge(check_target_stake(
        changes.target_stake_parameters.as_ref(),
        &format!("{path}.target_stake_parameters"),
    ));
    errs.merge(check_new_instrument(
        Some(instrument),
        &format!("{path}.instrument"),
        MarketFamily::Spot,
        config,
    ));
    errs.merge(check_risk(
        changes.risk_parameters.as_ref(),
        path,
        MarketFamily::Spot,
    ));
    errs.merge(check_sla(changes.sla_params.as_ref(), path, limits));
    errs
}

pub(crate) fn check_update_spot_market(
    market: Option<&UpdateSpotMarket>,
    config: &ValidationConfig,
) -> Errors {
    let mut errs = Errors::new();
    let Some(market) = market else {
        return errs.final_add_for_property("update_spot_market", Violation::IsRequired);
    };

    check_id(&mut errs, "update_spot_market.market_id", &market.market_id);

    let path = "update_spot_market.changes";
    let Some(changes) = market.changes.as_ref() else {
        return errs.final_add_for_property(path, Violation::IsRequired);
    };

    let limits = &config.market;
    errs.merge(check_price_monitoring(
        changes.price_monitoring_parameters.as_ref(),
        path,
        MarketFamily::Spot,
        limits,
    ));
    errs.merge(check_target_stake(
        changes.target_stake_parameters.as_ref(),
        &format!("{path}.target_stake_parameters"),
    ));
    errs.merge(check_risk(
        changes.risk_parameters.as_ref(),
        path,
        MarketFamily::Spot,
    ));
    errs.merge(check_sla(changes.sla_params.as_ref(), path, limits));
    errs
}
