//! # Instrument Rules
//!
//! Instrument name/code and the product it trades. Products must match the
//! market family: futures markets take future or perpetual products, spot
//! markets take spot products.

use super::composite_price::check_composite_price;
use super::data_source::{
    check_data_source, FUTURE_SETTLEMENT, FUTURE_TERMINATION, PERPS_SETTLEMENT,
};
use super::{require_text, MarketFamily};
use crate::error::Violation;
use crate::validation::config::ValidationConfig;
use crate::validation::numeric::{check_decimal, parse_decimal};
use crate::validation::Errors;
use rust_decimal::Decimal;
use types::data_source::DataSourceDefinition;
use types::market::instrument::{
    DataSourceSpecToFutureBinding, DataSourceSpecToPerpetualBinding, FutureProduct,
    InstrumentConfiguration, PerpetualProduct, Product, SpotProduct, UpdateFutureProduct,
    UpdateInstrumentConfiguration, UpdateProduct,
};

/// Perpetual rules differ between listing and updating a market
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PerpsMode {
    New,
    Update,
}

pub(crate) fn check_new_instrument(
    instrument: Option<&InstrumentConfiguration>,
    path: &str,
    family: MarketFamily,
    config: &ValidationConfig,
) -> Errors {
    let mut errs = Errors::new();
    let Some(instrument) = instrument else {
        return errs.final_add_for_property(path, Violation::IsRequired);
    };

    require_text(&mut errs, &format!("{path}.name"), &instrument.name);
    require_text(&mut errs, &format!("{path}.code"), &instrument.code);

    let product_path = format!("{path}.product");
    let Some(product) = instrument.product.as_ref() else {
        return errs.final_add_for_property(product_path, Violation::IsRequired);
    };

    let compatible = match product {
        Product::Future(_) | Product::Perpetual(_) => family == MarketFamily::Futures,
        Product::Spot(_) => family == MarketFamily::Spot,
    };
    if !compatible {
        return errs.final_add_for_property(product_path, Violation::IsMismatching);
    }

    let product_path = format!("{product_path}.{}", product.name());
    match product {
        Product::Future(future) => errs.merge(check_future(future.as_ref(), &product_path)),
        Product::Perpetual(perps) => errs.merge(check_perps(
            perps.as_ref(),
            &product_path,
            PerpsMode::New,
            config,
        )),
        Product::Spot(spot) => errs.merge(check_spot_product(spot.as_ref(), &product_path)),
    }
    errs
}

pub(crate) fn check_update_instrument(
    instrument: Option<&UpdateInstrumentConfiguration>,
    path: &str,
    config: &ValidationConfig,
) -> Errors {
    let mut errs = Errors::new();
    let Some(instrument) = instrument else {
        return errs.final_add_for_property(path, Violation::IsRequired);
    };

    require_text(&mut errs, &format!("{path}.name"), &instrument.name);
    require_text(&mut errs, &format!("{path}.code"), &instrument.code);

    let Some(product) = instrument.product.as_ref() else {
        return errs.final_add_for_property(format!("{path}.product"), Violation::IsRequired);
    };

    match product {
        UpdateProduct::Future(future) => errs.merge(check_update_future(
            future.as_ref(),
            &format!("{path}.product.future"),
        )),
        UpdateProduct::Perpetual(perps) => errs.merge(check_perps(
            perps.as_ref(),
            &format!("{path}.product.perps"),
            PerpsMode::Update,
            config,
        )),
    }
    errs
}

fn check_future(future: Option<&FutureProduct>, path: &str) -> Errors {
    let mut errs = Errors::new();
    let Some(future) = future else {
        return errs.final_add_for_property(path, Violation::IsRequired);
    };

    require_text(&mut errs, &format!("{path}.settlement_asset"), &future.settlement_asset);
    require_text(&mut errs, &format!("{path}.quote_name"), &future.quote_name);

    if future.maturity.is_empty() {
        errs.add(format!("{path}.maturity"), Violation::IsRequired);
    } else if chrono::DateTime::parse_from_rfc3339(&future.maturity).is_err() {
        errs.add(format!("{path}.maturity"), Violation::MustBeValidDate);
    }

    errs.merge(check_future_sources(
        future.data_source_spec_for_settlement_data.as_ref(),
        future.data_source_spec_for_trading_termination.as_ref(),
        future.data_source_spec_binding.as_ref(),
        path,
    ));
    errs
}

fn check_update_future(future: Option<&UpdateFutureProduct>, path: &str) -> Errors {
    let mut errs = Errors::new();
    let Some(future) = future else {
        return errs.final_add_for_property(path, Violation::IsRequired);
    };

    require_text(&mut errs, &format!("{path}.quote_name"), &future.quote_name);

    errs.merge(check_future_sources(
        future.data_source_spec_for_settlement_data.as_ref(),
        future.data_source_spec_for_trading_termination.as_ref(),
        future.data_source_spec_binding.as_ref(),
        path,
    ));
    errs
}

fn check_future_sources(
    settlement: Option<&DataSourceDefinition>,
    termination: Option<&DataSourceDefinition>,
    binding: Option<&DataSourceSpecToFutureBinding>,
    path: &str,
) -> Errors {
    let mut errs = check_data_source(
        settlement,
        "data_source_spec_for_settlement_data",
        path,
        FUTURE_SETTLEMENT,
    );
    errs.merge(check_data_source(
        termination,
        "data_source_spec_for_trading_termination",
        path,
        FUTURE_TERMINATION,
    ));

    let binding_path = format!("{path}.data_source_spec_binding");
    let Some(binding) = binding else {
        return errs.final_add_for_property(binding_path, Violation::IsRequired);
    };
    check_bound_property(
        &mut errs,
        &format!("{binding_path}.settlement_data_property"),
        &binding.settlement_data_property,
        settlement,
        true,
    );
    check_bound_property(
        &mut errs,
        &format!("{binding_path}.trading_termination_property"),
        &binding.trading_termination_property,
        termination,
        true,
    );
    errs
}

/// A binding property must name something its own data source exposes.
///
/// An unset data source is reported where it lives, so the binding is not
/// matched against it.
fn check_bound_property(
    errs: &mut Errors,
    path: &str,
    property: &str,
    spec: Option<&DataSourceDefinition>,
    required: bool,
) {
    if property.is_empty() {
        if required {
            errs.add(path, Violation::IsRequired);
        }
        return;
    }
    if spec.is_some_and(|spec| !spec.exposes_property(property)) {
        errs.add(path, Violation::IsMismatching);
    }
}

fn check_perps(
    perps: Option<&PerpetualProduct>,
    path: &str,
    mode: PerpsMode,
    config: &ValidationConfig,
) -> Errors {
    let mut errs = Errors::new();
    let Some(perps) = perps else {
        return errs.final_add_for_property(path, Violation::IsRequired);
    };

    if mode == PerpsMode::New {
        require_text(&mut errs, &format!("{path}.settlement_asset"), &perps.settlement_asset);
    }
    require_text(&mut errs, &format!("{path}.quote_name"), &perps.quote_name);

    let unit = Decimal::ONE;
    check_bounded(
        &mut errs,
        &format!("{path}.margin_funding_factor"),
        &perps.margin_funding_factor,
        Decimal::ZERO,
        unit,
        Violation::MustBeWithinRange01,
    );
    check_bounded(
        &mut errs,
        &format!("{path}.interest_rate"),
        &perps.interest_rate,
        -unit,
        unit,
        Violation::MustBeWithinRange11,
    );
    let lower = check_bounded(
        &mut errs,
        &format!("{path}.clamp_lower_bound"),
        &perps.clamp_lower_bound,
        -unit,
        unit,
        Violation::MustBeWithinRange11,
    );
    let upper = check_bounded(
        &mut errs,
        &format!("{path}.clamp_upper_bound"),
        &perps.clamp_upper_bound,
        -unit,
        unit,
        Violation::MustBeWithinRange11,
    );
    if let (Some(lower), Some(upper)) = (lower, upper) {
        if upper < lower {
            errs.add(
                format!("{path}.clamp_upper_bound"),
                Violation::MustBeGTEClampLowerBound,
            );
        }
    }

    if let Some(scaling) = perps.funding_rate_scaling_factor.as_deref() {
        match parse_decimal(scaling) {
            Err(_) => errs.add(
                format!("{path}.funding_rate_scaling_factor"),
                Violation::IsNotValidNumber,
            ),
            Ok(value) if value <= Decimal::ZERO => errs.add(
                format!("{path}.funding_rate_scaling_factor"),
                Violation::MustBePositive,
            ),
            Ok(_) => {}
        }
    }

    let funding_lower = parse_optional(
        &mut errs,
        &format!("{path}.funding_rate_lower_bound"),
        perps.funding_rate_lower_bound.as_deref(),
    );
    let funding_upper = parse_optional(
        &mut errs,
        &format!("{path}.funding_rate_upper_bound"),
        perps.funding_rate_upper_bound.as_deref(),
    );
    if let (Some(lower), Some(upper)) = (funding_lower, funding_upper) {
        if lower > upper {
            errs.add(
                format!("{path}.funding_rate_lower_bound"),
                Violation::IsNotValid,
            );
        }
    }

    errs.merge(check_data_source(
        perps.data_source_spec_for_settlement_data.as_ref(),
        "data_source_spec_for_settlement_data",
        path,
        PERPS_SETTLEMENT,
    ));
    errs.merge(check_data_source(
        perps.data_source_spec_for_settlement_schedule.as_ref(),
        "data_source_spec_for_settlement_schedule",
        path,
        PERPS_SETTLEMENT,
    ));
    errs.merge(check_perps_binding(perps, path));

    if let Some(composite) = perps.internal_composite_price_configuration.as_ref() {
        errs.merge(check_composite_price(
            composite,
            &format!("{path}.internal_composite_price_configuration"),
            &config.market,
        ));
    }

    errs
}

fn check_perps_binding(perps: &PerpetualProduct, path: &str) -> Errors {
    let mut errs = Errors::new();
    let binding_path = format!("{path}.data_source_spec_binding");
    let Some(DataSourceSpecToPerpetualBinding {
        settlement_data_property,
        settlement_schedule_property,
    }) = perps.data_source_spec_binding.as_ref()
    else {
        return errs.final_add_for_property(binding_path, Violation::IsRequired);
    };

    check_bound_property(
        &mut errs,
        &format!("{binding_path}.settlement_data_property"),
        settlement_data_property,
        perps.data_source_spec_for_settlement_data.as_ref(),
        true,
    );
    check_bound_property(
        &mut errs,
        &format!("{binding_path}.settlement_schedule_property"),
        settlement_schedule_property,
        perps.data_source_spec_for_settlement_schedule.as_ref(),
        false,
    );
    errs
}

fn check_spot_product(spot: Option<&SpotProduct>, path: &str) -> Errors {
    let mut errs = Errors::new();
    let Some(spot) = spot else {
        return errs.final_add_for_property(path, Violation::IsRequired);
    };

    require_text(&mut errs, &format!("{path}.base_asset"), &spot.base_asset);
    require_text(&mut errs, &format!("{path}.quote_asset"), &spot.quote_asset);
    require_text(&mut errs, &format!("{path}.name"), &spot.name);

    if !spot.quote_asset.is_empty() && spot.quote_asset == spot.base_asset {
        errs.add(format!("{path}.quote_asset"), Violation::IsNotValid);
    }
    errs
}

/// Required decimal within `[min, max]`.
fn check_bounded(
    errs: &mut Errors,
    path: &str,
    value: &str,
    min: Decimal,
    max: Decimal,
    out_of_range: Violation,
) -> Option<Decimal> {
    let value = check_decimal(errs, path, value)?;
    if value < min || value > max {
        errs.add(path, out_of_range);
    }
    Some(value)
}

fn parse_optional(errs: &mut Errors, path: &str, value: Option<&str>) -> Option<Decimal> {
    let value = value?;
    match parse_decimal(value) {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            errs.add(path, Violation::IsNotValidNumber);
            None
        }
    }
}
