//! # Composite Price Rules
//!
//! Mark price and perpetual internal price configurations combine three
//! built-in sources (trades, book, funding) with optional oracle sources.
//! Weights and staleness tolerances are given per source, built-ins first.

use super::check_enum;
use super::data_source::{check_data_source, check_price_source_binding, PRICE_SOURCE};
use crate::error::Violation;
use crate::validation::config::MarketLimits;
use crate::validation::numeric::{check_decimal, is_valid_duration, parse_decimal, parse_uint};
use crate::validation::Errors;
use rust_decimal::Decimal;
use types::market::parameters::{CompositePriceConfiguration, CompositePriceType};

const NOT_FOR_LAST_TRADE: &str = "must not be defined for price type last trade";

pub(crate) fn check_composite_price(
    config: &CompositePriceConfiguration,
    path: &str,
    limits: &MarketLimits,
) -> Errors {
    let mut errs = Errors::new();

    let price_type = check_enum::<CompositePriceType>(
        &mut errs,
        &format!("{path}.composite_price_type"),
        config.composite_price_type,
    );
    let last_trade = price_type == Some(CompositePriceType::LastTrade);
    let weighted = price_type == Some(CompositePriceType::Weighted);

    if last_trade {
        let defined = [
            ("decay_power", config.decay_power > 0),
            ("decay_weight", !config.decay_weight.is_empty()),
            ("cash_amount", !config.cash_amount.is_empty()),
            ("source_staleness_tolerance", !config.source_staleness_tolerance.is_empty()),
            ("source_weights", !config.source_weights.is_empty()),
            ("data_sources_spec", !config.data_sources_spec.is_empty()),
            ("data_sources_spec_binding", !config.data_sources_spec_binding.is_empty()),
        ];
        for (field, is_set) in defined {
            if is_set {
                errs.add(format!("{path}.{field}"), Violation::custom(NOT_FOR_LAST_TRADE));
            }
        }
    } else {
        if !(1..=3).contains(&config.decay_power) {
            errs.add(
                format!("{path}.decay_power"),
                Violation::custom("must be in {1, 2, 3}"),
            );
        }

        let weight_path = format!("{path}.decay_weight");
        if let Some(weight) = check_decimal(&mut errs, &weight_path, &config.decay_weight) {
            if weight < Decimal::ZERO || weight > Decimal::ONE {
                errs.add(weight_path, Violation::MustBeWithinRange01);
            }
        }

        let cash_path = format!("{path}.cash_amount");
        if config.cash_amount.is_empty() {
            errs.add(cash_path, Violation::IsRequired);
        } else if parse_uint(&config.cash_amount).is_err() {
            errs.add(cash_path, Violation::IsNotValidNumber);
        }

        if !weighted && !config.source_weights.is_empty() {
            errs.add(
                format!("{path}.source_weights"),
                Violation::custom("must be empty if composite price type is not weighted"),
            );
        }
    }

    errs.merge(check_source_weights(config, path, weighted));

    for (i, tolerance) in config.source_staleness_tolerance.iter().enumerate() {
        if !is_valid_duration(tolerance) {
            errs.add(
                format!("{path}.source_staleness_tolerance.{i}"),
                Violation::MustBeValidDuration,
            );
        }
    }

    errs.merge(check_price_sources(config, path, last_trade, limits));
    errs
}

fn check_source_weights(config: &CompositePriceConfiguration, path: &str, weighted: bool) -> Errors {
    let mut errs = Errors::new();
    let weights_path = format!("{path}.source_weights");

    if weighted {
        if config.source_weights.len() != config.source_count() {
            errs.add(
                weights_path.as_str(),
                Violation::custom("must be defined for all price sources"),
            );
        }
        if config.source_weights.len() != config.source_staleness_tolerance.len() {
            errs.add(
                format!("{path}.source_staleness_tolerance"),
                Violation::custom("must have the same length as source_weights"),
            );
        }
    }

    let mut total = Decimal::ZERO;
    for (i, weight) in config.source_weights.iter().enumerate() {
        match parse_decimal(weight) {
            Err(_) => errs.add(format!("{weights_path}.{i}"), Violation::IsNotValidNumber),
            Ok(value) if value.is_sign_negative() && !value.is_zero() => {
                errs.add(format!("{weights_path}.{i}"), Violation::MustBePositiveOrZero)
            }
            Ok(value) => total = total.saturating_add(value),
        }
    }

    if weighted && total.is_zero() {
        errs.add(
            weights_path,
            Violation::custom("must have at least one none zero weight"),
        );
    }
    errs
}

fn check_price_sources(
    config: &CompositePriceConfiguration,
    path: &str,
    last_trade: bool,
    limits: &MarketLimits,
) -> Errors {
    let mut errs = Errors::new();
    let specs = &config.data_sources_spec;
    let bindings = &config.data_sources_spec_binding;
    let specs_path = format!("{path}.data_sources_spec");

    if specs.len() != bindings.len() {
        errs.add(
            specs_path.as_str(),
            Violation::custom("must have the same number of elements as the corresponding bindings"),
        );
    }

    let max_sources = limits.max_composite_data_sources;
    if specs.len() > max_sources {
        errs.add(
            specs_path.as_str(),
            Violation::custom(format!(
                "too many data source specs - must be less than or equal to {max_sources}"
            )),
        );
    }

    if !last_trade && config.source_staleness_tolerance.len() != config.source_count() {
        errs.add(
            format!("{path}.source_staleness_tolerance"),
            Violation::custom("must included staleness information for all price sources"),
        );
    }

    if last_trade && !specs.is_empty() {
        errs.add(
            specs_path.as_str(),
            Violation::custom("are not supported for last trade composite price type"),
        );
    }

    if bindings.len() != specs.len() {
        errs.add(
            format!("{path}.data_sources_spec_binding"),
            Violation::custom("must be defined for all oracles"),
        );
        return errs;
    }

    for (i, (spec, binding)) in specs.iter().zip(bindings).enumerate() {
        errs.merge(check_data_source(
            Some(spec),
            &format!("data_sources_spec.{i}"),
            path,
            PRICE_SOURCE,
        ));
        errs.merge(check_price_source_binding(
            Some(binding),
            Some(spec),
            &format!("{path}.data_sources_spec_binding.{i}"),
        ));
    }
    errs
}
