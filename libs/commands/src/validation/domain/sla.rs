//! Optional market blocks: liquidity SLA, liquidity fee settings and the
//! liquidation strategy. Each is checked only when present.

use super::check_enum;
use crate::error::Violation;
use crate::validation::config::MarketLimits;
use crate::validation::numeric::{check_decimal, parse_decimal};
use crate::validation::Errors;
use rust_decimal::Decimal;
use types::market::parameters::{
    LiquidationStrategy, LiquidityFeeMethod, LiquidityFeeSettings, LiquiditySlaParameters,
};

const MAX_PRICE_RANGE: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

pub(crate) fn check_sla(
    params: Option<&LiquiditySlaParameters>,
    parent: &str,
    limits: &MarketLimits,
) -> Errors {
    let mut errs = Errors::new();
    let Some(params) = params else {
        return errs;
    };
    let path = format!("{parent}.sla_params");

    let range_path = format!("{path}.price_range");
    if let Some(range) = check_decimal(&mut errs, &range_path, &params.price_range) {
        if range <= Decimal::ZERO || range > MAX_PRICE_RANGE {
            errs.add(range_path, Violation::MustBeWithinRangeGT0LT20);
        }
    }

    for (field, value) in [
        ("commitment_min_time_fraction", &params.commitment_min_time_fraction),
        ("sla_competition_factor", &params.sla_competition_factor),
    ] {
        let field_path = format!("{path}.{field}");
        if let Some(fraction) = check_decimal(&mut errs, &field_path, value) {
            if fraction < Decimal::ZERO || fraction > Decimal::ONE {
                errs.add(field_path, Violation::MustBeWithinRange01);
            }
        }
    }

    let max_hysteresis = limits.max_performance_hysteresis_epochs;
    if params.performance_hysteresis_epochs > max_hysteresis {
        errs.add(
            format!("{path}.performance_hysteresis_epochs"),
            Violation::MustBeAtMost(max_hysteresis),
        );
    }
    errs
}

pub(crate) fn check_fee_settings(settings: Option<&LiquidityFeeSettings>, parent: &str) -> Errors {
    let mut errs = Errors::new();
    let Some(settings) = settings else {
        return errs;
    };
    let path = format!("{parent}.liquidity_fee_settings");
    let method_path = format!("{path}.method");
    let constant_path = format!("{path}.fee_constant");

    let method = check_enum::<LiquidityFeeMethod>(&mut errs, &method_path, settings.method);

    match settings.fee_constant.as_deref() {
        None => {
            if method == Some(LiquidityFeeMethod::Constant) {
                errs.add(constant_path, Violation::IsRequired);
            }
        }
        Some(constant) => {
            if matches!(method, Some(m) if m != LiquidityFeeMethod::Constant) {
                errs.add(method_path, Violation::IsNotValid);
            }
            match parse_decimal(constant) {
                Err(_) => errs.add(constant_path, Violation::IsNotValidNumber),
                Ok(value) if value.is_sign_negative() && !value.is_zero() => {
                    errs.add(constant_path, Violation::MustBePositiveOrZero)
                }
                Ok(value) if value > Decimal::ONE => {
                    errs.add(constant_path, Violation::MustBeWithinRange01)
                }
                Ok(_) => {}
            }
        }
    }
    errs
}

pub(crate) fn check_liquidation(
    strategy: Option<&LiquidationStrategy>,
    parent: &str,
    limits: &MarketLimits,
) -> Errors {
    let mut errs = Errors::new();
    let Some(strategy) = strategy else {
        return errs;
    };
    let path = format!("{parent}.liquidation_strategy");

    for (field, value) in [
        ("disposal_fraction", &strategy.disposal_fraction),
        ("max_fraction_consumed", &strategy.max_fraction_consumed),
    ] {
        let in_range = parse_decimal(value)
            .map(|fraction| fraction > Decimal::ZERO && fraction <= Decimal::ONE)
            .unwrap_or(false);
        if !in_range {
            errs.add(format!("{path}.{field}"), Violation::MustBeBetween01);
        }
    }

    let step_path = format!("{path}.disposal_time_step");
    let max_step = limits.max_disposal_time_step;
    if strategy.disposal_time_step < 1 {
        errs.add(step_path, Violation::MustBePositive);
    } else if strategy.disposal_time_step > max_step {
        errs.add(step_path, Violation::MustBeAtMost(max_step.unsigned_abs()));
    }
    errs
}
