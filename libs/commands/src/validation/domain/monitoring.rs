//! Price and liquidity monitoring parameters

use super::MarketFamily;
use crate::error::Violation;
use crate::validation::config::MarketLimits;
use crate::validation::numeric::parse_decimal;
use crate::validation::Errors;
use rust_decimal::Decimal;
use types::market::parameters::{
    LiquidityMonitoringParameters, PriceMonitoringParameters, TargetStakeParameters,
};

pub(crate) fn check_price_monitoring(
    params: Option<&PriceMonitoringParameters>,
    parent: &str,
    family: MarketFamily,
    limits: &MarketLimits,
) -> Errors {
    let mut errs = Errors::new();
    let Some(params) = params else {
        return errs;
    };
    if params.triggers.is_empty() {
        return errs;
    }

    let path = format!("{parent}.price_monitoring_parameters.triggers");
    let max_triggers = limits.max_price_monitoring_triggers;
    if params.triggers.len() > max_triggers {
        errs.add(path.as_str(), Violation::TooManyTriggers(max_triggers));
    }

    for (i, trigger) in params.triggers.iter().enumerate() {
        if trigger.horizon <= 0 {
            errs.add(format!("{path}.{i}.horizon"), Violation::MustBePositive);
        }
        if trigger.auction_extension <= 0 {
            errs.add(format!("{path}.{i}.auction_extension"), Violation::MustBePositive);
        }

        let probability_path = format!("{path}.{i}.probability");
        let Ok(probability) = trigger.probability.parse::<f64>() else {
            errs.add(
                probability_path,
                Violation::custom("must be numeric and be between 0 (exclusive) and 1 (exclusive)"),
            );
            continue;
        };
        match family {
            MarketFamily::Futures if !(probability > 0.0 && probability < 1.0) => errs.add(
                probability_path,
                Violation::custom("should be between 0 (exclusive) and 1 (exclusive)"),
            ),
            MarketFamily::Spot if !(probability > 0.9 && probability < 1.0) => errs.add(
                probability_path,
                Violation::custom("should be between 0.9 (exclusive) and 1 (exclusive)"),
            ),
            _ => {}
        }
    }
    errs
}

pub(crate) fn check_liquidity_monitoring(
    params: Option<&LiquidityMonitoringParameters>,
    parent: &str,
) -> Errors {
    let path = format!("{parent}.liquidity_monitoring_parameters");
    let mut errs = Errors::new();
    let Some(params) = params else {
        return errs.final_add_for_property(path, Violation::IsRequired);
    };

    if !params.triggering_ratio.is_empty() {
        let ratio_path = format!("{path}.triggering_ratio");
        match parse_decimal(&params.triggering_ratio) {
            Err(_) => errs.add(ratio_path, Violation::IsNotValidNumber),
            Ok(ratio) if ratio < Decimal::ZERO || ratio > Decimal::ONE => {
                errs.add(ratio_path, Violation::MustBeWithinRange01)
            }
            Ok(_) => {}
        }
    }

    errs.merge(check_target_stake(
        params.target_stake_parameters.as_ref(),
        &format!("{path}.target_stake_parameters"),
    ));
    errs
}

pub(crate) fn check_target_stake(params: Option<&TargetStakeParameters>, path: &str) -> Errors {
    let mut errs = Errors::new();
    let Some(params) = params else {
        return errs.final_add_for_property(path, Violation::IsRequired);
    };

    if params.time_window <= 0 {
        errs.add(format!("{path}.time_window"), Violation::MustBePositive);
    }
    // NaN fails the comparison
    if !(params.scaling_factor > 0.0) {
        errs.add(format!("{path}.scaling_factor"), Violation::MustBePositive);
    }
    errs
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::market::parameters::PriceMonitoringTrigger;

    fn trigger(probability: &str) -> PriceMonitoringTrigger {
        PriceMonitoringTrigger {
            horizon: 60,
            probability: probability.to_string(),
            auction_extension: 30,
        }
    }

    #[test]
    fn test_absent_or_empty_is_fine() {
        let limits = MarketLimits::default();
        assert!(check_price_monitoring(None, "m", MarketFamily::Futures, &limits).is_empty());
        let empty = PriceMonitoringParameters::default();
        assert!(check_price_monitoring(Some(&empty), "m", MarketFamily::Futures, &limits).is_empty());
    }

    #[test]
    fn test_too_many_triggers() {
        let params = PriceMonitoringParameters {
            triggers: vec![trigger("0.99"); 6],
        };
        let errs = check_price_monitoring(
            Some(&params),
            "m",
            MarketFamily::Futures,
            &MarketLimits::default(),
        );
        assert!(errs.contains(
            "m.price_monitoring_parameters.triggers",
            &Violation::TooManyTriggers(5)
        ));
    }

    #[test]
    fn test_probability_ranges_by_family() {
        let params = PriceMonitoringParameters {
            triggers: vec![trigger("0.5"), trigger("1"), trigger("abc")],
        };
        let path = "m.price_monitoring_parameters.triggers";
        let limits = MarketLimits::default();

        let futures = check_price_monitoring(Some(&params), "m", MarketFamily::Futures, &limits);
        assert!(futures.get(&format!("{path}.0.probability")).is_empty());
        assert!(futures.contains(
            &format!("{path}.1.probability"),
            &Violation::custom("should be between 0 (exclusive) and 1 (exclusive)")
        ));
        assert!(futures.contains(
            &format!("{path}.2.probability"),
            &Violation::custom("must be numeric and be between 0 (exclusive) and 1 (exclusive)")
        ));

        let spot = check_price_monitoring(Some(&params), "m", MarketFamily::Spot, &limits);
        assert!(spot.contains(
            &format!("{path}.0.probability"),
            &Violation::custom("should be between 0.9 (exclusive) and 1 (exclusive)")
        ));
    }

    #[test]
    fn test_liquidity_monitoring_required() {
        let errs = check_liquidity_monitoring(None, "m");
        assert!(errs.contains("m.liquidity_monitoring_parameters", &Violation::IsRequired));
    }

    #[test]
    fn test_target_stake_rules() {
        let params = LiquidityMonitoringParameters {
            target_stake_parameters: Some(TargetStakeParameters {
                time_window: 0,
                scaling_factor: f64::NAN,
            }),
            triggering_ratio: "1.5".to_string(),
            auction_extension: 0,
        };
        let errs = check_liquidity_monitoring(Some(&params), "m");
        let path = "m.liquidity_monitoring_parameters";
        assert!(errs.contains(&format!("{path}.triggering_ratio"), &Violation::MustBeWithinRange01));
        assert!(errs.contains(
            &format!("{path}.target_stake_parameters.time_window"),
            &Violation::MustBePositive
        ));
        assert!(errs.contains(
            &format!("{path}.target_stake_parameters.scaling_factor"),
            &Violation::MustBePositive
        ));
    }
}
