//! # Risk Model Rules
//!
//! Simple and log-normal risk models. Log-normal parameters are checked one
//! at a time and the first failure ends the check: later parameters are
//! only meaningful relative to earlier ones.
//!
//! Spot markets use tighter log-normal bounds than futures.

use super::MarketFamily;
use crate::error::Violation;
use crate::validation::Errors;
use std::ops::RangeInclusive;
use types::market::parameters::{LogNormalRiskModel, RiskParameters, SimpleModelParams};

pub(crate) fn check_risk(
    params: Option<&RiskParameters>,
    parent: &str,
    family: MarketFamily,
) -> Errors {
    let path = format!("{parent}.risk_parameters");
    let errs = Errors::new();
    match params {
        None => errs.final_add_for_property(path, Violation::IsRequired),
        Some(RiskParameters::Simple(None)) => {
            errs.final_add_for_property(format!("{path}.simple"), Violation::IsRequired)
        }
        Some(RiskParameters::Simple(Some(simple))) => {
            check_simple(simple, &format!("{path}.simple"))
        }
        Some(RiskParameters::LogNormal(None)) => {
            errs.final_add_for_property(format!("{path}.log_normal"), Violation::IsRequired)
        }
        Some(RiskParameters::LogNormal(Some(model))) => {
            let path = format!("{path}.log_normal");
            match family {
                MarketFamily::Futures => check_log_normal_futures(model, &path),
                MarketFamily::Spot => check_log_normal_spot(model, &path),
            }
        }
    }
}

fn check_simple(simple: &SimpleModelParams, path: &str) -> Errors {
    let mut errs = Errors::new();
    if simple.min_move_down > 0.0 {
        errs.add(format!("{path}.min_move_down"), Violation::MustBeNegativeOrZero);
    }
    if simple.max_move_up < 0.0 {
        errs.add(format!("{path}.max_move_up"), Violation::MustBePositiveOrZero);
    }
    if !(0.0..=1.0).contains(&simple.probability_of_trading) {
        errs.add(
            format!("{path}.probability_of_trading"),
            Violation::custom("should be between 0 (inclusive) and 1 (inclusive)"),
        );
    }
    errs
}

fn check_log_normal_futures(model: &LogNormalRiskModel, path: &str) -> Errors {
    let errs = Errors::new();
    let Some(params) = model.params.as_ref() else {
        return errs.final_add_for_property(format!("{path}.params"), Violation::IsRequired);
    };

    if !(model.risk_aversion_parameter > 0.0) {
        return errs.final_add_for_property(
            format!("{path}.risk_aversion_parameter"),
            Violation::MustBePositive,
        );
    }
    if !(model.tau > 0.0) {
        return errs.final_add_for_property(format!("{path}.tau"), Violation::MustBePositive);
    }
    if params.mu.is_nan() {
        return errs.final_add_for_property(format!("{path}.params.mu"), Violation::IsNotValidNumber);
    }
    if params.sigma.is_nan() {
        return errs
            .final_add_for_property(format!("{path}.params.sigma"), Violation::IsNotValidNumber);
    }
    if params.sigma <= 0.0 {
        return errs.final_add_for_property(format!("{path}.params.sigma"), Violation::MustBePositive);
    }
    if params.r.is_nan() {
        return errs.final_add_for_property(format!("{path}.params.r"), Violation::IsNotValidNumber);
    }
    errs
}

const SPOT_RISK_AVERSION: RangeInclusive<f64> = 1e-8..=0.1;
const SPOT_TAU: RangeInclusive<f64> = 1e-8..=1.0;
const SPOT_MU: RangeInclusive<f64> = -1e-6..=1e-6;
const SPOT_SIGMA: RangeInclusive<f64> = 1e-3..=50.0;
const SPOT_R: RangeInclusive<f64> = -1.0..=1.0;

fn check_log_normal_spot(model: &LogNormalRiskModel, path: &str) -> Errors {
    let errs = Errors::new();
    let Some(params) = model.params.as_ref() else {
        return errs.final_add_for_property(format!("{path}.params"), Violation::IsRequired);
    };

    if !SPOT_RISK_AVERSION.contains(&model.risk_aversion_parameter) {
        return errs.final_add_for_property(
            format!("{path}.risk_aversion_parameter"),
            Violation::custom("must be between [1e-8, 0.1]"),
        );
    }
    if !SPOT_TAU.contains(&model.tau) {
        return errs.final_add_for_property(
            format!("{path}.tau"),
            Violation::custom("must be between [1e-8, 1]"),
        );
    }

    let checks = [
        ("mu", params.mu, SPOT_MU, "must be between [-1e-6,1e-6]"),
        ("sigma", params.sigma, SPOT_SIGMA, "must be between [1e-3,50]"),
        ("r", params.r, SPOT_R, "must be between [-1,1]"),
    ];
    for (field, value, range, message) in checks {
        let field_path = format!("{path}.params.{field}");
        if value.is_nan() {
            return errs.final_add_for_property(field_path, Violation::IsNotValidNumber);
        }
        if !range.contains(&value) {
            return errs.final_add_for_property(field_path, Violation::custom(message));
        }
    }
    errs
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::market::parameters::LogNormalModelParams;

    fn log_normal(risk_aversion: f64, tau: f64, mu: f64, sigma: f64, r: f64) -> RiskParameters {
        RiskParameters::LogNormal(Some(LogNormalRiskModel {
            risk_aversion_parameter: risk_aversion,
            tau,
            params: Some(LogNormalModelParams { mu, r, sigma }),
        }))
    }

    #[test]
    fn test_missing_risk_parameters() {
        let errs = check_risk(None, "m", MarketFamily::Futures);
        assert!(errs.contains("m.risk_parameters", &Violation::IsRequired));

        let errs = check_risk(Some(&RiskParameters::Simple(None)), "m", MarketFamily::Futures);
        assert!(errs.contains("m.risk_parameters.simple", &Violation::IsRequired));
    }

    #[test]
    fn test_simple_model() {
        let simple = RiskParameters::Simple(Some(SimpleModelParams {
            factor_long: 0.15,
            factor_short: 0.25,
            max_move_up: -1.0,
            min_move_down: 1.0,
            probability_of_trading: 2.0,
        }));
        let errs = check_risk(Some(&simple), "m", MarketFamily::Futures);
        let path = "m.risk_parameters.simple";
        assert!(errs.contains(&format!("{path}.min_move_down"), &Violation::MustBeNegativeOrZero));
        assert!(errs.contains(&format!("{path}.max_move_up"), &Violation::MustBePositiveOrZero));
        assert!(errs.contains(
            &format!("{path}.probability_of_trading"),
            &Violation::custom("should be between 0 (inclusive) and 1 (inclusive)")
        ));
    }

    #[test]
    fn test_futures_log_normal_stops_at_first_failure() {
        let params = log_normal(0.0, -1.0, f64::NAN, 0.0, 0.0);
        let errs = check_risk(Some(&params), "m", MarketFamily::Futures);
        assert_eq!(errs.len(), 1);
        assert!(errs.contains(
            "m.risk_parameters.log_normal.risk_aversion_parameter",
            &Violation::MustBePositive
        ));
    }

    #[test]
    fn test_futures_log_normal_sigma() {
        let params = log_normal(0.01, 0.0001, 0.0, -0.5, 0.016);
        let errs = check_risk(Some(&params), "m", MarketFamily::Futures);
        assert!(errs.contains(
            "m.risk_parameters.log_normal.params.sigma",
            &Violation::MustBePositive
        ));
    }

    #[test]
    fn test_spot_log_normal_bounds() {
        let accepted = log_normal(0.01, 0.0001, 0.0, 1.5, 0.0);
        assert!(check_risk(Some(&accepted), "m", MarketFamily::Spot).is_empty());
        assert!(check_risk(Some(&accepted), "m", MarketFamily::Futures).is_empty());

        let wide_sigma = log_normal(0.01, 0.0001, 0.0, 60.0, 0.0);
        let errs = check_risk(Some(&wide_sigma), "m", MarketFamily::Spot);
        assert!(errs.contains(
            "m.risk_parameters.log_normal.params.sigma",
            &Violation::custom("must be between [1e-3,50]")
        ));
        assert!(check_risk(Some(&wide_sigma), "m", MarketFamily::Futures).is_empty());
    }
}
