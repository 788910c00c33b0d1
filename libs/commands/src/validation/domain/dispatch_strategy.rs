//! # Reward Dispatch Strategy Rules
//!
//! A recurring transfer into a metric based reward pool carries a dispatch
//! strategy describing who qualifies and how the pool is split. Which
//! fields are allowed depends on the destination pool, the entity scope and
//! the distribution strategy.
//!
//! Two destinations are special:
//! - market proposer rewards are paid per market, so there is no metric
//!   asset, window, team scope or distribution strategy;
//! - validator ranking rewards are paid from validator scores, so there is
//!   no metric asset and no staking or position requirement.

use super::check_enum;
use crate::error::Violation;
use crate::validation::config::ProgramLimits;
use crate::validation::numeric::{parse_decimal, parse_integer, NumberError, Sign};
use crate::validation::Errors;
use rust_decimal::Decimal;
use types::transfer::{
    AccountType, DispatchMetric, DispatchStrategy, DistributionStrategy, EntityScope,
    IndividualScope,
};

pub(crate) fn check_dispatch_strategy(
    strategy: &DispatchStrategy,
    destination: AccountType,
    path: &str,
    destination_type_path: &str,
    limits: &ProgramLimits,
) -> Errors {
    let mut errs = Errors::new();
    if !destination.is_metric_reward() {
        return errs.final_add_for_property(destination_type_path, Violation::IsNotValid);
    }

    let proposers = destination == AccountType::RewardMarketProposers;
    let validator_ranking = destination == AccountType::RewardValidatorRanking;

    let asset_path = format!("{path}.asset_for_metric");
    if strategy.asset_for_metric.is_empty() {
        if !proposers && !validator_ranking {
            errs.add(asset_path, Violation::IsRequired);
        }
    } else {
        if !types::is_valid_id(&strategy.asset_for_metric) {
            errs.add(asset_path.as_str(), Violation::ShouldBeAValidId);
        }
        if validator_ranking {
            errs.add(
                asset_path,
                Violation::custom("not be specified when to_account type is VALIDATOR_RANKING"),
            );
        }
    }

    if destination.dispatch_metric().map(|m| m as i32) != Some(strategy.metric) {
        let metric = DispatchMetric::try_from(strategy.metric)
            .map(|m| m.wire_name().to_string())
            .unwrap_or_else(|_| strategy.metric.to_string());
        errs.add(
            format!("{path}.dispatch_metric"),
            Violation::custom(format!(
                "cannot set toAccountType to {} when dispatch metric is set to {metric}",
                destination.wire_name()
            )),
        );
    }

    let scope = check_enum::<EntityScope>(
        &mut errs,
        &format!("{path}.entity_scope"),
        strategy.entity_scope,
    );
    check_scopes(&mut errs, strategy, scope, destination, path);

    let distribution = check_distribution(&mut errs, strategy, proposers, path, destination);

    for (field, value) in [
        ("staking_requirement", &strategy.staking_requirement),
        (
            "notional_time_weighted_average_position_requirement",
            &strategy.notional_time_weighted_average_position_requirement,
        ),
    ] {
        if value.is_empty() {
            continue;
        }
        let field_path = format!("{path}.{field}");
        if proposers || validator_ranking {
            errs.add(
                field_path,
                Violation::custom(format!(
                    "should not be set if to_account is set to {}",
                    destination.wire_name()
                )),
            );
            continue;
        }
        match parse_integer(value) {
            Err(_) => errs.add(field_path, Violation::NotAValidInteger),
            Ok(Sign::Negative) => errs.add(field_path, Violation::MustBePositiveOrZero),
            Ok(_) => {}
        }
    }

    let window_path = format!("{path}.window_length");
    let max_window = limits.max_window_length;
    if strategy.window_length > 0 && proposers {
        errs.add(
            window_path,
            Violation::custom("should not be set for ACCOUNT_TYPE_REWARD_MARKET_PROPOSERS"),
        );
    } else if strategy.window_length == 0 && !proposers {
        errs.add(
            window_path,
            Violation::custom(format!("must be between 1 and {max_window}")),
        );
    } else if strategy.window_length > max_window {
        errs.add(window_path, Violation::MustBeAtMost(max_window));
    }

    check_rank_table(&mut errs, strategy, distribution, path, limits);

    if let Some(cap) = strategy.cap_reward_fee_multiple.as_deref() {
        if !cap.is_empty() {
            let cap_path = format!("{path}.cap_reward_fee_multiple");
            match parse_decimal(cap) {
                Err(_) => errs.add(cap_path, Violation::IsNotValidNumber),
                Ok(value) if value <= Decimal::ZERO => errs.add(cap_path, Violation::MustBePositive),
                Ok(_) => {}
            }
        }
    }

    errs
}

fn check_scopes(
    errs: &mut Errors,
    strategy: &DispatchStrategy,
    scope: Option<EntityScope>,
    destination: AccountType,
    path: &str,
) {
    let top_path = format!("{path}.n_top_performers");
    match scope {
        Some(EntityScope::Teams) => {
            if destination == AccountType::RewardMarketProposers {
                errs.add(
                    format!("{path}.entity_scope"),
                    Violation::custom(format!(
                        "{} is not allowed for {}",
                        EntityScope::Teams.wire_name(),
                        destination.wire_name()
                    )),
                );
            }
            match parse_decimal(&strategy.n_top_performers) {
                Err(NumberError::Empty) => errs.add(top_path, Violation::IsRequired),
                Err(_) => errs.add(top_path, Violation::IsNotValidNumber),
                Ok(value) if value <= Decimal::ZERO || value > Decimal::ONE => {
                    errs.add(top_path, Violation::MustBeBetween01)
                }
                Ok(_) => {}
            }
        }
        _ => {
            if !strategy.n_top_performers.is_empty() {
                errs.add(
                    top_path,
                    Violation::custom("must not be set when entity scope is not ENTITY_SCOPE_TEAMS"),
                );
            }
        }
    }

    let individual_path = format!("{path}.individual_scope");
    match scope {
        Some(EntityScope::Individuals) => {
            check_enum::<IndividualScope>(errs, &individual_path, strategy.individual_scope);
            if !strategy.team_scope.is_empty() {
                errs.add(
                    format!("{path}.team_scope"),
                    Violation::custom(format!(
                        "should not be set when entity_scope is set to {}",
                        EntityScope::Individuals.wire_name()
                    )),
                );
            }
        }
        Some(other) => {
            if strategy.individual_scope != 0 {
                errs.add(
                    individual_path,
                    Violation::custom(format!(
                        "should not be set when entity_scope is set to {}",
                        other.wire_name()
                    )),
                );
            }
        }
        None => {}
    }
}

fn check_distribution(
    errs: &mut Errors,
    strategy: &DispatchStrategy,
    proposers: bool,
    path: &str,
    destination: AccountType,
) -> Option<DistributionStrategy> {
    let distribution_path = format!("{path}.distribution_strategy");
    if strategy.distribution_strategy == 0 {
        if !proposers {
            errs.add(distribution_path, Violation::IsRequired);
        }
        return None;
    }
    if proposers {
        errs.add(
            distribution_path,
            Violation::custom(format!(
                "should not be set when to_account is set to {}",
                destination.wire_name()
            )),
        );
        return None;
    }
    check_enum::<DistributionStrategy>(errs, &distribution_path, strategy.distribution_strategy)
}

fn check_rank_table(
    errs: &mut Errors,
    strategy: &DispatchStrategy,
    distribution: Option<DistributionStrategy>,
    path: &str,
    limits: &ProgramLimits,
) {
    let table_path = format!("{path}.rank_table");
    let ranked = distribution == Some(DistributionStrategy::Rank);

    if ranked && strategy.rank_table.is_empty() {
        errs.add(table_path.as_str(), Violation::MustBePositive);
    }
    if !ranked && !strategy.rank_table.is_empty() {
        let name = DistributionStrategy::try_from(strategy.distribution_strategy)
            .map(|d| d.wire_name().to_string())
            .unwrap_or_else(|_| strategy.distribution_strategy.to_string());
        errs.add(
            table_path.as_str(),
            Violation::custom(format!("should not be set for distribution strategy {name}")),
        );
    }

    let max_size = limits.max_rank_table_size;
    if strategy.rank_table.len() > max_size {
        errs.add(table_path.as_str(), Violation::MustBeAtMost(max_size as u64));
    }

    for (i, pair) in strategy.rank_table.windows(2).enumerate() {
        if pair[1].start_rank <= pair[0].start_rank {
            errs.add(
                format!("{table_path}.{}.start_rank", i + 1),
                Violation::custom(format!("must be greater than start_rank of element #{i}")),
            );
            break;
        }
    }
}
