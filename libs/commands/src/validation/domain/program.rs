//! # Program Rules
//!
//! Referral, volume discount and volume rebate programs share a schedule
//! (end timestamp after enactment, window length in epochs) and differ in
//! their tiers.

use crate::error::Violation;
use crate::validation::config::{ProgramLimits, ValidationConfig};
use crate::validation::numeric::{check_decimal, check_positive_integer};
use crate::validation::Errors;
use rust_decimal::Decimal;
use std::collections::HashSet;
use types::program::{
    BenefitTier, StakingTier, UpdateReferralProgram, UpdateVolumeDiscountProgram,
    UpdateVolumeRebateProgram, VolumeBenefitTier, VolumeRebateBenefitTier,
};
use types::ProposalTerms;

pub(crate) fn check_update_referral_program(
    program: Option<&UpdateReferralProgram>,
    terms: &ProposalTerms,
    config: &ValidationConfig,
) -> Errors {
    let mut errs = Errors::new();
    let Some(program) = program else {
        return errs.final_add_for_property("update_referral_program", Violation::IsRequired);
    };
    let path = "update_referral_program.changes";
    let Some(changes) = program.changes.as_ref() else {
        return errs.final_add_for_property(path, Violation::IsRequired);
    };

    check_schedule(
        &mut errs,
        path,
        changes.end_of_program_timestamp,
        changes.window_length,
        terms,
        &config.program,
    );

    let mut seen_tiers = HashSet::new();
    for (i, tier) in changes.benefit_tiers.iter().enumerate() {
        let tier_path = format!("{path}.benefit_tiers.{i}");
        check_benefit_tier(&mut errs, tier, &tier_path);
        let key = (
            tier.minimum_running_notional_taker_volume.as_str(),
            tier.minimum_epochs.as_str(),
        );
        if !seen_tiers.insert(key) {
            errs.add(tier_path, Violation::custom("duplicate benefit tier"));
        }
    }

    let mut seen_stakes = HashSet::new();
    for (i, tier) in changes.staking_tiers.iter().enumerate() {
        let tier_path = format!("{path}.staking_tiers.{i}");
        check_staking_tier(&mut errs, tier, &tier_path);
        if !seen_stakes.insert(tier.minimum_staked_tokens.as_str()) {
            errs.add(tier_path, Violation::custom("duplicate staking tier"));
        }
    }

    errs
}

pub(crate) fn check_update_volume_discount_program(
    program: Option<&UpdateVolumeDiscountProgram>,
    terms: &ProposalTerms,
    config: &ValidationConfig,
) -> Errors {
    let mut errs = Errors::new();
    let Some(program) = program else {
        return errs.final_add_for_property("update_volume_discount_program", Violation::IsRequired);
    };
    let path = "update_volume_discount_program.changes";
    let Some(changes) = program.changes.as_ref() else {
        return errs.final_add_for_property(path, Violation::IsRequired);
    };

    check_schedule(
        &mut errs,
        path,
        changes.end_of_program_timestamp,
        changes.window_length,
        terms,
        &config.program,
    );

    for (i, tier) in changes.benefit_tiers.iter().enumerate() {
        check_volume_discount_tier(&mut errs, tier, &format!("{path}.benefit_tiers.{i}"));
    }
    errs
}

pub(crate) fn check_update_volume_rebate_program(
    program: Option<&UpdateVolumeRebateProgram>,
    terms: &ProposalTerms,
    config: &ValidationConfig,
) -> Errors {
    let mut errs = Errors::new();
    let Some(program) = program else {
        return errs.final_add_for_property("update_volume_rebate_program", Violation::IsRequired);
    };
    let path = "update_volume_rebate_program.changes";
    let Some(changes) = program.changes.as_ref() else {
        return errs.final_add_for_property(path, Violation::IsRequired);
    };

    check_schedule(
        &mut errs,
        path,
        changes.end_of_program_timestamp,
        changes.window_length,
        terms,
        &config.program,
    );

    for (i, tier) in changes.benefit_tiers.iter().enumerate() {
        check_volume_rebate_tier(&mut errs, tier, &format!("{path}.benefit_tiers.{i}"));
    }
    errs
}

fn check_schedule(
    errs: &mut Errors,
    path: &str,
    end_of_program: i64,
    window_length: u64,
    terms: &ProposalTerms,
    limits: &ProgramLimits,
) {
    let end_path = format!("{path}.end_of_program_timestamp");
    if end_of_program == 0 {
        errs.add(end_path, Violation::IsRequired);
    } else if end_of_program < 0 {
        errs.add(end_path, Violation::MustBePositive);
    } else if end_of_program <= terms.enactment_timestamp {
        errs.add(end_path, Violation::MustBeGreaterThanEnactmentTimestamp);
    }

    let window_path = format!("{path}.window_length");
    if window_length == 0 {
        errs.add(window_path, Violation::IsRequired);
    } else if window_length > limits.max_window_length {
        errs.add(window_path, Violation::MustBeAtMost(limits.max_window_length));
    }
}

fn check_benefit_tier(errs: &mut Errors, tier: &BenefitTier, path: &str) {
    check_positive_integer(
        errs,
        &format!("{path}.minimum_running_notional_taker_volume"),
        &tier.minimum_running_notional_taker_volume,
    );
    check_positive_integer(errs, &format!("{path}.minimum_epochs"), &tier.minimum_epochs);
    check_non_negative(
        errs,
        &format!("{path}.referral_reward_factor"),
        &tier.referral_reward_factor,
    );
    check_non_negative(
        errs,
        &format!("{path}.referral_discount_factor"),
        &tier.referral_discount_factor,
    );
}

fn check_staking_tier(errs: &mut Errors, tier: &StakingTier, path: &str) {
    check_positive_integer(
        errs,
        &format!("{path}.minimum_staked_tokens"),
        &tier.minimum_staked_tokens,
    );
    let multiplier_path = format!("{path}.referral_reward_multiplier");
    if let Some(multiplier) = check_decimal(errs, &multiplier_path, &tier.referral_reward_multiplier)
    {
        if multiplier < Decimal::ONE {
            errs.add(multiplier_path, Violation::MustBeGTE1);
        }
    }
}

fn check_volume_discount_tier(errs: &mut Errors, tier: &VolumeBenefitTier, path: &str) {
    check_positive_integer(
        errs,
        &format!("{path}.minimum_running_notional_taker_volume"),
        &tier.minimum_running_notional_taker_volume,
    );
    check_non_negative(
        errs,
        &format!("{path}.volume_discount_factor"),
        &tier.volume_discount_factor,
    );
}

fn check_volume_rebate_tier(errs: &mut Errors, tier: &VolumeRebateBenefitTier, path: &str) {
    let fraction_path = format!("{path}.minimum_party_maker_volume_fraction");
    if let Some(fraction) =
        check_decimal(errs, &fraction_path, &tier.minimum_party_maker_volume_fraction)
    {
        if fraction <= Decimal::ZERO {
            errs.add(fraction_path, Violation::MustBePositive);
        }
    }
    check_non_negative(
        errs,
        &format!("{path}.additional_maker_rebate"),
        &tier.additional_maker_rebate,
    );
}

fn check_non_negative(errs: &mut Errors, path: &str, value: &str) {
    if let Some(value) = check_decimal(errs, path, value) {
        if value < Decimal::ZERO {
            errs.add(path, Violation::MustBePositiveOrZero);
        }
    }
}
