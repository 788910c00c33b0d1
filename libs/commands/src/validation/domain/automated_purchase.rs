//! # Protocol Automated Purchase Rules
//!
//! Periodic auctions in which the protocol sells an asset from its buy-back
//! account. Both the auction schedule and the volume snapshot schedule must
//! be internal time triggers; the price comes from an oracle.

use super::data_source::{
    check_data_source, check_price_source_binding, check_time_trigger, PRICE_SOURCE,
};
use super::require_text;
use crate::error::Violation;
use crate::validation::numeric::{
    cmp_uint, is_valid_duration, parse_float, parse_integer, NumberError, Sign,
};
use crate::validation::Errors;
use std::cmp::Ordering;
use types::automated_purchase::NewProtocolAutomatedPurchase;
use types::data_source::DataSourceDefinition;
use types::transfer::AccountType;

pub(crate) fn check_automated_purchase(purchase: Option<&NewProtocolAutomatedPurchase>) -> Errors {
    let mut errs = Errors::new();
    let Some(purchase) = purchase else {
        return errs.final_add_for_property("protocol_automated_purchase", Violation::IsRequired);
    };
    let path = "protocol_automated_purchase.changes";
    let Some(changes) = purchase.changes.as_ref() else {
        return errs.final_add_for_property(path, Violation::IsRequired);
    };

    require_text(&mut errs, &format!("{path}.from"), &changes.from);

    let from_path = format!("{path}.from_account_type");
    match AccountType::try_from(changes.from_account_type) {
        _ if changes.from_account_type == 0 => errs.add(from_path, Violation::IsRequired),
        Ok(AccountType::BuyBackFees) => {}
        _ => errs.add(from_path, Violation::IsNotValid),
    }

    let to_path = format!("{path}.to_account_type");
    match AccountType::try_from(changes.to_account_type) {
        _ if changes.to_account_type == 0 => errs.add(to_path, Violation::IsRequired),
        Ok(
            AccountType::GlobalInsurance
            | AccountType::GlobalReward
            | AccountType::NetworkTreasury
            | AccountType::BuyBackFees,
        ) => {}
        _ => errs.add(to_path, Violation::IsNotValid),
    }

    require_text(&mut errs, &format!("{path}.market_id"), &changes.market_id);

    let offset_path = format!("{path}.oracle_offset_factor");
    match parse_float(&changes.oracle_offset_factor) {
        Err(NumberError::Empty) => errs.add(offset_path, Violation::IsRequired),
        Err(_) => errs.add(offset_path, Violation::NotAValidFloat),
        Ok(factor) if factor <= 0.0 => errs.add(offset_path, Violation::MustBePositive),
        Ok(_) => {}
    }

    let duration_path = format!("{path}.auction_duration");
    if changes.auction_duration.is_empty() {
        errs.add(duration_path, Violation::IsRequired);
    } else if !is_valid_duration(&changes.auction_duration) {
        errs.add(duration_path, Violation::MustBeValidDuration);
    }

    let min_valid = check_auction_size(
        &mut errs,
        &format!("{path}.minimum_auction_size"),
        &changes.minimum_auction_size,
    );
    let max_path = format!("{path}.maximum_auction_size");
    let max_valid = check_auction_size(&mut errs, &max_path, &changes.maximum_auction_size);
    if min_valid
        && max_valid
        && cmp_uint(&changes.maximum_auction_size, &changes.minimum_auction_size)
            == Some(Ordering::Less)
    {
        errs.add(
            max_path,
            Violation::custom("must be greater than or equal to minimum_auction_size"),
        );
    }

    if changes.expiry_timestamp < 0 {
        errs.add(
            format!("{path}.expiry_timestamp"),
            Violation::MustBePositiveOrZero,
        );
    }

    errs.merge(check_schedule(
        changes.auction_schedule.as_ref(),
        &format!("{path}.auction_schedule"),
        "auction schedule must be an internal time trigger",
    ));
    errs.merge(check_schedule(
        changes.auction_volume_snapshot_schedule.as_ref(),
        &format!("{path}.auction_volume_snapshot_schedule"),
        "auction volume snapshot schedule must be an internal time trigger",
    ));

    errs.merge(check_data_source(
        changes.price_oracle.as_ref(),
        "price_oracle",
        path,
        PRICE_SOURCE,
    ));
    errs.merge(check_price_source_binding(
        changes.price_oracle_spec_binding.as_ref(),
        changes.price_oracle.as_ref(),
        &format!("{path}.price_oracle_spec_binding"),
    ));

    errs
}

/// Required strictly positive integer size; returns whether it is usable.
fn check_auction_size(errs: &mut Errors, path: &str, value: &str) -> bool {
    if value.is_empty() {
        errs.add(path, Violation::IsRequired);
        return false;
    }
    if parse_integer(value) != Ok(Sign::Positive) {
        errs.add(path, Violation::MustBePositive);
        return false;
    }
    true
}

fn check_schedule(schedule: Option<&DataSourceDefinition>, path: &str, not_trigger: &str) -> Errors {
    let errs = Errors::new();
    let Some(schedule) = schedule else {
        return errs.final_add_for_property(path, Violation::IsRequired);
    };
    if !schedule.is_internal_time_trigger() {
        return errs.final_add_for_property(path, Violation::custom(not_trigger));
    }
    let trigger_path = format!("{path}.internal.timetrigger");
    match schedule.time_trigger() {
        None => errs.final_add_for_property(trigger_path, Violation::IsRequired),
        Some(trigger) => check_time_trigger(trigger, &trigger_path),
    }
}
