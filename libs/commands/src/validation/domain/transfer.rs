//! # Governance Transfer Rules
//!
//! Governance may move funds out of three protocol accounts: the network
//! treasury, a market's insurance pool and the global insurance pool. Each
//! source has its own set of permitted destinations.
//!
//! | Source | Extra destinations beyond the common set |
//! |--------|------------------------------------------|
//! | Network treasury | global insurance |
//! | Insurance | global insurance, network treasury |
//! | Global insurance | network treasury |
//!
//! The common set is a general account, a market insurance pool, the
//! global reward pool and every metric based reward pool.

use super::dispatch_strategy::check_dispatch_strategy;
use super::check_enum;
use crate::error::Violation;
use crate::validation::config::ValidationConfig;
use crate::validation::numeric::{parse_decimal, parse_uint};
use crate::validation::Errors;
use rust_decimal::Decimal;
use types::transfer::{
    AccountType, CancelTransfer, GovernanceTransferType, NewTransfer, TransferKind,
};

const COMMON_DESTINATIONS: [AccountType; 3] = [
    AccountType::General,
    AccountType::Insurance,
    AccountType::GlobalReward,
];

fn is_transfer_source(account: AccountType) -> bool {
    matches!(
        account,
        AccountType::NetworkTreasury | AccountType::Insurance | AccountType::GlobalInsurance
    )
}

fn is_allowed_destination(source: AccountType, destination: AccountType) -> bool {
    if COMMON_DESTINATIONS.contains(&destination) || destination.is_metric_reward() {
        return true;
    }
    match source {
        AccountType::NetworkTreasury => destination == AccountType::GlobalInsurance,
        AccountType::Insurance => matches!(
            destination,
            AccountType::GlobalInsurance | AccountType::NetworkTreasury
        ),
        AccountType::GlobalInsurance => destination == AccountType::NetworkTreasury,
        _ => false,
    }
}

pub(crate) fn check_new_transfer(transfer: Option<&NewTransfer>, config: &ValidationConfig) -> Errors {
    let mut errs = Errors::new();
    let Some(transfer) = transfer else {
        return errs.final_add_for_property("new_transfer", Violation::IsRequired);
    };
    let path = "new_transfer.changes";
    let Some(changes) = transfer.changes.as_ref() else {
        return errs.final_add_for_property(path, Violation::IsRequired);
    };

    let source_type_path = format!("{path}.source_type");
    if changes.source_type == 0 {
        return errs.final_add_for_property(source_type_path, Violation::IsRequired);
    }
    let source_type = match AccountType::try_from(changes.source_type) {
        Ok(account) if is_transfer_source(account) => account,
        _ => return errs.final_add_for_property(source_type_path, Violation::IsNotValid),
    };

    let destination_type_path = format!("{path}.destination_type");
    if changes.destination_type == 0 {
        return errs.final_add_for_property(destination_type_path, Violation::IsRequired);
    }
    let destination_type = match AccountType::try_from(changes.destination_type) {
        Ok(account) if is_allowed_destination(source_type, account) => account,
        _ => return errs.final_add_for_property(destination_type_path, Violation::IsNotValid),
    };

    let destination_path = format!("{path}.destination");
    if destination_type == AccountType::General
        && !types::is_valid_public_key(&changes.destination)
    {
        errs.add(destination_path.as_str(), Violation::ShouldBeAValidPublicKey);
    }

    let source_path = format!("{path}.source");
    if source_type == AccountType::Insurance {
        if changes.source.is_empty() {
            return errs.final_add_for_property(source_path, Violation::IsNotValid);
        }
        if destination_type == AccountType::Insurance && changes.source == changes.destination {
            return errs.final_add_for_property(destination_path, Violation::IsNotValid);
        }
    } else if !changes.source.is_empty() {
        return errs.final_add_for_property(source_path, Violation::IsNotValid);
    }

    if matches!(destination_type, AccountType::General | AccountType::Insurance)
        && changes.destination.is_empty()
    {
        return errs.final_add_for_property(destination_path, Violation::IsNotValid);
    }

    check_enum::<GovernanceTransferType>(
        &mut errs,
        &format!("{path}.transfer_type"),
        changes.transfer_type,
    );

    let amount_path = format!("{path}.amount");
    if changes.amount.is_empty() {
        errs.add(amount_path, Violation::IsRequired);
    } else if parse_uint(&changes.amount).is_err() {
        errs.add(amount_path, Violation::IsNotValid);
    }

    if changes.asset.is_empty() {
        errs.add(format!("{path}.asset"), Violation::IsRequired);
    }

    let fraction_path = format!("{path}.fraction_of_balance");
    if changes.fraction_of_balance.is_empty() {
        errs.add(fraction_path, Violation::IsRequired);
    } else {
        match parse_decimal(&changes.fraction_of_balance) {
            Err(_) => errs.add(fraction_path, Violation::IsNotValid),
            Ok(fraction) if fraction <= Decimal::ZERO => {
                errs.add(fraction_path, Violation::MustBePositive)
            }
            Ok(fraction) if fraction > Decimal::ONE => errs.add(fraction_path, Violation::MustBeLTE1),
            Ok(_) => {}
        }
    }

    let Some(kind) = changes.kind.as_ref() else {
        return errs.final_add_for_property(format!("{path}.kind"), Violation::IsRequired);
    };

    match kind {
        TransferKind::OneOff(one_off) => {
            if destination_type.is_metric_reward() {
                errs.add(destination_type_path, Violation::IsNotValid);
            }
            if one_off.deliver_on < 0 {
                return errs.final_add_for_property(
                    "new_transfer.changes.oneoff.deliveron",
                    Violation::MustBePositiveOrZero,
                );
            }
        }
        TransferKind::Recurring(recurring) => {
            if recurring
                .end_epoch
                .is_some_and(|end| end < recurring.start_epoch)
            {
                return errs.final_add_for_property(
                    format!("{path}.recurring.end_epoch"),
                    Violation::IsNotValid,
                );
            }
            if let Some(strategy) = recurring.dispatch_strategy.as_ref() {
                if !changes.destination.is_empty() {
                    errs.add(destination_path, Violation::IsNotValid);
                }
                errs.merge(check_dispatch_strategy(
                    strategy,
                    destination_type,
                    &format!("{path}.recurring.dispatch_strategy"),
                    &destination_type_path,
                    &config.program,
                ));
            }
        }
    }
    errs
}

pub(crate) fn check_cancel_transfer(cancel: Option<&CancelTransfer>) -> Errors {
    let errs = Errors::new();
    let Some(cancel) = cancel else {
        return errs.final_add_for_property("cancel_transfer", Violation::IsRequired);
    };
    let Some(changes) = cancel.changes.as_ref() else {
        return errs.final_add_for_property("cancel_transfer.changes", Violation::IsRequired);
    };
    if changes.transfer_id.is_empty() {
        return errs.final_add_for_property(
            "cancel_transfer.changes.transferId",
            Violation::IsRequired,
        );
    }
    errs
}
