//! Asset listing and asset update rules

use super::{check_id, require_text};
use crate::error::Violation;
use crate::validation::numeric::{check_decimal, check_positive_integer};
use crate::validation::Errors;
use rust_decimal::Decimal;
use types::asset::{AssetSource, AssetSourceUpdate, NewAsset, UpdateAsset};

pub(crate) fn check_new_asset(asset: Option<&NewAsset>) -> Errors {
    let mut errs = Errors::new();
    let Some(asset) = asset else {
        return errs.final_add_for_property("new_asset", Violation::IsRequired);
    };
    let path = "new_asset.changes";
    let Some(details) = asset.changes.as_ref() else {
        return errs.final_add_for_property(path, Violation::IsRequired);
    };

    require_text(&mut errs, &format!("{path}.name"), &details.name);
    require_text(&mut errs, &format!("{path}.symbol"), &details.symbol);
    check_quantum(&mut errs, &format!("{path}.quantum"), &details.quantum);

    let source_path = format!("{path}.source");
    match details.source.as_ref() {
        None => errs.final_add_for_property(source_path, Violation::IsRequired),
        Some(AssetSource::BuiltinAsset(None)) => errs.final_add_for_property(
            format!("{source_path}.builtin_asset"),
            Violation::IsRequired,
        ),
        Some(AssetSource::BuiltinAsset(Some(builtin))) => {
            check_positive_integer(
                &mut errs,
                &format!("{source_path}.builtin_asset.max_faucet_amount_mint"),
                &builtin.max_faucet_amount_mint,
            );
            errs
        }
        Some(AssetSource::Erc20(None)) => {
            errs.final_add_for_property(format!("{source_path}.erc20"), Violation::IsRequired)
        }
        Some(AssetSource::Erc20(Some(erc20))) => {
            let erc20_path = format!("{source_path}.erc20");
            let address_path = format!("{erc20_path}.contract_address");
            if erc20.contract_address.is_empty() {
                errs.add(address_path, Violation::IsRequired);
            } else if !types::is_valid_ethereum_address(&erc20.contract_address) {
                errs.add(address_path, Violation::IsNotValidEthereumAddress);
            }
            check_withdrawal_limits(
                &mut errs,
                &erc20_path,
                &erc20.lifetime_limit,
                &erc20.withdraw_threshold,
            );
            errs
        }
    }
}

pub(crate) fn check_update_asset(asset: Option<&UpdateAsset>) -> Errors {
    let mut errs = Errors::new();
    let Some(asset) = asset else {
        return errs.final_add_for_property("update_asset", Violation::IsRequired);
    };

    check_id(&mut errs, "update_asset.asset_id", &asset.asset_id);

    let path = "update_asset.changes";
    let Some(details) = asset.changes.as_ref() else {
        return errs.final_add_for_property(path, Violation::IsRequired);
    };

    check_quantum(&mut errs, &format!("{path}.quantum"), &details.quantum);

    let source_path = format!("{path}.source");
    match details.source.as_ref() {
        None => errs.final_add_for_property(source_path, Violation::IsRequired),
        Some(AssetSourceUpdate::Erc20(None)) => {
            errs.final_add_for_property(format!("{source_path}.erc20"), Violation::IsRequired)
        }
        Some(AssetSourceUpdate::Erc20(Some(erc20))) => {
            check_withdrawal_limits(
                &mut errs,
                &format!("{source_path}.erc20"),
                &erc20.lifetime_limit,
                &erc20.withdraw_threshold,
            );
            errs
        }
    }
}

fn check_quantum(errs: &mut Errors, path: &str, quantum: &str) {
    if let Some(quantum) = check_decimal(errs, path, quantum) {
        if quantum <= Decimal::ZERO {
            errs.add(path, Violation::MustBePositive);
        }
    }
}

fn check_withdrawal_limits(errs: &mut Errors, path: &str, lifetime: &str, threshold: &str) {
    check_positive_integer(errs, &format!("{path}.lifetime_limit"), lifetime);
    check_positive_integer(errs, &format!("{path}.withdraw_threshold"), threshold);
}
