//! Market state changes: terminate, suspend, resume

use super::check_enum;
use crate::error::Violation;
use crate::validation::numeric::parse_uint;
use crate::validation::Errors;
use types::market::{MarketStateUpdateType, UpdateMarketState};

pub(crate) fn check_update_market_state(update: Option<&UpdateMarketState>) -> Errors {
    let mut errs = Errors::new();
    let Some(update) = update else {
        return errs.final_add_for_property("update_market_state", Violation::IsRequired);
    };
    let path = "update_market_state.changes";
    let Some(changes) = update.changes.as_ref() else {
        return errs.final_add_for_property(path, Violation::IsRequired);
    };

    if changes.market_id.is_empty() {
        return errs.final_add_for_property(format!("{path}.marketId"), Violation::IsRequired);
    }

    let Some(update_type) = check_enum::<MarketStateUpdateType>(
        &mut errs,
        &format!("{path}.updateType"),
        changes.update_type,
    ) else {
        return errs;
    };

    let price_path = format!("{path}.price");
    match (update_type, changes.price.as_deref()) {
        (MarketStateUpdateType::Terminate, Some(price))
            if !price.is_empty() && parse_uint(price).is_err() =>
        {
            errs.final_add_for_property(price_path, Violation::IsNotValid)
        }
        (MarketStateUpdateType::Terminate, _) | (_, None) => errs,
        (_, Some(_)) => errs.final_add_for_property(price_path, Violation::MustBeEmpty),
    }
}
