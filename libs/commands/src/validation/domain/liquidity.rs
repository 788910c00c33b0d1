//! Liquidity commitment submitted with a new market

use super::check_enum;
use crate::error::Violation;
use crate::validation::config::TextLimits;
use crate::validation::numeric::parse_decimal;
use crate::validation::Errors;
use types::market::commitment::{NewMarketCommitment, PeggedReference, Side};

pub(crate) fn check_liquidity_commitment(
    commitment: &NewMarketCommitment,
    path: &str,
    limits: &TextLimits,
) -> Errors {
    let mut errs = Errors::new();

    if commitment.commitment_amount == 0 {
        errs.add(format!("{path}.commitment_amount"), Violation::MustBePositive);
    }

    let fee_path = format!("{path}.fee");
    if commitment.fee.is_empty() {
        errs.add(fee_path, Violation::IsRequired);
    } else {
        match parse_decimal(&commitment.fee) {
            Err(_) => errs.add(fee_path, Violation::IsNotValidNumber),
            Ok(fee) if fee.is_sign_negative() && !fee.is_zero() => {
                errs.add(fee_path, Violation::MustBePositiveOrZero)
            }
            Ok(_) => {}
        }
    }

    if commitment.reference.chars().count() > limits.reference_max_len {
        errs.add(
            format!("{path}.reference"),
            Violation::ReferenceTooLong(limits.reference_max_len),
        );
    }

    for side in [Side::Buy, Side::Sell] {
        errs.merge(check_orders(commitment, side, path));
    }
    errs
}

fn check_orders(commitment: &NewMarketCommitment, side: Side, parent: &str) -> Errors {
    let mut errs = Errors::new();
    let path = format!("{parent}.{}", side.orders_field());
    let orders = commitment.orders(side);

    if orders.is_empty() {
        errs.add(path.as_str(), Violation::IsRequired);
    }

    for (i, order) in orders.iter().enumerate() {
        let order_path = format!("{path}.{i}");
        let reference = check_enum::<PeggedReference>(
            &mut errs,
            &format!("{order_path}.reference"),
            order.reference,
        );

        if order.proportion == 0 {
            errs.add(format!("{order_path}.proportion"), Violation::IsRequired);
        }

        let offset_path = format!("{order_path}.offset");
        match (side, reference) {
            (Side::Buy, Some(PeggedReference::BestAsk)) => errs.add(
                format!("{order_path}.reference"),
                Violation::custom("cannot have a reference of type BEST_ASK when on BUY side"),
            ),
            (Side::Buy, Some(PeggedReference::BestBid)) if order.offset > 0 => {
                errs.add(offset_path, Violation::MustBeNegativeOrZero)
            }
            (Side::Buy, Some(PeggedReference::Mid)) if order.offset >= 0 => {
                errs.add(offset_path, Violation::MustBeNegative)
            }
            (Side::Sell, Some(PeggedReference::BestBid)) => errs.add(
                format!("{order_path}.reference"),
                Violation::custom("cannot have a reference of type BEST_BID when on SELL side"),
            ),
            (Side::Sell, Some(PeggedReference::BestAsk)) if order.offset < 0 => {
                errs.add(offset_path, Violation::MustBePositiveOrZero)
            }
            (Side::Sell, Some(PeggedReference::Mid)) if order.offset <= 0 => {
                errs.add(offset_path, Violation::MustBePositive)
            }
            _ => {}
        }
    }
    errs
}
