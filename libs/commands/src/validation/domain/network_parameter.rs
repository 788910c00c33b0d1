//! Network parameter updates. Whether the key exists and the value parses
//! for that key is decided when the proposal is enacted.

use super::require_text;
use crate::error::Violation;
use crate::validation::Errors;
use types::UpdateNetworkParameter;

pub(crate) fn check_update_network_parameter(update: Option<&UpdateNetworkParameter>) -> Errors {
    let mut errs = Errors::new();
    let Some(update) = update else {
        return errs.final_add_for_property("update_network_parameter", Violation::IsRequired);
    };
    let path = "update_network_parameter.changes";
    let Some(parameter) = update.changes.as_ref() else {
        return errs.final_add_for_property(path, Violation::IsRequired);
    };

    require_text(&mut errs, &format!("{path}.key"), &parameter.key);
    require_text(&mut errs, &format!("{path}.value"), &parameter.value);
    errs
}
