//! # Data Source Rules
//!
//! Oracle, Ethereum call and internal time sources appear in several places (future
//! settlement and termination, perpetual settlement, composite price
//! sources, automated purchase schedules). Each place accepts a different
//! subset of source kinds, expressed as a [`SourceRules`] preset.

use super::check_enum;
use crate::error::Violation;
use crate::validation::Errors;
use serde::Deserialize;
use types::data_source::{
    Condition, ConditionOperator, DataSourceDefinition, DataSourceType, EthCallSpec,
    EthCallTrigger, ExternalDataSource, Filter, InternalDataSource, OracleConfiguration,
    PropertyKeyType, Signer, SpecBindingForCompositePrice, TimeTriggerConfiguration,
};

/// Which source kinds a data source slot accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SourceRules {
    /// Slot feeds a settlement price; plain internal time cannot provide one
    pub settles: bool,
    pub allow_time_trigger: bool,
}

pub(crate) const FUTURE_SETTLEMENT: SourceRules = SourceRules {
    settles: true,
    allow_time_trigger: false,
};

pub(crate) const FUTURE_TERMINATION: SourceRules = SourceRules {
    settles: false,
    allow_time_trigger: false,
};

pub(crate) const PERPS_SETTLEMENT: SourceRules = SourceRules {
    settles: true,
    allow_time_trigger: true,
};

pub(crate) const PRICE_SOURCE: SourceRules = SourceRules {
    settles: true,
    allow_time_trigger: true,
};

/// Check the data source `name` under `parent`.
pub(crate) fn check_data_source(
    spec: Option<&DataSourceDefinition>,
    name: &str,
    parent: &str,
    rules: SourceRules,
) -> Errors {
    let path = format!("{parent}.{name}");
    let mut errs = Errors::new();

    let Some(spec) = spec else {
        return errs.final_add_for_property(path, Violation::IsRequired);
    };
    let Some(source_type) = spec.source_type.as_ref() else {
        return errs.final_add_for_property(format!("{path}.source_type"), Violation::IsRequired);
    };

    match source_type {
        DataSourceType::Internal(None) => {
            return errs.final_add_for_property(format!("{path}.internal"), Violation::IsRequired);
        }
        DataSourceType::Internal(Some(InternalDataSource::Time(time))) => {
            if rules.settles {
                return errs.final_add_for_property(path, Violation::IsNotValid);
            }
            let Some(time) = time else {
                return errs.final_add_for_property(
                    format!("{path}.internal.time"),
                    Violation::IsRequired,
                );
            };
            let conditions_path = format!("{path}.internal.time.conditions");
            if time.conditions.is_empty() {
                errs.add(conditions_path.as_str(), Violation::IsRequired);
            }
            check_conditions(&mut errs, &conditions_path, &time.conditions);
        }
        DataSourceType::Internal(Some(InternalDataSource::TimeTrigger(trigger))) => {
            let trigger_path = format!("{path}.internal.timetrigger");
            if !rules.allow_time_trigger {
                return errs.final_add_for_property(trigger_path, Violation::IsNotValid);
            }
            let Some(trigger) = trigger else {
                return errs.final_add_for_property(trigger_path, Violation::IsRequired);
            };
            errs.merge(check_time_trigger(trigger, &trigger_path));
        }
        DataSourceType::External(None) => {
            return errs.final_add_for_property(format!("{path}.external"), Violation::IsRequired);
        }
        DataSourceType::External(Some(ExternalDataSource::Oracle(None))) => {
            return errs.final_add_for_property(
                format!("{path}.external.oracle"),
                Violation::IsRequired,
            );
        }
        DataSourceType::External(Some(ExternalDataSource::Oracle(Some(oracle)))) => {
            errs.merge(check_oracle(oracle, &format!("{path}.external.oracle")));
        }
        DataSourceType::External(Some(ExternalDataSource::EthOracle(None))) => {
            return errs.final_add_for_property(
                format!("{path}.external.ethoracle"),
                Violation::EmptyEthereumCallSpec,
            );
        }
        DataSourceType::External(Some(ExternalDataSource::EthOracle(Some(call)))) => {
            errs.merge(check_eth_call(call, &format!("{path}.external.ethoracle")));
        }
    }

    errs
}

/// Internal time trigger: exactly one trigger with positive timings.
///
/// `path` points at the trigger configuration itself; a wrong trigger
/// count is reported there and the timings are not inspected.
pub(crate) fn check_time_trigger(trigger: &TimeTriggerConfiguration, path: &str) -> Errors {
    let mut errs = Errors::new();

    if trigger.triggers.len() != 1 {
        errs.add(path, Violation::OneTimeTriggerAllowedMax);
    } else {
        for (i, t) in trigger.triggers.iter().enumerate() {
            if matches!(t.initial, Some(initial) if initial <= 0) {
                errs.add(format!("{path}.triggers.{i}.initial"), Violation::IsNotValid);
            }
            if t.every <= 0 {
                errs.add(format!("{path}.triggers.{i}.every"), Violation::IsNotValid);
            }
        }
    }

    check_conditions(&mut errs, &format!("{path}.conditions"), &trigger.conditions);
    errs
}

fn check_oracle(oracle: &OracleConfiguration, path: &str) -> Errors {
    let mut errs = Errors::new();

    if oracle.signers.is_empty() {
        errs.add(format!("{path}.signers"), Violation::IsRequired);
    }
    for (i, signer) in oracle.signers.iter().enumerate() {
        let signer_path = format!("{path}.signers.{i}");
        if signer.is_blank() {
            errs.add(signer_path, Violation::IsNotValid);
            continue;
        }
        match signer {
            Signer::PubKey(key) if !types::is_valid_public_key(key) => {
                errs.add(signer_path, Violation::ShouldBeAValidPublicKey);
            }
            Signer::EthAddress(address) if !types::is_valid_ethereum_address(address) => {
                errs.add(signer_path, Violation::IsNotValidEthereumAddress);
            }
            _ => {}
        }
    }

    errs.merge(check_filters(&oracle.filters, &format!("{path}.filters")));
    errs
}

/// Entry of a contract ABI; only functions are looked up.
#[derive(Debug, Deserialize)]
struct AbiEntry {
    #[serde(rename = "type", default = "function_kind")]
    kind: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    inputs: Vec<serde_json::Value>,
}

fn function_kind() -> String {
    "function".to_string()
}

fn check_eth_call(call: &EthCallSpec, path: &str) -> Errors {
    let mut errs = Errors::new();

    if !types::is_valid_ethereum_address(&call.address) {
        errs.add(format!("{path}.address"), Violation::IsNotValidEthereumAddress);
    }

    match &call.trigger {
        None => errs.add(format!("{path}.trigger"), Violation::IsRequired),
        Some(EthCallTrigger::TimeTrigger(None)) => {
            errs.add(format!("{path}.trigger"), Violation::InvalidEthereumCallTrigger)
        }
        Some(EthCallTrigger::TimeTrigger(Some(_))) => {}
    }

    let args_decode = call
        .args
        .iter()
        .all(|arg| serde_json::from_str::<serde_json::Value>(arg).is_ok());
    if !args_decode {
        errs.add(format!("{path}.args"), Violation::InvalidEthereumCallArgs);
    }

    let method_blank = call.method.trim().is_empty();
    if method_blank {
        errs.add(format!("{path}.method"), Violation::IsRequired);
    }

    if call.abi.is_empty() {
        errs.add(format!("{path}.abi"), Violation::IsRequired);
    } else {
        match serde_json::from_str::<Vec<AbiEntry>>(&call.abi) {
            Err(_) => errs.add(format!("{path}.abi"), Violation::InvalidEthereumAbi),
            // The call must resolve to a function taking exactly the given arguments
            Ok(entries) if args_decode && !method_blank => {
                let callable = entries.iter().any(|entry| {
                    entry.kind == "function"
                        && entry.name == call.method
                        && entry.inputs.len() == call.args.len()
                });
                if !callable {
                    errs.add(format!("{path}.callargs"), Violation::InvalidEthereumCallArgs);
                }
            }
            Ok(_) => {}
        }
    }

    let filters_path = format!("{path}.filters");
    errs.merge(check_filters(&call.filters, &filters_path));

    if call.normalisers.is_empty() {
        errs.add(format!("{path}.normalisers"), Violation::IsRequired);
    } else {
        // Call results only become properties through a normaliser
        let unknown_key = call
            .filters
            .iter()
            .filter_map(|filter| filter.key.as_ref())
            .filter(|key| !key.name.is_empty())
            .any(|key| !call.normalisers.iter().any(|n| n.name == key.name));
        if unknown_key {
            errs.add(filters_path, Violation::InvalidEthereumFilters);
        }
    }

    errs
}

fn check_filters(filters: &[Filter], path: &str) -> Errors {
    let mut errs = Errors::new();
    if filters.is_empty() {
        return errs.final_add_for_property(path, Violation::IsRequired);
    }

    for (i, filter) in filters.iter().enumerate() {
        let filter_path = format!("{path}.{i}");
        match filter.key.as_ref() {
            None => errs.add(format!("{filter_path}.key"), Violation::IsNotValid),
            Some(key) => {
                if key.name.is_empty() {
                    errs.add(format!("{filter_path}.key.name"), Violation::IsRequired);
                }
                check_enum::<PropertyKeyType>(&mut errs, &format!("{filter_path}.key.type"), key.r#type);
            }
        }
        check_conditions(&mut errs, &format!("{filter_path}.conditions"), &filter.conditions);
    }
    errs
}

fn check_conditions(errs: &mut Errors, path: &str, conditions: &[Condition]) {
    for (j, condition) in conditions.iter().enumerate() {
        if condition.value.is_empty() {
            errs.add(format!("{path}.{j}.value"), Violation::IsRequired);
        }
        check_enum::<ConditionOperator>(errs, &format!("{path}.{j}.operator"), condition.operator);
    }
}

/// Binding of a composite price source to the property holding the price.
pub(crate) fn check_price_source_binding(
    binding: Option<&SpecBindingForCompositePrice>,
    spec: Option<&DataSourceDefinition>,
    path: &str,
) -> Errors {
    let mut errs = Errors::new();
    let Some(binding) = binding else {
        return errs.final_add_for_property(path, Violation::IsRequired);
    };
    let property_path = format!("{path}.price_source_property");
    if binding.price_source_property.is_empty() {
        errs.add(property_path, Violation::IsRequired);
    } else if spec.is_some_and(|spec| !spec.exposes_property(&binding.price_source_property)) {
        errs.add(property_path, Violation::IsMismatching);
    }
    errs
}
