//! # Data Source Definitions
//!
//! Oracle configuration referenced by market products (settlement data,
//! trading termination, settlement schedules) and by automated purchases.
//!
//! ```text
//! DataSourceDefinition
//!   └─ source_type
//!        ├─ Internal ─┬─ Time { conditions }
//!        │            └─ TimeTrigger { conditions, triggers }
//!        └─ External ─┬─ Oracle { signers, filters → key + conditions }
//!                     └─ EthOracle { address, abi, method, args, trigger,
//!                                    filters, normalisers }
//! ```

use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};

/// Property name exposed by internal time based sources.
pub const BUILTIN_TIMESTAMP_PROPERTY: &str = "builtin.timestamp";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSourceDefinition {
    pub source_type: Option<DataSourceType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSourceType {
    Internal(Option<InternalDataSource>),
    External(Option<ExternalDataSource>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InternalDataSource {
    Time(Option<TimeConfiguration>),
    TimeTrigger(Option<TimeTriggerConfiguration>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExternalDataSource {
    Oracle(Option<OracleConfiguration>),
    EthOracle(Option<EthCallSpec>),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfiguration {
    pub conditions: Vec<Condition>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeTriggerConfiguration {
    pub conditions: Vec<Condition>,
    pub triggers: Vec<InternalTimeTrigger>,
}

/// Fires first at `initial` (or at enactment when unset), then every `every` seconds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InternalTimeTrigger {
    pub initial: Option<i64>,
    pub every: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfiguration {
    pub signers: Vec<Signer>,
    pub filters: Vec<Filter>,
}

/// Contract read performed on Ethereum whenever `trigger` fires.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EthCallSpec {
    pub address: String,
    /// JSON encoded contract ABI
    pub abi: String,
    pub method: String,
    /// JSON encoded call arguments, one per method input
    pub args: Vec<String>,
    pub trigger: Option<EthCallTrigger>,
    pub required_confirmations: u64,
    pub filters: Vec<Filter>,
    /// Named expressions extracting properties from the call result
    pub normalisers: Vec<Normaliser>,
    pub source_chain_id: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EthCallTrigger {
    TimeTrigger(Option<EthTimeTrigger>),
}

/// Unix seconds; an unset `initial` fires at enactment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EthTimeTrigger {
    pub initial: Option<u64>,
    pub every: Option<u64>,
    pub until: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Normaliser {
    pub name: String,
    pub expression: String,
}

/// Party allowed to publish data for an external oracle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signer {
    PubKey(String),
    EthAddress(String),
}

impl Signer {
    /// True when the signer carries no usable key material.
    pub fn is_blank(&self) -> bool {
        match self {
            Signer::PubKey(key) => key.trim().is_empty(),
            Signer::EthAddress(address) => address.trim().is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Filter {
    pub key: Option<PropertyKey>,
    pub conditions: Vec<Condition>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyKey {
    pub name: String,
    /// [`PropertyKeyType`] code
    pub r#type: i32,
    pub number_decimal_places: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Condition {
    /// [`ConditionOperator`] code
    pub operator: i32,
    pub value: String,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
pub enum PropertyKeyType {
    Unspecified = 0,
    Empty = 1,
    Integer = 2,
    String = 3,
    Boolean = 4,
    Decimal = 5,
    Timestamp = 6,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
pub enum ConditionOperator {
    Unspecified = 0,
    Equals = 1,
    GreaterThan = 2,
    GreaterThanOrEqual = 3,
    LessThan = 4,
    LessThanOrEqual = 5,
}

/// Links a composite price data source to the property carrying the price.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecBindingForCompositePrice {
    pub price_source_property: String,
}

impl DataSourceDefinition {
    /// Internal time source with a single condition.
    pub fn internal_time(conditions: Vec<Condition>) -> Self {
        Self {
            source_type: Some(DataSourceType::Internal(Some(InternalDataSource::Time(
                Some(TimeConfiguration { conditions }),
            )))),
        }
    }

    /// Internal time trigger source.
    pub fn internal_time_trigger(triggers: Vec<InternalTimeTrigger>) -> Self {
        Self {
            source_type: Some(DataSourceType::Internal(Some(
                InternalDataSource::TimeTrigger(Some(TimeTriggerConfiguration {
                    conditions: Vec::new(),
                    triggers,
                })),
            ))),
        }
    }

    /// External oracle source.
    pub fn external_oracle(signers: Vec<Signer>, filters: Vec<Filter>) -> Self {
        Self {
            source_type: Some(DataSourceType::External(Some(ExternalDataSource::Oracle(
                Some(OracleConfiguration { signers, filters }),
            )))),
        }
    }

    /// Ethereum contract call source.
    pub fn external_eth_oracle(spec: EthCallSpec) -> Self {
        Self {
            source_type: Some(DataSourceType::External(Some(ExternalDataSource::EthOracle(
                Some(spec),
            )))),
        }
    }

    /// The time trigger configuration, when this is an internal time trigger.
    pub fn time_trigger(&self) -> Option<&TimeTriggerConfiguration> {
        match &self.source_type {
            Some(DataSourceType::Internal(Some(InternalDataSource::TimeTrigger(config)))) => {
                config.as_ref()
            }
            _ => None,
        }
    }

    /// True when the source is an internal time trigger, populated or not.
    pub fn is_internal_time_trigger(&self) -> bool {
        matches!(
            &self.source_type,
            Some(DataSourceType::Internal(Some(InternalDataSource::TimeTrigger(_))))
        )
    }

    /// Names of the properties a binding may refer to.
    ///
    /// External oracles expose their filter keys, Ethereum calls their
    /// normalisers as well; internal time based sources expose
    /// [`BUILTIN_TIMESTAMP_PROPERTY`].
    pub fn property_names(&self) -> Vec<&str> {
        match &self.source_type {
            Some(DataSourceType::External(Some(ExternalDataSource::Oracle(Some(oracle))))) => {
                oracle
                    .filters
                    .iter()
                    .filter_map(|filter| filter.key.as_ref())
                    .map(|key| key.name.as_str())
                    .collect()
            }
            Some(DataSourceType::External(Some(ExternalDataSource::EthOracle(Some(call))))) => call
                .normalisers
                .iter()
                .map(|normaliser| normaliser.name.as_str())
                .chain(
                    call.filters
                        .iter()
                        .filter_map(|filter| filter.key.as_ref())
                        .map(|key| key.name.as_str()),
                )
                .collect(),
            Some(DataSourceType::Internal(Some(_))) => vec![BUILTIN_TIMESTAMP_PROPERTY],
            _ => Vec::new(),
        }
    }

    /// True when a binding to `property` resolves against this source.
    pub fn exposes_property(&self, property: &str) -> bool {
        self.property_names().contains(&property)
    }
}
