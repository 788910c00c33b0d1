//! Violation kinds reported against proposal fields, and the aggregate
//! rejection returned to callers.

use crate::validation::Errors;
use thiserror::Error;

/// A single rule failure attached to a field path.
///
/// The rendered message is stable and shown to proposers as-is, so wording
/// changes are breaking changes for client tooling matching on them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Field absent, zero-valued or empty where a value is mandatory
    #[error("is required")]
    IsRequired,

    /// Value present but outside the accepted set
    #[error("is not a valid value")]
    IsNotValid,

    /// Text that does not parse as a number
    #[error("is not a valid number")]
    IsNotValidNumber,

    #[error("not a valid integer")]
    NotAValidInteger,

    #[error("not a valid float")]
    NotAValidFloat,

    #[error("must be a valid date")]
    MustBeValidDate,

    #[error("must be a valid duration")]
    MustBeValidDuration,

    #[error("is not supported")]
    IsNotSupported,

    /// Value inconsistent with a sibling field (wrong product family, unbound property)
    #[error("is mismatching")]
    IsMismatching,

    #[error("must be empty")]
    MustBeEmpty,

    #[error("must be positive")]
    MustBePositive,

    #[error("must be positive or zero")]
    MustBePositiveOrZero,

    #[error("must be negative")]
    MustBeNegative,

    #[error("must be negative or zero")]
    MustBeNegativeOrZero,

    /// Strict upper bound
    #[error("must be less than {0}")]
    MustBeLessThan(u64),

    /// Inclusive upper bound
    #[error("must be at most {0}")]
    MustBeAtMost(u64),

    #[error("must not exceed {0} characters")]
    MustNotExceedChars(usize),

    #[error("must be less than {0} characters")]
    MustBeLessThanChars(usize),

    #[error("reference cannot be more than {0} characters")]
    ReferenceTooLong(usize),

    #[error("maximum {0} triggers allowed")]
    TooManyTriggers(usize),

    #[error("must be between 0 (inclusive) and 7 (exclusive)")]
    MustBeWithinRange7,

    #[error("must be between -6 and 6")]
    MustBeWithinSignedRange7,

    #[error("must be between 0 and 1")]
    MustBeWithinRange01,

    #[error("must be between -1 and 1")]
    MustBeWithinRange11,

    #[error("price range must be strictly greater than 0 and less than or equal to 20")]
    MustBeWithinRangeGT0LT20,

    #[error("must be between 0 (excluded) and 1 (included)")]
    MustBeBetween01,

    #[error("must be greater than or equal to 1")]
    MustBeGTE1,

    #[error("must be less than or equal to 1")]
    MustBeLTE1,

    #[error("must be greater than or equal to clamp_lower_bound")]
    MustBeGTEClampLowerBound,

    #[error("must be greater than proposal_submission.terms.enactment_timestamp")]
    MustBeGreaterThanEnactmentTimestamp,

    #[error("maximum one time trigger allowed")]
    OneTimeTriggerAllowedMax,

    #[error("should be a valid public key")]
    ShouldBeAValidPublicKey,

    #[error("should be a valid id")]
    ShouldBeAValidId,

    #[error("is not a valid ethereum address")]
    IsNotValidEthereumAddress,

    #[error("is required and must not be empty")]
    EmptyEthereumCallSpec,

    #[error("is not a valid ethereum call trigger")]
    InvalidEthereumCallTrigger,

    /// Arguments that do not decode or do not fit the called method
    #[error("is not valid ethereum call arguments")]
    InvalidEthereumCallArgs,

    #[error("is not a valid ethereum abi")]
    InvalidEthereumAbi,

    /// Filter on a property no normaliser produces
    #[error("is not valid ethereum call filters")]
    InvalidEthereumFilters,

    /// Rule-specific message with no reusable kind
    #[error("{0}")]
    Custom(String),
}

impl Violation {
    /// Create a rule-specific violation
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }
}

/// Rejection of a proposal submission carrying every violation found.
///
/// Never constructed empty: [`Errors::error_or_none`] is the only way in.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{errors}")]
pub struct ProposalError {
    errors: Errors,
}

impl ProposalError {
    pub(crate) fn new(errors: Errors) -> Self {
        Self { errors }
    }

    /// All violations keyed by path
    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    pub fn into_errors(self) -> Errors {
        self.errors
    }

    /// Violations recorded at `path`, in insertion order
    pub fn get(&self, path: &str) -> &[Violation] {
        self.errors.get(path)
    }

    pub fn contains(&self, path: &str, violation: &Violation) -> bool {
        self.errors.contains(path, violation)
    }
}

/// Result type for proposal validation
pub type ProposalResult<T> = Result<T, ProposalError>;
