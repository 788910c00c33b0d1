//! # Proposal Submission Validator
//!
//! Entry point of the rule tree. Checks the envelope of a submission
//! (reference, rationale, timing) and hands the change payload to the
//! per-kind rules in [`domain`](super::domain).

use super::config::ValidationConfig;
use super::domain;
use super::errors::Errors;
use crate::error::{ProposalResult, Violation};
use types::{ProposalChange, ProposalRationale, ProposalSubmission, ProposalTerms};
use tracing::{debug, warn};

const ROOT: &str = "proposal_submission";

/// Whitespace ignored when deciding whether free text is blank
const BLANK: &[char] = &[' ', '\n', '\r', '\t'];

/// Validates proposal submissions against a set of limits
#[derive(Debug, Clone, Default)]
pub struct ProposalValidator {
    config: ValidationConfig,
}

impl ProposalValidator {
    /// Create validator with default network limits
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Run every applicable rule and return what was found.
    ///
    /// Never fails; an empty [`Errors`] means the submission is accepted.
    pub fn check(&self, submission: Option<&ProposalSubmission>) -> Errors {
        let Some(submission) = submission else {
            return Errors::new().final_add_for_property(ROOT, Violation::IsRequired);
        };

        let change = submission
            .terms
            .as_ref()
            .and_then(|terms| terms.change.as_ref());
        debug!(
            "Validating proposal submission ({})",
            change.map_or("no change", ProposalChange::name)
        );

        let mut errs = Errors::new();

        let reference_max = self.config.text.reference_max_len;
        if submission.reference.chars().count() > reference_max {
            errs.add(
                format!("{ROOT}.reference"),
                Violation::ReferenceTooLong(reference_max),
            );
        }

        errs.merge(self.check_rationale(submission.rationale.as_ref(), change));

        let Some(terms) = submission.terms.as_ref() else {
            return errs.final_add_for_property(format!("{ROOT}.terms"), Violation::IsRequired);
        };
        errs.merge(self.check_terms(terms));

        if !errs.is_empty() {
            debug!(
                "Proposal submission rejected with {} violation(s) across {} field(s)",
                errs.violation_count(),
                errs.len()
            );
        }
        errs
    }

    /// [`check`](Self::check) folded into a result
    pub fn validate(&self, submission: Option<&ProposalSubmission>) -> ProposalResult<()> {
        self.check(submission).into_result()
    }

    fn check_rationale(
        &self,
        rationale: Option<&ProposalRationale>,
        change: Option<&ProposalChange>,
    ) -> Errors {
        let mut errs = Errors::new();
        let Some(rationale) = rationale else {
            return errs.final_add_for_property(format!("{ROOT}.rationale"), Violation::IsRequired);
        };

        let limits = &self.config.text;

        let description = rationale.description.trim_matches(BLANK);
        if description.is_empty() {
            errs.add(
                format!("{ROOT}.rationale.description"),
                Violation::IsRequired,
            );
        } else if rationale.description.chars().count() > limits.description_max_len {
            errs.add(
                format!("{ROOT}.rationale.description"),
                Violation::MustNotExceedChars(limits.description_max_len),
            );
        }

        // Kinds with no title requirement still get the length check
        let title_required = change.map_or(true, ProposalChange::requires_title);
        let title = rationale.title.trim_matches(BLANK);
        if title.is_empty() {
            if title_required {
                errs.add(format!("{ROOT}.rationale.title"), Violation::IsRequired);
            }
        } else if rationale.title.chars().count() > limits.title_max_len {
            errs.add(
                format!("{ROOT}.rationale.title"),
                Violation::MustBeLessThanChars(limits.title_max_len),
            );
        }

        errs
    }

    fn check_terms(&self, terms: &ProposalTerms) -> Errors {
        let mut errs = Errors::new();

        if terms.closing_timestamp <= 0 {
            errs.add(
                format!("{ROOT}.terms.closing_timestamp"),
                Violation::MustBePositive,
            );
        }

        if terms.validation_timestamp < 0 {
            errs.add(
                format!("{ROOT}.terms.validation_timestamp"),
                Violation::MustBePositiveOrZero,
            );
        }

        if terms.validation_timestamp >= terms.closing_timestamp {
            errs.add(
                format!("{ROOT}.terms.validation_timestamp"),
                Violation::custom("cannot be after or equal to closing time"),
            );
        }

        if terms.enactment_timestamp <= 0 {
            errs.add(
                format!("{ROOT}.terms.enactment_timestamp"),
                Violation::MustBePositive,
            );
        }

        if terms.closing_timestamp > terms.enactment_timestamp {
            errs.add(
                format!("{ROOT}.terms.closing_timestamp"),
                Violation::custom("cannot be after enactment time"),
            );
        }

        // Only asset listings go through a validation phase
        match terms.change {
            Some(ProposalChange::NewAsset(_)) => {
                if terms.validation_timestamp == 0 {
                    errs.add(
                        format!("{ROOT}.terms.validation_timestamp"),
                        Violation::MustBePositive,
                    );
                }
                if terms.validation_timestamp > terms.closing_timestamp {
                    errs.add(
                        format!("{ROOT}.terms.validation_timestamp"),
                        Violation::custom("cannot be after closing time"),
                    );
                }
            }
            _ => {
                if terms.validation_timestamp != 0 {
                    errs.add(
                        format!("{ROOT}.terms.validation_timestamp"),
                        Violation::IsNotSupported,
                    );
                }
            }
        }

        errs.merge(domain::check_change(terms, &self.config));
        errs
    }
}

/// Validate a submission against the default network limits.
pub fn check_proposal_submission(submission: Option<&ProposalSubmission>) -> ProposalResult<()> {
    let result = ProposalValidator::new().validate(submission);
    if let Err(err) = &result {
        warn!(
            "Rejected proposal submission: {} field(s) invalid",
            err.errors().len()
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::{NetworkParameter, UpdateNetworkParameter};

    fn network_parameter_submission() -> ProposalSubmission {
        ProposalSubmission {
            reference: "ref".to_string(),
            rationale: Some(ProposalRationale {
                description: "raise the minimum close".to_string(),
                title: "Raise min close".to_string(),
            }),
            terms: Some(ProposalTerms {
                closing_timestamp: 100,
                enactment_timestamp: 200,
                validation_timestamp: 0,
                change: Some(ProposalChange::UpdateNetworkParameter(Some(
                    UpdateNetworkParameter {
                        changes: Some(NetworkParameter {
                            key: "governance.proposal.market.minClose".to_string(),
                            value: "48h".to_string(),
                        }),
                    },
                ))),
            }),
        }
    }

    #[test]
    fn test_valid_submission_passes() {
        let submission = network_parameter_submission();
        assert!(ProposalValidator::new().check(Some(&submission)).is_empty());
        assert!(check_proposal_submission(Some(&submission)).is_ok());
    }

    #[test]
    fn test_missing_submission() {
        let errs = ProposalValidator::new().check(None);
        assert_eq!(errs.len(), 1);
        assert!(errs.contains("proposal_submission", &Violation::IsRequired));
    }

    #[test]
    fn test_missing_terms_stops_after_envelope() {
        let mut submission = network_parameter_submission();
        submission.terms = None;
        submission.reference = "x".repeat(101);

        let errs = ProposalValidator::new().check(Some(&submission));
        assert!(errs.contains("proposal_submission.terms", &Violation::IsRequired));
        assert!(errs.contains(
            "proposal_submission.reference",
            &Violation::ReferenceTooLong(100)
        ));
        assert_eq!(errs.len(), 2);
    }

    #[test]
    fn test_blank_description_is_required() {
        let mut submission = network_parameter_submission();
        if let Some(rationale) = submission.rationale.as_mut() {
            rationale.description = " \n\t\r".to_string();
        }
        let errs = ProposalValidator::new().check(Some(&submission));
        assert!(errs.contains(
            "proposal_submission.rationale.description",
            &Violation::IsRequired
        ));
    }

    #[test]
    fn test_closing_after_enactment() {
        let mut submission = network_parameter_submission();
        if let Some(terms) = submission.terms.as_mut() {
            terms.closing_timestamp = 300;
        }
        let errs = ProposalValidator::new().check(Some(&submission));
        assert!(errs.contains(
            "proposal_submission.terms.closing_timestamp",
            &Violation::custom("cannot be after enactment time")
        ));
    }

    #[test]
    fn test_configured_title_limit() {
        let mut config = ValidationConfig::default();
        config.text.title_max_len = 5;
        let validator = ProposalValidator::with_config(config);

        let errs = validator.check(Some(&network_parameter_submission()));
        assert!(errs.contains(
            "proposal_submission.rationale.title",
            &Violation::MustBeLessThanChars(5)
        ));
    }

    #[test]
    fn test_validation_phase_only_for_assets() {
        let mut submission = network_parameter_submission();
        if let Some(terms) = submission.terms.as_mut() {
            terms.validation_timestamp = 50;
        }
        let errs = ProposalValidator::new().check(Some(&submission));
        assert_eq!(
            errs.get("proposal_submission.terms.validation_timestamp"),
            &[Violation::IsNotSupported]
        );
    }

    #[test]
    fn test_asset_listing_requires_validation_timestamp() {
        let mut submission = network_parameter_submission();
        if let Some(terms) = submission.terms.as_mut() {
            terms.change = Some(ProposalChange::NewAsset(None));
        }
        let errs = ProposalValidator::new().check(Some(&submission));
        assert!(errs.contains(
            "proposal_submission.terms.validation_timestamp",
            &Violation::MustBePositive
        ));

        if let Some(terms) = submission.terms.as_mut() {
            terms.validation_timestamp = 150;
        }
        let errs = ProposalValidator::new().check(Some(&submission));
        let found = errs.get("proposal_submission.terms.validation_timestamp");
        assert!(found.contains(&Violation::custom("cannot be after closing time")));
        assert!(found.contains(&Violation::custom("cannot be after or equal to closing time")));
        assert!(!found.contains(&Violation::MustBePositive));
    }
}
