//! Per-proposal outcomes and their rendering.

use commands::{Errors, ProposalValidator};
use serde_json::{json, Map, Value};
use std::fmt::Write;
use types::ProposalSubmission;

/// Validation result for one submission of one document
#[derive(Debug, Clone)]
pub struct Outcome {
    pub source: String,
    /// Position within the document
    pub index: usize,
    pub errors: Errors,
}

impl Outcome {
    pub fn accepted(&self) -> bool {
        self.errors.is_empty()
    }

    fn label(&self) -> String {
        format!("{}#{}", self.source, self.index)
    }

    fn to_json(&self) -> Value {
        let mut errors = Map::new();
        for (path, violations) in self.errors.iter() {
            let messages = violations.iter().map(|v| Value::from(v.to_string())).collect();
            errors.insert(path.to_string(), Value::Array(messages));
        }
        json!({
            "source": self.source,
            "index": self.index,
            "accepted": self.accepted(),
            "errors": errors,
        })
    }
}

#[derive(Debug, Default)]
pub struct Report {
    pub outcomes: Vec<Outcome>,
}

impl Report {
    /// Validate every submission of a document and record the outcomes.
    /// Returns the number rejected.
    pub fn check_document(
        &mut self,
        validator: &ProposalValidator,
        source: &str,
        proposals: &[ProposalSubmission],
    ) -> usize {
        let mut rejected = 0;
        for (index, submission) in proposals.iter().enumerate() {
            let errors = validator.check(Some(submission));
            if !errors.is_empty() {
                rejected += 1;
            }
            self.outcomes.push(Outcome {
                source: source.to_string(),
                index,
                errors,
            });
        }
        rejected
    }

    pub fn accepted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.accepted()).count()
    }

    pub fn rejected(&self) -> usize {
        self.outcomes.len() - self.accepted()
    }

    /// One line per accepted proposal, one indented line per rejected field
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for outcome in &self.outcomes {
            if outcome.accepted() {
                let _ = writeln!(out, "ok       {}", outcome.label());
                continue;
            }
            let _ = writeln!(out, "rejected {}", outcome.label());
            for (path, violations) in outcome.errors.iter() {
                for violation in violations {
                    let _ = writeln!(out, "    {path}: {violation}");
                }
            }
        }
        let _ = writeln!(
            out,
            "{} proposal(s) checked, {} accepted, {} rejected",
            self.outcomes.len(),
            self.accepted(),
            self.rejected()
        );
        out
    }

    pub fn to_json(&self) -> Value {
        json!({
            "checked": self.outcomes.len(),
            "accepted": self.accepted(),
            "rejected": self.rejected(),
            "proposals": self.outcomes.iter().map(Outcome::to_json).collect::<Vec<_>>(),
        })
    }
}
