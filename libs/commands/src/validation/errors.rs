//! # Path-keyed Violation Accumulator
//!
//! [`Errors`] maps a dotted field path to the violations recorded there.
//! Paths keep the order in which they were first seen so rendered messages
//! follow the order the rules ran in, which keeps diagnostics stable across
//! runs.

use crate::error::{ProposalError, ProposalResult, Violation};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Errors {
    order: Vec<String>,
    entries: HashMap<String, Vec<Violation>>,
}

impl Errors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `violation` at `path`.
    ///
    /// Several violations may be recorded at one path. The same violation
    /// reported by two independent rules is recorded twice.
    pub fn add(&mut self, path: impl Into<String>, violation: Violation) {
        let path = path.into();
        match self.entries.get_mut(&path) {
            Some(existing) => existing.push(violation),
            None => {
                self.order.push(path.clone());
                self.entries.insert(path, vec![violation]);
            }
        }
    }

    /// Alias of [`add`](Self::add) kept for rule code that reads as "property X failed".
    pub fn add_for_property(&mut self, path: impl Into<String>, violation: Violation) {
        self.add(path, violation);
    }

    /// Record a violation and hand the accumulator back.
    ///
    /// Used where a missing sub-object makes every rule below it
    /// meaningless: `return errs.final_add_for_property(..)`.
    pub fn final_add_for_property(mut self, path: impl Into<String>, violation: Violation) -> Self {
        self.add(path, violation);
        self
    }

    /// Union `other` into `self`, preserving both orders.
    pub fn merge(&mut self, other: Errors) {
        let Errors { order, mut entries } = other;
        for path in order {
            if let Some(violations) = entries.remove(&path) {
                for violation in violations {
                    self.add(path.clone(), violation);
                }
            }
        }
    }

    /// Rewrite every path as `prefix + path`.
    pub fn add_prefix(self, prefix: &str) -> Self {
        let Errors { order, mut entries } = self;
        let mut prefixed = Errors::new();
        for path in order {
            if let Some(violations) = entries.remove(&path) {
                let full = format!("{prefix}{path}");
                prefixed.order.push(full.clone());
                prefixed.entries.insert(full, violations);
            }
        }
        prefixed
    }

    /// Violations at `path`, empty when the path is clean
    pub fn get(&self, path: &str) -> &[Violation] {
        self.entries.get(path).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, path: &str, violation: &Violation) -> bool {
        self.get(path).contains(violation)
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of distinct paths carrying at least one violation
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Total number of violations across all paths
    pub fn violation_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Paths in discovery order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// `(path, violations)` in discovery order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Violation])> {
        self.order
            .iter()
            .map(move |path| (path.as_str(), self.get(path)))
    }

    /// `None` when nothing was recorded, the aggregate error otherwise
    pub fn error_or_none(self) -> Option<ProposalError> {
        if self.is_empty() {
            None
        } else {
            Some(ProposalError::new(self))
        }
    }

    pub fn into_result(self) -> ProposalResult<()> {
        match self.error_or_none() {
            None => Ok(()),
            Some(err) => Err(err),
        }
    }
}

impl fmt::Display for Errors {
    /// `path (violation), path (violation)`, one entry per violation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (path, violations) in self.iter() {
            for violation in violations {
                if !first {
                    f.write_str(", ")?;
                }
                write!(f, "{path} ({violation})")?;
                first = false;
            }
        }
        Ok(())
    }
}
