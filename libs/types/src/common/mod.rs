//! Shared helpers used across the proposal data model

pub mod identifiers;
