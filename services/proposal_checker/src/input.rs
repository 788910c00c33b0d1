//! Proposal document loading.
//!
//! A document holds either one submission object or an array of them.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use types::ProposalSubmission;

#[derive(Deserialize)]
#[serde(untagged)]
enum ProposalDocument {
    Many(Vec<ProposalSubmission>),
    One(ProposalSubmission),
}

/// Read every submission in a JSON document
pub fn read_proposals(path: &Path) -> Result<Vec<ProposalSubmission>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let document: ProposalDocument = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse proposal document {}", path.display()))?;

    let proposals = match document {
        ProposalDocument::Many(list) => list,
        ProposalDocument::One(single) => vec![single],
    };
    debug!("Read {} proposal(s) from {}", proposals.len(), path.display());
    Ok(proposals)
}

/// Files named on the command line, or every `*.<extension>` file in `dir`
/// sorted by name.
pub fn collect_files(files: &[PathBuf], dir: Option<&Path>, extension: &str) -> Result<Vec<PathBuf>> {
    if !files.is_empty() {
        return Ok(files.to_vec());
    }
    let Some(dir) = dir else {
        bail!("No proposal files given and no input.proposal_dir configured");
    };

    let mut found = Vec::new();
    for entry in
        fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))?
    {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            found.push(path);
        }
    }
    found.sort();
    Ok(found)
}
