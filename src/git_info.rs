//! Repository metadata.

use crate::error::Error;
use std::path::{Path, PathBuf};

const COMMIT_SHA_LEN: usize = 40;

/// A plain (path, commit SHA, branch) triple describing a git checkout.
///
/// Carried for callers that stamp zone data with the revision it was generated
/// from. Nothing in this crate reads it back; it only holds and exposes its
/// fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitInfo {
    path: PathBuf,
    commit_sha: String,
    branch: Option<String>,
}

impl GitInfo {
    /// Construct from a checkout path, a commit SHA, and an optional branch
    /// name. A detached `HEAD` has no branch; an empty SHA is allowed for a
    /// repository without commits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotACommitSha`] when `commit_sha` is non-empty and not
    /// 40 hex digits.
    pub fn new(
        path: impl Into<PathBuf>,
        commit_sha: impl Into<String>,
        branch: Option<String>,
    ) -> Result<Self, Error> {
        let commit_sha = commit_sha.into();
        if !commit_sha.is_empty() && !is_commit_sha(&commit_sha) {
            return Err(Error::NotACommitSha(commit_sha));
        }
        Ok(Self {
            path: path.into(),
            commit_sha,
            branch,
        })
    }

    /// The checkout's working directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The checked-out commit.
    pub fn commit_sha(&self) -> &str {
        &self.commit_sha
    }

    /// The checked-out branch, if `HEAD` points at one.
    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }
}

fn is_commit_sha(candidate: &str) -> bool {
    candidate.len() == COMMIT_SHA_LEN && candidate.bytes().all(|b| b.is_ascii_hexdigit())
}
