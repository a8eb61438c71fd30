//! Folder hierarchy configuration.

use serde::{Deserialize, Serialize};

/// How folder creation and moves treat a `parent_id` that does not resolve
/// to an existing folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingParentMode {
    /// Fail the operation with a not-found error.
    Reject,
    /// Place the folder at the root instead, as if `parent_id` were absent.
    /// Tolerates stale parent references at the cost of masking caller bugs;
    /// every adoption is logged at `warn` level.
    AdoptRoot,
}

impl Default for MissingParentMode {
    fn default() -> Self {
        Self::Reject
    }
}

/// Folder hierarchy behavior configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HierarchyConfig {
    /// Behavior when a referenced parent folder does not exist.
    #[serde(default)]
    pub missing_parent: MissingParentMode,
}
