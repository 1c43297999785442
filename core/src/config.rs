//! Harness configuration — where the game's artifacts live.
//!
//! Everything is resolved from the game repository root at fixed
//! locations. There are no flags and no environment overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const INDEX_FILE: &str = "index.html";
pub const EVENTS_FILE: &str = "data/events.js";
pub const REPORT_FILE: &str = "BALANCE_TEST_REPORT.txt";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HarnessConfig {
    pub repo_root:   PathBuf,
    /// Game markup holding the balance constant declarations.
    pub index_path:  PathBuf,
    /// Event catalog holding the event identifier declarations.
    pub events_path: PathBuf,
    pub report_path: PathBuf,
}

impl HarnessConfig {
    pub fn from_repo_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            repo_root:   root.to_path_buf(),
            index_path:  root.join(INDEX_FILE),
            events_path: root.join(EVENTS_FILE),
            report_path: root.join(REPORT_FILE),
        }
    }
}
