//! Data models shared across the generation pipeline.
//!
//! This module contains the group table produced by the scanner, the
//! job description consumed by the orchestrator and the summary it returns.

use crate::render::IncludeStyle;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Model name -> number of test scripts found for it.
///
/// Ordered so that output and verbose listings are reproducible between runs.
pub type GroupTable = BTreeMap<String, usize>;

/// Everything a single generation run needs.
#[derive(Debug, Clone)]
pub struct Job {
    /// Directory holding the `MODEL.Test.xxx.xml` scripts.
    pub origin: PathBuf,
    /// Directory receiving the generated `MODEL.xml` files.
    pub destination: PathBuf,
    /// Header template path.
    pub header: PathBuf,
    /// Footer template path.
    pub footer: PathBuf,
    /// Report loads, the group table and completion on stdout.
    pub verbose: bool,
    /// Stop after scanning; write nothing.
    pub dry_run: bool,
    /// Show a progress bar while writing.
    pub show_progress: bool,
    /// Extension of the generated files (without dot).
    pub extension: String,
    /// Delimiter and attributes used for grouping and include lines.
    pub style: IncludeStyle,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Groups detected in the origin directory.
    pub groups: GroupTable,
    /// Paths of the files written, in write order.
    pub written: Vec<PathBuf>,
    /// Whether writing was skipped.
    pub dry_run: bool,
}

impl RunSummary {
    /// Total number of test scripts referenced across all groups.
    pub fn total_scripts(&self) -> usize {
        self.groups.values().sum()
    }
}
