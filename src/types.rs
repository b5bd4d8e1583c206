//! Report types for the root crate
use serde::Serialize;
use std::path::PathBuf;
use wamsort_core::BoundingBox;
use wamsort_sequence::Row;

/// One cut as shown by `info`
#[derive(Debug, Clone, Serialize)]
pub struct CutSummary {
    /// Position in the current order
    pub position: usize,
    pub points: usize,
    pub bbox: BoundingBox,
    /// Position of the nearest enclosing cut
    pub parent: Option<usize>,
    pub depth: usize,
    /// Number of cuts this cut encloses
    pub encloses: usize,
}

/// Everything `info` reports about a job
#[derive(Debug, Clone, Serialize)]
pub struct JobSummary {
    pub source: Option<PathBuf>,
    pub metadata: Vec<String>,
    pub cuts: Vec<CutSummary>,
    /// Rows the reorder would form, by position in the current order
    pub rows: Vec<Row>,
}
