//! Job session: one program and its current cut order
//!
//! Holds the state a front end needs between operations. Every operation
//! keeps header and footer untouched and only permutes the cuts.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use wamsort_core::{Cut, GcodeError};
use wamsort_parser::{read_program, write_program, BlockParser, Program};
use wamsort_sequence::{swap, Direction, SequencePlan};
use wamsort_settings::Config;

use crate::types::{CutSummary, JobSummary};

/// A parsed program and where it came from
#[derive(Debug, Clone)]
pub struct Job {
    source: Option<PathBuf>,
    program: Program,
}

impl Job {
    /// Read and parse a program file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not a recognized program
    pub fn open(path: impl AsRef<Path>, config: &Config) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = read_program(path)?;
        let program = BlockParser::new(&config.dialect)?
            .parse(&text)
            .with_context(|| format!("{} was not recognized", path.display()))?;

        tracing::info!("Opened {} ({} cuts)", path.display(), program.len());
        Ok(Self {
            source: Some(path.to_path_buf()),
            program,
        })
    }

    /// Parse a program that has no backing file
    pub fn from_text(text: &str, config: &Config) -> Result<Self, GcodeError> {
        let program = BlockParser::new(&config.dialect)?.parse(text)?;
        Ok(Self {
            source: None,
            program,
        })
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Cuts in the current order
    pub fn cuts(&self) -> &[Cut] {
        self.program.cuts()
    }

    /// Header lines describing the job
    pub fn metadata(&self) -> Vec<&str> {
        self.program.metadata()
    }

    /// The first `upto` cuts of the current order
    pub fn preview(&self, upto: usize) -> &[Cut] {
        let cuts = self.program.cuts();
        &cuts[..upto.min(cuts.len())]
    }

    /// What a reorder would do, without applying it
    pub fn plan(&self) -> SequencePlan {
        let boxes: Vec<_> = self.cuts().iter().map(|cut| *cut.bbox()).collect();
        wamsort_sequence::plan(&boxes)
    }

    /// Replace the current order with the containment/row order
    ///
    /// Returns the applied order as positions in the previous order.
    pub fn reorder(&mut self) -> wamsort_core::Result<Vec<usize>> {
        let order = self.plan().order;
        self.program.apply_order(&order)?;
        Ok(order)
    }

    /// Nudge the selected cuts one slot and return their new positions
    pub fn move_cuts(&mut self, direction: Direction, selected: &[usize]) -> Vec<usize> {
        let positions = swap(self.program.cuts_mut(), direction, selected);
        tracing::info!(?direction, ?positions, "Moved cuts");
        positions
    }

    pub fn to_gcode(&self) -> String {
        self.program.to_gcode()
    }

    /// Write the current order beside the source file
    ///
    /// # Errors
    /// Returns error if the job has no source file or the write fails
    pub fn save(&self, config: &Config) -> anyhow::Result<PathBuf> {
        let source = self
            .source
            .as_deref()
            .ok_or_else(|| anyhow!("Job has no source file to write beside"))?;
        write_program(source, &config.output.prefix, &self.to_gcode())
    }

    /// Per-cut nesting report for the current order
    pub fn summary(&self) -> JobSummary {
        let plan = self.plan();
        let cuts = self
            .cuts()
            .iter()
            .enumerate()
            .map(|(position, cut)| CutSummary {
                position,
                points: cut.points().len(),
                bbox: *cut.bbox(),
                parent: plan.forest.parent(position),
                depth: plan.forest.depth(position),
                encloses: plan.forest.children(position).len(),
            })
            .collect();

        JobSummary {
            source: self.source.clone(),
            metadata: self.metadata().into_iter().map(str::to_string).collect(),
            cuts,
            rows: plan.rows,
        }
    }
}
