//! Block parser: splits a program into header, cuts and footer

use regex::Regex;
use wamsort_core::{Cut, GcodeError};

use crate::dialect::BlockDialect;
use crate::program::Program;

/// Compiled section patterns for one [`BlockDialect`]
#[derive(Debug, Clone)]
pub struct BlockParser {
    dialect: BlockDialect,
    header: Regex,
    footer: Regex,
    cut: Regex,
}

impl BlockParser {
    /// Compile the patterns for a dialect
    ///
    /// Every marker is matched literally.
    pub fn new(dialect: &BlockDialect) -> Result<Self, GcodeError> {
        dialect
            .validate()
            .map_err(|reason| GcodeError::InvalidPattern { reason })?;

        let header = format!(
            r"(?m)^{}(?:[ \t].*)?\r?\n",
            regex::escape(&dialect.header_command)
        );
        let footer = format!(
            r"(?m)^{}(?:[ \t]|\r?$)",
            regex::escape(&dialect.footer_command)
        );
        let cut_end: String = dialect
            .cut_end
            .iter()
            .map(|line| format!(r"{}\r?\n", regex::escape(line)))
            .collect();
        let cut = format!(
            r"(?m)^G0 X-?\d+(?:\.\d+)? Y-?\d+(?:\.\d+)?\r?\n(?:.*\n)*?{}",
            cut_end
        );

        Ok(Self {
            dialect: dialect.clone(),
            header: compile(&header)?,
            footer: compile(&footer)?,
            cut: compile(&cut)?,
        })
    }

    pub fn dialect(&self) -> &BlockDialect {
        &self.dialect
    }

    /// Parse a whole program
    ///
    /// Fails as a unit: either header, footer and at least one cut are all
    /// found, or nothing is returned. Cuts keep their source order.
    pub fn parse(&self, text: &str) -> Result<Program, GcodeError> {
        let header_end = self
            .header
            .find(text)
            .ok_or_else(|| GcodeError::MissingHeader {
                command: self.dialect.header_command.clone(),
            })?
            .end();

        let footer_start = self
            .footer
            .find_at(text, header_end)
            .ok_or_else(|| GcodeError::MissingFooter {
                command: self.dialect.footer_command.clone(),
            })?
            .start();

        let mut cuts = Vec::new();
        let mut first_cut_start = None;
        let mut cursor = header_end;

        // The header always ends on a line break, so the body starts a line
        for m in self.cut.find_iter(&text[header_end..footer_start]) {
            let start = header_end + m.start();
            if first_cut_start.is_none() {
                first_cut_start = Some(start);
            } else if start > cursor {
                return Err(GcodeError::StrayContent {
                    line: line_at(text, cursor),
                });
            }

            let line = line_at(text, start);
            let cut = extract_cut(m.as_str(), cuts.len(), line)?;
            tracing::debug!(
                index = cuts.len(),
                line,
                points = cut.points().len(),
                bbox = ?cut.bbox(),
                "Extracted cut"
            );
            if cut.bbox().is_degenerate() {
                tracing::warn!(index = cuts.len(), line, bbox = ?cut.bbox(), "Cut has no area");
            }
            cuts.push(cut);
            cursor = header_end + m.end();
        }

        let Some(body_start) = first_cut_start else {
            return Err(GcodeError::NoCuts);
        };

        if body_start > header_end {
            tracing::warn!(
                line = line_at(text, header_end),
                "Keeping text before the first cut with the header"
            );
        }
        if footer_start > cursor {
            tracing::warn!(
                line = line_at(text, cursor),
                "Keeping text after the last cut with the footer"
            );
        }

        tracing::info!("Parsed program with {} cuts", cuts.len());

        Ok(Program::from_parts(
            text[..body_start].to_string(),
            text[cursor..].to_string(),
            cuts,
        ))
    }
}

impl Default for BlockParser {
    fn default() -> Self {
        static WAZER: std::sync::OnceLock<BlockParser> = std::sync::OnceLock::new();
        WAZER
            .get_or_init(|| {
                BlockParser::new(&BlockDialect::wazer()).expect("invalid WAZER block pattern")
            })
            .clone()
    }
}

fn compile(pattern: &str) -> Result<Regex, GcodeError> {
    Regex::new(pattern).map_err(|e| GcodeError::InvalidPattern {
        reason: e.to_string(),
    })
}

/// Pair every X and Y token of a cut's text into its toolpath
fn extract_cut(span: &str, index: usize, line: usize) -> Result<Cut, GcodeError> {
    static X_REGEX: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    static Y_REGEX: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    let x_regex =
        X_REGEX.get_or_init(|| Regex::new(r"X(-?\d+(?:\.\d+)?)").expect("invalid regex pattern"));
    let y_regex =
        Y_REGEX.get_or_init(|| Regex::new(r"Y(-?\d+(?:\.\d+)?)").expect("invalid regex pattern"));

    let xs = coordinates(x_regex, span, line)?;
    let ys = coordinates(y_regex, span, line)?;
    Cut::from_coordinates(span, &xs, &ys, index, line)
}

fn coordinates(regex: &Regex, span: &str, first_line: usize) -> Result<Vec<f64>, GcodeError> {
    regex
        .captures_iter(span)
        .filter_map(|caps| caps.get(1))
        .map(|token| {
            let value = token.as_str().parse::<f64>().ok().filter(|v| v.is_finite());
            value.ok_or_else(|| GcodeError::InvalidCoordinate {
                line: first_line + span[..token.start()].matches('\n').count(),
                token: token.as_str().to_string(),
            })
        })
        .collect()
}

/// 1-based line number of a byte offset
fn line_at(text: &str, offset: usize) -> usize {
    text[..offset].matches('\n').count() + 1
}
