//! A parsed program and its verbatim serialization

use wamsort_core::{Cut, Error, GcodeError, Result};

use crate::parser::BlockParser;

/// Number of header lines that describe the job, after the first line
const METADATA_LINES: usize = 8;

/// Header, ordered cuts and footer of one program
///
/// Header and footer are opaque and re-emitted unchanged. Only the order of
/// the cuts ever changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    header: String,
    footer: String,
    cuts: Vec<Cut>,
}

impl Program {
    /// Parse with the WAZER dialect
    pub fn parse(text: &str) -> std::result::Result<Self, GcodeError> {
        BlockParser::default().parse(text)
    }

    pub(crate) fn from_parts(header: String, footer: String, cuts: Vec<Cut>) -> Self {
        Self {
            header,
            footer,
            cuts,
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn footer(&self) -> &str {
        &self.footer
    }

    /// Cuts in their current order
    pub fn cuts(&self) -> &[Cut] {
        &self.cuts
    }

    /// Mutable view of the cut order; the set of cuts cannot change through it
    pub fn cuts_mut(&mut self) -> &mut [Cut] {
        &mut self.cuts
    }

    pub fn len(&self) -> usize {
        self.cuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }

    /// Job description lines shown next to a preview
    ///
    /// The first header line is the CAM banner and is skipped.
    pub fn metadata(&self) -> Vec<&str> {
        self.header.lines().skip(1).take(METADATA_LINES).collect()
    }

    /// Rearrange the cuts so that position `k` holds the cut at `order[k]`
    ///
    /// `order` must be a permutation of `0..len`; otherwise nothing changes.
    pub fn apply_order(&mut self, order: &[usize]) -> Result<()> {
        if !is_permutation(order, self.cuts.len()) {
            return Err(Error::other(format!(
                "Order of {} entries is not a permutation of {} cuts",
                order.len(),
                self.cuts.len()
            )));
        }
        let mut slots: Vec<Option<Cut>> = std::mem::take(&mut self.cuts)
            .into_iter()
            .map(Some)
            .collect();
        self.cuts = order.iter().filter_map(|&i| slots[i].take()).collect();
        Ok(())
    }

    /// Reassemble the program text
    pub fn to_gcode(&self) -> String {
        serialize(&self.header, &self.footer, &self.cuts)
    }
}

/// Concatenate header, cut texts in order, and footer
pub fn serialize(header: &str, footer: &str, cuts: &[Cut]) -> String {
    let capacity =
        header.len() + footer.len() + cuts.iter().map(|c| c.raw_text().len()).sum::<usize>();
    let mut text = String::with_capacity(capacity);
    text.push_str(header);
    for cut in cuts {
        text.push_str(cut.raw_text());
    }
    text.push_str(footer);
    text
}

fn is_permutation(order: &[usize], len: usize) -> bool {
    if order.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    for &index in order {
        match seen.get_mut(index) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}
