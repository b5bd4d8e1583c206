//! Machine-specific markers that delimit the sections of a program
//!
//! The defaults are the strings WAZER's CAM emits. They are not a published
//! format and may change with a CAM update, so they live in configuration.

use serde::{Deserialize, Serialize};

/// Command that closes the WAZER header
pub const WAZER_HEADER_COMMAND: &str = "M1412";

/// Command that opens the WAZER footer
pub const WAZER_FOOTER_COMMAND: &str = "M1413";

/// Dwell / spindle stop / dwell lines that end every WAZER cut
pub const WAZER_CUT_END: [&str; 3] = ["G4 S1.", "M5", "G4 S1."];

/// Section markers for one machine's programs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockDialect {
    /// The header runs through the first line starting with this command
    pub header_command: String,
    /// The footer starts at the first line starting with this command
    pub footer_command: String,
    /// Exact lines, in order, that terminate a cut
    pub cut_end: Vec<String>,
}

impl Default for BlockDialect {
    fn default() -> Self {
        Self::wazer()
    }
}

impl BlockDialect {
    pub fn wazer() -> Self {
        Self {
            header_command: WAZER_HEADER_COMMAND.to_string(),
            footer_command: WAZER_FOOTER_COMMAND.to_string(),
            cut_end: WAZER_CUT_END.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Check that every marker is present
    pub fn validate(&self) -> Result<(), String> {
        if self.header_command.trim().is_empty() {
            return Err("Header command cannot be empty".to_string());
        }
        if self.footer_command.trim().is_empty() {
            return Err("Footer command cannot be empty".to_string());
        }
        if self.cut_end.is_empty() {
            return Err("Cut end sequence cannot be empty".to_string());
        }
        if self.cut_end.iter().any(|line| line.trim().is_empty()) {
            return Err("Cut end sequence cannot contain empty lines".to_string());
        }
        Ok(())
    }
}
