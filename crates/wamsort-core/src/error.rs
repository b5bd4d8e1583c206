//! Error handling for wamsort
//!
//! Provides the error types shared by every layer:
//! - G-Code errors (program recognition and cut extraction)
//! - I/O errors (reading programs, writing reordered copies)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// G-Code error type
///
/// Represents errors raised while splitting a program into header, cuts and
/// footer. The first three variants mean the file was not recognized at all.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GcodeError {
    /// No header terminator line was found
    #[error("Header not found: no line starting with '{command}'")]
    MissingHeader {
        /// The command that terminates the header.
        command: String,
    },

    /// No footer start line was found after the header
    #[error("Footer not found: no line starting with '{command}' after the header")]
    MissingFooter {
        /// The command that starts the footer.
        command: String,
    },

    /// The program body contains no complete cut
    #[error("No cuts found between header and footer")]
    NoCuts,

    /// A cut has a different number of X and Y coordinate tokens
    #[error("Malformed cut {index} at line {line}: {x_count} X coordinates but {y_count} Y coordinates")]
    MalformedCut {
        /// Position of the cut in source order.
        index: usize,
        /// The line the cut starts on (1-based).
        line: usize,
        /// Number of X tokens found.
        x_count: usize,
        /// Number of Y tokens found.
        y_count: usize,
    },

    /// Text between two cuts that belongs to neither
    #[error("Unexpected content between cuts at line {line}")]
    StrayContent {
        /// The line the stray text starts on (1-based).
        line: usize,
    },

    /// A coordinate token that is not a finite number
    #[error("Invalid coordinate '{token}' at line {line}")]
    InvalidCoordinate {
        /// The line containing the token (1-based).
        line: usize,
        /// The offending token.
        token: String,
    },

    /// The configured dialect could not be turned into block patterns
    #[error("Invalid block pattern: {reason}")]
    InvalidPattern {
        /// The reason the pattern was rejected.
        reason: String,
    },
}

impl GcodeError {
    /// Check if this error means the file is not a recognizable program
    ///
    /// Callers treat all of these as a single "file not recognized" signal
    /// and take no destructive action.
    pub fn is_unrecognized(&self) -> bool {
        matches!(
            self,
            GcodeError::MissingHeader { .. } | GcodeError::MissingFooter { .. } | GcodeError::NoCuts
        )
    }
}

/// Main error type for wamsort
#[derive(Error, Debug)]
pub enum Error {
    /// G-Code error
    #[error(transparent)]
    Gcode(#[from] GcodeError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a G-Code error
    pub fn is_gcode_error(&self) -> bool {
        matches!(self, Error::Gcode(_))
    }

    /// Check if the input was not recognized as a program
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, Error::Gcode(err) if err.is_unrecognized())
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcode_error_display() {
        let err = GcodeError::MissingFooter {
            command: "M1413".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Footer not found: no line starting with 'M1413' after the header"
        );

        let err = GcodeError::MalformedCut {
            index: 3,
            line: 40,
            x_count: 5,
            y_count: 4,
        };
        assert_eq!(
            err.to_string(),
            "Malformed cut 3 at line 40: 5 X coordinates but 4 Y coordinates"
        );
    }

    #[test]
    fn test_unrecognized_family() {
        assert!(GcodeError::NoCuts.is_unrecognized());
        assert!(GcodeError::MissingHeader {
            command: "M1412".into()
        }
        .is_unrecognized());
        assert!(!GcodeError::StrayContent { line: 9 }.is_unrecognized());
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = GcodeError::NoCuts.into();
        assert!(err.is_gcode_error());
        assert!(err.is_unrecognized());

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_unrecognized());
    }
}
