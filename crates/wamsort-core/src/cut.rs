//! The cut record: one part outline extracted from a program.

use serde::Serialize;

use crate::error::GcodeError;
use crate::geometry::{BoundingBox, Point};

/// One machine cut, from its rapid positioning move to its end-of-cut markers
///
/// The source text is kept byte-for-byte so the program can be reassembled
/// verbatim. Cuts are identified by their position in the parsed program,
/// never by comparing text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cut {
    #[serde(skip)]
    raw_text: String,
    points: Vec<Point>,
    bbox: BoundingBox,
}

impl Cut {
    /// Pair X and Y coordinates into a cut
    ///
    /// `index` and `line` only locate the cut in error messages.
    pub fn from_coordinates(
        raw_text: impl Into<String>,
        xs: &[f64],
        ys: &[f64],
        index: usize,
        line: usize,
    ) -> Result<Self, GcodeError> {
        if xs.len() != ys.len() || xs.is_empty() {
            return Err(GcodeError::MalformedCut {
                index,
                line,
                x_count: xs.len(),
                y_count: ys.len(),
            });
        }
        let points: Vec<Point> = xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| Point::new(x, y))
            .collect();
        Self::new(raw_text, points).ok_or(GcodeError::MalformedCut {
            index,
            line,
            x_count: xs.len(),
            y_count: ys.len(),
        })
    }

    /// Build a cut from its toolpath, `None` when `points` is empty
    pub fn new(raw_text: impl Into<String>, points: Vec<Point>) -> Option<Self> {
        let bbox = BoundingBox::from_points(&points)?;
        Some(Self {
            raw_text: raw_text.into(),
            points,
            bbox,
        })
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// The toolpath in cut order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    /// Position of the rapid move that starts the cut
    pub fn start(&self) -> Point {
        self.points[0]
    }
}
