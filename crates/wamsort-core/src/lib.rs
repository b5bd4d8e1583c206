//! # wamsort Core
//!
//! Core types shared by the wamsort crates: bounding-box geometry, the
//! [`Cut`] record and the error taxonomy.

pub mod cut;
pub mod error;
pub mod geometry;

pub use cut::Cut;
pub use error::{Error, GcodeError, Result};
pub use geometry::{encloses, BoundingBox, Point};
