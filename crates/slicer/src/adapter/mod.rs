//! Glue between the projector and HTTP responses.
//!
//! - [`shape`] - Call shapes of a JSON response (payload and status)
//! - [`envelope`] - Restoring the single-record or array envelope
//! - [`slicer`] - The per-request [`Slicer`] extractor and [`SlicedJson`]

pub mod envelope;
pub mod shape;
pub mod slicer;

pub use envelope::rebuild_envelope;
pub use shape::Shape;
pub use slicer::{SlicedJson, Slicer};
