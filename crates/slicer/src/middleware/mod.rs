//! HTTP middleware and extractors.
//!
//! - [`fields`] - Requested field list extraction
//! - [`slice`] - Router-level JSON response slicing

pub mod fields;
pub mod slice;

pub use fields::{FieldsParam, RequestedFields};
pub use slice::slice_json_response;
