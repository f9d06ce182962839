//! HTTP request handlers.
//!
//! - [`persons`] - Person directory served with partial responses
//! - [`health`] - Health check endpoints

pub mod health;
pub mod persons;

pub use health::health_handler;
pub use persons::{list_persons_handler, list_persons_raw_handler, read_person_handler};
