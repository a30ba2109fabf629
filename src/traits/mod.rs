//! Trait abstractions for external dependencies.
//!
//! The production adapters live in [`crate::adapters`]; tests swap in the
//! mock implementations from `adapters::mock`.

mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
