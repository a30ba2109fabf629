//! Domain objects independent of the UI layer.

mod connection;

pub use connection::{BackendStatus, ConnectionState};
