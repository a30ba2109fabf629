//! ragdeck: a terminal dashboard client for the mini-rag-system backend.
//!
//! One screen showing translated UI text, a backend connection status
//! resolved by a one-shot startup health probe, and a language switcher
//! with right-to-left layout support.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod health;
pub mod i18n;
pub mod terminal;
pub mod traits;
pub mod ui;
