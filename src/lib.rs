//! Inky Preview
//!
//! Device-faithful previews for six-color e-paper displays.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod rendering;
pub mod server;
pub mod services;
