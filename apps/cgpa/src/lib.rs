//! # CGPA Calculator Library
//!
//! This library exposes the application modules for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod api;
pub mod cli;
pub mod console;
pub mod logging;

// Re-export cgpa_core for convenience
pub use cgpa_core;
