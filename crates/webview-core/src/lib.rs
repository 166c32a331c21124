//! # webview-core
//!
//! Translation catalog contract, positional placeholder formatting,
//! configuration, and error handling shared by the popups and OAuth helpers.

pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod traits;
