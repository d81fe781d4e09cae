//! Utility functions and helpers.

pub mod collate;
pub mod http;
pub mod url;
