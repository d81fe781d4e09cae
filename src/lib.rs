// src/lib.rs

//! rollcall: faculty roster and attendance client library

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;
