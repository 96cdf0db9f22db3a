//! Utilities Module
//!
//! Configuration and logging shared by the FFI and CLI surfaces.

pub mod config;
pub mod logging;
