//! Common types and utilities shared across blockplan.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants and the validated [`ScheduleConfig`]
//! - Error types

pub mod config;
pub mod error;

pub use config::ScheduleConfig;
pub use error::{Error, Result};
