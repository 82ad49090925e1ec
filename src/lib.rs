//! blockplan - Power-of-two block size schedules that partition an address
//! space exactly.
//!
//! Given a pointer width of W bytes, the addressable space is 2^(8W) bytes.
//! This crate generates the schedule of block sizes `[min, min, 2·min, ...,
//! 2^(8W-1)]` whose entries double from a minimum block size up to half the
//! address space, and verifies that they sum to the full space with exact
//! arbitrary-precision arithmetic (2^64 is one past `u64::MAX`, so native
//! integers cannot hold the default total).
//!
//! # Architecture
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                blockplan binary              │
//! │      generate → verify → print report        │
//! ├──────────────────────────────────────────────┤
//! │  ┌────────────────────────────────────────┐  │
//! │  │          Schedule (schedule/)          │  │
//! │  │    BlockSchedule + ScheduleReport      │  │
//! │  └────────────────────────────────────────┘  │
//! │                      ↓                       │
//! │  ┌────────────────────────────────────────┐  │
//! │  │           Common (common/)             │  │
//! │  │   constants + ScheduleConfig + Error   │  │
//! │  └────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (constants, ScheduleConfig, Error)
//! - [`schedule`] - Schedule generation and the diagnostic report
//!
//! # Quick Start
//! ```
//! use blockplan::{BlockSchedule, ScheduleConfig};
//!
//! let schedule = BlockSchedule::generate(ScheduleConfig::default()).unwrap();
//!
//! assert_eq!(schedule.len(), 64);
//! assert!(schedule.covers_address_space());
//! ```

// Core modules
pub mod common;
pub mod schedule;

// Re-export commonly used items at crate root for convenience
pub use common::config::{BITS_PER_BYTE, MIN_CAPACITY, PTR_SIZE};
pub use common::{Error, Result, ScheduleConfig};
pub use schedule::{BlockSchedule, ScheduleReport};
