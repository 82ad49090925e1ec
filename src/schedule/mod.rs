//! Schedule generation and reporting.
//!
//! # Components
//! - [`BlockSchedule`] - The generated block size sequence and its checks
//! - [`ScheduleReport`] - Fixed-format diagnostic output over a schedule

mod generator;
mod report;

pub use generator::BlockSchedule;
pub use report::ScheduleReport;
