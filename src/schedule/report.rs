//! Diagnostic report formatting.

use std::fmt;

use crate::schedule::generator::BlockSchedule;

/// Human-readable report over a generated schedule.
///
/// Renders the constants, the full block size list, and the coverage check
/// in a fixed line format. The labels (including the `===` on the equality
/// line) are part of the report's stable output contract and must not
/// change.
///
/// # Example
/// ```
/// use blockplan::{BlockSchedule, ScheduleConfig, ScheduleReport};
///
/// let schedule = BlockSchedule::generate(ScheduleConfig::new(1, 2)).unwrap();
/// let report = ScheduleReport::new(&schedule).to_string();
/// assert!(report.starts_with("PTR_SIZE: 1\n"));
/// assert!(report.ends_with("total size === MAX_CAPACITY: true\n"));
/// ```
pub struct ScheduleReport<'a> {
    schedule: &'a BlockSchedule,
}

impl<'a> ScheduleReport<'a> {
    /// Build a report borrowing the schedule.
    pub fn new(schedule: &'a BlockSchedule) -> Self {
        ScheduleReport { schedule }
    }
}

impl fmt::Display for ScheduleReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.schedule.config();

        writeln!(f, "PTR_SIZE: {}", config.ptr_size)?;
        writeln!(f, "MAX_CAPACITY: {}", self.schedule.max_capacity())?;
        writeln!(f, "MIN_CAPACITY: {}", config.min_capacity)?;

        write!(f, "blockSizes: [")?;
        for (i, size) in self.schedule.sizes().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", size)?;
        }
        writeln!(f, "]")?;

        writeln!(f, "blockSizes.length: {}", self.schedule.len())?;

        let total = self.schedule.total_size();
        writeln!(f, "total size: {}", total)?;
        writeln!(
            f,
            "total size === MAX_CAPACITY: {}",
            self.schedule.covers_address_space()
        )
    }
}
