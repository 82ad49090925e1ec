//! One-shot diagnostic binary: generate the default schedule, print the
//! report, exit 0.

use blockplan::{BlockSchedule, Result, ScheduleConfig, ScheduleReport};

fn main() -> Result<()> {
    let schedule = BlockSchedule::generate(ScheduleConfig::default())?;
    print!("{}", ScheduleReport::new(&schedule));
    Ok(())
}
