//! Depreciation engine: turns property facts into a yearly schedule

pub mod capital_works;
pub mod plant;
pub mod policy;
pub mod schedule;

pub use capital_works::{capital_works_deduction, is_capital_works_eligible};
pub use plant::{accumulate_plant, PlantContribution};
pub use policy::DepreciationPolicy;
pub use schedule::{calculate_schedule, calculate_schedule_with, ScheduleResult, YearEntry};
