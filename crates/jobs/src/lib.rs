pub mod calendar_seed;
pub mod runner;

pub use calendar_seed::CalendarSeedJob;
pub use runner::JobRunner;
