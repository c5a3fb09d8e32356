pub mod types;
pub mod ordering;
pub mod rotation;

pub use types::{Host, Schedule, ScheduleEntry, UNAVAILABLE};
pub use ordering::{parse_sort_key, sort_chronologically};
pub use rotation::{generate_schedule, HostRotation};
