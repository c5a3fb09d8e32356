//! Assigns two hosts to every meeting found in a set of meeting programmes,
//! skipping members who already have a task at that meeting.
//!
//! The core is pure: [`program`] turns programme text into a table of busy
//! members per date, and [`schedule`] rotates through the roster to pick
//! hosts. Loading rosters and documents, writing the schedule and serving
//! HTTP are thin layers around it.

pub mod error;
pub mod program;
pub mod schedule;
pub mod plan;
pub mod parser;
pub mod documents;
pub mod export;
pub mod display;
pub mod web;

pub use error::{PlannerError, Result};
pub use parser::{load_roster, RosterOptions};
pub use plan::{collect_meetings, plan_hosts, HostPlan, PlanSummary};
