use tracing::{debug, warn};

use crate::program::{AssignedSet, MeetingRecord};
use super::ordering::sort_chronologically;
use super::types::{Host, Schedule, ScheduleEntry};

/// Round-robin cursor over the roster, shared by every date and both slots
pub struct HostRotation<'r> {
    roster: &'r [String],
    cursor: usize,
}

impl<'r> HostRotation<'r> {
    pub fn new(roster: &'r [String]) -> Self {
        HostRotation { roster, cursor: 0 }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Advances through the roster until a member outside `assigned` turns
    /// up, giving up after two full passes.
    pub fn next_host(&mut self, assigned: &AssignedSet) -> Host {
        let n = self.roster.len();
        let max_attempts = n * 2;
        let mut attempts = 0;
        while attempts < max_attempts {
            let candidate = &self.roster[self.cursor % n];
            self.cursor += 1;
            attempts += 1;
            if !assigned.contains(candidate) {
                return Host::Member(candidate.clone());
            }
        }
        Host::Unavailable
    }
}

/// Assigns two hosts to every meeting, earliest first.
///
/// Conflicts are only checked against the meeting's own assigned set, so the
/// same member may host meetings that are close together.
pub fn generate_schedule(roster: &[String], meetings: &MeetingRecord) -> Schedule {
    if roster.is_empty() {
        warn!("empty roster, every host slot will be unavailable");
    }

    let mut dates: Vec<&String> = meetings.keys().collect();
    sort_chronologically(&mut dates);

    let mut rotation = HostRotation::new(roster);
    let entries = dates
        .into_iter()
        .map(|date| {
            let assigned = &meetings[date];
            let host1 = rotation.next_host(assigned);
            let host2 = rotation.next_host(assigned);
            debug!(%date, %host1, %host2, cursor = rotation.cursor(), "assigned hosts");
            ScheduleEntry {
                date: date.clone(),
                host1,
                host2,
            }
        })
        .collect();

    Schedule { entries }
}
