use serde::{Serialize, Deserialize};
use tracing::info;

use crate::error::{PlannerError, Result};
use crate::program::{aggregate, scan_document, AssignedSet, MeetingRecord};
use crate::schedule::{generate_schedule, parse_sort_key, Schedule};

/// Everything one run produces: who is busy when, and who hosts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostPlan {
    pub meetings: MeetingRecord,
    pub schedule: Schedule,
    pub summary: PlanSummary,
}

/// Overview numbers shown after a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub meetings: usize,
    /// Two slots per meeting, sentinels included
    pub hosts_assigned: usize,
    pub available_hosts: usize,
    /// Meetings where at least one member had to be skipped
    pub conflicts_avoided: usize,
}

impl PlanSummary {
    pub fn new(roster: &[String], meetings: &MeetingRecord, schedule: &Schedule) -> Self {
        PlanSummary {
            meetings: schedule.len(),
            hosts_assigned: schedule.len() * 2,
            available_hosts: roster.len(),
            conflicts_avoided: meetings.values().filter(|a| !a.is_empty()).count(),
        }
    }
}

impl HostPlan {
    /// Meetings with their assigned members, earliest first
    pub fn meetings_chronologically(&self) -> Vec<(&str, &AssignedSet)> {
        let mut list: Vec<(&str, &AssignedSet)> =
            self.meetings.iter().map(|(d, a)| (d.as_str(), a)).collect();
        list.sort_by_key(|(d, _)| parse_sort_key(d));
        list
    }
}

/// Scans every document against the roster and merges the results
pub fn collect_meetings<S: AsRef<str>>(roster: &[String], documents: &[S]) -> MeetingRecord {
    aggregate(documents.iter().map(|text| scan_document(text.as_ref(), roster)))
}

/// Runs the whole pipeline: scan, merge, schedule.
///
/// Finding no dates at all is reported as `NoMeetingsFound` so callers can
/// tell it apart from a legitimately short schedule.
pub fn plan_hosts<S: AsRef<str>>(roster: &[String], documents: &[S]) -> Result<HostPlan> {
    let meetings = collect_meetings(roster, documents);
    if meetings.is_empty() {
        return Err(PlannerError::NoMeetingsFound {
            documents: documents.len(),
        });
    }
    info!(meetings = meetings.len(), documents = documents.len(), "meetings registered");

    let schedule = generate_schedule(roster, &meetings);
    let summary = PlanSummary::new(roster, &meetings, &schedule);
    info!(
        entries = schedule.len(),
        conflicts_avoided = summary.conflicts_avoided,
        "schedule generated"
    );

    Ok(HostPlan {
        meetings,
        schedule,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_dates_is_an_error() {
        let roster = vec!["Anna Jensen".to_string()];
        let err = plan_hosts(&roster, &["Bøn: Anna Jensen"]).unwrap_err();
        assert!(matches!(err, PlannerError::NoMeetingsFound { documents: 1 }));
    }

    #[test]
    fn test_summary_counts() {
        let roster: Vec<String> = ["Anna Jensen", "Bo Madsen", "Clara Poulsen"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let text = "Tirsdag 02 September\nBøn: Anna Jensen\n07/09/2025\n";
        let plan = plan_hosts(&roster, &[text]).unwrap();
        assert_eq!(
            plan.summary,
            PlanSummary {
                meetings: 2,
                hosts_assigned: 4,
                available_hosts: 3,
                conflicts_avoided: 1,
            }
        );
        let order: Vec<&str> = plan.meetings_chronologically().iter().map(|(d, _)| *d).collect();
        assert_eq!(order, vec!["Tirsdag 02 September 2025", "Søndag 07 September 2025"]);
    }
}
