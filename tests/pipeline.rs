//! End-to-end runs of the planner over programme text

use modevaert_planner::program::{scan_document, AssignedSet};
use modevaert_planner::schedule::{parse_sort_key, Host};
use modevaert_planner::{collect_meetings, plan_hosts, PlannerError};

fn roster(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn set(names: &[&str]) -> AssignedSet {
    names.iter().map(|s| s.to_string()).collect()
}

fn member(name: &str) -> Host {
    Host::Member(name.to_string())
}

#[test]
fn test_two_tuesdays_end_to_end() {
    let members = roster(&["Anna Jensen", "Bo Madsen", "Clara Poulsen"]);
    let program = "Tirsdag 02 September\nBøn: Anna Jensen\nTirsdag 09 September\n";

    let plan = plan_hosts(&members, &[program]).unwrap();

    assert_eq!(plan.meetings.len(), 2);
    assert_eq!(plan.meetings["Tirsdag 02 September 2025"], set(&["Anna Jensen"]));
    assert_eq!(plan.meetings["Tirsdag 09 September 2025"], set(&[]));

    let entries = &plan.schedule.entries;
    assert_eq!(entries[0].date, "Tirsdag 02 September 2025");
    assert_eq!(entries[0].host1, member("Bo Madsen"));
    assert_eq!(entries[0].host2, member("Clara Poulsen"));
    assert_eq!(entries[1].date, "Tirsdag 09 September 2025");
    assert_eq!(entries[1].host1, member("Anna Jensen"));
    assert_eq!(entries[1].host2, member("Bo Madsen"));
}

#[test]
fn test_documents_are_merged_by_union() {
    let members = roster(&["Anna Jensen", "Bo Madsen", "Clara Poulsen", "Dorte Holm"]);
    let weekday = "Tirsdag 02 September\nBøn: Anna Jensen\n";
    let weekend = "07/09/2025\nOplæser: Clara Poulsen\nTirsdag 02 September\nTale: Bo Madsen\n";

    let meetings = collect_meetings(&members, &[weekday, weekend]);
    assert_eq!(meetings["Tirsdag 02 September 2025"], set(&["Anna Jensen", "Bo Madsen"]));
    assert_eq!(meetings["Søndag 07 September 2025"], set(&["Clara Poulsen"]));

    let plan = plan_hosts(&members, &[weekday, weekend]).unwrap();
    let first = plan.schedule.get("Tirsdag 02 September 2025").unwrap();
    assert_eq!(first.host1, member("Clara Poulsen"));
    assert_eq!(first.host2, member("Dorte Holm"));
}

#[test]
fn test_range_program_with_weekend_section() {
    let members = roster(&["Anna Jensen", "Bo Madsen", "Clara Poulsen", "Lars Sørensen"]);
    let program = "\
Marts 30-april 05
Sang 12 og bøn: Anna Jensen
Læsning (Lars Sørensen)
Weekendmødet
Foredrag: Bo Madsen
April 06-12
Bøn: Clara Poulsen
";
    let plan = plan_hosts(&members, &[program]).unwrap();

    assert_eq!(plan.meetings["Tirsdag 31 Marts 2026"], set(&["Anna Jensen", "Lars Sørensen"]));
    assert_eq!(plan.meetings["Søndag 05 April 2026"], set(&["Bo Madsen"]));
    assert_eq!(plan.meetings["Tirsdag 07 April 2026"], set(&["Clara Poulsen"]));
    assert_eq!(plan.meetings["Søndag 12 April 2026"], set(&[]));

    let dates: Vec<&str> = plan.schedule.iter().map(|e| e.date.as_str()).collect();
    assert_eq!(
        dates,
        vec![
            "Tirsdag 31 Marts 2026",
            "Søndag 05 April 2026",
            "Tirsdag 07 April 2026",
            "Søndag 12 April 2026",
        ]
    );
}

#[test]
fn test_schedule_never_picks_busy_members() {
    let members = roster(&["Anna Jensen", "Bo Madsen", "Clara Poulsen", "Dorte Holm"]);
    let program = "\
Tirsdag 02 September
Bøn: Anna Jensen / Bo Madsen
Tirsdag 09 September
Tale: Clara Poulsen
07/09/2025
Oplæser: Dorte Holm
";
    let plan = plan_hosts(&members, &[program]).unwrap();
    for entry in plan.schedule.iter() {
        let busy = &plan.meetings[&entry.date];
        for host in [&entry.host1, &entry.host2] {
            let name = host.member().expect("a free member exists for every meeting");
            assert!(!busy.contains(name), "{} is busy on {}", name, entry.date);
        }
    }
}

#[test]
fn test_numeric_weekend_label_and_key() {
    let members = roster(&["Anna Jensen"]);
    let plan = plan_hosts(&members, &["07/09/2025"]).unwrap();
    let entry = &plan.schedule.entries[0];
    assert_eq!(entry.date, "Søndag 07 September 2025");
    assert_eq!(parse_sort_key(&entry.date), (2025, 9, 7));
}

#[test]
fn test_no_meetings_reported_distinctly() {
    let members = roster(&["Anna Jensen"]);
    let err = plan_hosts(&members, &["Velkommen", "Sang 12"]).unwrap_err();
    assert!(matches!(err, PlannerError::NoMeetingsFound { documents: 2 }));
}

#[test]
fn test_only_no_meeting_dates_is_also_empty() {
    let members = roster(&["Anna Jensen"]);
    let err = plan_hosts(&members, &["Tirsdag 23 December Intet møde"]).unwrap_err();
    assert!(matches!(err, PlannerError::NoMeetingsFound { .. }));
    assert!(scan_document("Tirsdag 23 December Intet møde", &members).is_empty());
}
