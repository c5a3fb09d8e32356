use crate::plan::{HostPlan, PlanSummary};
use crate::program::AssignedSet;
use crate::schedule::Schedule;

/// Formats a meeting's assigned members for the overview
pub fn format_assigned(assigned: &AssignedSet) -> String {
    if assigned.is_empty() {
        "(ingen opgaver registreret)".to_string()
    } else {
        assigned.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

/// Prints every registered meeting with the members already busy there
pub fn print_meetings(plan: &HostPlan) {
    println!("\n=== Registrerede møder og opgaver ===");
    for (date, assigned) in plan.meetings_chronologically() {
        println!("  {}: {}", date, format_assigned(assigned));
    }
}

/// Prints the schedule as an aligned three-column table
pub fn print_schedule(schedule: &Schedule) {
    let width = schedule
        .iter()
        .map(|e| e.date.chars().count())
        .max()
        .unwrap_or(0)
        .max("Dato".len());

    println!("\n=== Genereret tidsplan ===");
    println!("  {:<width$}  {:<24}  {}", "Dato", "Vært 1", "Vært 2", width = width);
    for entry in schedule.iter() {
        println!(
            "  {:<width$}  {:<24}  {}",
            entry.date,
            entry.host1.to_string(),
            entry.host2,
            width = width
        );
    }
}

pub fn print_summary(summary: &PlanSummary) {
    println!("\n=== Oversigt ===");
    println!("  Total møder:              {}", summary.meetings);
    println!("  Total værter tildelt:     {}", summary.hosts_assigned);
    println!("  Tilgængelige mødeværter:  {}", summary.available_hosts);
    println!("  Konflikter undgået:       {}", summary.conflicts_avoided);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_assigned() {
        let mut assigned = AssignedSet::new();
        assert_eq!(format_assigned(&assigned), "(ingen opgaver registreret)");
        assigned.insert("Bo Madsen".to_string());
        assigned.insert("Anna Jensen".to_string());
        assert_eq!(format_assigned(&assigned), "Anna Jensen, Bo Madsen");
    }
}
