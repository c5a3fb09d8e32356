use std::collections::{BTreeMap, BTreeSet};
use serde::{Serialize, Deserialize};

/// Fixed-template label such as "Tirsdag 15 September 2025" or
/// "Søndag 07 September 2025". Doubles as display text and map key.
pub type CanonicalDate = String;

/// Members already committed at one meeting
pub type AssignedSet = BTreeSet<String>;

/// Canonical date -> members already busy at that meeting, for one document
/// or (after aggregation) for all documents
pub type MeetingRecord = BTreeMap<CanonicalDate, AssignedSet>;

/// Which scanning window a recognized date opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingKind {
    Weekday,
    Weekend,
}

/// Chronological ordering key (year, month, day)
pub type SortKey = (i32, u32, u32);

/// One concrete meeting date produced from a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch {
    pub label: CanonicalDate,
    pub kind: MeetingKind,
    pub key: SortKey,
}

/// The pattern class that recognized a line, in dispatch order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePattern {
    CrossMonthRange,
    MonthRange,
    NamedWeekday,
    NumericWeekend,
    JanuaryAbbreviated,
    DanishDate,
    AbbreviatedMonth,
}

/// Result of running the date recognizers over one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateLine {
    pub pattern: DatePattern,
    pub dates: Vec<DateMatch>,
    /// The line also carries an "Intet møde" / "Ingen møde" marker
    pub no_meeting: bool,
}

impl DateLine {
    pub fn date_of_kind(&self, kind: MeetingKind) -> Option<&DateMatch> {
        self.dates.iter().find(|d| d.kind == kind)
    }
}
