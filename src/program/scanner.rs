use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use super::dates::extract_date;
use super::names::find_matching_member;
use super::types::{AssignedSet, CanonicalDate, DateLine, MeetingKind, MeetingRecord};

/// Two or more capitalized words separated by whitespace, Danish letters included
const NAME: &str = r"[A-ZÆØÅ][a-zæøåõ]+(?:\s+[A-ZÆØÅ][a-zæøåõ]+)+";

const WEEKEND_SECTION_MARKERS: [&str; 2] = ["Weekendmødet", "Weekendopgaver"];

// "Christopher Rüdinger/Lucas Vinzentsen"
static SLASH_NAMES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"({n})(?:\s*/\s*({n}))?", n = NAME)).expect("valid regex")
});

static STANDALONE_NAMES: Lazy<Regex> = Lazy::new(|| Regex::new(NAME).expect("valid regex"));

// "Bøn: Marcel Ale", "Kl. 2: Anna Jensen"
static COLON_NAMES: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r":\s*({n})", n = NAME)).expect("valid regex"));

static PAREN_NAMES: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"\(({n})\)", n = NAME)).expect("valid regex"));

/// Collects every candidate participant name on a line.
///
/// Four independent heuristics run over the same line and their results are
/// unioned; over-extraction is fine because unmatched names are dropped later.
pub fn candidate_names(line: &str) -> BTreeSet<String> {
    let mut names = BTreeSet::new();

    for caps in SLASH_NAMES.captures_iter(line) {
        for group in [caps.get(1), caps.get(2)].into_iter().flatten() {
            names.insert(group.as_str().to_string());
        }
    }
    for m in STANDALONE_NAMES.find_iter(line) {
        names.insert(m.as_str().to_string());
    }
    for caps in COLON_NAMES.captures_iter(line) {
        names.insert(caps[1].to_string());
    }
    for caps in PAREN_NAMES.captures_iter(line) {
        names.insert(caps[1].to_string());
    }

    names
}

/// A currently-open (date, assigned-set) accumulation context
#[derive(Debug, Clone)]
struct Window {
    label: CanonicalDate,
    assigned: AssignedSet,
}

impl Window {
    fn open(label: &str) -> Self {
        Window {
            label: label.to_string(),
            assigned: AssignedSet::new(),
        }
    }
}

/// Line-by-line state machine over one document's extracted text
pub struct DocumentScanner<'r> {
    roster: &'r [String],
    weekday: Option<Window>,
    weekend: Option<Window>,
    in_weekend_section: bool,
    meetings: MeetingRecord,
}

impl<'r> DocumentScanner<'r> {
    pub fn new(roster: &'r [String]) -> Self {
        DocumentScanner {
            roster,
            weekday: None,
            weekend: None,
            in_weekend_section: false,
            meetings: MeetingRecord::new(),
        }
    }

    pub fn current_weekday_date(&self) -> Option<&str> {
        self.weekday.as_ref().map(|w| w.label.as_str())
    }

    pub fn current_weekend_date(&self) -> Option<&str> {
        self.weekend.as_ref().map(|w| w.label.as_str())
    }

    pub fn in_weekend_section(&self) -> bool {
        self.in_weekend_section
    }

    /// Meetings committed so far; open windows are not included until flushed
    pub fn committed(&self) -> &MeetingRecord {
        &self.meetings
    }

    /// Feeds one raw line. Lines are stripped before matching.
    pub fn feed_line(&mut self, raw: &str) {
        let line = raw.trim();

        if let Some(date_line) = extract_date(line) {
            self.on_date_line(&date_line);
            if date_line.no_meeting {
                return;
            }
        }

        if WEEKEND_SECTION_MARKERS.iter().any(|m| line.contains(m)) {
            self.in_weekend_section = true;
        }

        if self.weekday.is_none() && self.weekend.is_none() {
            return;
        }

        let kind = self.target_kind();
        for name in candidate_names(line) {
            if let Some(member) = find_matching_member(&name, self.roster) {
                trace!(extracted = %name, member, "matched participant");
                if let Some(window) = self.window_mut(kind) {
                    window.assigned.insert(member.to_string());
                }
            }
        }
    }

    /// Flushes whatever is still open and returns this document's meetings
    pub fn finish(mut self) -> MeetingRecord {
        self.flush(MeetingKind::Weekday);
        self.flush(MeetingKind::Weekend);
        self.meetings
    }

    fn on_date_line(&mut self, date_line: &DateLine) {
        self.flush(MeetingKind::Weekday);
        self.flush(MeetingKind::Weekend);
        self.in_weekend_section = false;

        if date_line.no_meeting {
            debug!(pattern = ?date_line.pattern, "date line marked as no meeting");
            return;
        }

        // Range lines may open both windows; single dates open one and close the other
        self.weekday = date_line
            .date_of_kind(MeetingKind::Weekday)
            .map(|d| Window::open(&d.label));
        self.weekend = date_line
            .date_of_kind(MeetingKind::Weekend)
            .map(|d| Window::open(&d.label));

        debug!(
            pattern = ?date_line.pattern,
            weekday = ?self.current_weekday_date(),
            weekend = ?self.current_weekend_date(),
            "opened meeting window"
        );
    }

    /// Weekend window while inside a weekend section, otherwise the weekday
    /// window; a lone weekend window collects everything.
    fn target_kind(&self) -> MeetingKind {
        if self.in_weekend_section && self.weekend.is_some() {
            MeetingKind::Weekend
        } else if self.weekday.is_some() {
            MeetingKind::Weekday
        } else {
            MeetingKind::Weekend
        }
    }

    fn window_mut(&mut self, kind: MeetingKind) -> Option<&mut Window> {
        match kind {
            MeetingKind::Weekday => self.weekday.as_mut(),
            MeetingKind::Weekend => self.weekend.as_mut(),
        }
    }

    /// Commits the window as a snapshot; a label seen twice in one document
    /// accumulates rather than overwrites.
    fn flush(&mut self, kind: MeetingKind) {
        let window = match kind {
            MeetingKind::Weekday => self.weekday.take(),
            MeetingKind::Weekend => self.weekend.take(),
        };
        if let Some(Window { label, assigned }) = window {
            debug!(date = %label, assigned = assigned.len(), "flushed meeting");
            self.meetings.entry(label).or_default().extend(assigned);
        }
    }
}

/// Scans one document's text and returns its date -> assigned-set mapping
pub fn scan_document(text: &str, roster: &[String]) -> MeetingRecord {
    let mut scanner = DocumentScanner::new(roster);
    for line in text.lines() {
        scanner.feed_line(line);
    }
    scanner.finish()
}
