pub mod types;
pub mod names;
pub mod dates;
pub mod scanner;
pub mod aggregate;

pub use types::{
    AssignedSet, CanonicalDate, DateLine, DateMatch, DatePattern, MeetingKind, MeetingRecord,
    SortKey,
};
pub use names::{find_matching_member, normalize_name};
pub use dates::extract_date;
pub use scanner::{candidate_names, scan_document, DocumentScanner};
pub use aggregate::aggregate;
