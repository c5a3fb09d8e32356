use std::fmt;
use serde::{Serialize, Deserialize};

/// Display text used when no eligible member was found for a slot
pub const UNAVAILABLE: &str = "No available";

/// One host slot: a roster member or the "unavailable" sentinel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Host {
    Member(String),
    Unavailable,
}

impl Host {
    pub fn member(&self) -> Option<&str> {
        match self {
            Host::Member(name) => Some(name),
            Host::Unavailable => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Host::Unavailable)
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Host::Member(name) => f.write_str(name),
            Host::Unavailable => f.write_str(UNAVAILABLE),
        }
    }
}

impl From<Host> for String {
    fn from(host: Host) -> String {
        host.to_string()
    }
}

impl From<String> for Host {
    fn from(value: String) -> Host {
        if value == UNAVAILABLE {
            Host::Unavailable
        } else {
            Host::Member(value)
        }
    }
}

/// Hosts chosen for one meeting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub date: String,
    pub host1: Host,
    pub host2: Host,
}

/// Host assignments in chronological order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub entries: Vec<ScheduleEntry>,
}

impl Schedule {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleEntry> {
        self.entries.iter()
    }

    pub fn get(&self, date: &str) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.date == date)
    }
}
