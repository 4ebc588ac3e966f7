//! Academic calendar event model

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of calendar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Regular class session
    Class,
    /// Exam
    Exam,
    /// Homework or project
    Assignment,
    /// Submission or registration deadline
    Deadline,
}

impl EventKind {
    /// All kinds, in form order
    pub const ALL: [Self; 4] = [Self::Class, Self::Exam, Self::Assignment, Self::Deadline];

    /// Wire name (`class`, `exam`, ...)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Exam => "exam",
            Self::Assignment => "assignment",
            Self::Deadline => "deadline",
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Class => "Class",
            Self::Exam => "Exam",
            Self::Assignment => "Assignment",
            Self::Deadline => "Deadline",
        }
    }
}

impl FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "class" => Ok(Self::Class),
            "exam" => Ok(Self::Exam),
            "assignment" => Ok(Self::Assignment),
            "deadline" => Ok(Self::Deadline),
            _ => Err(format!(
                "Unknown event type: '{s}'. Use: class, exam, assignment, or deadline"
            )),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A dated entry in the academic calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicEvent {
    /// Caller-generated identifier (timestamp-derived)
    pub id: String,

    /// Short title (e.g., "Midterm: Algorithms")
    pub title: String,

    /// Event kind, stored under the `type` key
    #[serde(rename = "type")]
    pub kind: EventKind,

    /// Calendar date (`YYYY-MM-DD`)
    pub date: NaiveDate,

    /// Optional clock time (`HH:MM`)
    #[serde(default, with = "clock_time", skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
}

impl AcademicEvent {
    /// Time formatted as `HH:MM`, if set
    #[must_use]
    pub fn time_label(&self) -> Option<String> {
        self.time.map(|t| t.format(clock_time::FORMAT).to_string())
    }
}

/// Form input for an event that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    /// Title
    pub title: String,
    /// Event kind
    pub kind: EventKind,
    /// Calendar date
    pub date: NaiveDate,
    /// Optional clock time
    pub time: Option<NaiveTime>,
}

impl EventDraft {
    /// Check the draft the way the event form does.
    ///
    /// # Errors
    /// Returns a message when the title is blank.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Event title must not be empty".to_string());
        }
        Ok(())
    }

    /// Turn the draft into a stored event with the given id
    #[must_use]
    pub fn into_event(self, id: String) -> AcademicEvent {
        AcademicEvent {
            id,
            title: self.title,
            kind: self.kind,
            date: self.date,
            time: self.time,
        }
    }
}

/// Parse a `HH:MM` (or `HH:MM:SS`) clock time.
///
/// # Errors
/// Returns a message when the text is not a valid time of day.
pub fn parse_clock_time(value: &str) -> Result<NaiveTime, String> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, clock_time::FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| format!("Invalid time '{value}'. Use HH:MM"))
}

/// Serde adapter for optional `HH:MM` times; an empty string means no time.
mod clock_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(time: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => s.serialize_str(&t.format(FORMAT).to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => super::parse_clock_time(text)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_event_json_with_time() {
        let json = r#"{"id":"1","title":"Midterm","type":"exam","date":"2025-03-14","time":"09:30"}"#;
        let event: AcademicEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.kind, EventKind::Exam);
        assert_eq!(event.date, date(2025, 3, 14));
        assert_eq!(event.time, NaiveTime::from_hms_opt(9, 30, 0));
        assert_eq!(event.time_label().as_deref(), Some("09:30"));
    }

    #[test]
    fn test_event_json_blank_or_missing_time() {
        let blank = r#"{"id":"1","title":"Lab","type":"class","date":"2025-03-14","time":""}"#;
        let missing = r#"{"id":"2","title":"Lab","type":"class","date":"2025-03-14"}"#;
        assert_eq!(serde_json::from_str::<AcademicEvent>(blank).unwrap().time, None);
        assert_eq!(serde_json::from_str::<AcademicEvent>(missing).unwrap().time, None);
    }

    #[test]
    fn test_event_serializes_type_and_short_time() {
        let event = AcademicEvent {
            id: "9".to_string(),
            title: "Essay".to_string(),
            kind: EventKind::Assignment,
            date: date(2025, 1, 2),
            time: NaiveTime::from_hms_opt(23, 59, 0),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"assignment""#));
        assert!(json.contains(r#""time":"23:59""#));
        assert!(json.contains(r#""date":"2025-01-02""#));
    }

    #[test]
    fn test_invalid_time_is_rejected() {
        let json = r#"{"id":"1","title":"X","type":"exam","date":"2025-03-14","time":"25:00"}"#;
        assert!(serde_json::from_str::<AcademicEvent>(json).is_err());
    }

    #[test]
    fn test_kind_parsing_and_names() {
        assert_eq!("Deadline".parse::<EventKind>(), Ok(EventKind::Deadline));
        assert!("party".parse::<EventKind>().is_err());
        assert_eq!(EventKind::Class.to_string(), "Class");
        assert_eq!(EventKind::Assignment.as_str(), "assignment");
    }

    #[test]
    fn test_draft_requires_title() {
        let draft = EventDraft {
            title: "  ".to_string(),
            kind: EventKind::Class,
            date: date(2025, 1, 1),
            time: None,
        };
        assert!(draft.validate().is_err());
    }
}
