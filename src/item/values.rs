//! Value objects shared by the item variants.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An item body, either plain text or HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    content: String,
    body_type: BodyType,
}

impl Body {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            body_type: BodyType::Text,
        }
    }

    pub fn html(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            body_type: BodyType::Html,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn body_type(&self) -> BodyType {
        self.body_type
    }
}

/// Wire tag distinguishing text bodies from HTML bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyType {
    Text,
    Html,
}

impl BodyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Html => "HTML",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "Text" => Some(Self::Text),
            "HTML" => Some(Self::Html),
            _ => None,
        }
    }
}

/// Raw MIME payload of an item plus its character set.
///
/// Default-constructed as "none": empty bytes, empty character set. The
/// payload travels base64-encoded on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MimeContent {
    character_set: String,
    bytes: Vec<u8>,
}

impl MimeContent {
    pub fn new(character_set: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            character_set: character_set.into(),
            bytes: bytes.into(),
        }
    }

    /// Whether this value holds no content at all.
    pub fn none(&self) -> bool {
        self.bytes.is_empty() && self.character_set.is_empty()
    }

    pub fn character_set(&self) -> &str {
        &self.character_set
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len_bytes(&self) -> usize {
        self.bytes.len()
    }

    /// Base64 rendering of the payload for emission.
    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.bytes)
    }

    /// Rebuild from the wire encoding. Returns `None` on invalid base64.
    pub fn from_base64(character_set: impl Into<String>, encoded: &str) -> Option<Self> {
        let bytes = BASE64.decode(encoded.trim()).ok()?;
        Some(Self {
            character_set: character_set.into(),
            bytes,
        })
    }
}

/// A named e-mail address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mailbox {
    name: String,
    email_address: String,
}

impl Mailbox {
    pub fn new(name: impl Into<String>, email_address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email_address: email_address.into(),
        }
    }

    /// A mailbox with only an address, no display name.
    pub fn address(email_address: impl Into<String>) -> Self {
        Self::new("", email_address)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email_address(&self) -> &str {
        &self.email_address
    }
}

/// Importance marker on message-like items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Importance {
    Low,
    Normal,
    High,
}

impl Importance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Normal => "Normal",
            Self::High => "High",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "Low" => Some(Self::Low),
            "Normal" => Some(Self::Normal),
            "High" => Some(Self::High),
            _ => None,
        }
    }
}

/// Sensitivity marker on message-like items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sensitivity {
    Normal,
    Personal,
    Private,
    Confidential,
}

impl Sensitivity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Personal => "Personal",
            Self::Private => "Private",
            Self::Confidential => "Confidential",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "Normal" => Some(Self::Normal),
            "Personal" => Some(Self::Personal),
            "Private" => Some(Self::Private),
            "Confidential" => Some(Self::Confidential),
            _ => None,
        }
    }
}

/// Progress state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    NotStarted,
    InProgress,
    Completed,
    WaitingOnOthers,
    Deferred,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "NotStarted",
            Self::InProgress => "InProgress",
            Self::Completed => "Completed",
            Self::WaitingOnOthers => "WaitingOnOthers",
            Self::Deferred => "Deferred",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "NotStarted" => Some(Self::NotStarted),
            "InProgress" => Some(Self::InProgress),
            "Completed" => Some(Self::Completed),
            "WaitingOnOthers" => Some(Self::WaitingOnOthers),
            "Deferred" => Some(Self::Deferred),
            _ => None,
        }
    }
}

/// A recurrence rule: how often the item repeats and when it stops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recurrence {
    pattern: RecurrencePattern,
    range: RecurrenceRange,
}

impl Recurrence {
    pub fn new(pattern: RecurrencePattern, range: RecurrenceRange) -> Self {
        Self { pattern, range }
    }

    pub fn pattern(&self) -> &RecurrencePattern {
        &self.pattern
    }

    pub fn range(&self) -> &RecurrenceRange {
        &self.range
    }
}

/// How often a recurring item repeats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecurrencePattern {
    /// Every `interval` days
    Daily { interval: u32 },
    /// Every `interval` weeks
    Weekly { interval: u32 },
    /// Every `interval` months, on `day_of_month`
    Monthly { interval: u32, day_of_month: u32 },
    /// Every year on `month`/`day_of_month`
    Yearly { month: u32, day_of_month: u32 },
}

/// When a recurring item stops repeating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecurrenceRange {
    /// Repeats forever from `start`
    NoEnd { start: NaiveDate },
    /// Repeats from `start` through `end` inclusive
    EndDate { start: NaiveDate, end: NaiveDate },
    /// Repeats `count` times from `start`
    Numbered { start: NaiveDate, count: u32 },
}

// Yearly patterns name their month on the wire.
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub(crate) fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
}

pub(crate) fn month_number(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|candidate| *candidate == name)
        .map(|index| index as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_content_default_is_none() {
        let mime = MimeContent::default();
        assert!(mime.none());
        assert_eq!(mime.len_bytes(), 0);
        assert!(mime.character_set().is_empty());
    }

    #[test]
    fn test_mime_content_with_data() {
        let mime = MimeContent::new("UTF-8", b"hello".to_vec());
        assert!(!mime.none());
        assert_eq!(mime.len_bytes(), 5);
        assert_eq!(mime.character_set(), "UTF-8");
        assert_eq!(mime.to_base64(), "aGVsbG8=");
    }

    #[test]
    fn test_mime_content_base64_round_trip() {
        let mime = MimeContent::new("UTF-8", b"hello, world?".to_vec());
        let rebuilt = MimeContent::from_base64("UTF-8", &mime.to_base64()).unwrap();
        assert_eq!(mime, rebuilt);
    }

    #[test]
    fn test_mime_content_rejects_bad_base64() {
        assert!(MimeContent::from_base64("UTF-8", "not base64 !!!").is_none());
    }

    #[test]
    fn test_body_type_wire_names() {
        assert_eq!(BodyType::Html.as_str(), "HTML");
        assert_eq!(BodyType::from_wire("Text"), Some(BodyType::Text));
        assert_eq!(BodyType::from_wire("markdown"), None);
    }

    #[test]
    fn test_month_names_round_trip() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
        for month in 1..=12 {
            assert_eq!(month_number(month_name(month).unwrap()), Some(month));
        }
    }

    #[test]
    fn test_task_status_wire_round_trip() {
        for status in [
            TaskStatus::NotStarted,
            TaskStatus::InProgress,
            TaskStatus::Completed,
            TaskStatus::WaitingOnOthers,
            TaskStatus::Deferred,
        ] {
            assert_eq!(TaskStatus::from_wire(status.as_str()), Some(status));
        }
    }
}
