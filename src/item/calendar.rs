//! Calendar item variant and its recurring-occurrence companion.

use super::values::{Body, Recurrence};
use super::{Field, FieldError, FieldValue, ItemKind};
use crate::identity::{ObjectId, OccurrenceId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A calendar item (appointment or meeting).
///
/// `start` and `end` are required when creating; a recurring item carries a
/// [`Recurrence`] and the server mints its occurrences from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarItem {
    pub item_id: Option<ObjectId>,
    pub parent_folder_id: Option<ObjectId>,
    pub subject: Option<String>,
    pub body: Option<Body>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub is_all_day_event: Option<bool>,
    pub recurrence: Option<Recurrence>,
    pub has_attachments: Option<bool>,
}

impl CalendarItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_times(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    pub fn with_recurrence(mut self, recurrence: Recurrence) -> Self {
        self.recurrence = Some(recurrence);
        self
    }

    pub(super) fn field(&self, field: Field) -> Option<FieldValue> {
        match field {
            Field::ItemId => self.item_id.clone().map(FieldValue::Id),
            Field::ParentFolderId => self.parent_folder_id.clone().map(FieldValue::Id),
            Field::Subject => self.subject.clone().map(FieldValue::Text),
            Field::Body => self.body.clone().map(FieldValue::Body),
            Field::Start => self.start.map(FieldValue::DateTime),
            Field::End => self.end.map(FieldValue::DateTime),
            Field::Location => self.location.clone().map(FieldValue::Text),
            Field::IsAllDayEvent => self.is_all_day_event.map(FieldValue::Boolean),
            Field::Recurrence => self.recurrence.clone().map(FieldValue::Recurrence),
            Field::HasAttachments => self.has_attachments.map(FieldValue::Boolean),
            _ => None,
        }
    }

    pub(super) fn set_field(&mut self, field: Field, value: FieldValue) -> Result<(), FieldError> {
        match (field, value) {
            (Field::ItemId, FieldValue::Id(id)) => self.item_id = Some(id),
            (Field::ParentFolderId, FieldValue::Id(id)) => self.parent_folder_id = Some(id),
            (Field::Subject, FieldValue::Text(v)) => self.subject = Some(v),
            (Field::Body, FieldValue::Body(v)) => self.body = Some(v),
            (Field::Start, FieldValue::DateTime(v)) => self.start = Some(v),
            (Field::End, FieldValue::DateTime(v)) => self.end = Some(v),
            (Field::Location, FieldValue::Text(v)) => self.location = Some(v),
            (Field::IsAllDayEvent, FieldValue::Boolean(v)) => self.is_all_day_event = Some(v),
            (Field::Recurrence, FieldValue::Recurrence(v)) => self.recurrence = Some(v),
            (Field::HasAttachments, FieldValue::Boolean(v)) => self.has_attachments = Some(v),
            (
                Field::ItemId
                | Field::ParentFolderId
                | Field::Subject
                | Field::Body
                | Field::Start
                | Field::End
                | Field::Location
                | Field::IsAllDayEvent
                | Field::Recurrence
                | Field::HasAttachments,
                _,
            ) => return Err(FieldError::mismatch(ItemKind::CalendarItem, field)),
            _ => return Err(FieldError::unknown(ItemKind::CalendarItem, field)),
        }
        Ok(())
    }
}

/// One occurrence of a recurring calendar item.
///
/// Addressed in requests through its [`OccurrenceId`] (recurring master +
/// instance index) until the server hands back a concrete [`ObjectId`].
/// `original_start` is the slot the occurrence held before any exception
/// moved it; server-computed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OccurrenceItem {
    occurrence_id: Option<OccurrenceId>,
    pub item_id: Option<ObjectId>,
    pub subject: Option<String>,
    pub body: Option<Body>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub original_start: Option<DateTime<Utc>>,
}

impl OccurrenceItem {
    pub fn with_occurrence_id(id: OccurrenceId) -> Self {
        Self {
            occurrence_id: Some(id),
            ..Self::default()
        }
    }

    pub fn occurrence_id(&self) -> Option<&OccurrenceId> {
        self.occurrence_id.as_ref()
    }

    pub fn with_times(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    pub(super) fn field(&self, field: Field) -> Option<FieldValue> {
        match field {
            Field::ItemId => self.item_id.clone().map(FieldValue::Id),
            Field::Subject => self.subject.clone().map(FieldValue::Text),
            Field::Body => self.body.clone().map(FieldValue::Body),
            Field::Start => self.start.map(FieldValue::DateTime),
            Field::End => self.end.map(FieldValue::DateTime),
            Field::Location => self.location.clone().map(FieldValue::Text),
            Field::OriginalStart => self.original_start.map(FieldValue::DateTime),
            _ => None,
        }
    }

    pub(super) fn set_field(&mut self, field: Field, value: FieldValue) -> Result<(), FieldError> {
        match (field, value) {
            (Field::ItemId, FieldValue::Id(id)) => self.item_id = Some(id),
            (Field::Subject, FieldValue::Text(v)) => self.subject = Some(v),
            (Field::Body, FieldValue::Body(v)) => self.body = Some(v),
            (Field::Start, FieldValue::DateTime(v)) => self.start = Some(v),
            (Field::End, FieldValue::DateTime(v)) => self.end = Some(v),
            (Field::Location, FieldValue::Text(v)) => self.location = Some(v),
            (Field::OriginalStart, FieldValue::DateTime(v)) => self.original_start = Some(v),
            (
                Field::ItemId
                | Field::Subject
                | Field::Body
                | Field::Start
                | Field::End
                | Field::Location
                | Field::OriginalStart,
                _,
            ) => return Err(FieldError::mismatch(ItemKind::Occurrence, field)),
            _ => return Err(FieldError::unknown(ItemKind::Occurrence, field)),
        }
        Ok(())
    }
}
