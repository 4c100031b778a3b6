//! Task variant.

use super::values::{Body, TaskStatus};
use super::{Field, FieldError, FieldValue, ItemKind};
use crate::identity::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A task.
///
/// `is_complete` is derived server-side from the status and never sent by
/// the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub item_id: Option<ObjectId>,
    pub parent_folder_id: Option<ObjectId>,
    pub subject: Option<String>,
    pub body: Option<Body>,
    pub start_date: Option<DateTime<Utc>>,
    pub due_date: Option<DateTime<Utc>>,
    pub status: Option<TaskStatus>,
    pub percent_complete: Option<i64>,
    pub is_complete: Option<bool>,
    pub has_attachments: Option<bool>,
}

impl Task {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_due_date(mut self, due: DateTime<Utc>) -> Self {
        self.due_date = Some(due);
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub(super) fn field(&self, field: Field) -> Option<FieldValue> {
        match field {
            Field::ItemId => self.item_id.clone().map(FieldValue::Id),
            Field::ParentFolderId => self.parent_folder_id.clone().map(FieldValue::Id),
            Field::Subject => self.subject.clone().map(FieldValue::Text),
            Field::Body => self.body.clone().map(FieldValue::Body),
            Field::StartDate => self.start_date.map(FieldValue::DateTime),
            Field::DueDate => self.due_date.map(FieldValue::DateTime),
            Field::TaskStatus => self
                .status
                .map(|v| FieldValue::Text(v.as_str().to_string())),
            Field::PercentComplete => self.percent_complete.map(FieldValue::Integer),
            Field::IsComplete => self.is_complete.map(FieldValue::Boolean),
            Field::HasAttachments => self.has_attachments.map(FieldValue::Boolean),
            _ => None,
        }
    }

    pub(super) fn set_field(&mut self, field: Field, value: FieldValue) -> Result<(), FieldError> {
        let mismatch = || FieldError::mismatch(ItemKind::Task, field);
        match (field, value) {
            (Field::ItemId, FieldValue::Id(id)) => self.item_id = Some(id),
            (Field::ParentFolderId, FieldValue::Id(id)) => self.parent_folder_id = Some(id),
            (Field::Subject, FieldValue::Text(v)) => self.subject = Some(v),
            (Field::Body, FieldValue::Body(v)) => self.body = Some(v),
            (Field::StartDate, FieldValue::DateTime(v)) => self.start_date = Some(v),
            (Field::DueDate, FieldValue::DateTime(v)) => self.due_date = Some(v),
            (Field::TaskStatus, FieldValue::Text(v)) => {
                self.status = Some(TaskStatus::from_wire(&v).ok_or_else(mismatch)?)
            }
            (Field::PercentComplete, FieldValue::Integer(v)) => self.percent_complete = Some(v),
            (Field::IsComplete, FieldValue::Boolean(v)) => self.is_complete = Some(v),
            (Field::HasAttachments, FieldValue::Boolean(v)) => self.has_attachments = Some(v),
            (
                Field::ItemId
                | Field::ParentFolderId
                | Field::Subject
                | Field::Body
                | Field::StartDate
                | Field::DueDate
                | Field::TaskStatus
                | Field::PercentComplete
                | Field::IsComplete
                | Field::HasAttachments,
                _,
            ) => return Err(mismatch()),
            _ => return Err(FieldError::unknown(ItemKind::Task, field)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_travels_as_wire_text() {
        let task = Task::new().with_status(TaskStatus::InProgress);
        assert_eq!(
            task.field(Field::TaskStatus),
            Some(FieldValue::Text("InProgress".into()))
        );
    }

    #[test]
    fn test_unknown_status_is_a_mismatch() {
        let mut task = Task::new();
        assert!(
            task.set_field(Field::TaskStatus, FieldValue::Text("Paused".into()))
                .is_err()
        );
    }
}
