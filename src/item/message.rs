//! Mail message variant.

use super::values::{Body, Importance, Mailbox, MimeContent, Sensitivity};
use super::{Field, FieldError, FieldValue, ItemKind};
use crate::identity::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A mail message.
///
/// Unset fields are simply absent from requests; the recipient lists count
/// as unset while empty. `parent_folder_id`, `date_time_received` and
/// `has_attachments` are server-computed and only ever populated by the
/// response parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub item_id: Option<ObjectId>,
    pub parent_folder_id: Option<ObjectId>,
    pub subject: Option<String>,
    pub body: Option<Body>,
    pub mime_content: Option<MimeContent>,
    pub importance: Option<Importance>,
    pub sensitivity: Option<Sensitivity>,
    pub from: Option<Mailbox>,
    pub to_recipients: Vec<Mailbox>,
    pub cc_recipients: Vec<Mailbox>,
    pub is_read: Option<bool>,
    pub date_time_received: Option<DateTime<Utc>>,
    pub has_attachments: Option<bool>,
}

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_to_recipient(mut self, mailbox: Mailbox) -> Self {
        self.to_recipients.push(mailbox);
        self
    }

    pub(super) fn field(&self, field: Field) -> Option<FieldValue> {
        match field {
            Field::ItemId => self.item_id.clone().map(FieldValue::Id),
            Field::ParentFolderId => self.parent_folder_id.clone().map(FieldValue::Id),
            Field::Subject => self.subject.clone().map(FieldValue::Text),
            Field::Body => self.body.clone().map(FieldValue::Body),
            Field::MimeContent => self.mime_content.clone().map(FieldValue::Mime),
            Field::Importance => self
                .importance
                .map(|v| FieldValue::Text(v.as_str().to_string())),
            Field::Sensitivity => self
                .sensitivity
                .map(|v| FieldValue::Text(v.as_str().to_string())),
            Field::From => self.from.clone().map(FieldValue::Mailbox),
            Field::ToRecipients => (!self.to_recipients.is_empty())
                .then(|| FieldValue::MailboxList(self.to_recipients.clone())),
            Field::CcRecipients => (!self.cc_recipients.is_empty())
                .then(|| FieldValue::MailboxList(self.cc_recipients.clone())),
            Field::IsRead => self.is_read.map(FieldValue::Boolean),
            Field::DateTimeReceived => self.date_time_received.map(FieldValue::DateTime),
            Field::HasAttachments => self.has_attachments.map(FieldValue::Boolean),
            _ => None,
        }
    }

    pub(super) fn set_field(&mut self, field: Field, value: FieldValue) -> Result<(), FieldError> {
        let mismatch = || FieldError::mismatch(ItemKind::Message, field);
        match (field, value) {
            (Field::ItemId, FieldValue::Id(id)) => self.item_id = Some(id),
            (Field::ParentFolderId, FieldValue::Id(id)) => self.parent_folder_id = Some(id),
            (Field::Subject, FieldValue::Text(v)) => self.subject = Some(v),
            (Field::Body, FieldValue::Body(v)) => self.body = Some(v),
            (Field::MimeContent, FieldValue::Mime(v)) => self.mime_content = Some(v),
            (Field::Importance, FieldValue::Text(v)) => {
                self.importance = Some(Importance::from_wire(&v).ok_or_else(mismatch)?)
            }
            (Field::Sensitivity, FieldValue::Text(v)) => {
                self.sensitivity = Some(Sensitivity::from_wire(&v).ok_or_else(mismatch)?)
            }
            (Field::From, FieldValue::Mailbox(v)) => self.from = Some(v),
            (Field::ToRecipients, FieldValue::MailboxList(v)) => self.to_recipients = v,
            (Field::CcRecipients, FieldValue::MailboxList(v)) => self.cc_recipients = v,
            (Field::IsRead, FieldValue::Boolean(v)) => self.is_read = Some(v),
            (Field::DateTimeReceived, FieldValue::DateTime(v)) => {
                self.date_time_received = Some(v)
            }
            (Field::HasAttachments, FieldValue::Boolean(v)) => self.has_attachments = Some(v),
            (
                Field::ItemId
                | Field::ParentFolderId
                | Field::Subject
                | Field::Body
                | Field::MimeContent
                | Field::Importance
                | Field::Sensitivity
                | Field::From
                | Field::ToRecipients
                | Field::CcRecipients
                | Field::IsRead
                | Field::DateTimeReceived
                | Field::HasAttachments,
                _,
            ) => return Err(mismatch()),
            _ => return Err(FieldError::unknown(ItemKind::Message, field)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_recipient_list_reads_as_unset() {
        let message = Message::new().with_subject("hi");
        assert_eq!(message.field(Field::ToRecipients), None);

        let message = message.with_to_recipient(Mailbox::address("a@example.com"));
        assert!(matches!(
            message.field(Field::ToRecipients),
            Some(FieldValue::MailboxList(v)) if v.len() == 1
        ));
    }

    #[test]
    fn test_importance_travels_as_text() {
        let mut message = Message::new();
        message
            .set_field(Field::Importance, FieldValue::Text("High".into()))
            .unwrap();
        assert_eq!(message.importance, Some(Importance::High));

        let err = message
            .set_field(Field::Importance, FieldValue::Text("Urgent".into()))
            .unwrap_err();
        assert_eq!(err.field, "Importance");
    }
}
