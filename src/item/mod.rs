//! Typed groupware item variants and their field access layer.
//!
//! [`Item`] is a closed sum over the object kinds the server understands.
//! The variants overlap on a shared capability set (identity, subject, body,
//! attachment flag) and diverge on kind-specific fields; the schema registry
//! describes which [`Field`]s each variant carries and how they travel on
//! the wire, while the variants themselves only know how to read and write
//! their own typed storage through [`Item::field`] and [`Item::set_field`].
//!
//! That split keeps field knowledge in exactly one place: the request
//! builder and response parser both walk the registry's plans and use the
//! accessor pair here as dumb typed storage.

mod attachment;
mod calendar;
mod contact;
mod folder;
mod message;
mod task;
pub mod values;

pub use attachment::Attachment;
pub use calendar::{CalendarItem, OccurrenceItem};
pub use contact::Contact;
pub use folder::Folder;
pub use message::Message;
pub use task::Task;

use crate::identity::{ObjectId, OccurrenceId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use values::{Body, Mailbox, MimeContent, Recurrence};

/// The closed set of object kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Message,
    CalendarItem,
    Task,
    Contact,
    Folder,
    Attachment,
    Occurrence,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Message => "Message",
            Self::CalendarItem => "CalendarItem",
            Self::Task => "Task",
            Self::Contact => "Contact",
            Self::Folder => "Folder",
            Self::Attachment => "Attachment",
            Self::Occurrence => "Occurrence",
        };
        f.write_str(name)
    }
}

/// A typed groupware object, one variant per [`ItemKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Item {
    Message(Message),
    CalendarItem(CalendarItem),
    Task(Task),
    Contact(Contact),
    Folder(Folder),
    Attachment(Attachment),
    Occurrence(OccurrenceItem),
}

/// Every field any variant can carry.
///
/// The registry's plans decide which of these apply to which variant and
/// operation; the variants' accessors decide how each one maps onto typed
/// storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    // Shared capability set
    ItemId,
    ParentFolderId,
    Subject,
    Body,
    MimeContent,
    HasAttachments,
    Importance,
    Sensitivity,
    // Message
    From,
    ToRecipients,
    CcRecipients,
    IsRead,
    DateTimeReceived,
    // Calendar
    Start,
    End,
    Location,
    IsAllDayEvent,
    Recurrence,
    OriginalStart,
    // Task
    StartDate,
    DueDate,
    TaskStatus,
    PercentComplete,
    IsComplete,
    // Contact
    GivenName,
    Surname,
    DisplayName,
    CompanyName,
    JobTitle,
    EmailAddresses,
    // Folder
    TotalCount,
    ChildFolderCount,
    UnreadCount,
    // Attachment
    Name,
    ContentType,
    Content,
    ContentSize,
    IsInline,
}

impl Field {
    /// Stable name used in validation errors and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ItemId => "ItemId",
            Self::ParentFolderId => "ParentFolderId",
            Self::Subject => "Subject",
            Self::Body => "Body",
            Self::MimeContent => "MimeContent",
            Self::HasAttachments => "HasAttachments",
            Self::Importance => "Importance",
            Self::Sensitivity => "Sensitivity",
            Self::From => "From",
            Self::ToRecipients => "ToRecipients",
            Self::CcRecipients => "CcRecipients",
            Self::IsRead => "IsRead",
            Self::DateTimeReceived => "DateTimeReceived",
            Self::Start => "Start",
            Self::End => "End",
            Self::Location => "Location",
            Self::IsAllDayEvent => "IsAllDayEvent",
            Self::Recurrence => "Recurrence",
            Self::OriginalStart => "OriginalStart",
            Self::StartDate => "StartDate",
            Self::DueDate => "DueDate",
            Self::TaskStatus => "Status",
            Self::PercentComplete => "PercentComplete",
            Self::IsComplete => "IsComplete",
            Self::GivenName => "GivenName",
            Self::Surname => "Surname",
            Self::DisplayName => "DisplayName",
            Self::CompanyName => "CompanyName",
            Self::JobTitle => "JobTitle",
            Self::EmailAddresses => "EmailAddresses",
            Self::TotalCount => "TotalCount",
            Self::ChildFolderCount => "ChildFolderCount",
            Self::UnreadCount => "UnreadCount",
            Self::Name => "Name",
            Self::ContentType => "ContentType",
            Self::Content => "Content",
            Self::ContentSize => "ContentSize",
            Self::IsInline => "IsInline",
        }
    }
}

/// A field's value, detached from any particular variant.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Boolean(bool),
    Integer(i64),
    DateTime(DateTime<Utc>),
    Bytes(Vec<u8>),
    Body(Body),
    Mime(MimeContent),
    Mailbox(Mailbox),
    MailboxList(Vec<Mailbox>),
    TextList(Vec<String>),
    Recurrence(Recurrence),
    Id(ObjectId),
}

impl FieldValue {
    /// Short type name for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::DateTime(_) => "date-time",
            Self::Bytes(_) => "bytes",
            Self::Body(_) => "body",
            Self::Mime(_) => "mime content",
            Self::Mailbox(_) => "mailbox",
            Self::MailboxList(_) => "mailbox list",
            Self::TextList(_) => "text list",
            Self::Recurrence(_) => "recurrence",
            Self::Id(_) => "object id",
        }
    }
}

/// How an item is addressed in a request.
///
/// Almost everything is addressed by its [`ObjectId`]; occurrences of
/// recurring calendar items are addressed through their master instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemAddress {
    Id(ObjectId),
    Occurrence(OccurrenceId),
}

impl ItemAddress {
    /// The change key backing this address, if any.
    pub fn change_key(&self) -> &str {
        match self {
            Self::Id(id) => id.change_key(),
            Self::Occurrence(occ) => occ.master().change_key(),
        }
    }
}

/// A field access that does not fit the variant's storage.
///
/// Raised by [`Item::set_field`] when the field does not exist on the
/// variant or the value has the wrong shape. The response parser treats
/// this as a skippable field, not a fatal error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("field '{field}' not settable on {kind}: {reason}")]
pub struct FieldError {
    pub kind: ItemKind,
    pub field: &'static str,
    pub reason: &'static str,
}

impl FieldError {
    pub(crate) fn unknown(kind: ItemKind, field: Field) -> Self {
        Self {
            kind,
            field: field.name(),
            reason: "variant has no such field",
        }
    }

    pub(crate) fn mismatch(kind: ItemKind, field: Field) -> Self {
        Self {
            kind,
            field: field.name(),
            reason: "value has the wrong shape",
        }
    }
}

impl Item {
    /// Which variant this item is.
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Message(_) => ItemKind::Message,
            Self::CalendarItem(_) => ItemKind::CalendarItem,
            Self::Task(_) => ItemKind::Task,
            Self::Contact(_) => ItemKind::Contact,
            Self::Folder(_) => ItemKind::Folder,
            Self::Attachment(_) => ItemKind::Attachment,
            Self::Occurrence(_) => ItemKind::Occurrence,
        }
    }

    /// An empty item of the given kind.
    pub fn empty(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Message => Self::Message(Message::default()),
            ItemKind::CalendarItem => Self::CalendarItem(CalendarItem::default()),
            ItemKind::Task => Self::Task(Task::default()),
            ItemKind::Contact => Self::Contact(Contact::default()),
            ItemKind::Folder => Self::Folder(Folder::default()),
            ItemKind::Attachment => Self::Attachment(Attachment::default()),
            ItemKind::Occurrence => Self::Occurrence(OccurrenceItem::default()),
        }
    }

    /// A stub item carrying only an identity, for get/delete/move payloads.
    pub fn reference(kind: ItemKind, id: ObjectId) -> Self {
        let mut item = Self::empty(kind);
        // Every variant stores its own id under Field::ItemId.
        let _ = item.set_field(Field::ItemId, FieldValue::Id(id));
        item
    }

    /// A stub addressing one occurrence of a recurring calendar item.
    pub fn occurrence_reference(id: OccurrenceId) -> Self {
        Self::Occurrence(OccurrenceItem::with_occurrence_id(id))
    }

    /// Read a field, `None` when unset or not carried by this variant.
    pub fn field(&self, field: Field) -> Option<FieldValue> {
        match self {
            Self::Message(m) => m.field(field),
            Self::CalendarItem(c) => c.field(field),
            Self::Task(t) => t.field(field),
            Self::Contact(c) => c.field(field),
            Self::Folder(f) => f.field(field),
            Self::Attachment(a) => a.field(field),
            Self::Occurrence(o) => o.field(field),
        }
    }

    /// Write a field into the variant's typed storage.
    pub fn set_field(&mut self, field: Field, value: FieldValue) -> Result<(), FieldError> {
        match self {
            Self::Message(m) => m.set_field(field, value),
            Self::CalendarItem(c) => c.set_field(field, value),
            Self::Task(t) => t.set_field(field, value),
            Self::Contact(c) => c.set_field(field, value),
            Self::Folder(f) => f.set_field(field, value),
            Self::Attachment(a) => a.set_field(field, value),
            Self::Occurrence(o) => o.set_field(field, value),
        }
    }

    /// How this item is addressed in a request, if it has an identity yet.
    pub fn address(&self) -> Option<ItemAddress> {
        if let Self::Occurrence(o) = self {
            // Prefer occurrence addressing; a concrete id is also accepted
            // once the server has handed one back.
            if let Some(occ) = o.occurrence_id() {
                return Some(ItemAddress::Occurrence(occ.clone()));
            }
        }
        match self.field(Field::ItemId) {
            Some(FieldValue::Id(id)) => Some(ItemAddress::Id(id)),
            _ => None,
        }
    }

    /// The item's own object id, if the server has assigned one.
    pub fn object_id(&self) -> Option<ObjectId> {
        match self.field(Field::ItemId) {
            Some(FieldValue::Id(id)) => Some(id),
            _ => None,
        }
    }
}
