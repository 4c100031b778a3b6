//! Embedded field tables, the declarative source of truth.
//!
//! One table per variant, in the server's documented element order (the
//! schema is position-sensitive, so this order *is* the wire contract), plus
//! the operation vocabulary per variant family. Everything else the
//! registry serves is compiled from these tables.

use super::types::{FieldDefinition, WireNames};
use crate::item::{Field, ItemKind};

use super::types::Presence::{Optional, ReadOnly, Required, WriteOnce};
use super::types::ValueKind::{
    Base64, Body, Boolean, DateTime, Identity, Integer, Mailbox, MailboxList, Mime, Recurrence,
    Text, TextList,
};

pub(super) const MESSAGE_FIELDS: &[FieldDefinition] = &[
    FieldDefinition::new(Field::MimeContent, "MimeContent", Mime, WriteOnce),
    FieldDefinition::new(Field::ItemId, "ItemId", Identity, ReadOnly),
    FieldDefinition::new(Field::ParentFolderId, "ParentFolderId", Identity, ReadOnly),
    FieldDefinition::new(Field::Subject, "Subject", Text, Optional).with_uri("item:Subject"),
    FieldDefinition::new(Field::Sensitivity, "Sensitivity", Text, Optional)
        .with_uri("item:Sensitivity"),
    FieldDefinition::new(Field::Body, "Body", Body, Optional).with_uri("item:Body"),
    FieldDefinition::new(Field::DateTimeReceived, "DateTimeReceived", DateTime, ReadOnly),
    FieldDefinition::new(Field::Importance, "Importance", Text, Optional)
        .with_uri("item:Importance"),
    FieldDefinition::new(Field::HasAttachments, "HasAttachments", Boolean, ReadOnly),
    FieldDefinition::new(Field::ToRecipients, "ToRecipients", MailboxList, Optional)
        .with_uri("message:ToRecipients")
        .with_entries("Mailbox"),
    FieldDefinition::new(Field::CcRecipients, "CcRecipients", MailboxList, Optional)
        .with_uri("message:CcRecipients")
        .with_entries("Mailbox"),
    FieldDefinition::new(Field::From, "From", Mailbox, Optional).with_uri("message:From"),
    FieldDefinition::new(Field::IsRead, "IsRead", Boolean, Optional).with_uri("message:IsRead"),
];

pub(super) const CALENDAR_FIELDS: &[FieldDefinition] = &[
    FieldDefinition::new(Field::ItemId, "ItemId", Identity, ReadOnly),
    FieldDefinition::new(Field::ParentFolderId, "ParentFolderId", Identity, ReadOnly),
    FieldDefinition::new(Field::Subject, "Subject", Text, Optional).with_uri("item:Subject"),
    FieldDefinition::new(Field::Body, "Body", Body, Optional).with_uri("item:Body"),
    FieldDefinition::new(Field::HasAttachments, "HasAttachments", Boolean, ReadOnly),
    FieldDefinition::new(Field::Start, "Start", DateTime, Required).with_uri("calendar:Start"),
    FieldDefinition::new(Field::End, "End", DateTime, Required).with_uri("calendar:End"),
    FieldDefinition::new(Field::IsAllDayEvent, "IsAllDayEvent", Boolean, Optional)
        .with_uri("calendar:IsAllDayEvent"),
    FieldDefinition::new(Field::Location, "Location", Text, Optional).with_uri("calendar:Location"),
    FieldDefinition::new(Field::Recurrence, "Recurrence", Recurrence, Optional)
        .with_uri("calendar:Recurrence"),
];

// Occurrences echo back as calendar items; only the master can carry the
// recurrence, and the original slot is server-computed.
pub(super) const OCCURRENCE_FIELDS: &[FieldDefinition] = &[
    FieldDefinition::new(Field::ItemId, "ItemId", Identity, ReadOnly),
    FieldDefinition::new(Field::Subject, "Subject", Text, Optional).with_uri("item:Subject"),
    FieldDefinition::new(Field::Body, "Body", Body, Optional).with_uri("item:Body"),
    FieldDefinition::new(Field::Start, "Start", DateTime, Optional).with_uri("calendar:Start"),
    FieldDefinition::new(Field::End, "End", DateTime, Optional).with_uri("calendar:End"),
    FieldDefinition::new(Field::Location, "Location", Text, Optional).with_uri("calendar:Location"),
    FieldDefinition::new(Field::OriginalStart, "OriginalStart", DateTime, ReadOnly),
];

pub(super) const TASK_FIELDS: &[FieldDefinition] = &[
    FieldDefinition::new(Field::ItemId, "ItemId", Identity, ReadOnly),
    FieldDefinition::new(Field::ParentFolderId, "ParentFolderId", Identity, ReadOnly),
    FieldDefinition::new(Field::Subject, "Subject", Text, Optional).with_uri("item:Subject"),
    FieldDefinition::new(Field::Body, "Body", Body, Optional).with_uri("item:Body"),
    FieldDefinition::new(Field::HasAttachments, "HasAttachments", Boolean, ReadOnly),
    FieldDefinition::new(Field::DueDate, "DueDate", DateTime, Optional).with_uri("task:DueDate"),
    FieldDefinition::new(Field::IsComplete, "IsComplete", Boolean, ReadOnly),
    FieldDefinition::new(Field::PercentComplete, "PercentComplete", Integer, Optional)
        .with_uri("task:PercentComplete"),
    FieldDefinition::new(Field::StartDate, "StartDate", DateTime, Optional)
        .with_uri("task:StartDate"),
    FieldDefinition::new(Field::TaskStatus, "Status", Text, Optional).with_uri("task:Status"),
];

pub(super) const CONTACT_FIELDS: &[FieldDefinition] = &[
    FieldDefinition::new(Field::ItemId, "ItemId", Identity, ReadOnly),
    FieldDefinition::new(Field::ParentFolderId, "ParentFolderId", Identity, ReadOnly),
    FieldDefinition::new(Field::Subject, "Subject", Text, Optional).with_uri("item:Subject"),
    FieldDefinition::new(Field::Body, "Body", Body, Optional).with_uri("item:Body"),
    FieldDefinition::new(Field::HasAttachments, "HasAttachments", Boolean, ReadOnly),
    FieldDefinition::new(Field::DisplayName, "DisplayName", Text, Optional)
        .with_uri("contacts:DisplayName"),
    FieldDefinition::new(Field::GivenName, "GivenName", Text, Optional)
        .with_uri("contacts:GivenName"),
    FieldDefinition::new(Field::CompanyName, "CompanyName", Text, Optional)
        .with_uri("contacts:CompanyName"),
    FieldDefinition::new(Field::EmailAddresses, "EmailAddresses", TextList, Optional)
        .with_uri("contacts:EmailAddresses")
        .with_entries("Entry")
        .with_entry_keys("EmailAddress"),
    FieldDefinition::new(Field::JobTitle, "JobTitle", Text, Optional)
        .with_uri("contacts:JobTitle"),
    FieldDefinition::new(Field::Surname, "Surname", Text, Optional).with_uri("contacts:Surname"),
];

pub(super) const FOLDER_FIELDS: &[FieldDefinition] = &[
    FieldDefinition::new(Field::ItemId, "FolderId", Identity, ReadOnly),
    FieldDefinition::new(Field::ParentFolderId, "ParentFolderId", Identity, ReadOnly),
    FieldDefinition::new(Field::DisplayName, "DisplayName", Text, Required)
        .with_uri("folder:DisplayName"),
    FieldDefinition::new(Field::TotalCount, "TotalCount", Integer, ReadOnly),
    FieldDefinition::new(Field::ChildFolderCount, "ChildFolderCount", Integer, ReadOnly),
    FieldDefinition::new(Field::UnreadCount, "UnreadCount", Integer, ReadOnly),
];

pub(super) const ATTACHMENT_FIELDS: &[FieldDefinition] = &[
    FieldDefinition::new(Field::ItemId, "AttachmentId", Identity, ReadOnly),
    FieldDefinition::new(Field::Name, "Name", Text, Required),
    FieldDefinition::new(Field::ContentType, "ContentType", Text, Optional),
    FieldDefinition::new(Field::ContentSize, "ContentSize", Integer, ReadOnly),
    FieldDefinition::new(Field::IsInline, "IsInline", Boolean, Optional),
    FieldDefinition::new(Field::Content, "Content", Base64, Required),
];

pub(super) const ITEM_WIRE: WireNames = WireNames {
    create: "CreateItem",
    get: "GetItem",
    update: "UpdateItem",
    delete: "DeleteItem",
    move_: "MoveItem",
    payload_container: "Items",
    ids_container: "ItemIds",
    changes_container: "ItemChanges",
    change_element: "ItemChange",
    set_field_element: "SetItemField",
    id_element: "ItemId",
    saved_parent_element: "SavedItemFolderId",
    shape_element: Some("ItemShape"),
};

pub(super) const FOLDER_WIRE: WireNames = WireNames {
    create: "CreateFolder",
    get: "GetFolder",
    update: "UpdateFolder",
    delete: "DeleteFolder",
    move_: "MoveFolder",
    payload_container: "Folders",
    ids_container: "FolderIds",
    changes_container: "FolderChanges",
    change_element: "FolderChange",
    set_field_element: "SetFolderField",
    id_element: "FolderId",
    saved_parent_element: "ParentFolderId",
    shape_element: Some("FolderShape"),
};

pub(super) const ATTACHMENT_WIRE: WireNames = WireNames {
    create: "CreateAttachment",
    get: "GetAttachment",
    update: "UpdateAttachment",
    delete: "DeleteAttachment",
    move_: "MoveAttachment",
    payload_container: "Attachments",
    ids_container: "AttachmentIds",
    changes_container: "AttachmentChanges",
    change_element: "AttachmentChange",
    set_field_element: "SetAttachmentField",
    id_element: "AttachmentId",
    saved_parent_element: "ParentItemId",
    shape_element: None,
};

/// The variant's element name in the types namespace.
pub(super) const fn variant_element(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Message => "Message",
        ItemKind::CalendarItem | ItemKind::Occurrence => "CalendarItem",
        ItemKind::Task => "Task",
        ItemKind::Contact => "Contact",
        ItemKind::Folder => "Folder",
        ItemKind::Attachment => "FileAttachment",
    }
}

pub(super) const fn fields(kind: ItemKind) -> &'static [FieldDefinition] {
    match kind {
        ItemKind::Message => MESSAGE_FIELDS,
        ItemKind::CalendarItem => CALENDAR_FIELDS,
        ItemKind::Occurrence => OCCURRENCE_FIELDS,
        ItemKind::Task => TASK_FIELDS,
        ItemKind::Contact => CONTACT_FIELDS,
        ItemKind::Folder => FOLDER_FIELDS,
        ItemKind::Attachment => ATTACHMENT_FIELDS,
    }
}

pub(super) const fn wire(kind: ItemKind) -> &'static WireNames {
    match kind {
        ItemKind::Folder => &FOLDER_WIRE,
        ItemKind::Attachment => &ATTACHMENT_WIRE,
        _ => &ITEM_WIRE,
    }
}
