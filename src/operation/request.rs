//! Structured operation requests.
//!
//! An [`OperationRequest`] is one logical call: an operation kind, a
//! non-empty ordered payload sequence of one variant, an optional parent or
//! destination reference, and kind-specific options. The request builder
//! validates it against the schema registry and turns it into exactly one
//! wire document; the payload order fixes the outcome order of the
//! response.

use crate::identity::FolderRef;
use crate::item::Item;
use crate::schema::OperationKind;
use serde::{Deserialize, Serialize};

/// One logical protocol call.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRequest {
    operation: OperationKind,
    items: Vec<Item>,
    parent: Option<FolderRef>,
    destination: Option<FolderRef>,
    options: OperationOptions,
}

impl OperationRequest {
    /// Create the payload objects on the server.
    pub fn create(items: Vec<Item>) -> Self {
        Self::new(OperationKind::Create, items)
    }

    /// Fetch the payload objects; each payload needs an address.
    pub fn get(items: Vec<Item>) -> Self {
        Self::new(OperationKind::Get, items)
    }

    /// Apply the payload objects' set fields as sparse updates.
    pub fn update(items: Vec<Item>) -> Self {
        Self::new(OperationKind::Update, items)
    }

    /// Delete the payload objects.
    pub fn delete(items: Vec<Item>) -> Self {
        Self::new(OperationKind::Delete, items)
    }

    /// Move the payload objects into `destination`.
    pub fn move_to(items: Vec<Item>, destination: FolderRef) -> Self {
        let mut request = Self::new(OperationKind::Move, items);
        request.destination = Some(destination);
        request
    }

    fn new(operation: OperationKind, items: Vec<Item>) -> Self {
        Self {
            operation,
            items,
            parent: None,
            destination: None,
            options: OperationOptions::default(),
        }
    }

    /// Target container for a create: a folder, or the owning item when
    /// creating attachments.
    pub fn with_parent(mut self, parent: impl Into<FolderRef>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_options(mut self, options: OperationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn operation(&self) -> OperationKind {
        self.operation
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn parent(&self) -> Option<&FolderRef> {
        self.parent.as_ref()
    }

    pub fn destination(&self) -> Option<&FolderRef> {
        self.destination.as_ref()
    }

    pub fn options(&self) -> &OperationOptions {
        &self.options
    }
}

/// Kind-specific knobs on an operation.
///
/// Every knob is optional; the builder applies the protocol default when a
/// relevant knob is unset and rejects knobs that do not apply to the
/// request's operation or variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationOptions {
    pub message_disposition: Option<MessageDisposition>,
    pub send_meeting_invitations: Option<SendMeetingInvitations>,
    pub send_meeting_invitations_or_cancellations: Option<SendMeetingInvitationsOrCancellations>,
    pub conflict_resolution: Option<ConflictResolution>,
    pub delete_kind: Option<DeleteKind>,
    pub affected_task_occurrences: Option<AffectedTaskOccurrences>,
    pub base_shape: Option<BaseShape>,
}

impl OperationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message_disposition(mut self, value: MessageDisposition) -> Self {
        self.message_disposition = Some(value);
        self
    }

    pub fn send_meeting_invitations(mut self, value: SendMeetingInvitations) -> Self {
        self.send_meeting_invitations = Some(value);
        self
    }

    pub fn send_meeting_invitations_or_cancellations(
        mut self,
        value: SendMeetingInvitationsOrCancellations,
    ) -> Self {
        self.send_meeting_invitations_or_cancellations = Some(value);
        self
    }

    pub fn conflict_resolution(mut self, value: ConflictResolution) -> Self {
        self.conflict_resolution = Some(value);
        self
    }

    pub fn delete_kind(mut self, value: DeleteKind) -> Self {
        self.delete_kind = Some(value);
        self
    }

    pub fn affected_task_occurrences(mut self, value: AffectedTaskOccurrences) -> Self {
        self.affected_task_occurrences = Some(value);
        self
    }

    pub fn base_shape(mut self, value: BaseShape) -> Self {
        self.base_shape = Some(value);
        self
    }
}

/// What happens to a message when it is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageDisposition {
    SaveOnly,
    SendOnly,
    SendAndSaveCopy,
}

impl MessageDisposition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SaveOnly => "SaveOnly",
            Self::SendOnly => "SendOnly",
            Self::SendAndSaveCopy => "SendAndSaveCopy",
        }
    }
}

/// Invitation policy when creating a calendar item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SendMeetingInvitations {
    SendToNone,
    SendOnlyToAll,
    SendToAllAndSaveCopy,
}

impl SendMeetingInvitations {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SendToNone => "SendToNone",
            Self::SendOnlyToAll => "SendOnlyToAll",
            Self::SendToAllAndSaveCopy => "SendToAllAndSaveCopy",
        }
    }
}

/// Invitation/cancellation policy when updating a calendar item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SendMeetingInvitationsOrCancellations {
    SendToNone,
    SendOnlyToAll,
    SendOnlyToChanged,
    SendToAllAndSaveCopy,
    SendToChangedAndSaveCopy,
}

impl SendMeetingInvitationsOrCancellations {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SendToNone => "SendToNone",
            Self::SendOnlyToAll => "SendOnlyToAll",
            Self::SendOnlyToChanged => "SendOnlyToChanged",
            Self::SendToAllAndSaveCopy => "SendToAllAndSaveCopy",
            Self::SendToChangedAndSaveCopy => "SendToChangedAndSaveCopy",
        }
    }
}

/// How the server resolves concurrent edits it considers mergeable.
///
/// Orthogonal to change-key conflicts: a stale change key always fails
/// regardless of this knob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictResolution {
    NeverOverwrite,
    AutoResolve,
    AlwaysOverwrite,
}

impl ConflictResolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NeverOverwrite => "NeverOverwrite",
            Self::AutoResolve => "AutoResolve",
            Self::AlwaysOverwrite => "AlwaysOverwrite",
        }
    }
}

/// How thoroughly a delete removes the object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeleteKind {
    HardDelete,
    SoftDelete,
    MoveToDeletedItems,
}

impl DeleteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HardDelete => "HardDelete",
            Self::SoftDelete => "SoftDelete",
            Self::MoveToDeletedItems => "MoveToDeletedItems",
        }
    }
}

/// Which occurrences a recurring-task delete touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AffectedTaskOccurrences {
    AllOccurrences,
    SpecifiedOccurrenceOnly,
}

impl AffectedTaskOccurrences {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllOccurrences => "AllOccurrences",
            Self::SpecifiedOccurrenceOnly => "SpecifiedOccurrenceOnly",
        }
    }
}

/// How much of each object a get echoes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaseShape {
    IdOnly,
    Default,
    AllProperties,
}

impl BaseShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IdOnly => "IdOnly",
            Self::Default => "Default",
            Self::AllProperties => "AllProperties",
        }
    }
}
