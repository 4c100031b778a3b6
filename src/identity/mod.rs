//! Server identity types for groupware objects.
//!
//! Every object that lives on the server is named by an [`ObjectId`]: an
//! opaque id paired with an opaque change key. The id names the logical
//! object for its whole lifetime; the change key names one *version* of it
//! and is reissued by the server on every successful mutation. Mutating with
//! a stale change key fails with a conflict, which is the basis of the
//! optimistic concurrency model.
//!
//! # Key Types
//!
//! - [`ObjectId`] - id + change-key pair naming one version of one object
//! - [`OccurrenceId`] - addresses one occurrence of a recurring calendar item
//! - [`DistinguishedFolderId`] - well-known folders addressable by name
//! - [`FolderRef`] - a parent/destination reference accepted by operations
//!
//! # Examples
//!
//! ```rust
//! use ews_client::identity::ObjectId;
//!
//! let before = ObjectId::new("AAMkAD...", "CQAAABYA");
//! let after = ObjectId::new("AAMkAD...", "CQAAABYB");
//!
//! // Different versions, same logical object.
//! assert_ne!(before, after);
//! assert!(before.same_object(&after));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable identity of one version of one server object.
///
/// Created by the server on first successful create, replaced wholesale on
/// every successful mutation, invalidated by a successful delete. The client
/// never mints one and never inspects the change key's structure; both
/// halves are opaque tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId {
    id: String,
    change_key: String,
}

impl ObjectId {
    /// Create an identity from server-issued tokens.
    pub fn new(id: impl Into<String>, change_key: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            change_key: change_key.into(),
        }
    }

    /// Create an identity with no change key.
    ///
    /// Sufficient for read and move operations; update and delete require
    /// the current change key and are rejected at validation time without
    /// one.
    pub fn from_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            change_key: String::new(),
        }
    }

    /// The opaque object id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The opaque version token, possibly empty.
    pub fn change_key(&self) -> &str {
        &self.change_key
    }

    /// Whether this identity carries a version token.
    pub fn has_change_key(&self) -> bool {
        !self.change_key.is_empty()
    }

    /// Whether two identities name the same logical object, regardless of
    /// which version each one holds.
    pub fn same_object(&self, other: &ObjectId) -> bool {
        self.id == other.id
    }

    /// This identity with its change key replaced by a newer one.
    pub fn with_change_key(&self, change_key: impl Into<String>) -> Self {
        Self {
            id: self.id.clone(),
            change_key: change_key.into(),
        }
    }
}

// Renders only the id: change keys churn on every mutation and would make
// log correlation across versions impossible.
impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Address of one occurrence of a recurring calendar item.
///
/// Occurrences are minted server-side from the recurring master; a client
/// addresses them by the master's identity plus a 1-based instance index.
/// Responses that touch a concrete occurrence hand back a plain
/// [`ObjectId`] for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OccurrenceId {
    master: ObjectId,
    instance_index: u32,
}

impl OccurrenceId {
    /// Address an occurrence by its recurring master and 1-based index.
    pub fn new(master: ObjectId, instance_index: u32) -> Self {
        Self {
            master,
            instance_index,
        }
    }

    /// Identity of the recurring master.
    pub fn master(&self) -> &ObjectId {
        &self.master
    }

    /// 1-based index of the occurrence within the recurrence.
    pub fn instance_index(&self) -> u32 {
        self.instance_index
    }
}

impl fmt::Display for OccurrenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.master, self.instance_index)
    }
}

/// Well-known folders addressable by name instead of by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DistinguishedFolderId {
    Inbox,
    Outbox,
    SentItems,
    DeletedItems,
    Drafts,
    Calendar,
    Contacts,
    Tasks,
    JunkEmail,
}

impl DistinguishedFolderId {
    /// Wire name of the folder.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Outbox => "outbox",
            Self::SentItems => "sentitems",
            Self::DeletedItems => "deleteditems",
            Self::Drafts => "drafts",
            Self::Calendar => "calendar",
            Self::Contacts => "contacts",
            Self::Tasks => "tasks",
            Self::JunkEmail => "junkemail",
        }
    }
}

impl fmt::Display for DistinguishedFolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parent or destination reference accepted by operations.
///
/// Create accepts one as the target container (for attachments the parent
/// is the owning *item*, so only the [`FolderRef::Id`] form is valid there);
/// move accepts one as the destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FolderRef {
    /// A well-known folder by name
    Distinguished(DistinguishedFolderId),
    /// A folder (or, for attachments, an item) by identity
    Id(ObjectId),
}

impl From<DistinguishedFolderId> for FolderRef {
    fn from(id: DistinguishedFolderId) -> Self {
        Self::Distinguished(id)
    }
}

impl From<ObjectId> for FolderRef {
    fn from(id: ObjectId) -> Self {
        Self::Id(id)
    }
}
