//! Core definitions for the item schema registry.
//!
//! A [`FieldDefinition`] describes one field of one variant: its wire
//! element name, its value shape, its presence rule and (for updatable
//! fields) the field URI used in change descriptions. [`WireNames`] carries
//! the per-variant-family operation vocabulary. Both are declared as const
//! tables and compiled into per-(variant, operation) [`FieldPlan`]s by the
//! registry.

use crate::item::Field;
use serde::{Deserialize, Serialize};

/// The operation kinds a request can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    Create,
    Get,
    Update,
    Delete,
    Move,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Get => "get",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Move => "move",
        }
    }

    /// Whether this operation emits payload fields (as opposed to ids only).
    pub fn carries_fields(&self) -> bool {
        matches!(self, Self::Create | Self::Update)
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When a field may appear in a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Must be present on create; updatable afterwards
    Required,
    /// May be present on create; updatable afterwards
    Optional,
    /// May be present on create only, never updated
    WriteOnce,
    /// Server-computed; never sent by the client
    ReadOnly,
}

/// The wire shape of a field's value.
///
/// This is what decides the nesting below the field's element: scalar kinds
/// hold a text node, structured kinds own a fixed child layout that the
/// builder and parser both derive from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Boolean,
    Integer,
    DateTime,
    /// Raw bytes, base64 text on the wire
    Base64,
    /// Body text with a `BodyType` attribute
    Body,
    /// Base64 payload with a `CharacterSet` attribute
    Mime,
    /// A single named address wrapped in a `Mailbox` child
    Mailbox,
    /// Repeated `Mailbox` children under the field element
    MailboxList,
    /// Repeated text entries under the field element
    TextList,
    /// Recurrence pattern + range subtree
    Recurrence,
    /// The variant's own identity element (id + change-key attributes)
    Identity,
}

/// One field of one variant, as the registry declares it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefinition {
    pub field: Field,
    /// XML local name in the types namespace
    pub element: &'static str,
    pub value_kind: ValueKind,
    pub presence: Presence,
    /// Field URI for change descriptions; `None` for fields that can never
    /// appear in an update
    pub field_uri: Option<&'static str>,
    /// Child element local name for list-shaped kinds
    pub entry_element: Option<&'static str>,
    /// Prefix for the `Key` attribute on keyed text entries
    pub entry_key_prefix: Option<&'static str>,
}

impl FieldDefinition {
    /// Shorthand for the common scalar case; structured kinds adjust the
    /// remaining knobs with the builder-style helpers below.
    pub const fn new(
        field: Field,
        element: &'static str,
        value_kind: ValueKind,
        presence: Presence,
    ) -> Self {
        Self {
            field,
            element,
            value_kind,
            presence,
            field_uri: None,
            entry_element: None,
            entry_key_prefix: None,
        }
    }

    pub const fn with_uri(mut self, uri: &'static str) -> Self {
        self.field_uri = Some(uri);
        self
    }

    pub const fn with_entries(mut self, entry_element: &'static str) -> Self {
        self.entry_element = Some(entry_element);
        self
    }

    pub const fn with_entry_keys(mut self, prefix: &'static str) -> Self {
        self.entry_key_prefix = Some(prefix);
        self
    }
}

/// Operation vocabulary for one variant family.
///
/// Items, folders and attachments share one request grammar but differ in
/// every element name; this table is the single place those names live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireNames {
    pub create: &'static str,
    pub get: &'static str,
    pub update: &'static str,
    pub delete: &'static str,
    pub move_: &'static str,
    /// Container for full payload objects, e.g. `Items`
    pub payload_container: &'static str,
    /// Container for bare ids, e.g. `ItemIds`
    pub ids_container: &'static str,
    /// Container and per-object element for updates
    pub changes_container: &'static str,
    pub change_element: &'static str,
    pub set_field_element: &'static str,
    /// The identity element, e.g. `ItemId`
    pub id_element: &'static str,
    /// Where a create lands, e.g. `SavedItemFolderId`
    pub saved_parent_element: &'static str,
    /// Shape container on a get, e.g. `ItemShape`; `None` for families
    /// fetched without one
    pub shape_element: Option<&'static str>,
}

impl WireNames {
    /// Wire name of the operation element, e.g. `CreateItem`.
    pub fn operation(&self, kind: OperationKind) -> &'static str {
        match kind {
            OperationKind::Create => self.create,
            OperationKind::Get => self.get,
            OperationKind::Update => self.update,
            OperationKind::Delete => self.delete,
            OperationKind::Move => self.move_,
        }
    }
}

/// Ordered field-emission plan for one (variant, operation) pair.
#[derive(Debug, Clone)]
pub struct FieldPlan {
    /// The variant's element name in the types namespace
    pub element: &'static str,
    /// Fields the builder emits when set, in declared wire order
    pub emit: Vec<&'static FieldDefinition>,
    /// Fields that must be set
    pub required: Vec<&'static FieldDefinition>,
    /// Fields that must not be set
    pub forbidden: Vec<&'static FieldDefinition>,
}
