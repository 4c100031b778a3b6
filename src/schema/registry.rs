//! Schema registry: per-(variant, operation) field plans and wire naming.

use super::plans;
use super::types::{FieldDefinition, FieldPlan, OperationKind, Presence, ValueKind, WireNames};
use crate::item::{Field, ItemKind};
use std::collections::HashMap;

const ALL_KINDS: [ItemKind; 7] = [
    ItemKind::Message,
    ItemKind::CalendarItem,
    ItemKind::Task,
    ItemKind::Contact,
    ItemKind::Folder,
    ItemKind::Attachment,
    ItemKind::Occurrence,
];

const ALL_OPERATIONS: [OperationKind; 5] = [
    OperationKind::Create,
    OperationKind::Get,
    OperationKind::Update,
    OperationKind::Delete,
    OperationKind::Move,
];

/// Registry of field plans, consulted by both the request builder and the
/// response parser.
///
/// Built once from the embedded tables, then read-only: the client wraps it
/// in an `Arc` and shares it freely across concurrent calls.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    plans: HashMap<(ItemKind, OperationKind), FieldPlan>,
    reverse: HashMap<ItemKind, HashMap<&'static str, &'static FieldDefinition>>,
}

impl SchemaRegistry {
    /// Compile the embedded tables into operation plans.
    pub fn new() -> Self {
        let mut plans = HashMap::new();
        let mut reverse: HashMap<ItemKind, HashMap<&'static str, &'static FieldDefinition>> =
            HashMap::new();

        for kind in ALL_KINDS {
            let definitions = plans::fields(kind);
            reverse.insert(
                kind,
                definitions.iter().map(|def| (def.element, def)).collect(),
            );

            for operation in ALL_OPERATIONS {
                if Self::supported(kind, operation) {
                    plans.insert((kind, operation), Self::compile(kind, operation));
                }
            }
        }

        Self { plans, reverse }
    }

    /// Whether the server accepts this operation for this variant.
    ///
    /// Occurrences are minted (and repositioned) server-side from their
    /// recurring master, and attachments live inside their root item, so
    /// both reject the operations that would contradict that.
    fn supported(kind: ItemKind, operation: OperationKind) -> bool {
        !matches!(
            (kind, operation),
            (ItemKind::Occurrence, OperationKind::Create)
                | (ItemKind::Occurrence, OperationKind::Move)
                | (ItemKind::Attachment, OperationKind::Update)
                | (ItemKind::Attachment, OperationKind::Move)
        )
    }

    fn compile(kind: ItemKind, operation: OperationKind) -> FieldPlan {
        let definitions = plans::fields(kind);
        let element = plans::variant_element(kind);

        let mut emit = Vec::new();
        let mut required = Vec::new();
        let mut forbidden = Vec::new();

        for def in definitions {
            match operation {
                OperationKind::Create => match def.presence {
                    Presence::Required => {
                        emit.push(def);
                        required.push(def);
                    }
                    Presence::Optional | Presence::WriteOnce => emit.push(def),
                    // Identity included: ids are server-minted, so a
                    // payload carrying one on create is a client bug.
                    Presence::ReadOnly => forbidden.push(def),
                },
                OperationKind::Update => match def.presence {
                    Presence::Required | Presence::Optional => emit.push(def),
                    Presence::WriteOnce | Presence::ReadOnly => {
                        // The identity element addresses the update; it is
                        // carried in the change header, not as a field.
                        if !matches!(def.value_kind, ValueKind::Identity) {
                            forbidden.push(def);
                        }
                    }
                },
                // Id-only operations: fields beyond the address are ignored.
                OperationKind::Get | OperationKind::Delete | OperationKind::Move => {}
            }
        }

        FieldPlan {
            element,
            emit,
            required,
            forbidden,
        }
    }

    /// The emission plan for one (variant, operation) pair, `None` when the
    /// operation is unsupported for the variant.
    pub fn plan(&self, kind: ItemKind, operation: OperationKind) -> Option<&FieldPlan> {
        self.plans.get(&(kind, operation))
    }

    /// Whether this (variant, operation) pair exists on the wire at all.
    pub fn supports(&self, kind: ItemKind, operation: OperationKind) -> bool {
        self.plans.contains_key(&(kind, operation))
    }

    /// Operation vocabulary for the variant's family.
    pub fn wire(&self, kind: ItemKind) -> &'static WireNames {
        plans::wire(kind)
    }

    /// The variant's element name in the types namespace.
    pub fn variant_element(&self, kind: ItemKind) -> &'static str {
        plans::variant_element(kind)
    }

    /// Full field table for the variant, in wire order.
    pub fn definitions(&self, kind: ItemKind) -> &'static [FieldDefinition] {
        plans::fields(kind)
    }

    /// Reverse mapping used by the response parser: element name → field.
    pub fn field_for_element(
        &self,
        kind: ItemKind,
        element: &str,
    ) -> Option<&'static FieldDefinition> {
        self.reverse.get(&kind).and_then(|map| map.get(element)).copied()
    }

    /// The definition of one field on one variant, if the variant carries it.
    pub fn definition(&self, kind: ItemKind, field: Field) -> Option<&'static FieldDefinition> {
        plans::fields(kind).iter().find(|def| def.field == field)
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_forbidden_on_create_everywhere() {
        let registry = SchemaRegistry::new();
        for kind in ALL_KINDS {
            let Some(plan) = registry.plan(kind, OperationKind::Create) else {
                continue;
            };
            assert!(
                plan.forbidden.iter().any(|def| def.field == Field::ItemId),
                "{kind} create must forbid the identity field"
            );
            assert!(!plan.emit.iter().any(|def| def.field == Field::ItemId));
        }
    }

    #[test]
    fn test_calendar_create_requires_times() {
        let registry = SchemaRegistry::new();
        let plan = registry
            .plan(ItemKind::CalendarItem, OperationKind::Create)
            .unwrap();
        let required: Vec<_> = plan.required.iter().map(|def| def.field).collect();
        assert_eq!(required, vec![Field::Start, Field::End]);
    }

    #[test]
    fn test_write_once_forbidden_on_update() {
        let registry = SchemaRegistry::new();
        let plan = registry
            .plan(ItemKind::Message, OperationKind::Update)
            .unwrap();
        assert!(
            plan.forbidden
                .iter()
                .any(|def| def.field == Field::MimeContent)
        );
    }

    #[test]
    fn test_unsupported_operations_have_no_plan() {
        let registry = SchemaRegistry::new();
        assert!(!registry.supports(ItemKind::Attachment, OperationKind::Update));
        assert!(!registry.supports(ItemKind::Attachment, OperationKind::Move));
        assert!(!registry.supports(ItemKind::Occurrence, OperationKind::Create));
        assert!(!registry.supports(ItemKind::Occurrence, OperationKind::Move));
        assert!(registry.supports(ItemKind::Occurrence, OperationKind::Update));
    }

    #[test]
    fn test_reverse_map_round_trips_every_definition() {
        let registry = SchemaRegistry::new();
        for kind in ALL_KINDS {
            for def in registry.definitions(kind) {
                assert_eq!(
                    registry.field_for_element(kind, def.element).map(|d| d.field),
                    Some(def.field),
                    "{kind}/{} must reverse-map to itself",
                    def.element
                );
            }
        }
    }

    #[test]
    fn test_wire_vocabulary_per_family() {
        let registry = SchemaRegistry::new();
        assert_eq!(
            registry.wire(ItemKind::Message).operation(OperationKind::Create),
            "CreateItem"
        );
        assert_eq!(
            registry.wire(ItemKind::Folder).operation(OperationKind::Delete),
            "DeleteFolder"
        );
        assert_eq!(
            registry.wire(ItemKind::Attachment).ids_container,
            "AttachmentIds"
        );
        assert_eq!(registry.variant_element(ItemKind::Attachment), "FileAttachment");
        assert_eq!(registry.variant_element(ItemKind::Occurrence), "CalendarItem");
    }

    #[test]
    fn test_updatable_fields_carry_field_uris() {
        let registry = SchemaRegistry::new();
        for kind in ALL_KINDS {
            let Some(plan) = registry.plan(kind, OperationKind::Update) else {
                continue;
            };
            for def in &plan.emit {
                assert!(
                    def.field_uri.is_some(),
                    "{kind}/{} is updatable but has no field URI",
                    def.element
                );
            }
        }
    }
}
