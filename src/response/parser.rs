//! Response parser: one wire document → aligned per-object outcomes.

use super::codes::map_response_code;
use crate::error::{EwsError, EwsResult};
use crate::identity::ObjectId;
use crate::item::values::{
    Body, BodyType, Mailbox, MimeContent, Recurrence, RecurrencePattern, RecurrenceRange,
    month_number,
};
use crate::item::{FieldValue, Item, ItemKind};
use crate::operation::{OperationOutcome, OperationRequest, OperationResponse};
use crate::request::{MESSAGES_NS_URI, SOAP_NS_URI, TYPES_NS_URI};
use crate::schema::{FieldDefinition, OperationKind, SchemaRegistry, ValueKind};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, warn};
use roxmltree::{Document, Node};

/// Parses response documents against the originating request, enforcing the
/// protocol's alignment invariant.
pub struct ResponseParser<'a> {
    registry: &'a SchemaRegistry,
}

impl<'a> ResponseParser<'a> {
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Parse one response document.
    ///
    /// The outcome sequence always has exactly the originating request's
    /// payload length and order; any other shape is a protocol violation
    /// and fails the whole call rather than being truncated or padded.
    pub fn parse(
        &self,
        document: &[u8],
        request: &OperationRequest,
    ) -> EwsResult<OperationResponse> {
        let text = std::str::from_utf8(document)
            .map_err(|err| EwsError::malformed(format!("response is not UTF-8: {err}")))?;
        let doc = Document::parse(text)
            .map_err(|err| EwsError::malformed(format!("response is not well-formed XML: {err}")))?;

        let root = doc.root_element();
        if root.tag_name().name() != "Envelope"
            || root.tag_name().namespace() != Some(SOAP_NS_URI)
        {
            return Err(EwsError::malformed("document root is not a SOAP envelope"));
        }
        let body = element_child(root, "Body", Some(SOAP_NS_URI))
            .ok_or_else(|| EwsError::malformed("SOAP envelope has no body"))?;

        if let Some(fault) = element_child(body, "Fault", None) {
            let detail = child_text(fault, "faultstring").unwrap_or("unspecified SOAP fault");
            return Err(EwsError::malformed(format!("SOAP fault: {detail}")));
        }

        let kind = request
            .items()
            .first()
            .map(Item::kind)
            .ok_or_else(|| EwsError::malformed("originating request carries no payload"))?;
        let wire = self.registry.wire(kind);
        let operation = wire.operation(request.operation());

        let response_root_name = format!("{operation}Response");
        let response_root = descendant(body, &response_root_name, Some(MESSAGES_NS_URI))
            .ok_or_else(|| {
                EwsError::malformed(format!("response has no {response_root_name} element"))
            })?;
        let messages_container =
            element_child(response_root, "ResponseMessages", Some(MESSAGES_NS_URI))
                .ok_or_else(|| EwsError::malformed("response has no ResponseMessages element"))?;

        let message_name = format!("{operation}ResponseMessage");
        let messages: Vec<Node> = messages_container
            .children()
            .filter(|node| {
                node.is_element()
                    && node.tag_name().name() == message_name
                    && node.tag_name().namespace() == Some(MESSAGES_NS_URI)
            })
            .collect();

        if messages.len() != request.items().len() {
            return Err(EwsError::malformed(format!(
                "request carried {} objects but the response has {} result elements",
                request.items().len(),
                messages.len()
            )));
        }

        let mut outcomes = Vec::with_capacity(messages.len());
        for (index, message) in messages.iter().enumerate() {
            outcomes.push(self.parse_outcome(*message, kind, request.operation(), index)?);
        }
        Ok(OperationResponse::new(outcomes))
    }

    fn parse_outcome(
        &self,
        message: Node,
        kind: ItemKind,
        operation: OperationKind,
        index: usize,
    ) -> EwsResult<OperationOutcome> {
        let class = message.attribute("ResponseClass").ok_or_else(|| {
            EwsError::malformed(format!("result element #{index} has no ResponseClass"))
        })?;

        match class {
            "Error" => {
                let code = child_text(message, "ResponseCode").unwrap_or("");
                let text = child_text(message, "MessageText")
                    .unwrap_or("no message text provided")
                    .to_string();
                Ok(OperationOutcome::Failure {
                    kind: map_response_code(code),
                    message: text,
                })
            }
            "Success" | "Warning" => {
                if class == "Warning" {
                    // The operation was applied; surface the code for the log.
                    warn!(
                        "result element #{index} is a warning: {}",
                        child_text(message, "ResponseCode").unwrap_or("no response code")
                    );
                }
                let id = descendant(message, self.registry.wire(kind).id_element, Some(TYPES_NS_URI))
                    .and_then(object_id_from_attributes);
                let item = if operation == OperationKind::Get {
                    descendant(message, self.registry.variant_element(kind), Some(TYPES_NS_URI))
                        .map(|node| self.parse_item(node, kind))
                } else {
                    None
                };
                Ok(OperationOutcome::Success { id, item })
            }
            other => Err(EwsError::malformed(format!(
                "result element #{index} has unknown ResponseClass '{other}'"
            ))),
        }
    }

    /// Rebuild a typed item from its echoed element via the registry's
    /// reverse mapping.
    fn parse_item(&self, element: Node, kind: ItemKind) -> Item {
        let mut item = Item::empty(kind);
        for child in element.children().filter(Node::is_element) {
            let local = child.tag_name().name();
            let Some(def) = self.registry.field_for_element(kind, local) else {
                // The live schema carries more dialects than any client
                // models; unknown elements are skipped, never fatal.
                debug!("ignoring unknown element {local} on {kind}");
                continue;
            };
            let Some(value) = parse_field_value(child, def) else {
                warn!("could not parse field {local} on {kind}");
                continue;
            };
            if let Err(err) = item.set_field(def.field, value) {
                warn!("skipping echoed field: {err}");
            }
        }
        // Attachment identities carry their owning item on the id element.
        if let Item::Attachment(attachment) = &mut item {
            if let Some(id_node) = element_child(element, "AttachmentId", Some(TYPES_NS_URI)) {
                if let Some(root_id) = id_node.attribute("RootItemId") {
                    let change_key = id_node.attribute("RootItemChangeKey").unwrap_or("");
                    attachment.root_item_id = Some(ObjectId::new(root_id, change_key));
                }
            }
        }
        item
    }
}

// ---- node helpers ----

fn element_child<'a, 'input>(
    node: Node<'a, 'input>,
    local: &str,
    namespace: Option<&str>,
) -> Option<Node<'a, 'input>> {
    node.children().find(|child| {
        child.is_element()
            && child.tag_name().name() == local
            && namespace.is_none_or(|ns| child.tag_name().namespace() == Some(ns))
    })
}

fn descendant<'a, 'input>(
    node: Node<'a, 'input>,
    local: &str,
    namespace: Option<&str>,
) -> Option<Node<'a, 'input>> {
    node.descendants().find(|child| {
        child.is_element()
            && child.tag_name().name() == local
            && namespace.is_none_or(|ns| child.tag_name().namespace() == Some(ns))
    })
}

fn child_text<'a>(node: Node<'a, '_>, local: &str) -> Option<&'a str> {
    element_child(node, local, None).and_then(|child| child.text())
}

fn object_id_from_attributes(node: Node) -> Option<ObjectId> {
    let id = node.attribute("Id")?;
    Some(ObjectId::new(id, node.attribute("ChangeKey").unwrap_or("")))
}

// ---- field values ----

fn parse_field_value(node: Node, def: &FieldDefinition) -> Option<FieldValue> {
    let text = || node.text().unwrap_or("");
    match def.value_kind {
        ValueKind::Text => Some(FieldValue::Text(text().to_string())),
        ValueKind::Boolean => match text().trim() {
            "true" => Some(FieldValue::Boolean(true)),
            "false" => Some(FieldValue::Boolean(false)),
            _ => None,
        },
        ValueKind::Integer => text().trim().parse().ok().map(FieldValue::Integer),
        ValueKind::DateTime => parse_datetime(text()).map(FieldValue::DateTime),
        ValueKind::Base64 => BASE64.decode(text().trim()).ok().map(FieldValue::Bytes),
        ValueKind::Body => {
            let body_type = node
                .attribute("BodyType")
                .and_then(BodyType::from_wire)
                .unwrap_or(BodyType::Text);
            let content = text().to_string();
            Some(FieldValue::Body(match body_type {
                BodyType::Text => Body::text(content),
                BodyType::Html => Body::html(content),
            }))
        }
        ValueKind::Mime => {
            let character_set = node.attribute("CharacterSet").unwrap_or("");
            MimeContent::from_base64(character_set, text()).map(FieldValue::Mime)
        }
        ValueKind::Mailbox => {
            element_child(node, "Mailbox", None).map(|mb| FieldValue::Mailbox(parse_mailbox(mb)))
        }
        ValueKind::MailboxList => Some(FieldValue::MailboxList(
            node.children()
                .filter(|child| child.is_element() && child.tag_name().name() == "Mailbox")
                .map(parse_mailbox)
                .collect(),
        )),
        ValueKind::TextList => {
            let entry = def.entry_element.unwrap_or("Entry");
            Some(FieldValue::TextList(
                node.children()
                    .filter(|child| child.is_element() && child.tag_name().name() == entry)
                    .filter_map(|child| child.text())
                    .map(str::to_string)
                    .collect(),
            ))
        }
        ValueKind::Recurrence => parse_recurrence(node).map(FieldValue::Recurrence),
        ValueKind::Identity => object_id_from_attributes(node).map(FieldValue::Id),
    }
}

fn parse_mailbox(node: Node) -> Mailbox {
    Mailbox::new(
        child_text(node, "Name").unwrap_or(""),
        child_text(node, "EmailAddress").unwrap_or(""),
    )
}

fn parse_recurrence(node: Node) -> Option<Recurrence> {
    let mut pattern = None;
    let mut range = None;
    for child in node.children().filter(Node::is_element) {
        match child.tag_name().name() {
            "DailyRecurrence" => {
                pattern = Some(RecurrencePattern::Daily {
                    interval: child_number(child, "Interval")?,
                });
            }
            "WeeklyRecurrence" => {
                pattern = Some(RecurrencePattern::Weekly {
                    interval: child_number(child, "Interval")?,
                });
            }
            "AbsoluteMonthlyRecurrence" => {
                pattern = Some(RecurrencePattern::Monthly {
                    interval: child_number(child, "Interval")?,
                    day_of_month: child_number(child, "DayOfMonth")?,
                });
            }
            "AbsoluteYearlyRecurrence" => {
                pattern = Some(RecurrencePattern::Yearly {
                    month: month_number(child_text(child, "Month")?)?,
                    day_of_month: child_number(child, "DayOfMonth")?,
                });
            }
            "NoEndRecurrence" => {
                range = Some(RecurrenceRange::NoEnd {
                    start: child_date(child, "StartDate")?,
                });
            }
            "EndDateRecurrence" => {
                range = Some(RecurrenceRange::EndDate {
                    start: child_date(child, "StartDate")?,
                    end: child_date(child, "EndDate")?,
                });
            }
            "NumberedRecurrence" => {
                range = Some(RecurrenceRange::Numbered {
                    start: child_date(child, "StartDate")?,
                    count: child_number(child, "NumberOfOccurrences")?,
                });
            }
            other => debug!("ignoring unknown recurrence element {other}"),
        }
    }
    Some(Recurrence::new(pattern?, range?))
}

fn child_number(node: Node, local: &str) -> Option<u32> {
    child_text(node, local)?.trim().parse().ok()
}

fn child_date(node: Node, local: &str) -> Option<NaiveDate> {
    // Wire dates occasionally carry a trailing zone designator.
    let raw = child_text(node, local)?.trim().trim_end_matches('Z');
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|value| value.with_timezone(&Utc))
}
