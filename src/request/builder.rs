//! Request builder: validated operation → one SOAP request document.

use super::envelope;
use crate::error::{ValidationError, ValidationResult};
use crate::identity::{FolderRef, ObjectId, OccurrenceId};
use crate::item::values::{Mailbox, RecurrencePattern, RecurrenceRange, month_name};
use crate::item::{FieldValue, Item, ItemAddress, ItemKind};
use crate::operation::{
    ConflictResolution, DeleteKind, MessageDisposition, OperationRequest, SendMeetingInvitations,
    SendMeetingInvitationsOrCancellations,
};
use crate::schema::{
    FieldDefinition, FieldPlan, OperationKind, SchemaRegistry, ValueKind, WireNames,
};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use log::warn;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

type XmlResult = Result<(), quick_xml::Error>;

/// Builds one request document per operation, validating against the schema
/// registry first so that nothing invalid ever reaches the network.
pub struct RequestBuilder<'a> {
    registry: &'a SchemaRegistry,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Validate the request and emit its wire document.
    ///
    /// A batch of N payload objects produces one document with N aligned
    /// child elements; the server executes them as one call and answers
    /// with N aligned result elements.
    pub fn build(&self, request: &OperationRequest) -> ValidationResult<Vec<u8>> {
        let kind = self.validate(request)?;
        self.emit(request, kind)
            .map_err(|err| ValidationError::new("document", err.to_string()))
    }

    // ---- validation ----

    fn validate(&self, request: &OperationRequest) -> ValidationResult<ItemKind> {
        let items = request.items();
        let Some(first) = items.first() else {
            return Err(ValidationError::new(
                "items",
                "payload sequence must not be empty",
            ));
        };
        let kind = first.kind();
        if items.iter().any(|item| item.kind() != kind) {
            return Err(ValidationError::new(
                "items",
                "payload objects must all be of one variant",
            ));
        }

        let operation = request.operation();
        let Some(plan) = self.registry.plan(kind, operation) else {
            return Err(ValidationError::new(
                "operation",
                format!("{operation} is not supported for {kind}"),
            ));
        };

        self.validate_options(request, kind)?;
        self.validate_refs(request, kind)?;

        for (index, item) in items.iter().enumerate() {
            match operation {
                OperationKind::Create => {
                    Self::check_forbidden(plan, item, index, operation)?;
                    Self::check_required(plan, item, index)?;
                }
                OperationKind::Update => {
                    Self::check_address(item, index, operation, true)?;
                    Self::check_forbidden(plan, item, index, operation)?;
                    if !plan
                        .emit
                        .iter()
                        .any(|def| item.field(def.field).is_some())
                    {
                        return Err(ValidationError::new(
                            "updates",
                            format!("payload #{index}: no updatable field is set"),
                        ));
                    }
                }
                OperationKind::Delete => {
                    Self::check_address(item, index, operation, true)?;
                }
                OperationKind::Get | OperationKind::Move => {
                    Self::check_address(item, index, operation, false)?;
                }
            }
        }

        Ok(kind)
    }

    fn check_forbidden(
        plan: &FieldPlan,
        item: &Item,
        index: usize,
        operation: OperationKind,
    ) -> ValidationResult<()> {
        for def in &plan.forbidden {
            if item.field(def.field).is_some() {
                return Err(ValidationError::new(
                    def.element,
                    format!("payload #{index}: field is not allowed on {operation}"),
                ));
            }
        }
        Ok(())
    }

    fn check_required(plan: &FieldPlan, item: &Item, index: usize) -> ValidationResult<()> {
        for def in &plan.required {
            if item.field(def.field).is_none() {
                return Err(ValidationError::new(
                    def.element,
                    format!("payload #{index}: required field is missing"),
                ));
            }
        }
        Ok(())
    }

    fn check_address(
        item: &Item,
        index: usize,
        operation: OperationKind,
        needs_change_key: bool,
    ) -> ValidationResult<()> {
        let Some(address) = item.address() else {
            return Err(ValidationError::new(
                "ItemId",
                format!("payload #{index}: {operation} requires a server identity"),
            ));
        };
        // Mutations are only safe against the version the client has seen.
        if needs_change_key && address.change_key().is_empty() {
            return Err(ValidationError::new(
                "ChangeKey",
                format!("payload #{index}: {operation} requires the current change key"),
            ));
        }
        Ok(())
    }

    fn validate_options(&self, request: &OperationRequest, kind: ItemKind) -> ValidationResult<()> {
        use OperationKind::{Create, Delete, Get, Update};
        let operation = request.operation();
        let options = request.options();

        if options.message_disposition.is_some()
            && !(kind == ItemKind::Message && matches!(operation, Create | Update))
        {
            return Err(ValidationError::new(
                "message_disposition",
                "only applies to message create and update",
            ));
        }
        if options.send_meeting_invitations.is_some()
            && !(kind == ItemKind::CalendarItem && operation == Create)
        {
            return Err(ValidationError::new(
                "send_meeting_invitations",
                "only applies to calendar item create",
            ));
        }
        if options.send_meeting_invitations_or_cancellations.is_some()
            && !(matches!(kind, ItemKind::CalendarItem | ItemKind::Occurrence)
                && operation == Update)
        {
            return Err(ValidationError::new(
                "send_meeting_invitations_or_cancellations",
                "only applies to calendar item update",
            ));
        }
        if options.conflict_resolution.is_some() && operation != Update {
            return Err(ValidationError::new(
                "conflict_resolution",
                "only applies to update",
            ));
        }
        if options.delete_kind.is_some() && (operation != Delete || kind == ItemKind::Attachment) {
            return Err(ValidationError::new(
                "delete_kind",
                "only applies to item and folder delete",
            ));
        }
        if options.affected_task_occurrences.is_some()
            && !(kind == ItemKind::Task && operation == Delete)
        {
            return Err(ValidationError::new(
                "affected_task_occurrences",
                "only applies to task delete",
            ));
        }
        if options.base_shape.is_some()
            && (operation != Get || self.registry.wire(kind).shape_element.is_none())
        {
            return Err(ValidationError::new(
                "base_shape",
                "only applies to get operations with a shape",
            ));
        }
        Ok(())
    }

    fn validate_refs(&self, request: &OperationRequest, kind: ItemKind) -> ValidationResult<()> {
        let operation = request.operation();

        if request.parent().is_some() && operation != OperationKind::Create {
            return Err(ValidationError::new("parent", "only applies to create"));
        }
        if request.destination().is_some() && operation != OperationKind::Move {
            return Err(ValidationError::new("destination", "only applies to move"));
        }
        if operation == OperationKind::Move && request.destination().is_none() {
            return Err(ValidationError::new(
                "destination",
                "move requires a destination folder",
            ));
        }
        if operation == OperationKind::Create && kind == ItemKind::Attachment {
            match request.parent() {
                Some(FolderRef::Id(_)) => {}
                Some(FolderRef::Distinguished(_)) => {
                    return Err(ValidationError::new(
                        "parent",
                        "attachments are created under an item id, not a folder name",
                    ));
                }
                None => {
                    return Err(ValidationError::new(
                        "parent",
                        "attachment create requires the owning item id",
                    ));
                }
            }
        }
        Ok(())
    }

    // ---- emission ----

    fn emit(&self, request: &OperationRequest, kind: ItemKind) -> Result<Vec<u8>, quick_xml::Error> {
        let wire = self.registry.wire(kind);
        let operation = request.operation();
        // Validation has already run, so the plan exists.
        let Some(plan) = self.registry.plan(kind, operation) else {
            return Ok(Vec::new());
        };

        let mut writer = Writer::new(Vec::new());
        envelope::open(&mut writer)?;

        let op_name = format!("m:{}", wire.operation(operation));
        let mut op_start = BytesStart::new(op_name.as_str());
        Self::push_operation_attributes(&mut op_start, request, kind);
        writer.write_event(Event::Start(op_start))?;

        match operation {
            OperationKind::Create => {
                self.emit_create(&mut writer, request, kind, wire, plan)?;
            }
            OperationKind::Get => {
                if let Some(shape) = wire.shape_element {
                    let shape_name = format!("m:{shape}");
                    writer.write_event(Event::Start(BytesStart::new(shape_name.as_str())))?;
                    let base_shape = request
                        .options()
                        .base_shape
                        .unwrap_or(crate::operation::BaseShape::Default);
                    text_element(&mut writer, "t:BaseShape", base_shape.as_str())?;
                    writer.write_event(Event::End(BytesEnd::new(shape_name.as_str())))?;
                }
                self.emit_id_list(&mut writer, request, wire)?;
            }
            OperationKind::Update => {
                self.emit_update(&mut writer, request, wire, plan)?;
            }
            OperationKind::Delete => {
                self.emit_id_list(&mut writer, request, wire)?;
            }
            OperationKind::Move => {
                if let Some(destination) = request.destination() {
                    writer.write_event(Event::Start(BytesStart::new("m:ToFolderId")))?;
                    write_folder_ref(&mut writer, destination)?;
                    writer.write_event(Event::End(BytesEnd::new("m:ToFolderId")))?;
                }
                self.emit_id_list(&mut writer, request, wire)?;
            }
        }

        writer.write_event(Event::End(BytesEnd::new(op_name.as_str())))?;
        envelope::close(&mut writer)?;
        Ok(writer.into_inner())
    }

    fn push_operation_attributes(start: &mut BytesStart<'_>, request: &OperationRequest, kind: ItemKind) {
        let options = request.options();
        match request.operation() {
            OperationKind::Create => {
                if kind == ItemKind::Message {
                    let disposition = options
                        .message_disposition
                        .unwrap_or(MessageDisposition::SaveOnly);
                    start.push_attribute(("MessageDisposition", disposition.as_str()));
                }
                if kind == ItemKind::CalendarItem {
                    let invitations = options
                        .send_meeting_invitations
                        .unwrap_or(SendMeetingInvitations::SendToNone);
                    start.push_attribute(("SendMeetingInvitations", invitations.as_str()));
                }
            }
            OperationKind::Update => {
                let resolution = options
                    .conflict_resolution
                    .unwrap_or(ConflictResolution::AutoResolve);
                start.push_attribute(("ConflictResolution", resolution.as_str()));
                if kind == ItemKind::Message {
                    let disposition = options
                        .message_disposition
                        .unwrap_or(MessageDisposition::SaveOnly);
                    start.push_attribute(("MessageDisposition", disposition.as_str()));
                }
                if matches!(kind, ItemKind::CalendarItem | ItemKind::Occurrence) {
                    let policy = options
                        .send_meeting_invitations_or_cancellations
                        .unwrap_or(SendMeetingInvitationsOrCancellations::SendToNone);
                    start.push_attribute(("SendMeetingInvitationsOrCancellations", policy.as_str()));
                }
            }
            OperationKind::Delete => {
                if kind != ItemKind::Attachment {
                    let delete_kind = options
                        .delete_kind
                        .unwrap_or(DeleteKind::MoveToDeletedItems);
                    start.push_attribute(("DeleteType", delete_kind.as_str()));
                }
                if kind == ItemKind::Task {
                    let affected = options
                        .affected_task_occurrences
                        .unwrap_or(crate::operation::AffectedTaskOccurrences::AllOccurrences);
                    start.push_attribute(("AffectedTaskOccurrences", affected.as_str()));
                }
            }
            OperationKind::Get | OperationKind::Move => {}
        }
    }

    fn emit_create(
        &self,
        writer: &mut Writer<Vec<u8>>,
        request: &OperationRequest,
        kind: ItemKind,
        wire: &WireNames,
        plan: &FieldPlan,
    ) -> XmlResult {
        if let Some(parent) = request.parent() {
            let parent_name = format!("m:{}", wire.saved_parent_element);
            if kind == ItemKind::Attachment {
                // The attachment parent is an item reference; its id travels
                // directly on the parent element.
                if let FolderRef::Id(id) = parent {
                    let mut start = BytesStart::new(parent_name.as_str());
                    push_id_attributes(&mut start, id);
                    writer.write_event(Event::Empty(start))?;
                }
            } else {
                writer.write_event(Event::Start(BytesStart::new(parent_name.as_str())))?;
                write_folder_ref(writer, parent)?;
                writer.write_event(Event::End(BytesEnd::new(parent_name.as_str())))?;
            }
        }

        let container = format!("m:{}", wire.payload_container);
        writer.write_event(Event::Start(BytesStart::new(container.as_str())))?;
        for item in request.items() {
            let element = format!("t:{}", plan.element);
            writer.write_event(Event::Start(BytesStart::new(element.as_str())))?;
            for def in &plan.emit {
                if let Some(value) = item.field(def.field) {
                    write_field(writer, def, &value)?;
                }
            }
            writer.write_event(Event::End(BytesEnd::new(element.as_str())))?;
        }
        writer.write_event(Event::End(BytesEnd::new(container.as_str())))?;
        Ok(())
    }

    fn emit_update(
        &self,
        writer: &mut Writer<Vec<u8>>,
        request: &OperationRequest,
        wire: &WireNames,
        plan: &FieldPlan,
    ) -> XmlResult {
        let container = format!("m:{}", wire.changes_container);
        let change = format!("t:{}", wire.change_element);
        let set_field = format!("t:{}", wire.set_field_element);

        writer.write_event(Event::Start(BytesStart::new(container.as_str())))?;
        for item in request.items() {
            // Validation guarantees an address per payload.
            let Some(address) = item.address() else {
                continue;
            };
            writer.write_event(Event::Start(BytesStart::new(change.as_str())))?;
            write_address(writer, wire, &address)?;
            writer.write_event(Event::Start(BytesStart::new("t:Updates")))?;
            for def in &plan.emit {
                let Some(value) = item.field(def.field) else {
                    continue;
                };
                writer.write_event(Event::Start(BytesStart::new(set_field.as_str())))?;
                if let Some(uri) = def.field_uri {
                    let mut field_uri = BytesStart::new("t:FieldURI");
                    field_uri.push_attribute(("FieldURI", uri));
                    writer.write_event(Event::Empty(field_uri))?;
                }
                let element = format!("t:{}", plan.element);
                writer.write_event(Event::Start(BytesStart::new(element.as_str())))?;
                write_field(writer, def, &value)?;
                writer.write_event(Event::End(BytesEnd::new(element.as_str())))?;
                writer.write_event(Event::End(BytesEnd::new(set_field.as_str())))?;
            }
            writer.write_event(Event::End(BytesEnd::new("t:Updates")))?;
            writer.write_event(Event::End(BytesEnd::new(change.as_str())))?;
        }
        writer.write_event(Event::End(BytesEnd::new(container.as_str())))?;
        Ok(())
    }

    fn emit_id_list(
        &self,
        writer: &mut Writer<Vec<u8>>,
        request: &OperationRequest,
        wire: &WireNames,
    ) -> XmlResult {
        let container = format!("m:{}", wire.ids_container);
        writer.write_event(Event::Start(BytesStart::new(container.as_str())))?;
        for item in request.items() {
            // Validation guarantees an address per payload.
            if let Some(address) = item.address() {
                write_address(writer, wire, &address)?;
            }
        }
        writer.write_event(Event::End(BytesEnd::new(container.as_str())))?;
        Ok(())
    }
}

fn push_id_attributes<'a>(start: &mut BytesStart<'a>, id: &'a ObjectId) {
    start.push_attribute(("Id", id.id()));
    if id.has_change_key() {
        start.push_attribute(("ChangeKey", id.change_key()));
    }
}

fn write_address(writer: &mut Writer<Vec<u8>>, wire: &WireNames, address: &ItemAddress) -> XmlResult {
    match address {
        ItemAddress::Id(id) => {
            let name = format!("t:{}", wire.id_element);
            let mut start = BytesStart::new(name.as_str());
            push_id_attributes(&mut start, id);
            writer.write_event(Event::Empty(start))?;
        }
        ItemAddress::Occurrence(occurrence) => {
            write_occurrence_id(writer, occurrence)?;
        }
    }
    Ok(())
}

fn write_occurrence_id(writer: &mut Writer<Vec<u8>>, occurrence: &OccurrenceId) -> XmlResult {
    let index = occurrence.instance_index().to_string();
    let mut start = BytesStart::new("t:OccurrenceItemId");
    start.push_attribute(("RecurringMasterId", occurrence.master().id()));
    if occurrence.master().has_change_key() {
        start.push_attribute(("ChangeKey", occurrence.master().change_key()));
    }
    start.push_attribute(("InstanceIndex", index.as_str()));
    writer.write_event(Event::Empty(start))?;
    Ok(())
}

fn write_folder_ref(writer: &mut Writer<Vec<u8>>, folder: &FolderRef) -> XmlResult {
    match folder {
        FolderRef::Distinguished(name) => {
            let mut start = BytesStart::new("t:DistinguishedFolderId");
            start.push_attribute(("Id", name.as_str()));
            writer.write_event(Event::Empty(start))?;
        }
        FolderRef::Id(id) => {
            let mut start = BytesStart::new("t:FolderId");
            push_id_attributes(&mut start, id);
            writer.write_event(Event::Empty(start))?;
        }
    }
    Ok(())
}

fn write_field(
    writer: &mut Writer<Vec<u8>>,
    def: &FieldDefinition,
    value: &FieldValue,
) -> XmlResult {
    let name = format!("t:{}", def.element);
    match (def.value_kind, value) {
        (ValueKind::Text, FieldValue::Text(v)) => text_element(writer, &name, v)?,
        (ValueKind::Boolean, FieldValue::Boolean(v)) => {
            text_element(writer, &name, if *v { "true" } else { "false" })?
        }
        (ValueKind::Integer, FieldValue::Integer(v)) => {
            text_element(writer, &name, &v.to_string())?
        }
        (ValueKind::DateTime, FieldValue::DateTime(v)) => {
            text_element(writer, &name, &format_datetime(v))?
        }
        (ValueKind::Base64, FieldValue::Bytes(v)) => {
            text_element(writer, &name, &BASE64.encode(v))?
        }
        (ValueKind::Body, FieldValue::Body(body)) => {
            let mut start = BytesStart::new(name.as_str());
            start.push_attribute(("BodyType", body.body_type().as_str()));
            writer.write_event(Event::Start(start))?;
            writer.write_event(Event::Text(BytesText::new(body.content())))?;
            writer.write_event(Event::End(BytesEnd::new(name.as_str())))?;
        }
        (ValueKind::Mime, FieldValue::Mime(mime)) => {
            let mut start = BytesStart::new(name.as_str());
            if !mime.character_set().is_empty() {
                start.push_attribute(("CharacterSet", mime.character_set()));
            }
            writer.write_event(Event::Start(start))?;
            writer.write_event(Event::Text(BytesText::new(&mime.to_base64())))?;
            writer.write_event(Event::End(BytesEnd::new(name.as_str())))?;
        }
        (ValueKind::Mailbox, FieldValue::Mailbox(mailbox)) => {
            writer.write_event(Event::Start(BytesStart::new(name.as_str())))?;
            write_mailbox(writer, mailbox)?;
            writer.write_event(Event::End(BytesEnd::new(name.as_str())))?;
        }
        (ValueKind::MailboxList, FieldValue::MailboxList(mailboxes)) => {
            writer.write_event(Event::Start(BytesStart::new(name.as_str())))?;
            for mailbox in mailboxes {
                write_mailbox(writer, mailbox)?;
            }
            writer.write_event(Event::End(BytesEnd::new(name.as_str())))?;
        }
        (ValueKind::TextList, FieldValue::TextList(entries)) => {
            let entry_name = format!("t:{}", def.entry_element.unwrap_or("Entry"));
            writer.write_event(Event::Start(BytesStart::new(name.as_str())))?;
            for (index, entry) in entries.iter().enumerate() {
                let key = def
                    .entry_key_prefix
                    .map(|prefix| format!("{}{}", prefix, index + 1));
                let mut start = BytesStart::new(entry_name.as_str());
                if let Some(key) = &key {
                    start.push_attribute(("Key", key.as_str()));
                }
                writer.write_event(Event::Start(start))?;
                writer.write_event(Event::Text(BytesText::new(entry)))?;
                writer.write_event(Event::End(BytesEnd::new(entry_name.as_str())))?;
            }
            writer.write_event(Event::End(BytesEnd::new(name.as_str())))?;
        }
        (ValueKind::Recurrence, FieldValue::Recurrence(recurrence)) => {
            writer.write_event(Event::Start(BytesStart::new(name.as_str())))?;
            write_recurrence_pattern(writer, recurrence.pattern())?;
            write_recurrence_range(writer, recurrence.range())?;
            writer.write_event(Event::End(BytesEnd::new(name.as_str())))?;
        }
        (kind, value) => {
            // Registry and accessors agree by construction; reaching this
            // arm means the tables drifted.
            warn!(
                "field {} declared {:?} but produced a {} value; skipping",
                def.element,
                kind,
                value.kind_name()
            );
        }
    }
    Ok(())
}

fn write_mailbox(writer: &mut Writer<Vec<u8>>, mailbox: &Mailbox) -> XmlResult {
    writer.write_event(Event::Start(BytesStart::new("t:Mailbox")))?;
    if !mailbox.name().is_empty() {
        text_element(writer, "t:Name", mailbox.name())?;
    }
    text_element(writer, "t:EmailAddress", mailbox.email_address())?;
    writer.write_event(Event::End(BytesEnd::new("t:Mailbox")))?;
    Ok(())
}

fn write_recurrence_pattern(
    writer: &mut Writer<Vec<u8>>,
    pattern: &RecurrencePattern,
) -> XmlResult {
    match pattern {
        RecurrencePattern::Daily { interval } => {
            writer.write_event(Event::Start(BytesStart::new("t:DailyRecurrence")))?;
            text_element(writer, "t:Interval", &interval.to_string())?;
            writer.write_event(Event::End(BytesEnd::new("t:DailyRecurrence")))?;
        }
        RecurrencePattern::Weekly { interval } => {
            writer.write_event(Event::Start(BytesStart::new("t:WeeklyRecurrence")))?;
            text_element(writer, "t:Interval", &interval.to_string())?;
            writer.write_event(Event::End(BytesEnd::new("t:WeeklyRecurrence")))?;
        }
        RecurrencePattern::Monthly {
            interval,
            day_of_month,
        } => {
            writer.write_event(Event::Start(BytesStart::new("t:AbsoluteMonthlyRecurrence")))?;
            text_element(writer, "t:Interval", &interval.to_string())?;
            text_element(writer, "t:DayOfMonth", &day_of_month.to_string())?;
            writer.write_event(Event::End(BytesEnd::new("t:AbsoluteMonthlyRecurrence")))?;
        }
        RecurrencePattern::Yearly {
            month,
            day_of_month,
        } => {
            writer.write_event(Event::Start(BytesStart::new("t:AbsoluteYearlyRecurrence")))?;
            text_element(writer, "t:DayOfMonth", &day_of_month.to_string())?;
            if let Some(month_name) = month_name(*month) {
                text_element(writer, "t:Month", month_name)?;
            }
            writer.write_event(Event::End(BytesEnd::new("t:AbsoluteYearlyRecurrence")))?;
        }
    }
    Ok(())
}

fn write_recurrence_range(writer: &mut Writer<Vec<u8>>, range: &RecurrenceRange) -> XmlResult {
    match range {
        RecurrenceRange::NoEnd { start } => {
            writer.write_event(Event::Start(BytesStart::new("t:NoEndRecurrence")))?;
            text_element(writer, "t:StartDate", &format_date(start))?;
            writer.write_event(Event::End(BytesEnd::new("t:NoEndRecurrence")))?;
        }
        RecurrenceRange::EndDate { start, end } => {
            writer.write_event(Event::Start(BytesStart::new("t:EndDateRecurrence")))?;
            text_element(writer, "t:StartDate", &format_date(start))?;
            text_element(writer, "t:EndDate", &format_date(end))?;
            writer.write_event(Event::End(BytesEnd::new("t:EndDateRecurrence")))?;
        }
        RecurrenceRange::Numbered { start, count } => {
            writer.write_event(Event::Start(BytesStart::new("t:NumberedRecurrence")))?;
            text_element(writer, "t:StartDate", &format_date(start))?;
            text_element(writer, "t:NumberOfOccurrences", &count.to_string())?;
            writer.write_event(Event::End(BytesEnd::new("t:NumberedRecurrence")))?;
        }
    }
    Ok(())
}

fn text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> XmlResult {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

pub(crate) fn format_datetime(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub(crate) fn format_date(value: &NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::DistinguishedFolderId;
    use crate::item::values::Body;
    use crate::item::{Contact, Message};
    use crate::operation::BaseShape;
    use crate::operation::OperationOptions;

    fn build(request: &OperationRequest) -> ValidationResult<String> {
        let registry = SchemaRegistry::new();
        let builder = RequestBuilder::new(&registry);
        builder
            .build(request)
            .map(|bytes| String::from_utf8(bytes).unwrap())
    }

    #[test]
    fn test_create_message_document_shape() {
        let message = Message::new()
            .with_subject("Quarterly numbers")
            .with_body(Body::text("See below."))
            .with_to_recipient(Mailbox::new("Sam", "sam@example.com"));
        let request = OperationRequest::create(vec![Item::Message(message)])
            .with_parent(DistinguishedFolderId::Drafts);

        let doc = build(&request).unwrap();
        assert!(doc.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
        assert!(doc.contains("<m:CreateItem MessageDisposition=\"SaveOnly\">"));
        assert!(doc.contains(
            "<m:SavedItemFolderId><t:DistinguishedFolderId Id=\"drafts\"/></m:SavedItemFolderId>"
        ));
        assert!(doc.contains("<t:Subject>Quarterly numbers</t:Subject>"));
        assert!(doc.contains("<t:Body BodyType=\"Text\">See below.</t:Body>"));
        assert!(doc.contains(
            "<t:ToRecipients><t:Mailbox><t:Name>Sam</t:Name>\
             <t:EmailAddress>sam@example.com</t:EmailAddress></t:Mailbox></t:ToRecipients>"
        ));
        // Subject precedes Body: the registry's order is the wire order.
        assert!(doc.find("<t:Subject>").unwrap() < doc.find("<t:Body").unwrap());
    }

    #[test]
    fn test_batch_create_emits_one_document_with_n_children() {
        let items: Vec<Item> = (0..3)
            .map(|i| Item::Message(Message::new().with_subject(format!("msg {i}"))))
            .collect();
        let doc = build(&OperationRequest::create(items)).unwrap();
        assert_eq!(doc.matches("<t:Message>").count(), 3);
        assert_eq!(doc.matches("<m:CreateItem").count(), 1);
    }

    #[test]
    fn test_create_rejects_identity() {
        let mut message = Message::new().with_subject("stale");
        message.item_id = Some(ObjectId::new("abc", "v1"));
        let err = build(&OperationRequest::create(vec![Item::Message(message)])).unwrap_err();
        assert_eq!(err.field, "ItemId");
        assert!(err.reason.contains("not allowed on create"));
    }

    #[test]
    fn test_update_requires_change_key() {
        let mut message = Message::new().with_subject("newer");
        message.item_id = Some(ObjectId::from_id("abc"));
        let err = build(&OperationRequest::update(vec![Item::Message(message)])).unwrap_err();
        assert_eq!(err.field, "ChangeKey");
    }

    #[test]
    fn test_update_emits_field_changes() {
        let mut message = Message::new().with_subject("newer");
        message.item_id = Some(ObjectId::new("abc", "v2"));
        let doc = build(&OperationRequest::update(vec![Item::Message(message)])).unwrap();

        assert!(doc.contains(
            "<m:UpdateItem ConflictResolution=\"AutoResolve\" MessageDisposition=\"SaveOnly\">"
        ));
        assert!(doc.contains("<t:ItemId Id=\"abc\" ChangeKey=\"v2\"/>"));
        assert!(doc.contains("<t:FieldURI FieldURI=\"item:Subject\"/>"));
        assert!(doc.contains("<t:Message><t:Subject>newer</t:Subject></t:Message>"));
    }

    #[test]
    fn test_update_without_set_fields_is_rejected() {
        let item = Item::reference(ItemKind::Message, ObjectId::new("abc", "v2"));
        let err = build(&OperationRequest::update(vec![item])).unwrap_err();
        assert_eq!(err.field, "updates");
    }

    #[test]
    fn test_get_emits_shape_and_ids() {
        let item = Item::reference(ItemKind::Message, ObjectId::from_id("abc"));
        let request = OperationRequest::get(vec![item])
            .with_options(OperationOptions::new().base_shape(BaseShape::AllProperties));
        let doc = build(&request).unwrap();

        assert!(doc.contains("<m:ItemShape><t:BaseShape>AllProperties</t:BaseShape></m:ItemShape>"));
        assert!(doc.contains("<m:ItemIds><t:ItemId Id=\"abc\"/></m:ItemIds>"));
    }

    #[test]
    fn test_occurrence_addressing_on_delete() {
        let occurrence = Item::occurrence_reference(OccurrenceId::new(
            ObjectId::new("master", "v3"),
            2,
        ));
        let doc = build(&OperationRequest::delete(vec![occurrence])).unwrap();
        assert!(doc.contains(
            "<t:OccurrenceItemId RecurringMasterId=\"master\" ChangeKey=\"v3\" InstanceIndex=\"2\"/>"
        ));
    }

    #[test]
    fn test_move_emits_destination_then_ids() {
        let item = Item::reference(ItemKind::Message, ObjectId::from_id("abc"));
        let request = OperationRequest::move_to(
            vec![item],
            FolderRef::Distinguished(DistinguishedFolderId::DeletedItems),
        );
        let doc = build(&request).unwrap();
        let to_folder = doc.find("<m:ToFolderId>").unwrap();
        let ids = doc.find("<m:ItemIds>").unwrap();
        assert!(to_folder < ids);
    }

    #[test]
    fn test_mixed_variants_rejected() {
        let request = OperationRequest::create(vec![
            Item::Message(Message::new()),
            Item::Contact(Contact::new()),
        ]);
        let err = build(&request).unwrap_err();
        assert_eq!(err.field, "items");
    }

    #[test]
    fn test_empty_payload_rejected() {
        let err = build(&OperationRequest::create(vec![])).unwrap_err();
        assert_eq!(err.field, "items");
    }

    #[test]
    fn test_option_variant_mismatch_rejected() {
        let request = OperationRequest::create(vec![Item::Contact(Contact::new())])
            .with_options(OperationOptions::new().message_disposition(MessageDisposition::SendOnly));
        let err = build(&request).unwrap_err();
        assert_eq!(err.field, "message_disposition");
    }

    #[test]
    fn test_attachment_create_requires_item_parent() {
        let attachment = Item::Attachment(crate::item::Attachment::file("a.txt", b"hi".to_vec()));
        let err = build(&OperationRequest::create(vec![attachment.clone()])).unwrap_err();
        assert_eq!(err.field, "parent");

        let request = OperationRequest::create(vec![attachment])
            .with_parent(FolderRef::Id(ObjectId::new("item", "v1")));
        let doc = build(&request).unwrap();
        assert!(doc.contains("<m:CreateAttachment>"));
        assert!(doc.contains("<m:ParentItemId Id=\"item\" ChangeKey=\"v1\"/>"));
        assert!(doc.contains("<t:FileAttachment>"));
        assert!(doc.contains("<t:Content>aGk=</t:Content>"));
    }

    #[test]
    fn test_text_content_is_escaped() {
        let message = Message::new().with_subject("Bed & <breakfast>");
        let doc = build(&OperationRequest::create(vec![Item::Message(message)])).unwrap();
        assert!(doc.contains("<t:Subject>Bed &amp; &lt;breakfast&gt;</t:Subject>"));
    }
}
