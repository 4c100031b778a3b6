//! Payload builders and response-document synthesis.

use chrono::{TimeZone, Utc};
use ews_client::item::values::{
    Body, Mailbox, MimeContent, Recurrence, RecurrencePattern, RecurrenceRange, TaskStatus,
};
use ews_client::{Attachment, CalendarItem, Contact, Folder, Message, Task};

/// A message with every read/write field set.
pub fn sample_message() -> Message {
    let mut message = Message::new()
        .with_subject("Quarterly numbers")
        .with_body(Body::text("See attached."))
        .with_to_recipient(Mailbox::new("Sam", "sam@example.com"))
        .with_to_recipient(Mailbox::address("ops@example.com"));
    message.cc_recipients = vec![Mailbox::new("Ada", "ada@example.com")];
    message.from = Some(Mailbox::new("Finance", "finance@example.com"));
    message.is_read = Some(false);
    message.mime_content = Some(MimeContent::new("UTF-8", b"RnJvbTogZmluYW5jZQ==".to_vec()));
    message
}

/// A weekly recurring calendar item.
pub fn sample_calendar_item() -> CalendarItem {
    CalendarItem::new()
        .with_subject("Standup")
        .with_times(
            Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 3, 2, 9, 15, 0).unwrap(),
        )
        .with_recurrence(Recurrence::new(
            RecurrencePattern::Weekly { interval: 1 },
            RecurrenceRange::Numbered {
                start: chrono::NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
                count: 12,
            },
        ))
}

pub fn sample_task() -> Task {
    let mut task = Task::new()
        .with_subject("File the report")
        .with_due_date(Utc.with_ymd_and_hms(2026, 4, 30, 17, 0, 0).unwrap())
        .with_status(TaskStatus::InProgress);
    task.percent_complete = Some(40);
    task.start_date = Some(Utc.with_ymd_and_hms(2026, 4, 1, 9, 0, 0).unwrap());
    task
}

pub fn sample_contact() -> Contact {
    let mut contact = Contact::new()
        .with_name("Ada", "Lovelace")
        .with_email_address("ada@example.com");
    contact.display_name = Some("Ada Lovelace".into());
    contact.company_name = Some("Analytical Engines Ltd".into());
    contact.job_title = Some("Principal Engineer".into());
    contact
}

pub fn sample_folder() -> Folder {
    Folder::named("Projects")
}

pub fn sample_attachment() -> Attachment {
    Attachment::file("notes.txt", b"plain text notes".to_vec()).with_content_type("text/plain")
}

// ---- response-document synthesis ----

/// One per-object result element for a synthesized response.
pub enum Outcome {
    /// Success carrying an id; the variant element wraps it like the live
    /// server does.
    Success {
        variant: &'static str,
        id_element: &'static str,
        id: &'static str,
        change_key: &'static str,
    },
    /// Success whose result element has no body at all (delete).
    EmptySuccess,
    /// Per-object server failure.
    Error {
        code: &'static str,
        text: &'static str,
    },
}

/// Wrap per-object result elements into a full response envelope for the
/// given operation, e.g. `CreateItem`.
pub fn response_document(operation: &str, outcomes: &[Outcome]) -> String {
    let mut messages = String::new();
    for outcome in outcomes {
        match outcome {
            Outcome::Success {
                variant,
                id_element,
                id,
                change_key,
            } => {
                messages.push_str(&format!(
                    "<m:{operation}ResponseMessage ResponseClass=\"Success\">\
                     <m:ResponseCode>NoError</m:ResponseCode>\
                     <m:Items><t:{variant}>\
                     <t:{id_element} Id=\"{id}\" ChangeKey=\"{change_key}\"/>\
                     </t:{variant}></m:Items>\
                     </m:{operation}ResponseMessage>"
                ));
            }
            Outcome::EmptySuccess => {
                messages.push_str(&format!(
                    "<m:{operation}ResponseMessage ResponseClass=\"Success\">\
                     <m:ResponseCode>NoError</m:ResponseCode>\
                     </m:{operation}ResponseMessage>"
                ));
            }
            Outcome::Error { code, text } => {
                messages.push_str(&format!(
                    "<m:{operation}ResponseMessage ResponseClass=\"Error\">\
                     <m:MessageText>{text}</m:MessageText>\
                     <m:ResponseCode>{code}</m:ResponseCode>\
                     </m:{operation}ResponseMessage>"
                ));
            }
        }
    }
    wrap_response(operation, &messages)
}

/// Wrap pre-rendered response messages into the SOAP envelope.
pub fn wrap_response(operation: &str, messages: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
         <s:Envelope xmlns:s=\"http://schemas.xmlsoap.org/soap/envelope/\">\
         <s:Body>\
         <m:{operation}Response \
         xmlns:m=\"http://schemas.microsoft.com/exchange/services/2006/messages\" \
         xmlns:t=\"http://schemas.microsoft.com/exchange/services/2006/types\">\
         <m:ResponseMessages>{messages}</m:ResponseMessages>\
         </m:{operation}Response>\
         </s:Body>\
         </s:Envelope>"
    )
}

/// A response of `count` identical item successes.
pub fn all_success(operation: &str, count: usize) -> String {
    let outcomes: Vec<Outcome> = (0..count)
        .map(|_| Outcome::Success {
            variant: "Message",
            id_element: "ItemId",
            id: "AAMkAD",
            change_key: "CQAAAB",
        })
        .collect();
    response_document(operation, &outcomes)
}

/// Splice an echoed payload fragment (e.g. `<t:Message>…</t:Message>`) into
/// a single-object get response for the given operation family.
pub fn echo_response(operation: &str, payload_fragment: &str) -> String {
    let message = format!(
        "<m:{operation}ResponseMessage ResponseClass=\"Success\">\
         <m:ResponseCode>NoError</m:ResponseCode>\
         <m:Items>{payload_fragment}</m:Items>\
         </m:{operation}ResponseMessage>"
    );
    wrap_response(operation, &message)
}

/// Pull the payload fragment out of a built create request: everything
/// between the payload container's tags.
pub fn extract_payload_fragment(request_document: &str, container: &str) -> String {
    let open = format!("<m:{container}>");
    let close = format!("</m:{container}>");
    let start = request_document
        .find(&open)
        .expect("request has no payload container")
        + open.len();
    let end = request_document
        .find(&close)
        .expect("request has no closing container tag");
    request_document[start..end].to_string()
}
