//! Pre-send validation: schema violations must fail locally, before any
//! transport exchange is attempted.

mod common;

use common::{MockTransport, sample_attachment, sample_calendar_item, sample_message};
use ews_client::operation::{MessageDisposition, OperationOptions, OperationRequest};
use ews_client::{EwsClient, EwsError, Item, ItemKind, ObjectId};

#[tokio::test]
async fn change_key_on_create_is_rejected_before_send() {
    let transport = MockTransport::new();
    let mut message = sample_message();
    message.item_id = Some(ObjectId::new("AAMkAD", "v1"));

    let client = EwsClient::new(&transport);
    let err = client
        .execute(&OperationRequest::create(vec![Item::Message(message)]))
        .await
        .unwrap_err();

    assert!(matches!(err, EwsError::Validation(ref v) if v.field == "ItemId"));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn missing_required_field_is_rejected_before_send() {
    let transport = MockTransport::new();
    let mut calendar_item = sample_calendar_item();
    calendar_item.end = None;

    let client = EwsClient::new(&transport);
    let err = client
        .execute(&OperationRequest::create(vec![Item::CalendarItem(
            calendar_item,
        )]))
        .await
        .unwrap_err();

    assert!(matches!(err, EwsError::Validation(ref v) if v.field == "End"));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn unsupported_operation_is_rejected() {
    let transport = MockTransport::new();
    let mut attachment = sample_attachment();
    attachment.attachment_id = Some(ObjectId::new("att", "v1"));

    let client = EwsClient::new(&transport);
    let err = client
        .execute(&OperationRequest::update(vec![Item::Attachment(attachment)]))
        .await
        .unwrap_err();

    assert!(matches!(err, EwsError::Validation(ref v) if v.field == "operation"));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn update_without_change_key_is_rejected() {
    let transport = MockTransport::new();
    let mut message = sample_message();
    message.item_id = Some(ObjectId::from_id("AAMkAD"));

    let client = EwsClient::new(&transport);
    let err = client
        .execute(&OperationRequest::update(vec![Item::Message(message)]))
        .await
        .unwrap_err();

    assert!(matches!(err, EwsError::Validation(ref v) if v.field == "ChangeKey"));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn option_for_wrong_variant_is_rejected() {
    let transport = MockTransport::new();
    let request = OperationRequest::create(vec![Item::CalendarItem(sample_calendar_item())])
        .with_options(OperationOptions::new().message_disposition(MessageDisposition::SendOnly));

    let client = EwsClient::new(&transport);
    let err = client.execute(&request).await.unwrap_err();

    assert!(matches!(err, EwsError::Validation(ref v) if v.field == "message_disposition"));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn empty_payload_is_rejected() {
    let transport = MockTransport::new();
    let client = EwsClient::new(&transport);
    let err = client
        .execute(&OperationRequest::create(vec![]))
        .await
        .unwrap_err();

    assert!(matches!(err, EwsError::Validation(ref v) if v.field == "items"));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn mixed_variant_payload_is_rejected() {
    let transport = MockTransport::new();
    let client = EwsClient::new(&transport);
    let request = OperationRequest::create(vec![
        Item::Message(sample_message()),
        Item::CalendarItem(sample_calendar_item()),
    ]);
    let err = client.execute(&request).await.unwrap_err();

    assert!(matches!(err, EwsError::Validation(ref v) if v.field == "items"));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn get_requires_an_identity() {
    let transport = MockTransport::new();
    let client = EwsClient::new(&transport);
    let err = client
        .execute(&OperationRequest::get(vec![Item::Message(sample_message())]))
        .await
        .unwrap_err();

    assert!(matches!(err, EwsError::Validation(ref v) if v.field == "ItemId"));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn occurrence_create_is_rejected() {
    let transport = MockTransport::new();
    let client = EwsClient::new(&transport);
    let occurrence = Item::empty(ItemKind::Occurrence);
    let err = client
        .execute(&OperationRequest::create(vec![occurrence]))
        .await
        .unwrap_err();

    assert!(matches!(err, EwsError::Validation(ref v) if v.field == "operation"));
    assert_eq!(transport.request_count(), 0);
}
