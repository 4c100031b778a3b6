//! Dispatcher behavior: transport failures, malformed responses, and the
//! emitted wire documents.

mod common;

use common::{MockTransport, Outcome, echo_response, response_document, sample_message};
use ews_client::error::{TransportError, TransportErrorKind};
use ews_client::{
    BatchStatus, DistinguishedFolderId, EwsClient, EwsError, Item, ItemKind, ObjectId,
};

#[tokio::test]
async fn transport_timeout_propagates_without_retry() {
    common::init_logging();
    let transport = MockTransport::new();
    transport.push_error(TransportError::timeout("no response after 30s"));

    let client = EwsClient::new(&transport);
    let err = client
        .create(vec![Item::Message(sample_message())])
        .await
        .unwrap_err();

    let EwsError::Transport(transport_err) = &err else {
        panic!("expected a transport error, got {err}");
    };
    assert_eq!(transport_err.kind, TransportErrorKind::Timeout);
    // Exactly one attempt: the dispatcher never retries on its own.
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn junk_response_is_malformed() {
    let transport = MockTransport::new();
    transport.push_response(&b"HTTP proxies sometimes answer with HTML"[..]);

    let client = EwsClient::new(&transport);
    let err = client
        .create(vec![Item::Message(sample_message())])
        .await
        .unwrap_err();
    assert!(matches!(err, EwsError::MalformedResponse { .. }));
}

#[tokio::test]
async fn get_echoes_a_typed_item() {
    let fragment = "<t:Message>\
        <t:ItemId Id=\"AAMkAD\" ChangeKey=\"CQAAAB\"/>\
        <t:Subject>Quarterly numbers</t:Subject>\
        <t:IsRead>true</t:IsRead>\
        </t:Message>";
    let transport = MockTransport::new();
    transport.push_response(echo_response("GetItem", fragment));

    let client = EwsClient::new(&transport);
    let result = client
        .get(ItemKind::Message, vec![ObjectId::from_id("AAMkAD")])
        .await
        .unwrap();

    let outcome = result.response().get(0).unwrap();
    assert_eq!(outcome.id(), Some(&ObjectId::new("AAMkAD", "CQAAAB")));
    let Some(Item::Message(message)) = outcome.item() else {
        panic!("expected an echoed message");
    };
    assert_eq!(message.subject.as_deref(), Some("Quarterly numbers"));
    assert_eq!(message.is_read, Some(true));

    let request_text = transport.last_request_text();
    assert!(request_text.contains("<m:GetItem>"));
    assert!(request_text.contains("<t:BaseShape>Default</t:BaseShape>"));
}

#[tokio::test]
async fn create_in_emits_the_parent_folder() {
    let transport = MockTransport::new();
    transport.push_response(response_document(
        "CreateItem",
        &[Outcome::Success {
            variant: "Message",
            id_element: "ItemId",
            id: "new",
            change_key: "v1",
        }],
    ));

    let client = EwsClient::new(&transport);
    let result = client
        .create_in(
            vec![Item::Message(sample_message())],
            DistinguishedFolderId::Drafts,
        )
        .await
        .unwrap();
    assert!(result.all_succeeded());

    let request_text = transport.last_request_text();
    assert!(request_text.contains(
        "<m:SavedItemFolderId><t:DistinguishedFolderId Id=\"drafts\"/></m:SavedItemFolderId>"
    ));
}

#[tokio::test]
async fn move_returns_reissued_ids_when_present() {
    let transport = MockTransport::new();
    transport.push_response(response_document(
        "MoveItem",
        &[Outcome::Success {
            variant: "Message",
            id_element: "ItemId",
            id: "AAMkAD",
            change_key: "v4",
        }],
    ));

    let client = EwsClient::new(&transport);
    let result = client
        .move_items(
            ItemKind::Message,
            vec![ObjectId::new("AAMkAD", "v3")],
            DistinguishedFolderId::DeletedItems,
        )
        .await
        .unwrap();

    let outcome = result.response().get(0).unwrap();
    assert_eq!(outcome.id(), Some(&ObjectId::new("AAMkAD", "v4")));

    let request_text = transport.last_request_text();
    assert!(request_text.contains("<m:ToFolderId>"));
    assert!(request_text.contains("<m:ItemIds>"));
}

#[tokio::test]
async fn move_without_reissued_id_still_succeeds() {
    let transport = MockTransport::new();
    transport.push_response(response_document("MoveItem", &[Outcome::EmptySuccess]));

    let client = EwsClient::new(&transport);
    let result = client
        .move_items(
            ItemKind::Message,
            vec![ObjectId::new("AAMkAD", "v3")],
            DistinguishedFolderId::DeletedItems,
        )
        .await
        .unwrap();

    assert_eq!(result.status(), BatchStatus::AllSucceeded);
    assert_eq!(result.response().get(0).unwrap().id(), None);
}

#[tokio::test]
async fn folder_operations_use_the_folder_vocabulary() {
    let transport = MockTransport::new();
    transport.push_response(response_document(
        "DeleteFolder",
        &[Outcome::EmptySuccess],
    ));

    let client = EwsClient::new(&transport);
    let result = client
        .delete(ItemKind::Folder, vec![ObjectId::new("folder", "v1")])
        .await
        .unwrap();
    assert!(result.all_succeeded());

    let request_text = transport.last_request_text();
    assert!(request_text.contains("<m:DeleteFolder DeleteType=\"MoveToDeletedItems\">"));
    assert!(request_text.contains("<m:FolderIds><t:FolderId Id=\"folder\" ChangeKey=\"v1\"/></m:FolderIds>"));
}
