//! Operation dispatcher: build → send → parse, one exchange per call.

use super::transport::Transport;
use crate::error::EwsResult;
use crate::identity::{FolderRef, ObjectId};
use crate::item::{Item, ItemKind};
use crate::operation::{BatchResult, BatchStatus, OperationRequest};
use crate::request::RequestBuilder;
use crate::response::ResponseParser;
use crate::schema::SchemaRegistry;
use log::{debug, info, warn};
use std::sync::Arc;
use uuid::Uuid;

/// Protocol client over a caller-supplied [`Transport`].
///
/// Holds no mutable state between calls: the registry is read-only after
/// construction and shared via `Arc`, so independent callers can run
/// concurrent `execute` calls against their own connections freely. One
/// `execute` is exactly one outbound exchange; there is no internal queue
/// and no internal retry.
pub struct EwsClient<T: Transport> {
    transport: T,
    registry: Arc<SchemaRegistry>,
}

impl<T: Transport> EwsClient<T> {
    /// Create a client with the default schema registry.
    pub fn new(transport: T) -> Self {
        Self::with_registry(transport, Arc::new(SchemaRegistry::new()))
    }

    /// Create a client sharing an existing registry.
    pub fn with_registry(transport: T, registry: Arc<SchemaRegistry>) -> Self {
        Self {
            transport,
            registry,
        }
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Execute one operation as one protocol exchange.
    ///
    /// Validation and malformed-response problems abort the whole call;
    /// per-object failures do not: the returned [`BatchResult`] always
    /// carries one outcome per payload object, in payload order.
    pub async fn execute(&self, request: &OperationRequest) -> EwsResult<BatchResult> {
        let request_id = Uuid::new_v4();
        let operation = request.operation();
        debug!(
            "building {operation} request for {} object(s) (request: '{request_id}')",
            request.items().len()
        );

        let document = RequestBuilder::new(&self.registry).build(request)?;
        info!(
            "dispatching {operation} of {} object(s), {} bytes (request: '{request_id}')",
            request.items().len(),
            document.len()
        );

        let response_bytes = self.transport.send(&document).await?;
        let response = ResponseParser::new(&self.registry).parse(&response_bytes, request)?;

        for (index, outcome) in response.iter().enumerate() {
            if let Some(kind) = outcome.error_kind() {
                warn!("object #{index} failed: {kind} (request: '{request_id}')");
            }
        }

        let result = BatchResult::new(response);
        match result.status() {
            BatchStatus::AllSucceeded => {
                debug!("{operation} completed (request: '{request_id}')")
            }
            BatchStatus::PartialFailure => {
                warn!("{operation} partially failed (request: '{request_id}')")
            }
            BatchStatus::AllFailed => {
                warn!("{operation} failed for every object (request: '{request_id}')")
            }
        }
        Ok(result)
    }

    /// Create `items` on the server.
    pub async fn create(&self, items: Vec<Item>) -> EwsResult<BatchResult> {
        self.execute(&OperationRequest::create(items)).await
    }

    /// Create `items` inside `parent`.
    pub async fn create_in(
        &self,
        items: Vec<Item>,
        parent: impl Into<FolderRef>,
    ) -> EwsResult<BatchResult> {
        self.execute(&OperationRequest::create(items).with_parent(parent))
            .await
    }

    /// Fetch the objects named by `ids`.
    pub async fn get(&self, kind: ItemKind, ids: Vec<ObjectId>) -> EwsResult<BatchResult> {
        let items = ids
            .into_iter()
            .map(|id| Item::reference(kind, id))
            .collect();
        self.execute(&OperationRequest::get(items)).await
    }

    /// Apply the set fields of `items` as sparse updates.
    ///
    /// Every payload needs a current change key; a stale one surfaces as a
    /// per-object conflict for the caller to re-fetch and retry.
    pub async fn update(&self, items: Vec<Item>) -> EwsResult<BatchResult> {
        self.execute(&OperationRequest::update(items)).await
    }

    /// Delete the objects named by `ids`.
    pub async fn delete(&self, kind: ItemKind, ids: Vec<ObjectId>) -> EwsResult<BatchResult> {
        let items = ids
            .into_iter()
            .map(|id| Item::reference(kind, id))
            .collect();
        self.execute(&OperationRequest::delete(items)).await
    }

    /// Move the objects named by `ids` into `destination`.
    pub async fn move_items(
        &self,
        kind: ItemKind,
        ids: Vec<ObjectId>,
        destination: impl Into<FolderRef>,
    ) -> EwsResult<BatchResult> {
        let items = ids
            .into_iter()
            .map(|id| Item::reference(kind, id))
            .collect();
        self.execute(&OperationRequest::move_to(items, destination.into()))
            .await
    }
}
