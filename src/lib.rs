//! Groupware protocol client for Exchange Web Services style servers.
//!
//! Translates typed items (messages, calendar items, tasks, contacts,
//! folders, attachments) into SOAP/XML request envelopes, sends them over a
//! caller-supplied transport, and parses the responses back into aligned
//! per-object outcomes, including change-key tracking for optimistic
//! concurrency and single-exchange batch semantics.
//!
//! # Core Components
//!
//! - [`EwsClient`] - dispatcher orchestrating build → send → parse
//! - [`Transport`] - byte-in/byte-out capability the caller supplies
//! - [`SchemaRegistry`] - single source of truth for field plans
//! - [`OperationRequest`] / [`BatchResult`] - typed call model
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ews_client::{EwsClient, Item, Message};
//! use ews_client::client::Transport;
//! use ews_client::error::TransportError;
//!
//! # struct HttpsTransport;
//! # impl Transport for HttpsTransport {
//! #     async fn send(&self, _request: &[u8]) -> Result<Vec<u8>, TransportError> {
//! #         unimplemented!()
//! #     }
//! # }
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = EwsClient::new(HttpsTransport);
//! let message = Message::new().with_subject("Hello");
//! let result = client.create(vec![Item::Message(message)]).await?;
//! for outcome in result.response() {
//!     println!("created: {:?}", outcome.id());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Per-object failures never abort a batch: the result always carries one
//! outcome per payload object, index-aligned with the request, so callers
//! can decide object-by-object whether to re-fetch and retry.

pub mod client;
pub mod error;
pub mod identity;
pub mod item;
pub mod operation;
pub mod request;
pub mod response;
pub mod schema;

// Re-export commonly used types for convenience
pub use client::{EwsClient, Transport};
pub use error::{ErrorKind, EwsError, EwsResult, TransportError, ValidationError};
pub use identity::{DistinguishedFolderId, FolderRef, ObjectId, OccurrenceId};
pub use item::{
    Attachment, CalendarItem, Contact, Folder, Item, ItemKind, Message, OccurrenceItem, Task,
};
pub use operation::{
    BatchResult, BatchStatus, OperationOutcome, OperationRequest, OperationResponse,
};
pub use request::RequestBuilder;
pub use response::ResponseParser;
pub use schema::{OperationKind, SchemaRegistry};
