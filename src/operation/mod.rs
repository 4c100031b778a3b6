//! Transport-agnostic operation model.
//!
//! Structured requests in, aligned per-object outcomes out. The wire
//! representation lives in the `request` and `response` modules; nothing
//! here knows about XML.

mod outcome;
mod request;

pub use outcome::{BatchResult, BatchStatus, OperationOutcome, OperationResponse};
pub use request::{
    AffectedTaskOccurrences, BaseShape, ConflictResolution, DeleteKind, MessageDisposition,
    OperationOptions, OperationRequest, SendMeetingInvitations,
    SendMeetingInvitationsOrCancellations,
};
