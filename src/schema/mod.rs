//! Item schema registry: the single source of truth for field knowledge.
//!
//! Both the request builder and the response parser consult the registry;
//! duplicating field knowledge in two places is the primary source of
//! protocol drift, so neither side carries its own element tables.
//!
//! # Key Types
//!
//! - [`SchemaRegistry`] - compiled per-(variant, operation) plans
//! - [`FieldDefinition`] - one field's wire name, shape and presence rule
//! - [`FieldPlan`] - ordered emission plan with required/forbidden sets
//! - [`OperationKind`] - the operation vocabulary plans are keyed by

mod plans;
mod registry;
mod types;

pub use registry::SchemaRegistry;
pub use types::{FieldDefinition, FieldPlan, OperationKind, Presence, ValueKind, WireNames};
