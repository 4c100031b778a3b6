//! Request side of the wire: SOAP envelope framing and document emission.
//!
//! The builder consults the schema registry for everything it emits
//! (element names, nesting, ordering, presence rules), so the wire contract
//! lives in one place. Emission order follows the registry's declared order
//! exactly; the server's schema is position-sensitive, not just
//! name-sensitive.

mod builder;
mod envelope;

pub use builder::RequestBuilder;
pub use envelope::{MESSAGES_NS_URI, SOAP_NS_URI, TYPES_NS_URI};
