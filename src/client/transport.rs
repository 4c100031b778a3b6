//! Transport capability consumed by the dispatcher.

use crate::error::TransportError;
use std::future::Future;

/// One authenticated request/response exchange with the server.
///
/// The surrounding application supplies this: connection setup,
/// TLS, authentication (NTLM/Basic/OAuth) and the timeout discipline all
/// live behind it. The dispatcher only sees bytes in, bytes out, and a
/// [`TransportError`] when the exchange could not complete.
///
/// Implementations must enforce their own deadline; the dispatcher never
/// hangs on a transport that reports timeouts, and never retries, because
/// it cannot know whether a mutating call already committed server-side.
///
/// # Examples
///
/// ```rust
/// use ews_client::client::Transport;
/// use ews_client::error::TransportError;
///
/// struct LoopbackTransport;
///
/// impl Transport for LoopbackTransport {
///     async fn send(&self, request: &[u8]) -> Result<Vec<u8>, TransportError> {
///         Ok(request.to_vec())
///     }
/// }
/// ```
pub trait Transport {
    /// Send one request document and return the raw response document.
    fn send(
        &self,
        request: &[u8],
    ) -> impl Future<Output = Result<Vec<u8>, TransportError>> + Send;
}

// A shared reference to a transport is itself a transport, so one
// connection can back several clients.
impl<T: Transport> Transport for &T {
    fn send(
        &self,
        request: &[u8],
    ) -> impl Future<Output = Result<Vec<u8>, TransportError>> + Send {
        (**self).send(request)
    }
}
