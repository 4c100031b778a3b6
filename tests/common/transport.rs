//! Scripted transport used in place of a live connection.

use ews_client::Transport;
use ews_client::error::{TransportError, TransportErrorKind};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Transport that replays scripted responses and records every request
/// document it was handed.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<Vec<u8>, TransportError>>>,
    requests: Mutex<Vec<Vec<u8>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response document for the next exchange.
    pub fn push_response(&self, document: impl Into<Vec<u8>>) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(document.into()));
    }

    /// Queue a transport failure for the next exchange.
    pub fn push_error(&self, error: TransportError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Every request document sent so far, in order.
    pub fn requests(&self) -> Vec<Vec<u8>> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request_text(&self) -> String {
        let requests = self.requests.lock().unwrap();
        let last = requests.last().expect("no request was sent");
        String::from_utf8(last.clone()).expect("request was not UTF-8")
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: &[u8]) -> Result<Vec<u8>, TransportError> {
        self.requests.lock().unwrap().push(request.to_vec());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::new(
                    TransportErrorKind::Other,
                    "no scripted response",
                ))
            })
    }
}
