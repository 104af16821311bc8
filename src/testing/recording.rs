//! Recording collaborators for headless tests.
//!
//! [`RecordingTransport`] keeps every request and holds the completions until
//! the test answers them; [`RecordingOpener`] keeps every URL and deep link.

use std::collections::VecDeque;

use url::Url;

use crate::action::DataMap;
use crate::dispatch::{ActionResponse, Completion, NetworkRequest, Opener, Transport, UrlTarget};

// ---------------------------------------------------------------------------
// RecordingTransport
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct RecordingTransport {
    connected: bool,
    requests: Vec<NetworkRequest>,
    completions: VecDeque<Completion>,
}

impl RecordingTransport {
    pub fn new(connected: bool) -> Self {
        Self { connected, ..Self::default() }
    }

    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    /// Every request sent so far, oldest first.
    pub fn requests(&self) -> &[NetworkRequest] {
        &self.requests
    }

    pub fn last_request(&self) -> Option<&NetworkRequest> {
        self.requests.last()
    }

    /// Requests still waiting for an answer.
    pub fn outstanding(&self) -> usize {
        self.completions.len()
    }

    /// Answer the oldest outstanding request. Returns `false` if none is waiting.
    pub fn respond(&mut self, response: ActionResponse) -> bool {
        match self.completions.pop_front() {
            Some(completion) => {
                completion.respond(response);
                true
            }
            None => false,
        }
    }

    /// Fail the oldest outstanding request.
    pub fn fail(&mut self, message: Option<String>) -> bool {
        match self.completions.pop_front() {
            Some(completion) => {
                completion.fail(message);
                true
            }
            None => false,
        }
    }
}

impl Transport for RecordingTransport {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn send(&mut self, request: NetworkRequest, completion: Completion) {
        self.requests.push(request);
        self.completions.push_back(completion);
    }
}

// ---------------------------------------------------------------------------
// RecordingOpener
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct RecordingOpener {
    urls: Vec<(Url, UrlTarget)>,
    deep_links: Vec<(String, DataMap)>,
}

impl RecordingOpener {
    pub fn urls(&self) -> &[(Url, UrlTarget)] {
        &self.urls
    }

    pub fn deep_links(&self) -> &[(String, DataMap)] {
        &self.deep_links
    }
}

impl Opener for RecordingOpener {
    fn open_url(&mut self, url: &Url, target: UrlTarget) {
        self.urls.push((url.clone(), target));
    }

    fn open_deep_link(&mut self, name: &str, data: &DataMap) {
        self.deep_links.push((name.to_owned(), data.clone()));
    }
}
