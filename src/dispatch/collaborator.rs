//! Interfaces to the collaborators actions are routed to.
//!
//! The core never talks to a network or a browser itself. Hosts implement
//! [`Transport`] and [`Opener`]; tests use the recording implementations in
//! [`crate::testing`].

use url::Url;

use crate::action::DataMap;

use super::completion::Completion;

/// A request handed to the transport.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkRequest {
    Api {
        path: String,
        data: DataMap,
        metadata: DataMap,
    },
    Treewalk {
        classification: String,
        /// Message echoed into the conversation.
        text: Option<String>,
        /// The search that led the user here, if any.
        search_query: Option<String>,
        auto_select: bool,
    },
    /// Report the end of a flow that carries a classification.
    Finish {
        classification: String,
        text: Option<String>,
    },
}

/// Where a URL is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlTarget {
    /// In-app browser, for http and https.
    EmbeddedBrowser,
    /// Handed to the operating system.
    System,
}

impl UrlTarget {
    pub fn for_url(url: &Url) -> Self {
        match url.scheme() {
            "http" | "https" => Self::EmbeddedBrowser,
            _ => Self::System,
        }
    }
}

/// Network side of dispatch.
pub trait Transport {
    fn is_connected(&self) -> bool;

    /// Send `request`. The transport must eventually respond through
    /// `completion` or drop it.
    fn send(&mut self, request: NetworkRequest, completion: Completion);
}

/// Opens things outside the component view.
pub trait Opener {
    fn open_url(&mut self, url: &Url, target: UrlTarget);

    fn open_deep_link(&mut self, name: &str, data: &DataMap);
}
