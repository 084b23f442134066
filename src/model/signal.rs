// History navigation signal - the popstate payload shape

use serde::{Deserialize, Serialize};

/// Payload of a history navigation event. The only wire-level contract in
/// the system: an optional `page` field naming the page to replay. A signal
/// without a page is ignored by the controller.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HistorySignal {
    pub page: Option<String>,
}

impl HistorySignal {
    pub fn for_page(page: impl Into<String>) -> Self {
        Self {
            page: Some(page.into()),
        }
    }

    pub fn empty() -> Self {
        Self { page: None }
    }
}
