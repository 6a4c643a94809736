//! Wire types for the backend's `GET /ask` endpoint. Server → client JSON.
//!
//! The backend has shipped two response shapes over time: an older one with a
//! `references` string (a playable URL when it contains `https://`) and the
//! current one with a numeric `timestamp` cue into a fixed video. Both are
//! accepted here; `into_answer` folds them into one [`Answer`].

use serde::Deserialize;

/// Answer text shown when the backend omits the `response` field.
pub const NO_RESPONSE_TEXT: &str = "No response available.";

/// Failure text for a single-endpoint request that could not be completed.
pub const RETRY_TEXT: &str = "Error retrieving response. Please try again.";

/// Failure text once every candidate endpoint has been tried.
pub const RETRY_LATER_TEXT: &str = "Error retrieving response. Please try again later.";

/// Pending indicator rendered while a request is in flight.
pub const THINKING_TEXT: &str = "Thinking...";

/// Server → client: body of `GET /ask?query=...`.
///
/// Every field is optional so that both historical response shapes (and a
/// degenerate `{}`) deserialize without error.
#[derive(Debug, Clone, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub references: Option<String>,
    #[serde(default)]
    pub timestamp: Option<f64>,
}

/// A playable video reference attached to an answer.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoRef {
    pub url: String,
    /// Cue point in seconds. `Some(0.0)` is a real cue at the start of the
    /// video; `None` means the URL plays from its own start (older
    /// `references` shape).
    pub cue_seconds: Option<f64>,
}

/// A resolved answer: display text plus an optional video reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub text: String,
    pub reference: Option<VideoRef>,
}

impl AskResponse {
    /// Fold a raw response into an [`Answer`].
    ///
    /// `video_source` is the fixed video asset a `timestamp` cue points into.
    /// A present `timestamp` wins over `references`; zero counts as present,
    /// so the check is on the `Option`, never on the value.
    pub fn into_answer(self, video_source: &str) -> Answer {
        let text = self.response.unwrap_or_else(|| NO_RESPONSE_TEXT.to_string());
        let reference = match self.timestamp {
            Some(seconds) => Some(VideoRef {
                url: video_source.to_string(),
                cue_seconds: Some(seconds),
            }),
            None => self.references.and_then(|r| {
                if r.contains("https://") {
                    Some(VideoRef {
                        url: r,
                        cue_seconds: None,
                    })
                } else {
                    None
                }
            }),
        };
        Answer { text, reference }
    }
}
