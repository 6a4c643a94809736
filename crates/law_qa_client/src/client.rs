//! HTTP client: send the question to `/ask`, try candidate endpoints in
//! order, first success wins.

use crate::messages::{Answer, AskResponse, RETRY_LATER_TEXT, RETRY_TEXT};

/// Query client over an ordered list of candidate backend endpoints.
pub struct Client {
    http: reqwest::Client,
    endpoints: Vec<String>,
    video_source: Option<String>,
}

/// Client request error.
#[derive(Debug)]
pub enum ClientError {
    /// Transport failure or non-2xx status.
    Http(String),
    /// Response body was not the expected JSON shape.
    Parse(String),
    /// Client was constructed with no endpoints to try.
    NoEndpoints,
    /// Every candidate endpoint failed; `last` is the final tier's error.
    AllEndpointsFailed { attempts: usize, last: String },
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Http(s) => write!(f, "HTTP error: {}", s),
            ClientError::Parse(s) => write!(f, "parse error: {}", s),
            ClientError::NoEndpoints => write!(f, "no backend endpoints configured"),
            ClientError::AllEndpointsFailed { attempts, last } => {
                write!(f, "all {} endpoint(s) failed, last error: {}", attempts, last)
            }
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Http(e.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Parse(e.to_string())
    }
}

impl ClientError {
    /// The literal shown to the user in place of an answer.
    pub fn user_message(&self) -> &'static str {
        match self {
            ClientError::AllEndpointsFailed { attempts, .. } if *attempts > 1 => RETRY_LATER_TEXT,
            _ => RETRY_TEXT,
        }
    }
}

impl Client {
    /// Build a client over `endpoints`, tried in order on each question.
    ///
    /// `video_source` is the fixed video asset that `timestamp` cues point
    /// into; when `None`, the asset served by the answering endpoint at
    /// `/video` is used instead.
    pub fn new(endpoints: Vec<String>, video_source: Option<String>) -> Result<Self, ClientError> {
        if endpoints.is_empty() {
            return Err(ClientError::NoEndpoints);
        }
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ClientError::Http(e.to_string()))?;
        Ok(Self {
            http,
            endpoints,
            video_source,
        })
    }

    /// Candidate endpoints in the order they are tried.
    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    /// Ask `question`, trying each endpoint in order until one answers.
    ///
    /// One GET per tier, no retry within a tier, no backoff. A non-2xx
    /// status, transport failure, or malformed body all count as that tier
    /// failing; the error surfaces only after the last tier.
    pub async fn ask(&self, question: &str) -> Result<Answer, ClientError> {
        let mut last = String::new();
        for endpoint in &self.endpoints {
            match self.ask_at(endpoint, question).await {
                Ok(answer) => return Ok(answer),
                Err(e) => last = e.to_string(),
            }
        }
        Err(ClientError::AllEndpointsFailed {
            attempts: self.endpoints.len(),
            last,
        })
    }

    /// One GET against a single endpoint. The query text is percent-encoded
    /// by the query-parameter builder.
    async fn ask_at(&self, endpoint: &str, question: &str) -> Result<Answer, ClientError> {
        let base = endpoint.trim_end_matches('/');
        let url = format!("{}/ask", base);
        let resp = self
            .http
            .get(&url)
            .query(&[("query", question)])
            .send()
            .await?
            .error_for_status()?;
        let body = resp.text().await?;
        let parsed: AskResponse = serde_json::from_str(&body)?;

        let fallback = format!("{}/video", base);
        let source = self.video_source.as_deref().unwrap_or(&fallback);
        Ok(parsed.into_answer(source))
    }
}
