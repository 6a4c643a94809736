//! Immigration Law Q&A client library (config, `/ask` wire contract, session
//! state machine). Used by the `law-qa` terminal front end.

pub mod client;
pub mod config;
pub mod messages;
pub mod session;

pub use client::{Client, ClientError};
pub use config::{default_config_path, BackendSection, Config, ConfigError, VideoSection};
pub use messages::{
    Answer, AskResponse, VideoRef, NO_RESPONSE_TEXT, RETRY_LATER_TEXT, RETRY_TEXT, THINKING_TEXT,
};
pub use session::{Session, SessionState, Ticket};
