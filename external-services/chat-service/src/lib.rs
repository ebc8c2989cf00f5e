//! Internal chat stream delivery for Error Relay
//!
//! Error notifications are also posted by a bot into an `errors` stream of the
//! team chat. This crate provides:
//! - Realm resolution for the configured bot identity ([`RealmDirectory`])
//! - Stream message delivery ([`StreamMessenger`]) over the chat server's REST API
//! - Topic truncation to the server's topic length limit
//!
//! # Example
//!
//! ```rust,no_run
//! use chat_service::{
//!     ChatConfig, HttpStreamMessenger, RealmDirectory, StaticRealmDirectory, StreamMessage,
//!     StreamMessenger,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ChatConfig::from_env()?;
//!     let realms = StaticRealmDirectory::new(config.default_realm());
//!     let messenger = HttpStreamMessenger::new(&config)?;
//!
//!     let realm = realms.realm_for_bot("error-bot@example.com").await?;
//!     let message = StreamMessage::new(
//!         realm,
//!         "error-bot@example.com",
//!         "errors",
//!         "web-1: connection reset",
//!         "Error generated by ...",
//!     );
//!     messenger.send_stream_message(&message).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod message;
pub mod realm;

pub use client::*;
pub use config::*;
pub use error::*;
pub use message::*;
pub use realm::*;
