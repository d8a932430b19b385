//! CurateFlow Core Library
//!
//! Turns a natural language request plus a few preference controls into an
//! AI-curated, structured YouTube playlist using schema-constrained generation.

pub mod backend;
pub mod client;
pub mod composer;
pub mod config;
pub mod error;
pub mod format;
pub mod schema;
pub mod session;
pub mod types;

// Re-export commonly used items at crate root
pub use backend::{GeminiBackend, GenerateCall, GenerationBackend, JSON_MIME_TYPE};
pub use client::CurateClient;
pub use composer::{CurateRequest, compose, system_instruction, user_message};
pub use config::GeminiConfig;
pub use error::{CurateError, GENERATION_FAILED_MESSAGE, GenerationFailed, OptionsError, Result};
pub use format::format_playlist_readable;
pub use schema::{Schema, SchemaType, playlist_schema, video_item_schema};
pub use session::{CurationSession, RequestTicket, SUGGESTIONS};
pub use types::{CurateOptions, DepthLevel, PlaylistResponse, VibeType, VideoItem};
