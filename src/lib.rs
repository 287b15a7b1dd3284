//! Offline converters for TVQA annotation files.
//!
//! Two pipelines share the clip-key rules in [`clip_key`]:
//! [`subtitles`] folds clip-level subtitles into per-episode text and
//! [`qa`] rewrites newline-delimited QA records into the episode-aware schema.

pub mod clip_key;
pub mod error;
pub mod jsonl;
pub mod logging;
pub mod output;
pub mod qa;
pub mod subtitles;

pub use clip_key::ClipKey;
pub use error::{ConvertError, ErrorKind};
