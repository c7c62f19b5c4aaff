//! v1 API Data Transfer Objects.
//!
//! Wire types for the v1 REST API, kept apart from the domain models in
//! `src/models/`. Field names serialize as camelCase.

pub mod meetings;
pub mod transcripts;

pub use meetings::*;
pub use transcripts::*;
