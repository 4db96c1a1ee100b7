//! coach-core - Core types for the Silent Coach service
//!
//! This crate provides the request/response shaping used across the coach crates:
//! - `request` - CoachRequest normalization, tone/length parameters
//! - `prompt` - system instruction building
//! - `result` - CoachReport, CoachResult and response modes
//! - `repair` - best-effort JSON recovery from model output

pub mod prompt;
pub mod repair;
pub mod request;
pub mod result;

// Re-export commonly used types
pub use prompt::build_system_prompt;
pub use repair::{repair_report, RepairError};
pub use request::{CoachBody, CoachRequest, Length, LengthBudget, Tone, ValidationError};
pub use result::{CoachReport, CoachResult, ResponseMode, ACTION_FILLER, SUMMARY_FALLBACK};
