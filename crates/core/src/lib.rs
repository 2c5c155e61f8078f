//! # Packsense Core
//!
//! Core business logic for the packaging feedback sentiment service.
//!
//! This crate contains pure domain operations:
//! - Feedback categories and typed per-session state
//! - Prompt assembly for the completion endpoint
//! - The completion client and its error taxonomy
//! - Analysis orchestration and report rendering
//!
//! **No API concerns**: HTTP routing, OpenAPI documentation, or CLI parsing
//! belong in `api-rest`, `api-shared`, or `packsense-cli`.

pub mod analysis;
pub mod category;
pub mod client;
pub mod error;
pub mod prompts;
pub mod report;
pub mod sample;
pub mod session;

pub use analysis::{analyze_session, AnalysisRun, CategoryOutcome, CombinedOutcome, OutcomeStatus};
pub use category::{CategoryMap, FeedbackCategory};
pub use client::{CompletionClient, ModelId};
pub use error::{AnalyzeError, CompletionError, ModelParseError};
pub use report::render_report;
pub use session::{FeedbackSession, SessionStore};
