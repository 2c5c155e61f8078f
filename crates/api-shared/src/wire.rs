//! Request and response types for the REST surface.
//!
//! Plain serde structs; every type carries a `utoipa::ToSchema` derive so
//! the OpenAPI document stays in sync with the wire format.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Response to session creation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateSessionRes {
    pub session_id: Uuid,
}

/// Full snapshot of one session's inputs and results.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionSnapshotRes {
    pub session_id: Uuid,
    pub review_text: String,
    pub survey_text: String,
    pub social_text: String,
    pub review_analysis: Option<String>,
    pub survey_analysis: Option<String>,
    pub social_analysis: Option<String>,
    pub combined_insights: Option<String>,
    /// Model identifier used for the most recent analysis.
    pub model: String,
}

/// Replaces any subset of the three input texts. Omitted fields are left
/// unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SetInputsReq {
    pub review_text: Option<String>,
    pub survey_text: Option<String>,
    pub social_text: Option<String>,
}

/// Parameters for an analysis run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeReq {
    /// One of the selectable model identifiers; defaults to the session's
    /// current model when omitted.
    pub model: Option<String>,
}

/// Outcome of one category within an analysis run.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryStatusRes {
    /// Category identifier (`review`, `survey`, `social_media`).
    pub category: String,
    /// `analyzed`, `skipped`, or `failed`.
    pub status: String,
    /// Failure kind tag when `status` is `failed`
    /// (`network`, `auth`, `upstream`, `malformed_response`).
    pub error_kind: Option<String>,
    /// Human-readable failure description when `status` is `failed`.
    pub message: Option<String>,
}

/// Outcome of the combined-insights pass.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CombinedStatusRes {
    /// `generated`, `not_attempted`, or `failed`.
    pub status: String,
    pub error_kind: Option<String>,
    pub message: Option<String>,
}

/// Response to an analysis run: per-category outcomes, the combined-insights
/// outcome, and the resulting session snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeRes {
    pub categories: Vec<CategoryStatusRes>,
    pub combined: CombinedStatusRes,
    pub session: SessionSnapshotRes,
}

/// Generic error body for 4xx/5xx responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_inputs_req_accepts_partial_body() {
        let req: SetInputsReq = serde_json::from_str(r#"{"survey_text":"only surveys"}"#).unwrap();
        assert!(req.review_text.is_none());
        assert_eq!(req.survey_text.as_deref(), Some("only surveys"));
        assert!(req.social_text.is_none());
    }

    #[test]
    fn test_analyze_req_defaults_to_no_model() {
        let req: AnalyzeReq = serde_json::from_str("{}").unwrap();
        assert!(req.model.is_none());
    }
}
