//! # API REST
//!
//! REST API implementation for the packaging feedback sentiment service.
//!
//! Handles:
//! - HTTP endpoints with axum (session lifecycle, analysis, report export)
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, status mapping)
//!
//! Uses `api-shared` for wire types and `packsense-core` for all domain
//! behaviour.

#![warn(rust_2018_idioms)]

use api_shared::{
    AnalyzeReq, AnalyzeRes, CategoryStatusRes, CombinedStatusRes, CreateSessionRes, ErrorRes,
    HealthRes, HealthService, SessionSnapshotRes, SetInputsReq,
};
use axum::{
    Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Json},
    routing::{get, post, put},
};
use packsense_core::{
    AnalysisRun, CombinedOutcome, CompletionClient, FeedbackSession, ModelId, OutcomeStatus,
    SessionStore, analyze_session, render_report,
    report::{REPORT_FILENAME, REPORT_MIME},
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

/// Application state shared across REST API handlers.
///
/// Holds the in-memory session store and the shared completion client.
#[derive(Clone)]
pub struct AppState {
    pub store: SessionStore,
    pub client: CompletionClient,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        create_session,
        get_session,
        set_inputs,
        load_sample,
        clear_session,
        analyze,
        report
    ),
    components(schemas(
        HealthRes,
        CreateSessionRes,
        SessionSnapshotRes,
        SetInputsReq,
        AnalyzeReq,
        AnalyzeRes,
        CategoryStatusRes,
        CombinedStatusRes,
        ErrorRes
    ))
)]
struct ApiDoc;

/// Builds the full application router around the given completion client.
pub fn app(client: CompletionClient) -> Router {
    app_with_state(AppState {
        store: SessionStore::new(),
        client,
    })
}

/// Builds the router for an explicit state, used by tests that need to reach
/// into the store.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/sessions", post(create_session))
        .route("/sessions/:id", get(get_session))
        .route("/sessions/:id/inputs", put(set_inputs))
        .route("/sessions/:id/sample", post(load_sample))
        .route("/sessions/:id/clear", post(clear_session))
        .route("/sessions/:id/analyze", post(analyze))
        .route("/sessions/:id/report", get(report))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

type ApiError = (StatusCode, Json<ErrorRes>);

fn not_found() -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorRes {
            message: "unknown session".into(),
        }),
    )
}

fn bad_request(message: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorRes {
            message: message.into(),
        }),
    )
}

fn snapshot(id: Uuid, session: &FeedbackSession) -> SessionSnapshotRes {
    SessionSnapshotRes {
        session_id: id,
        review_text: session.inputs.review.clone(),
        survey_text: session.inputs.survey.clone(),
        social_text: session.inputs.social_media.clone(),
        review_analysis: session.results.review.clone(),
        survey_analysis: session.results.survey.clone(),
        social_analysis: session.results.social_media.clone(),
        combined_insights: session.combined.clone(),
        model: session.model.to_string(),
    }
}

fn category_tag(category: packsense_core::FeedbackCategory) -> &'static str {
    match category {
        packsense_core::FeedbackCategory::Review => "review",
        packsense_core::FeedbackCategory::Survey => "survey",
        packsense_core::FeedbackCategory::SocialMedia => "social_media",
    }
}

fn run_to_wire(run: &AnalysisRun) -> (Vec<CategoryStatusRes>, CombinedStatusRes) {
    let categories = run
        .categories
        .iter()
        .map(|outcome| {
            let (status, error_kind, message) = match &outcome.status {
                OutcomeStatus::Analyzed => ("analyzed", None, None),
                OutcomeStatus::Skipped => ("skipped", None, None),
                OutcomeStatus::Failed(e) => ("failed", Some(e.kind()), Some(e.to_string())),
            };
            CategoryStatusRes {
                category: category_tag(outcome.category).to_owned(),
                status: status.to_owned(),
                error_kind: error_kind.map(str::to_owned),
                message,
            }
        })
        .collect();

    let combined = match &run.combined {
        CombinedOutcome::Generated => CombinedStatusRes {
            status: "generated".into(),
            error_kind: None,
            message: None,
        },
        CombinedOutcome::NotAttempted => CombinedStatusRes {
            status: "not_attempted".into(),
            error_kind: None,
            message: None,
        },
        CombinedOutcome::Failed(e) => CombinedStatusRes {
            status: "failed".into(),
            error_kind: Some(e.kind().to_owned()),
            message: Some(e.to_string()),
        },
    };

    (categories, combined)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/sessions",
    responses(
        (status = 201, description = "Session created", body = CreateSessionRes)
    )
)]
/// Creates a new, empty feedback session
///
/// The returned identifier scopes all later input, analysis, and report
/// operations. Sessions live in memory only and vanish with the process.
async fn create_session(State(state): State<AppState>) -> impl IntoResponse {
    let session_id = state.store.create();
    tracing::info!(%session_id, "created feedback session");
    (StatusCode::CREATED, Json(CreateSessionRes { session_id }))
}

#[utoipa::path(
    get,
    path = "/sessions/{id}",
    params(("id" = Uuid, Path, description = "Session identifier")),
    responses(
        (status = 200, description = "Session snapshot", body = SessionSnapshotRes),
        (status = 404, description = "Unknown session", body = ErrorRes)
    )
)]
/// Returns the current inputs and results of a session
async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshotRes>, ApiError> {
    let session = state.store.get(id).ok_or_else(not_found)?;
    Ok(Json(snapshot(id, &session)))
}

#[utoipa::path(
    put,
    path = "/sessions/{id}/inputs",
    params(("id" = Uuid, Path, description = "Session identifier")),
    request_body = SetInputsReq,
    responses(
        (status = 200, description = "Updated session snapshot", body = SessionSnapshotRes),
        (status = 404, description = "Unknown session", body = ErrorRes)
    )
)]
/// Replaces any subset of the three input texts
///
/// Omitted fields are left unchanged; stored analysis results are never
/// touched by input edits.
async fn set_inputs(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetInputsReq>,
) -> Result<Json<SessionSnapshotRes>, ApiError> {
    let session = state
        .store
        .modify(id, |session| {
            if let Some(text) = req.review_text {
                session.inputs.review = text;
            }
            if let Some(text) = req.survey_text {
                session.inputs.survey = text;
            }
            if let Some(text) = req.social_text {
                session.inputs.social_media = text;
            }
            session.clone()
        })
        .ok_or_else(not_found)?;
    Ok(Json(snapshot(id, &session)))
}

#[utoipa::path(
    post,
    path = "/sessions/{id}/sample",
    params(("id" = Uuid, Path, description = "Session identifier")),
    responses(
        (status = 200, description = "Session populated with sample feedback", body = SessionSnapshotRes),
        (status = 404, description = "Unknown session", body = ErrorRes)
    )
)]
/// Loads the built-in sample feedback into the three input fields
async fn load_sample(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshotRes>, ApiError> {
    let session = state
        .store
        .modify(id, |session| {
            session.load_sample();
            session.clone()
        })
        .ok_or_else(not_found)?;
    Ok(Json(snapshot(id, &session)))
}

#[utoipa::path(
    post,
    path = "/sessions/{id}/clear",
    params(("id" = Uuid, Path, description = "Session identifier")),
    responses(
        (status = 200, description = "Cleared session snapshot", body = SessionSnapshotRes),
        (status = 404, description = "Unknown session", body = ErrorRes)
    )
)]
/// Resets all inputs and results of a session
async fn clear_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshotRes>, ApiError> {
    let session = state
        .store
        .modify(id, |session| {
            session.clear();
            session.clone()
        })
        .ok_or_else(not_found)?;
    Ok(Json(snapshot(id, &session)))
}

#[utoipa::path(
    post,
    path = "/sessions/{id}/analyze",
    params(("id" = Uuid, Path, description = "Session identifier")),
    request_body = AnalyzeReq,
    responses(
        (status = 200, description = "Analysis run summary", body = AnalyzeRes),
        (status = 400, description = "No input text, or unknown model", body = ErrorRes),
        (status = 404, description = "Unknown session", body = ErrorRes)
    )
)]
/// Runs sentiment analysis for every category with non-empty input
///
/// Categories are analyzed independently; a failure in one is reported in
/// the run summary and never blocks the others. When at least two categories
/// hold results afterwards, a combined-insights synthesis pass runs as well.
/// With all three inputs empty the endpoint returns 400 and the upstream
/// endpoint is never called.
async fn analyze(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AnalyzeReq>,
) -> Result<Json<AnalyzeRes>, ApiError> {
    let mut session = state.store.get(id).ok_or_else(not_found)?;

    let model = match req.model.as_deref() {
        Some(raw) => raw
            .parse::<ModelId>()
            .map_err(|e| bad_request(e.to_string()))?,
        None => session.model,
    };

    let run = analyze_session(&state.client, &mut session, model)
        .await
        .map_err(|e| bad_request(e.to_string()))?;

    // Session ids are never reused, so a vanished session here means it was
    // removed mid-run; report it like an unknown session.
    if !state.store.replace(id, session.clone()) {
        return Err(not_found());
    }

    let (categories, combined) = run_to_wire(&run);
    Ok(Json(AnalyzeRes {
        categories,
        combined,
        session: snapshot(id, &session),
    }))
}

#[utoipa::path(
    get,
    path = "/sessions/{id}/report",
    params(("id" = Uuid, Path, description = "Session identifier")),
    responses(
        (status = 200, description = "Plain-text report download", body = String, content_type = "text/plain"),
        (status = 404, description = "Unknown session", body = ErrorRes)
    )
)]
/// Exports the session's results as a downloadable plain-text report
///
/// The document always carries the same four headed sections; categories
/// without results render an explicit "not performed" placeholder.
async fn report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let session = state.store.get(id).ok_or_else(not_found)?;
    let body = render_report(&session);
    Ok((
        [
            (
                header::CONTENT_TYPE,
                format!("{REPORT_MIME}; charset=utf-8"),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REPORT_FILENAME}\""),
            ),
        ],
        body,
    ))
}
