//! Orchestration of per-category analysis and combined synthesis.

use crate::category::FeedbackCategory;
use crate::client::{CompletionClient, ModelId};
use crate::error::{AnalyzeError, CompletionError};
use crate::prompts;
use crate::session::FeedbackSession;
use packsense_types::NonEmptyText;
use tracing::{error, info};

/// What happened to one category during an analysis run.
#[derive(Debug)]
pub enum OutcomeStatus {
    /// The category's text was analyzed and its result stored.
    Analyzed,
    /// The category's input was empty; no request was made.
    Skipped,
    /// The completion request failed; any previous result was left in place.
    Failed(CompletionError),
}

#[derive(Debug)]
pub struct CategoryOutcome {
    pub category: FeedbackCategory,
    pub status: OutcomeStatus,
}

/// What happened to the combined-insights pass.
#[derive(Debug)]
pub enum CombinedOutcome {
    Generated,
    /// Fewer than two categories held results, so synthesis was not attempted.
    NotAttempted,
    Failed(CompletionError),
}

/// Summary of one analysis run.
#[derive(Debug)]
pub struct AnalysisRun {
    pub categories: Vec<CategoryOutcome>,
    pub combined: CombinedOutcome,
}

/// Analyzes every category with non-empty input, then synthesizes combined
/// insights when at least two categories hold results.
///
/// Each category is attempted independently: a failure analyzing one never
/// blocks the others, and failed categories keep whatever result they had.
/// The up to four completion requests run sequentially, never concurrently.
///
/// # Errors
///
/// Returns `AnalyzeError::NoInput` without touching the upstream endpoint
/// when all three input fields are empty.
pub async fn analyze_session(
    client: &CompletionClient,
    session: &mut FeedbackSession,
    model: ModelId,
) -> Result<AnalysisRun, AnalyzeError> {
    let populated = session.populated_categories();
    if populated.is_empty() {
        return Err(AnalyzeError::NoInput);
    }

    session.model = model;

    let mut categories = Vec::with_capacity(FeedbackCategory::ALL.len());
    for category in FeedbackCategory::ALL {
        let status = match NonEmptyText::new(session.inputs.get(category)) {
            Err(_) => OutcomeStatus::Skipped,
            Ok(text) => {
                info!(category = %category, %model, "analyzing feedback");
                let user_prompt = prompts::analysis_user_prompt(category, text.as_str());
                match client
                    .complete(model, prompts::ANALYSIS_SYSTEM_PROMPT, &user_prompt)
                    .await
                {
                    Ok(result) => {
                        *session.results.get_mut(category) = Some(result);
                        OutcomeStatus::Analyzed
                    }
                    Err(e) => {
                        error!(category = %category, kind = e.kind(), "sentiment analysis failed: {e}");
                        OutcomeStatus::Failed(e)
                    }
                }
            }
        };
        categories.push(CategoryOutcome { category, status });
    }

    // Synthesis needs at least two results to have anything to combine.
    let available = session.available_results();
    let combined = if available.len() < 2 {
        CombinedOutcome::NotAttempted
    } else {
        info!(result_count = available.len(), "generating combined insights");
        let user_prompt = prompts::synthesis_user_prompt(&available);
        match client
            .complete(model, prompts::SYNTHESIS_SYSTEM_PROMPT, &user_prompt)
            .await
        {
            Ok(result) => {
                session.combined = Some(result);
                CombinedOutcome::Generated
            }
            Err(e) => {
                error!(kind = e.kind(), "combined insight synthesis failed: {e}");
                CombinedOutcome::Failed(e)
            }
        }
    };

    Ok(AnalysisRun {
        categories,
        combined,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn completion_body(content: &str) -> serde_json::Value {
        json!({
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": content } }
            ]
        })
    }

    /// Mounts a mock that answers only requests whose user message contains
    /// `needle`, so each category (and the synthesis pass) can be told apart.
    async fn mount_for_prompt(server: &MockServer, needle: &str, reply: &str, status: u16) {
        let template = if status == 200 {
            ResponseTemplate::new(200).set_body_json(completion_body(reply))
        } else {
            ResponseTemplate::new(status).set_body_string(reply)
        };
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(PromptContains(needle.to_owned()))
            .respond_with(template)
            .mount(server)
            .await;
    }

    struct PromptContains(String);

    impl wiremock::Match for PromptContains {
        fn matches(&self, request: &wiremock::Request) -> bool {
            let Ok(body) = serde_json::from_slice::<serde_json::Value>(&request.body) else {
                return false;
            };
            body["messages"][1]["content"]
                .as_str()
                .is_some_and(|content| content.contains(&self.0))
        }
    }

    #[tokio::test]
    async fn test_all_empty_inputs_makes_no_upstream_call() {
        let mock_server = MockServer::start().await;
        // Any request at all would violate the expectation.
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("x")))
            .expect(0)
            .mount(&mock_server)
            .await;
        let client = CompletionClient::new(mock_server.uri(), "test-key");

        let mut session = FeedbackSession::new();
        session.inputs.review = "   ".into();

        let err = analyze_session(&client, &mut session, ModelId::Gpt4o)
            .await
            .unwrap_err();
        assert!(matches!(err, AnalyzeError::NoInput));
    }

    #[tokio::test]
    async fn test_single_category_analyzed_without_synthesis() {
        let mock_server = MockServer::start().await;
        mount_for_prompt(&mock_server, "consumer review", "review result", 200).await;
        let client = CompletionClient::new(mock_server.uri(), "test-key");

        let mut session = FeedbackSession::new();
        session.inputs.review = "Great box".into();

        let run = analyze_session(&client, &mut session, ModelId::Gpt4o)
            .await
            .unwrap();

        assert_eq!(session.results.review.as_deref(), Some("review result"));
        assert!(session.combined.is_none());
        assert!(matches!(run.combined, CombinedOutcome::NotAttempted));
        assert!(matches!(run.categories[0].status, OutcomeStatus::Analyzed));
        assert!(matches!(run.categories[1].status, OutcomeStatus::Skipped));
        assert!(matches!(run.categories[2].status, OutcomeStatus::Skipped));
    }

    #[tokio::test]
    async fn test_two_categories_trigger_synthesis() {
        let mock_server = MockServer::start().await;
        mount_for_prompt(&mock_server, "consumer review", "review result", 200).await;
        mount_for_prompt(&mock_server, "survey response", "survey result", 200).await;
        mount_for_prompt(&mock_server, "CONSUMER REVIEWS ANALYSIS:", "combined result", 200).await;
        let client = CompletionClient::new(mock_server.uri(), "test-key");

        let mut session = FeedbackSession::new();
        session.inputs.review = "Great box".into();
        session.inputs.survey = "Too much plastic".into();

        let run = analyze_session(&client, &mut session, ModelId::Gpt4Turbo)
            .await
            .unwrap();

        assert_eq!(session.results.review.as_deref(), Some("review result"));
        assert_eq!(session.results.survey.as_deref(), Some("survey result"));
        assert_eq!(session.combined.as_deref(), Some("combined result"));
        assert!(matches!(run.combined, CombinedOutcome::Generated));
        assert_eq!(session.model, ModelId::Gpt4Turbo);
    }

    #[tokio::test]
    async fn test_one_failing_category_does_not_block_the_others() {
        let mock_server = MockServer::start().await;
        mount_for_prompt(&mock_server, "consumer review", "boom", 500).await;
        mount_for_prompt(&mock_server, "survey response", "survey result", 200).await;
        mount_for_prompt(&mock_server, "social media comment", "social result", 200).await;
        mount_for_prompt(&mock_server, "SURVEY RESPONSES ANALYSIS:", "combined result", 200).await;
        let client = CompletionClient::new(mock_server.uri(), "test-key");

        let mut session = FeedbackSession::new();
        session.inputs.review = "review text".into();
        session.inputs.survey = "survey text".into();
        session.inputs.social_media = "social text".into();

        let run = analyze_session(&client, &mut session, ModelId::Gpt4o)
            .await
            .unwrap();

        assert!(session.results.review.is_none());
        assert_eq!(session.results.survey.as_deref(), Some("survey result"));
        assert_eq!(session.results.social_media.as_deref(), Some("social result"));
        // Two successes remain, so synthesis still ran.
        assert_eq!(session.combined.as_deref(), Some("combined result"));

        match &run.categories[0].status {
            OutcomeStatus::Failed(e) => assert_eq!(e.kind(), "upstream"),
            other => panic!("expected review failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_synthesis_failure_leaves_results_intact() {
        let mock_server = MockServer::start().await;
        mount_for_prompt(&mock_server, "consumer review", "review result", 200).await;
        mount_for_prompt(&mock_server, "survey response", "survey result", 200).await;
        mount_for_prompt(&mock_server, "CONSUMER REVIEWS ANALYSIS:", "nope", 500).await;
        let client = CompletionClient::new(mock_server.uri(), "test-key");

        let mut session = FeedbackSession::new();
        session.inputs.review = "review text".into();
        session.inputs.survey = "survey text".into();

        let run = analyze_session(&client, &mut session, ModelId::Gpt4o)
            .await
            .unwrap();

        assert!(session.combined.is_none());
        assert_eq!(session.results.review.as_deref(), Some("review result"));
        assert!(matches!(run.combined, CombinedOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn test_prior_result_counts_toward_synthesis_gate() {
        // A result stored by an earlier run plus one fresh success reaches
        // the two-result threshold.
        let mock_server = MockServer::start().await;
        mount_for_prompt(&mock_server, "survey response", "survey result", 200).await;
        mount_for_prompt(&mock_server, "CONSUMER REVIEWS ANALYSIS:", "combined result", 200).await;
        let client = CompletionClient::new(mock_server.uri(), "test-key");

        let mut session = FeedbackSession::new();
        session.results.review = Some("earlier review result".into());
        session.inputs.survey = "survey text".into();

        let run = analyze_session(&client, &mut session, ModelId::Gpt4o)
            .await
            .unwrap();

        assert!(matches!(run.combined, CombinedOutcome::Generated));
        assert_eq!(session.combined.as_deref(), Some("combined result"));
    }
}
