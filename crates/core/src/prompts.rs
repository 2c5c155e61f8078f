//! Fixed prompts sent to the completion endpoint.
//!
//! Centralizing these strings makes it easy to tweak how feedback is
//! interpreted without digging through the analysis flow. User-supplied text
//! is interpolated verbatim, with no escaping; that boundary is an accepted
//! limitation of the design.

use crate::category::FeedbackCategory;

/// System persona for per-category sentiment analysis. The three section
/// names it requests are advisory structure only and are never parsed.
pub const ANALYSIS_SYSTEM_PROMPT: &str = "You are a sentiment analysis expert specializing in consumer packaging feedback. Analyze the sentiment and identify key themes related to packaging design. Structure your response with clear sections for Sentiment Overview, Key Themes, and Recommendations.";

/// System persona for the combined-insights synthesis pass.
pub const SYNTHESIS_SYSTEM_PROMPT: &str = "You are a packaging design consultant who synthesizes consumer feedback into actionable insights.";

const SYNTHESIS_PREAMBLE: &str = "Based on the following analyses of packaging feedback, provide an overall summary of key insights and recommendations:\n\n";

/// Builds the user message for one category's analysis.
pub fn analysis_user_prompt(category: FeedbackCategory, text: &str) -> String {
    format!(
        "Please perform sentiment analysis on the following {} and identify key themes related to packaging design:\n\n{}",
        category.label(),
        text
    )
}

/// Builds the user message for the combined-insights pass by concatenating
/// the available per-category results under their upper-case headers.
pub fn synthesis_user_prompt(results: &[(FeedbackCategory, &str)]) -> String {
    let mut prompt = String::from(SYNTHESIS_PREAMBLE);
    for (category, analysis) in results {
        prompt.push_str(category.synthesis_header());
        prompt.push('\n');
        prompt.push_str(analysis);
        prompt.push_str("\n\n");
    }
    prompt
}
