//! Feedback categories and category-keyed storage.

use serde::{Deserialize, Serialize};

/// One of the three feedback sources that input text and results are grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackCategory {
    Review,
    Survey,
    SocialMedia,
}

impl FeedbackCategory {
    /// All categories in their stable order, used everywhere iteration happens.
    pub const ALL: [FeedbackCategory; 3] = [
        FeedbackCategory::Review,
        FeedbackCategory::Survey,
        FeedbackCategory::SocialMedia,
    ];

    /// The phrase embedded in analysis prompts for this category.
    pub fn label(&self) -> &'static str {
        match self {
            FeedbackCategory::Review => "consumer review",
            FeedbackCategory::Survey => "survey response",
            FeedbackCategory::SocialMedia => "social media comment",
        }
    }

    /// The upper-case header used when concatenating results into the
    /// combined-insights prompt.
    pub fn synthesis_header(&self) -> &'static str {
        match self {
            FeedbackCategory::Review => "CONSUMER REVIEWS ANALYSIS:",
            FeedbackCategory::Survey => "SURVEY RESPONSES ANALYSIS:",
            FeedbackCategory::SocialMedia => "SOCIAL MEDIA COMMENTS ANALYSIS:",
        }
    }

    /// The fixed section heading for this category in the exported report.
    pub fn report_heading(&self) -> &'static str {
        match self {
            FeedbackCategory::Review => "## Consumer Reviews Analysis",
            FeedbackCategory::Survey => "## Survey Responses Analysis",
            FeedbackCategory::SocialMedia => "## Social Media Comments Analysis",
        }
    }

    /// Placeholder rendered in the report when this category was not analyzed.
    pub fn report_placeholder(&self) -> &'static str {
        match self {
            FeedbackCategory::Review => "No review analysis performed.",
            FeedbackCategory::Survey => "No survey analysis performed.",
            FeedbackCategory::SocialMedia => "No social media analysis performed.",
        }
    }
}

impl std::fmt::Display for FeedbackCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A value of type `T` for each feedback category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMap<T> {
    pub review: T,
    pub survey: T,
    pub social_media: T,
}

impl<T> CategoryMap<T> {
    pub fn get(&self, category: FeedbackCategory) -> &T {
        match category {
            FeedbackCategory::Review => &self.review,
            FeedbackCategory::Survey => &self.survey,
            FeedbackCategory::SocialMedia => &self.social_media,
        }
    }

    pub fn get_mut(&mut self, category: FeedbackCategory) -> &mut T {
        match category {
            FeedbackCategory::Review => &mut self.review,
            FeedbackCategory::Survey => &mut self.survey,
            FeedbackCategory::SocialMedia => &mut self.social_media,
        }
    }

    /// Iterates entries in the stable category order.
    pub fn iter(&self) -> impl Iterator<Item = (FeedbackCategory, &T)> {
        FeedbackCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}
