//! Typed per-session state and the in-memory session store.

use crate::category::{CategoryMap, FeedbackCategory};
use crate::client::ModelId;
use crate::sample;
use packsense_types::NonEmptyText;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// State retained across one user's sequence of interactions.
///
/// One record holding an input text and an optional result per category. A
/// result is `Some` only after a completion request for that category's
/// non-empty text succeeded; it is never partially populated. Nothing here
/// survives the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackSession {
    /// Raw input text per category; may be empty.
    pub inputs: CategoryMap<String>,
    /// Successful analysis result per category.
    pub results: CategoryMap<Option<String>>,
    /// Combined-insights synthesis across categories.
    pub combined: Option<String>,
    /// Model selected for the most recent analysis.
    pub model: ModelId,
}

impl FeedbackSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets all inputs to empty and all results (including the combined
    /// synthesis) to absent. The model selection is kept.
    pub fn clear(&mut self) {
        self.inputs = CategoryMap::default();
        self.results = CategoryMap::default();
        self.combined = None;
    }

    /// Populates exactly the three input fields with the built-in sample
    /// feedback. Stored analysis results are left untouched.
    pub fn load_sample(&mut self) {
        self.inputs.review = sample::SAMPLE_REVIEWS.to_owned();
        self.inputs.survey = sample::SAMPLE_SURVEYS.to_owned();
        self.inputs.social_media = sample::SAMPLE_SOCIAL.to_owned();
    }

    /// Categories whose input holds at least one non-whitespace character.
    pub fn populated_categories(&self) -> Vec<FeedbackCategory> {
        FeedbackCategory::ALL
            .into_iter()
            .filter(|c| NonEmptyText::new(self.inputs.get(*c)).is_ok())
            .collect()
    }

    /// The per-category results currently available, in stable order.
    pub fn available_results(&self) -> Vec<(FeedbackCategory, &str)> {
        FeedbackCategory::ALL
            .into_iter()
            .filter_map(|c| self.results.get(c).as_deref().map(|r| (c, r)))
            .collect()
    }
}

/// In-memory store of sessions, shared across handlers.
///
/// Cheap to clone; all clones see the same sessions. Mutation happens through
/// short critical sections that never span an upstream call.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, FeedbackSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session and returns its identifier.
    pub fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.inner
            .write()
            .expect("session store lock poisoned")
            .insert(id, FeedbackSession::new());
        id
    }

    /// Returns a snapshot of the session, if it exists.
    pub fn get(&self, id: Uuid) -> Option<FeedbackSession> {
        self.inner
            .read()
            .expect("session store lock poisoned")
            .get(&id)
            .cloned()
    }

    /// Applies `f` to the stored session and returns its result, or `None`
    /// for an unknown identifier.
    pub fn modify<R>(&self, id: Uuid, f: impl FnOnce(&mut FeedbackSession) -> R) -> Option<R> {
        self.inner
            .write()
            .expect("session store lock poisoned")
            .get_mut(&id)
            .map(f)
    }

    /// Replaces a stored session wholesale. Returns `false` for an unknown
    /// identifier, in which case nothing is stored.
    pub fn replace(&self, id: Uuid, session: FeedbackSession) -> bool {
        let mut sessions = self.inner.write().expect("session store lock poisoned");
        match sessions.get_mut(&id) {
            Some(slot) => {
                *slot = session;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_resets_inputs_and_results() {
        let mut session = FeedbackSession::new();
        session.load_sample();
        session.results.review = Some("review analysis".into());
        session.results.survey = Some("survey analysis".into());
        session.results.social_media = Some("social analysis".into());
        session.combined = Some("combined".into());

        session.clear();

        for category in FeedbackCategory::ALL {
            assert!(session.inputs.get(category).is_empty());
            assert!(session.results.get(category).is_none());
        }
        assert!(session.combined.is_none());
    }

    #[test]
    fn test_load_sample_populates_inputs_only() {
        let mut session = FeedbackSession::new();
        session.results.survey = Some("kept".into());

        session.load_sample();

        for category in FeedbackCategory::ALL {
            assert!(!session.inputs.get(category).trim().is_empty());
        }
        assert_eq!(session.results.survey.as_deref(), Some("kept"));
        assert!(session.results.review.is_none());
    }

    #[test]
    fn test_populated_categories_ignores_whitespace() {
        let mut session = FeedbackSession::new();
        session.inputs.review = "   \n".into();
        session.inputs.social_media = "real feedback".into();
        assert_eq!(
            session.populated_categories(),
            vec![FeedbackCategory::SocialMedia]
        );
    }

    #[test]
    fn test_store_create_get_modify() {
        let store = SessionStore::new();
        let id = store.create();

        store
            .modify(id, |s| s.inputs.review = "text".into())
            .unwrap();
        assert_eq!(store.get(id).unwrap().inputs.review, "text");

        let unknown = Uuid::new_v4();
        assert!(store.get(unknown).is_none());
        assert!(store.modify(unknown, |_| ()).is_none());
    }

    #[test]
    fn test_store_replace_unknown_id_is_rejected() {
        let store = SessionStore::new();
        assert!(!store.replace(Uuid::new_v4(), FeedbackSession::new()));
    }
}
