//! Fake recipe provider for testing.
//!
//! Search responses are queued and handed out one per call; once the queue is
//! empty every search returns no results. Every query is recorded so tests can
//! check what would have been sent upstream.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use super::{RecipeProvider, SearchQuery};
use crate::error::RecipeApiError;
use crate::types::{RecipeCandidate, RecipeDetail, RecipeId};

#[derive(Debug, Clone)]
enum SearchResponse {
    Results(Vec<RecipeCandidate>),
    Error { status: u16, message: String },
}

#[derive(Debug, Default)]
pub struct FakeRecipeProvider {
    searches: Mutex<VecDeque<SearchResponse>>,
    details: HashMap<String, RecipeDetail>,
    queries: Mutex<Vec<SearchQuery>>,
    detail_requests: Mutex<Vec<(RecipeId, u32)>>,
}

impl FakeRecipeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the results of the next search.
    pub fn with_search_results(self, results: Vec<RecipeCandidate>) -> Self {
        self.push(SearchResponse::Results(results))
    }

    /// Queue a non-success status for the next search.
    pub fn with_search_error(self, status: u16, message: &str) -> Self {
        self.push(SearchResponse::Error {
            status,
            message: message.to_string(),
        })
    }

    /// Register the information returned for a recipe id.
    pub fn with_detail(mut self, id: &str, detail: RecipeDetail) -> Self {
        self.details.insert(id.to_string(), detail);
        self
    }

    fn push(self, response: SearchResponse) -> Self {
        self.searches
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(response);
        self
    }

    /// Every search query received, in order.
    pub fn queries(&self) -> Vec<SearchQuery> {
        self.queries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn search_count(&self) -> usize {
        self.queries().len()
    }

    /// Every (id, servings) pair passed to `recipe_information`, in order.
    pub fn detail_requests(&self) -> Vec<(RecipeId, u32)> {
        self.detail_requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl RecipeProvider for FakeRecipeProvider {
    async fn complex_search(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<RecipeCandidate>, RecipeApiError> {
        self.queries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(query.clone());

        let next = self
            .searches
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();

        match next {
            Some(SearchResponse::Results(results)) => Ok(results),
            Some(SearchResponse::Error { status, message }) => {
                Err(RecipeApiError::ApiError { status, message })
            }
            None => Ok(Vec::new()),
        }
    }

    async fn recipe_information(
        &self,
        id: &RecipeId,
        servings: u32,
    ) -> Result<RecipeDetail, RecipeApiError> {
        self.detail_requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((id.clone(), servings));

        self.details
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| RecipeApiError::ApiError {
                status: 404,
                message: format!("FakeRecipeProvider: no detail registered for {}", id),
            })
    }
}
