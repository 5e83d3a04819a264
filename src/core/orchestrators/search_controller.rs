use std::sync::Arc;
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};

use crate::core::interfaces::adapters::ImageSearchProvider;
use crate::core::models::ImageResult;
use crate::core::orchestrators::debounce_timer::DebounceTimer;
use crate::global_constants;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Searching,
}

/// Outcome of a keystroke.
pub enum QueryDispatch {
    /// Blank input; results were cleared without a request.
    Cleared,
    /// Resolves to the query once input has been quiet for the debounce
    /// delay, or to `None` when a later keystroke cancelled it.
    Scheduled(BoxFuture<'static, Option<String>>),
}

#[derive(Debug, Clone)]
pub struct SearchCompletion {
    pub generation: u64,
    pub results: Vec<ImageResult>,
}

pub struct SearchController {
    search_provider: Arc<dyn ImageSearchProvider>,
    debounce_timer: DebounceTimer,
    query: String,
    results: Vec<ImageResult>,
    phase: SearchPhase,
    generation: u64,
}

impl SearchController {
    pub fn build(search_provider: Arc<dyn ImageSearchProvider>) -> Self {
        Self {
            search_provider,
            debounce_timer: DebounceTimer::new(Duration::from_millis(
                global_constants::SEARCH_DEBOUNCE_MS,
            )),
            query: String::new(),
            results: Vec::new(),
            phase: SearchPhase::Idle,
            generation: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[ImageResult] {
        &self.results
    }

    pub fn result_at(&self, index: usize) -> Option<&ImageResult> {
        self.results.get(index)
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Searching
    }

    pub fn handle_query_changed(&mut self, text: String) -> QueryDispatch {
        self.query = text;

        if self.query.trim().is_empty() {
            log::debug!("[SEARCH] Blank query, clearing results");
            self.debounce_timer.cancel();
            self.generation += 1;
            self.results = Vec::new();
            self.phase = SearchPhase::Idle;
            return QueryDispatch::Cleared;
        }

        let query = self.query.clone();
        let tick = self.debounce_timer.schedule();

        QueryDispatch::Scheduled(
            async move {
                if tick.await {
                    Some(query)
                } else {
                    None
                }
            }
            .boxed(),
        )
    }

    /// Starts a search for a query whose debounce elapsed. Returns `None`
    /// when the input has moved on since the tick was scheduled.
    pub fn handle_debounce_elapsed(
        &mut self,
        query: String,
    ) -> Option<BoxFuture<'static, SearchCompletion>> {
        if query != self.query {
            log::debug!("[SEARCH] Ignoring stale debounce for '{}'", query);
            return None;
        }

        Some(self.begin_search(query))
    }

    pub fn begin_search(&mut self, query: String) -> BoxFuture<'static, SearchCompletion> {
        self.generation += 1;
        self.phase = SearchPhase::Searching;

        let generation = self.generation;
        let search_provider = Arc::clone(&self.search_provider);

        log::info!("[SEARCH] Searching images for '{}'", query);

        async move {
            let results = match search_provider.search_images(&query).await {
                Ok(results) => {
                    log::info!("[SEARCH] Received {} results", results.len());
                    results
                }
                Err(e) => {
                    log::error!("[SEARCH] Error searching images: {}", e);
                    Vec::new()
                }
            };

            SearchCompletion {
                generation,
                results,
            }
        }
        .boxed()
    }

    /// Applies a finished search. Returns `false` when a newer search or a
    /// cleared query superseded it.
    pub fn complete_search(&mut self, completion: SearchCompletion) -> bool {
        if completion.generation != self.generation {
            log::debug!(
                "[SEARCH] Dropping stale completion (generation {}, current {})",
                completion.generation,
                self.generation
            );
            return false;
        }

        self.results = completion.results;
        self.phase = SearchPhase::Idle;
        true
    }

    pub fn dispose(&mut self) {
        log::debug!("[SEARCH] Disposing controller");
        self.debounce_timer.cancel();
    }
}
