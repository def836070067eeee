//! Free-text dish search.
//!
//! A query matches an item when it appears, case-insensitively, in the
//! item's name, restaurant, or category. Results keep catalog order.
//!
//! [`SearchDispatcher`] runs each search behind a simulated latency. Only
//! one search is ever pending: dispatching a new one aborts the previous
//! task and bumps the generation, so a superseded result is never
//! delivered, and any that slips through is recognizably stale.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::error::ValidationError;
use crate::models::MenuItem;
use crate::tui::Message;

/// Rejects empty and whitespace-only queries.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyQuery`] when nothing would be searched.
pub fn validate_query(query: &str) -> Result<&str, ValidationError> {
    if query.trim().is_empty() {
        Err(ValidationError::EmptyQuery)
    } else {
        Ok(query)
    }
}

/// Returns whether `item` matches an already lower-cased needle.
pub fn matches(item: &MenuItem, needle: &str) -> bool {
    item.name.to_lowercase().contains(needle)
        || item.restaurant.to_lowercase().contains(needle)
        || item.category.to_lowercase().contains(needle)
}

/// Filters `items` down to those matching `query`, preserving order.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyQuery`] for a blank query; matching
/// never runs in that case.
pub fn search(items: &[MenuItem], query: &str) -> Result<Vec<MenuItem>, ValidationError> {
    let needle = validate_query(query)?.to_lowercase();
    Ok(items
        .iter()
        .filter(|item| matches(item, &needle))
        .cloned()
        .collect())
}

/// Results of one dispatched search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Generation assigned at dispatch; only the latest is current.
    pub generation: u64,
    pub query: String,
    pub results: Vec<MenuItem>,
}

/// Runs searches asynchronously, keeping at most one in flight.
pub struct SearchDispatcher {
    catalog: Arc<Vec<MenuItem>>,
    delay: Duration,
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

impl SearchDispatcher {
    /// Creates a dispatcher over `catalog` with a fixed simulated latency.
    pub fn new(catalog: Vec<MenuItem>, delay: Duration) -> Self {
        Self {
            catalog: Arc::new(catalog),
            delay,
            generation: 0,
            pending: None,
        }
    }

    /// Generation of the most recently dispatched search (0 before any).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts a search, replacing any search still pending.
    ///
    /// The outcome arrives on `tx` as [`Message::SearchCompleted`] after the
    /// configured delay. Returns the generation assigned to this search.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyQuery`] for a blank query, in which
    /// case the pending search (if any) is left untouched.
    pub fn dispatch(
        &mut self,
        query: &str,
        tx: mpsc::UnboundedSender<Message>,
    ) -> Result<u64, ValidationError> {
        let query = validate_query(query)?.to_string();

        if let Some(previous) = self.pending.take()
            && !previous.is_finished()
        {
            previous.abort();
            debug!(superseded = self.generation, "Search superseded");
        }

        self.generation += 1;
        let generation = self.generation;
        let catalog = Arc::clone(&self.catalog);
        let delay = self.delay;

        info!(generation, query = %query, "Search dispatched");
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Validated above, so this cannot fail.
            let results = search(&catalog, &query).unwrap_or_default();
            debug!(generation, found = results.len(), "Search completed");
            let _ = tx.send(Message::SearchCompleted(SearchOutcome {
                generation,
                query,
                results,
            }));
        }));

        Ok(generation)
    }
}

impl Drop for SearchDispatcher {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}
