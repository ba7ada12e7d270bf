//! Debounced address search
//!
//! A background task owns the debounce loop: keystrokes arrive over an
//! unbounded channel, candidate lists leave over a watch channel. A new
//! keystroke resets the pending timer, so bursts coalesce into a single
//! geocoder call for the final query. Queries below the minimum length
//! never hit the network and clear the results immediately.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::geocode::{Geocoder, Place};

/// Quiet interval before a query is issued
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Queries shorter than this never issue a network call
pub const MIN_QUERY_LEN: usize = 3;

/// Maximum number of candidates shown
pub const MAX_RESULTS: usize = 5;

/// Handle to the debounced search task
pub struct SearchBar {
    queries: mpsc::UnboundedSender<String>,
    results: watch::Receiver<Vec<Place>>,
    task: JoinHandle<()>,
}

impl SearchBar {
    /// Spawn the debounce loop over the given geocoder
    pub fn spawn(geocoder: Arc<dyn Geocoder>) -> Self {
        let (query_tx, query_rx) = mpsc::unbounded_channel();
        let (results_tx, results_rx) = watch::channel(Vec::new());
        let task = tokio::spawn(debounce_loop(geocoder, query_rx, results_tx));
        Self {
            queries: query_tx,
            results: results_rx,
            task,
        }
    }

    /// Record the current query text
    pub fn set_query(&self, query: &str) {
        // The task only stops when this handle drops, so the send cannot fail
        let _ = self.queries.send(query.to_string());
    }

    /// Clear the query, emptying the candidate list
    pub fn clear(&self) {
        self.set_query("");
    }

    /// Current candidate list
    pub fn results(&self) -> Vec<Place> {
        self.results.borrow().clone()
    }

    /// Receiver for observing candidate list updates
    pub fn subscribe(&self) -> watch::Receiver<Vec<Place>> {
        self.results.clone()
    }
}

impl Drop for SearchBar {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn debounce_loop(
    geocoder: Arc<dyn Geocoder>,
    mut queries: mpsc::UnboundedReceiver<String>,
    results: watch::Sender<Vec<Place>>,
) {
    let mut pending: Option<String> = None;
    let sleep = tokio::time::sleep(Duration::ZERO);
    tokio::pin!(sleep);

    loop {
        tokio::select! {
            maybe = queries.recv() => match maybe {
                None => break,
                Some(query) => {
                    if query.chars().count() < MIN_QUERY_LEN {
                        pending = None;
                        let _ = results.send(Vec::new());
                    } else {
                        pending = Some(query);
                        sleep.as_mut().reset(Instant::now() + SEARCH_DEBOUNCE);
                    }
                }
            },
            () = &mut sleep, if pending.is_some() => {
                if let Some(query) = pending.take() {
                    let mut found = match geocoder.search(&query).await {
                        Ok(found) => found,
                        Err(e) => {
                            tracing::warn!("Address search failed for {:?}: {}", query, e);
                            Vec::new()
                        }
                    };
                    found.truncate(MAX_RESULTS);
                    let _ = results.send(found);
                }
            }
        }
    }
}
