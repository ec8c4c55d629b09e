//! Async driver around [`Dashboard`].
//!
//! Every search-text change spawns one fetch task. A task first waits out the
//! debounce interval and gives up if a newer change arrived meanwhile; once
//! the request is sent it is never cancelled. Results are applied in the
//! order they arrive, so a slow earlier request can overwrite a faster later
//! one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::builder::SessionBuilder;
use crate::dashboard::{Dashboard, DashboardView};
use crate::error::{DashboardError, FetchError};
use crate::favorites::Toggled;
use crate::model::{Recipe, RecipeDetail, RecipeId};
use crate::route::Route;
use crate::source::RecipeSource;

enum FetchMessage {
    Completed {
        query: String,
        result: Result<Vec<Recipe>, FetchError>,
    },
    Superseded,
}

/// Reports the outcome of one fetch task exactly once.
///
/// If the task unwinds or is aborted before reporting, the drop sends an
/// [`FetchError::Interrupted`] failure so the session never waits on it.
struct Reporter {
    tx: mpsc::UnboundedSender<FetchMessage>,
    query: String,
    reported: bool,
}

impl Reporter {
    /// Returns `false` when the session is gone and the result is discarded
    fn complete(mut self, result: Result<Vec<Recipe>, FetchError>) -> bool {
        self.reported = true;
        let query = std::mem::take(&mut self.query);
        self.tx
            .send(FetchMessage::Completed { query, result })
            .is_ok()
    }

    fn supersede(mut self) -> bool {
        self.reported = true;
        self.tx.send(FetchMessage::Superseded).is_ok()
    }
}

impl Drop for Reporter {
    fn drop(&mut self) {
        if self.reported {
            return;
        }
        warn!("Search for '{}' ended without a response", self.query);
        let _ = self.tx.send(FetchMessage::Completed {
            query: std::mem::take(&mut self.query),
            result: Err(FetchError::Interrupted),
        });
    }
}

/// Outcome of waiting for one in-flight fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    /// A response arrived and was applied
    Applied { query: String, success: bool },
    /// The fetch was dropped during debounce in favor of a newer search
    Skipped,
}

pub struct DashboardSession {
    dashboard: Dashboard,
    source: Arc<dyn RecipeSource>,
    fallback_query: String,
    debounce: Duration,
    generation: Arc<AtomicU64>,
    in_flight: usize,
    tasks: Vec<JoinHandle<bool>>,
    tx: mpsc::UnboundedSender<FetchMessage>,
    rx: mpsc::UnboundedReceiver<FetchMessage>,
}

impl DashboardSession {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::default()
    }

    pub(crate) fn new(
        source: Arc<dyn RecipeSource>,
        fallback_query: String,
        debounce: Duration,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            dashboard: Dashboard::new(),
            source,
            fallback_query,
            debounce,
            generation: Arc::new(AtomicU64::new(0)),
            in_flight: 0,
            tasks: Vec::new(),
            tx,
            rx,
        }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn view(&self) -> DashboardView<'_> {
        self.dashboard.view()
    }

    pub fn favorites_count(&self) -> watch::Receiver<usize> {
        self.dashboard.favorites_count()
    }

    /// Number of fetches spawned but not yet reported back
    pub fn pending(&self) -> usize {
        self.in_flight
    }

    /// Issue the initial fetch for the current (possibly empty) search text.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) {
        self.spawn_fetch();
    }

    /// Update the search text, spawning a fetch if it changed.
    ///
    /// Must be called from within a tokio runtime.
    pub fn set_search_text(&mut self, text: impl Into<String>) -> bool {
        let changed = self.dashboard.set_search_text(text);
        if changed {
            self.spawn_fetch();
        }
        changed
    }

    pub fn set_cuisine_filter<S: Into<String>>(&mut self, filter: Option<S>) {
        self.dashboard.set_cuisine_filter(filter);
    }

    pub fn toggle_show_favorites(&mut self) -> bool {
        self.dashboard.toggle_show_favorites()
    }

    pub fn toggle_favorite(&mut self, id: RecipeId) -> Result<Toggled, DashboardError> {
        self.dashboard
            .toggle_favorite_by_id(id)
            .ok_or(DashboardError::NotFound(id))
    }

    /// Toggle several favorites, returning the ids that could not be resolved
    pub fn toggle_favorites<I>(&mut self, ids: I) -> Vec<RecipeId>
    where
        I: IntoIterator<Item = RecipeId>,
    {
        ids.into_iter()
            .filter(|&id| self.dashboard.toggle_favorite_by_id(id).is_none())
            .collect()
    }

    /// Wait for the next fetch to report back and apply it.
    ///
    /// Returns `None` when nothing is in flight.
    pub async fn next_update(&mut self) -> Option<Update> {
        if self.in_flight == 0 {
            return None;
        }
        let message = self.rx.recv().await?;
        self.in_flight -= 1;

        match message {
            FetchMessage::Completed { query, result } => {
                let success = result.is_ok();
                self.dashboard.apply_fetch(result);
                Some(Update::Applied { query, success })
            }
            FetchMessage::Superseded => Some(Update::Skipped),
        }
    }

    /// Apply every in-flight fetch, in arrival order
    pub async fn settle(&mut self) {
        while self.next_update().await.is_some() {}
    }

    /// Give up the session, handing back the fetch tasks still running.
    ///
    /// Each task resolves to `true` if its result reached the session; once
    /// the session is dropped every late result resolves to `false`.
    pub fn into_running_tasks(mut self) -> Vec<JoinHandle<bool>> {
        self.tasks.retain(|task| !task.is_finished());
        std::mem::take(&mut self.tasks)
    }

    /// Resolve a recipe for the detail view.
    ///
    /// The in-memory list and favorites are consulted first; only unknown ids
    /// go to the remote lookup.
    pub async fn recipe_detail(&self, id: RecipeId) -> Result<RecipeDetail, DashboardError> {
        if let Some(recipe) = self.dashboard.lookup(id) {
            debug!("Recipe {} resolved from memory", id);
            return Ok(RecipeDetail::from(recipe.clone()));
        }
        info!("Looking up recipe {} via {}", id, self.source.source_name());
        Ok(self.source.recipe_by_id(id).await?)
    }

    /// Resolve a detail route; `/` has no detail to show
    pub async fn open(&self, route: &Route) -> Result<RecipeDetail, DashboardError> {
        match route {
            Route::Recipe(id) => self.recipe_detail(*id).await,
            Route::Dashboard => Err(DashboardError::NotARecipePage(route.to_string())),
        }
    }

    fn spawn_fetch(&mut self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let latest = Arc::clone(&self.generation);
        let source = Arc::clone(&self.source);
        let debounce = self.debounce;
        let query = self
            .dashboard
            .query()
            .effective_search_term(&self.fallback_query)
            .to_string();
        let reporter = Reporter {
            tx: self.tx.clone(),
            query: query.clone(),
            reported: false,
        };

        self.in_flight += 1;
        self.tasks.retain(|task| !task.is_finished());
        self.tasks.push(tokio::spawn(async move {
            if !debounce.is_zero() {
                sleep(debounce).await;
                if latest.load(Ordering::SeqCst) != generation {
                    debug!("Search for '{}' superseded before sending", query);
                    return reporter.supersede();
                }
            }

            debug!("Searching {} for '{}'", source.source_name(), query);
            let result = source.search(&query).await;
            let delivered = reporter.complete(result);
            if !delivered {
                debug!("Session gone, discarding results for '{}'", query);
            }
            delivered
        }));
    }
}
