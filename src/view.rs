//! SearchView: owns the UI state, turns user input into reducer events and
//! runs the network effect the reducer asks for.
//!
//! A submission is split in two. [`SearchView::begin_submit`] runs the
//! reducer and spawns the request as a tokio task; the task reports back
//! over a channel and [`SearchView::settle`] applies the answer. The view
//! stays usable in between: the query can be edited and the screen shows
//! the disabled submit control.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::client::SearchClient;
use crate::config::ViewConfig;
use crate::render::Screen;
use crate::state::{reduce, Effect, Event, Outcome, RequestId, UiState};

/// Keys the query field reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

/// Cancels whatever the owning view is waiting on and every later request.
/// Equivalent to unmounting the view.
#[derive(Debug, Clone)]
pub struct CancelHandle(CancellationToken);

impl CancelHandle {
    /// Abort the in-flight request; later requests settle as cancelled at once.
    pub fn cancel(&self) {
        self.0.cancel();
    }

    /// Whether the owning view has been cancelled or dropped.
    pub fn is_cancelled(&self) -> bool {
        self.0.is_cancelled()
    }
}

type Settlement = (RequestId, Outcome);

pub struct SearchView {
    config: ViewConfig,
    client: SearchClient,
    state: UiState,
    lifetime: CancellationToken,
    settled_tx: mpsc::UnboundedSender<Settlement>,
    settled_rx: mpsc::UnboundedReceiver<Settlement>,
}

impl SearchView {
    /// Mount a view posting to `config.endpoint` with its own HTTP client.
    pub fn new(config: ViewConfig) -> Self {
        let client = SearchClient::new(config.endpoint.clone());
        Self::with_client(config, client)
    }

    /// Mount a view on an existing client.
    pub fn with_client(config: ViewConfig, client: SearchClient) -> Self {
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();
        Self {
            config,
            client,
            state: UiState::new(),
            lifetime: CancellationToken::new(),
            settled_tx,
            settled_rx,
        }
    }

    /// Current UI state.
    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Configuration the view was mounted with.
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// What the view shows right now.
    pub fn screen(&self) -> Screen {
        Screen::build(&self.state, &self.config)
    }

    /// Handle that cancels this view's requests from another task.
    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle(self.lifetime.clone())
    }

    /// Replace the query text. Allowed while a request is pending.
    pub fn on_query_change(&mut self, text: impl Into<String>) {
        let effect = reduce(
            &mut self.state,
            Event::QueryChanged(text.into()),
            &self.config.error_message,
        );
        debug_assert!(effect.is_none());
    }

    /// Enter submits; everything else is ignored.
    pub async fn on_key(&mut self, key: Key) -> bool {
        match key {
            Key::Enter => self.on_submit().await,
            Key::Other => false,
        }
    }

    /// Submit the current query and wait for it to settle. Returns `false`
    /// when the submission was blocked (blank query or a request already
    /// pending).
    pub async fn on_submit(&mut self) -> bool {
        if self.begin_submit().is_none() {
            return false;
        }
        self.settle().await;
        true
    }

    /// Convenience for one-shot front-ends: type `query`, then press Enter.
    pub async fn submit_query(&mut self, query: impl Into<String>) -> bool {
        self.on_query_change(query);
        self.on_key(Key::Enter).await
    }

    /// Start a submission without waiting for it. Must be called inside a
    /// tokio runtime. Returns `None` when the submission was blocked.
    pub fn begin_submit(&mut self) -> Option<RequestId> {
        let Some(Effect::Search { id, query }) =
            reduce(&mut self.state, Event::Submit, &self.config.error_message)
        else {
            debug!("submission blocked");
            return None;
        };
        info!(request = id.get(), endpoint = %self.client.endpoint(), "search submitted");

        let client = self.client.clone();
        let lifetime = self.lifetime.clone();
        let settled_tx = self.settled_tx.clone();
        tokio::spawn(async move {
            let outcome = tokio::select! {
                biased;
                _ = lifetime.cancelled() => Outcome::Cancelled,
                response = client.search(&query) => match response {
                    Ok(result) => Outcome::Success(result),
                    Err(err) => {
                        debug!(request = id.get(), error = %err, "search failed");
                        Outcome::Failure
                    }
                },
            };
            // The receiver is gone once the view is dropped.
            let _ = settled_tx.send((id, outcome));
        });
        Some(id)
    }

    /// Wait until no request is pending, applying settlements as they
    /// arrive. Returns the id that settled, or `None` if nothing was pending.
    pub async fn settle(&mut self) -> Option<RequestId> {
        let pending = self.state.pending()?;
        while self.state.loading() {
            // The view holds a sender, so the channel never closes first.
            let Some(settlement) = self.settled_rx.recv().await else {
                break;
            };
            self.apply(settlement);
        }
        Some(pending)
    }

    /// Apply every settlement that has already arrived, without waiting.
    /// Returns `true` when the view is no longer loading.
    pub fn poll_settled(&mut self) -> bool {
        while let Ok(settlement) = self.settled_rx.try_recv() {
            self.apply(settlement);
        }
        !self.state.loading()
    }

    fn apply(&mut self, (id, outcome): Settlement) {
        info!(request = id.get(), outcome = outcome_name(&outcome), "search settled");
        reduce(
            &mut self.state,
            Event::Settled { id, outcome },
            &self.config.error_message,
        );
    }
}

impl Drop for SearchView {
    fn drop(&mut self) {
        self.lifetime.cancel();
    }
}

fn outcome_name(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::Success(_) => "success",
        Outcome::Failure => "failure",
        Outcome::Cancelled => "cancelled",
    }
}
