//! UI state of the search view and the reducer that drives it.
//!
//! Every transition goes through [`reduce`], which is pure: it mutates the
//! state and returns the side effect (if any) the caller has to perform.
//! A submission leaves through exactly one of four exits: blocked, success,
//! failure, or cancelled.

use crate::model::SearchResult;

/// Identifies one accepted submission within a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl RequestId {
    /// Raw sequence number, for logging.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Everything the view renders from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiState {
    pub query: String,
    pub result: Option<SearchResult>,
    pub error: Option<String>,
    pending: Option<RequestId>,
    next_id: u64,
}

impl UiState {
    /// State of a freshly mounted view: empty query, nothing shown.
    pub fn new() -> Self {
        Self::default()
    }

    /// True only while a request is in flight.
    pub fn loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Id of the in-flight request, if any.
    pub fn pending(&self) -> Option<RequestId> {
        self.pending
    }

    /// Whether a submit would be accepted right now.
    pub fn can_submit(&self) -> bool {
        !self.loading() && !self.query.trim().is_empty()
    }
}

/// How a request ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(SearchResult),
    /// Bad status, transport error or malformed body; deliberately opaque.
    Failure,
    /// The view gave up waiting (unmounted or explicitly cancelled).
    Cancelled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    QueryChanged(String),
    Submit,
    Settled { id: RequestId, outcome: Outcome },
}

/// Work the caller must do after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Post `query` to the backend and report back with `Event::Settled { id, .. }`.
    Search { id: RequestId, query: String },
}

/// Apply `event` to `state`. `error_message` is what a failure displays.
pub fn reduce(state: &mut UiState, event: Event, error_message: &str) -> Option<Effect> {
    match event {
        Event::QueryChanged(text) => {
            state.query = text;
            None
        }
        Event::Submit => {
            if !state.can_submit() {
                return None;
            }
            state.next_id += 1;
            let id = RequestId(state.next_id);
            state.error = None;
            state.pending = Some(id);
            Some(Effect::Search {
                id,
                query: state.query.clone(),
            })
        }
        Event::Settled { id, outcome } => {
            // Stale settlements must not touch newer state.
            if state.pending != Some(id) {
                return None;
            }
            match outcome {
                Outcome::Success(result) => state.result = Some(result),
                Outcome::Failure => state.error = Some(error_message.to_string()),
                Outcome::Cancelled => {}
            }
            state.pending = None;
            None
        }
    }
}
