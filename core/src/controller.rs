//! Load lifecycle state machine for the character-list view.
//!
//! # Design
//! The controller owns the only mutable state of the view and never performs
//! I/O. `start_load` hands the host an `HttpRequest` plus a
//! generation-stamped `LoadTicket`; the host executes the request however it
//! likes and reports back through `finish_load`, which applies the outcome
//! in a single step, so the rendering layer never observes a partially
//! updated state. A ticket older than the latest `start_load` is discarded:
//! when attempts overlap, the last one issued wins regardless of which
//! completes first.

use crate::client::CharacterClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Character, ListQuery};

/// Fixed message shown to the user when a fetch attempt fails, whatever the
/// underlying cause.
pub const LOAD_ERROR_MESSAGE: &str = "Could not load the character list.";

/// Where the view currently is in its load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// Constructed, nothing fetched yet. Distinct from a loaded empty list.
    Idle,
    /// A fetch attempt is in flight.
    Loading,
    /// The most recent attempt succeeded; the list may legitimately be empty.
    Loaded,
    /// The most recent attempt failed; the error message is set.
    Failed,
}

/// The view state read by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListLoadState {
    characters: Vec<Character>,
    phase: LoadPhase,
    error_message: Option<String>,
}

impl ListLoadState {
    fn new() -> Self {
        Self {
            characters: Vec::new(),
            phase: LoadPhase::Idle,
            error_message: None,
        }
    }

    /// Characters in server response order.
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// True exactly while a fetch attempt is in flight.
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Set only after a failed attempt; never set while loading.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}

/// Pairs a fetch outcome back to the `start_load` that issued it.
#[derive(Debug)]
pub struct LoadTicket {
    generation: u64,
}

/// Owns the load lifecycle: one state object, one generation counter.
#[derive(Debug)]
pub struct ListLoadController {
    client: CharacterClient,
    state: ListLoadState,
    generation: u64,
}

impl ListLoadController {
    pub fn new(client: CharacterClient) -> Self {
        Self {
            client,
            state: ListLoadState::new(),
            generation: 0,
        }
    }

    /// Read-only view of the current state for the rendering layer.
    pub fn state(&self) -> &ListLoadState {
        &self.state
    }

    /// Begin a fetch attempt: clear any previous error, mark the state as
    /// loading, and hand the host the request to execute. The previous
    /// character list stays in place while the fetch is in flight.
    pub fn start_load(&mut self, query: &ListQuery) -> (LoadTicket, HttpRequest) {
        self.generation += 1;
        self.state.error_message = None;
        self.state.phase = LoadPhase::Loading;
        let ticket = LoadTicket {
            generation: self.generation,
        };
        (ticket, self.client.build_list_characters(query))
    }

    /// Apply the outcome of a fetch attempt in one step.
    ///
    /// If a newer `start_load` has been issued since `ticket` was handed out,
    /// the outcome is stale and is discarded without touching the state. On
    /// success the character list is replaced by the response sequence; on
    /// any failure the list is cleared and the fixed error message is set.
    /// Both paths leave the loading phase.
    pub fn finish_load(&mut self, ticket: LoadTicket, outcome: Result<HttpResponse, ApiError>) {
        if ticket.generation != self.generation {
            return;
        }
        let parsed = outcome.and_then(|response| self.client.parse_list_characters(response));
        match parsed {
            Ok(items) => {
                self.state.characters = items;
                self.state.phase = LoadPhase::Loaded;
                self.state.error_message = None;
            }
            Err(_) => {
                self.state.characters = Vec::new();
                self.state.phase = LoadPhase::Failed;
                self.state.error_message = Some(LOAD_ERROR_MESSAGE.to_string());
            }
        }
    }
}
