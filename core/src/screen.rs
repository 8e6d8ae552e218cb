//! View-side triggers over the load lifecycle.
//!
//! # Design
//! `CharacterScreen` is what a rendering layer holds: it owns the controller
//! and a `Transport`, runs each fetch attempt to settlement, and exposes the
//! resulting state read-only. One request is in flight at a time; hosts that
//! drive `start_load`/`finish_load` themselves are covered by the
//! controller's generation guard instead.

use crate::client::CharacterClient;
use crate::controller::{ListLoadController, ListLoadState};
use crate::http::Transport;
use crate::types::ListQuery;

/// A character-list view bound to a transport.
#[derive(Debug)]
pub struct CharacterScreen<T> {
    controller: ListLoadController,
    transport: T,
    query: ListQuery,
}

impl<T: Transport> CharacterScreen<T> {
    /// Screen over the default first page, ordered by id ascending.
    pub fn new(base_url: &str, transport: T) -> Self {
        Self::with_query(base_url, transport, ListQuery::default())
    }

    pub fn with_query(base_url: &str, transport: T, query: ListQuery) -> Self {
        Self {
            controller: ListLoadController::new(CharacterClient::new(base_url)),
            transport,
            query,
        }
    }

    /// Read-only view of the current state for the rendering layer.
    pub fn state(&self) -> &ListLoadState {
        self.controller.state()
    }

    /// Invoked when the screen becomes visible; always fetches.
    pub fn on_view_enter(&mut self) {
        self.load();
    }

    /// Invoked on a pull-to-refresh gesture. `complete` is called exactly
    /// once after the fetch settles, on both the success and failure paths,
    /// so the gesture UI can stop its spinner.
    pub fn on_refresh<F: FnOnce()>(&mut self, complete: F) {
        self.load();
        complete();
    }

    fn load(&mut self) {
        let (ticket, request) = self.controller.start_load(&self.query);
        let outcome = self.transport.execute(&request);
        self.controller.finish_load(ticket, outcome);
    }
}
