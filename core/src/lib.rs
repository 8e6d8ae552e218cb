//! Synchronous client core for a paginated character-list API.
//!
//! # Overview
//! Implements the fetch lifecycle of a single list view: build the list
//! request, parse the response, and track the idle/loading/loaded/failed
//! state the rendering layer draws from — without the core ever touching
//! the network (host-does-IO pattern).
//!
//! # Design
//! - `CharacterClient` is stateless — it holds only `base_url`. The list
//!   operation is split into `build_list_characters` (produces a request)
//!   and `parse_list_characters` (consumes a response), so the I/O boundary
//!   is explicit.
//! - `ListLoadController` owns the view state and applies each fetch outcome
//!   in a single step; overlapping attempts are resolved by generation
//!   number, with the latest one issued winning whatever the completion
//!   order.
//! - `CharacterScreen` pairs the controller with a `Transport` to provide
//!   the view-side triggers (view entry, pull-to-refresh).
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod screen;
pub mod types;

pub use client::CharacterClient;
pub use controller::{ListLoadController, ListLoadState, LoadPhase, LoadTicket, LOAD_ERROR_MESSAGE};
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse, Transport};
pub use screen::CharacterScreen;
pub use types::{Character, CharacterPage, ListQuery, OrderDirection};
