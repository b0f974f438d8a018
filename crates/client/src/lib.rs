//! Client for the movie collection API.
//!
//! [`state::CollectionState`] holds everything the UI shows and exposes one
//! transition per user action; [`app::MovieApp`] pairs it with
//! [`api::MovieApi`] and decides which transition a server reply triggers.

pub mod api;
pub mod app;
pub mod command;
pub mod error;
pub mod form;
pub mod render;
pub mod state;
