//! Plant-care chat assistant.
//!
//! Two halves: the [`widget`] module is a headless chat-widget controller
//! (visibility, pending guard, one send/receive cycle) driven through an
//! injected view and transport; the rest of the crate is the axum service
//! answering its `POST /chatbot` requests with AI advice or locally
//! generated care tips.

pub mod config;
pub mod error;
pub mod message;
pub mod routes;
pub mod services;
pub mod state;
pub mod widget;
