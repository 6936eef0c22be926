//! Book Relay API Library
//!
//! This library provides the core functionality for the Book Relay API,
//! a pass-through proxy in front of an upstream book catalog service:
//! domain types, the forwarding client port and its HTTP adapter, and
//! the inbound HTTP surface.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
