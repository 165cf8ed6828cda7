//! plainloc Router - Plain-URL Location Service
//!
//! Makes a hashbang-based SPA router treat plain absolute URLs as the
//! canonical address representation, while keeping a mobile widget
//! framework's own hash-change handling synchronized behind it. One
//! notification pipeline exists for navigation events, and the router's
//! handler always observes the new URL before any external listener does.

mod adapter;
mod host;
mod location;
mod pipeline;
mod provider;

pub use adapter::HistoryAdapter;
pub use host::{HashChangeDispatcher, HostRouter, SharedLocation};
pub use location::{LocationState, SessionOrigin};
pub use pipeline::{NavigationHandler, NotificationPipeline, Priority};
pub use provider::PlainLocationProvider;

pub use plainloc_url::MalformedUrlError;
