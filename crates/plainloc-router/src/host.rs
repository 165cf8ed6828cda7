//! Collaborator Contracts
//!
//! Seams toward the host SPA router and the mobile widget framework. The
//! core never touches either directly; everything goes through these traits.

use crate::location::LocationState;
use crate::pipeline::NavigationHandler;
use std::sync::{Arc, Mutex};

/// The single location instance shared between the router, the adapter, and
/// application code.
pub type SharedLocation = Arc<Mutex<LocationState>>;

/// Extension points the host router must expose.
pub trait HostRouter {
    /// True when this router is backed by a test double with no real
    /// navigation events. Installation is skipped for such environments.
    fn is_mock(&self) -> bool;

    /// The environment's current raw absolute URL.
    fn current_url(&self) -> String;

    /// Hand over the navigation-change handler the router registered, if
    /// any. Taking it keeps the handler off the router's normal binding
    /// path, so it fires only through the pipeline.
    fn take_url_change_handler(&mut self) -> Option<NavigationHandler>;

    /// Skip history-API navigation and use the hash-based service as the
    /// substrate.
    fn force_hash_substrate(&mut self);

    /// Replace the router's URL parse/compose internals with the shared
    /// location state.
    fn attach_location(&mut self, location: SharedLocation);

    /// Enable or disable automatic rewriting of in-page link clicks into
    /// router navigations.
    fn set_link_rewriting(&mut self, enabled: bool);
}

/// The mobile widget framework's internal hash-change entry point. The
/// provider subscribes it as an external pipeline listener, so it always
/// observes a location state the router has already refreshed.
pub trait HashChangeDispatcher {
    fn dispatch_hash_change(&mut self, url: &str);
}
