//! Change Notification Pipeline
//!
//! A single ordered pipeline for navigation-change events: the router's own
//! internal handler always runs to completion before any external handler
//! begins. The ordering is structural, not registration-order luck.

/// Handler invoked with the new raw absolute URL on every navigation event.
pub type NavigationHandler = Box<dyn FnMut(&str)>;

/// Subscription priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    /// The router's own location-refresh handler. At most one exists;
    /// subscribing again replaces it.
    Internal,
    /// Everything else (the mobile framework's hash-change logic and any
    /// further listeners), run after the internal handler in registration
    /// order.
    External,
}

/// Ordered collection of navigation subscribers.
#[derive(Default)]
pub struct NotificationPipeline {
    internal: Option<NavigationHandler>,
    external: Vec<NavigationHandler>,
}

impl NotificationPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler at the given priority.
    pub fn subscribe(&mut self, priority: Priority, handler: NavigationHandler) {
        match priority {
            Priority::Internal => {
                if self.internal.is_some() {
                    tracing::debug!("replacing internal navigation handler");
                }
                self.internal = Some(handler);
            }
            Priority::External => self.external.push(handler),
        }
    }

    /// Whether an internal handler is registered.
    pub fn has_internal(&self) -> bool {
        self.internal.is_some()
    }

    /// Number of external subscribers.
    pub fn external_count(&self) -> usize {
        self.external.len()
    }

    /// Dispatch one navigation event to all subscribers.
    ///
    /// The internal handler completes before the first external handler
    /// starts. A missing internal handler is skipped, never an error: the
    /// router may not have registered yet when the first event fires.
    pub fn dispatch(&mut self, url: &str) {
        match &mut self.internal {
            Some(handler) => handler(url),
            None => tracing::debug!(%url, "navigation event with no internal handler"),
        }
        for handler in &mut self.external {
            handler(url);
        }
    }
}
