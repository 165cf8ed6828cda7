//! History Adapter
//!
//! Wraps the environment's navigation-change notifications into exactly one
//! pipeline, with the router's handler ordered ahead of every external
//! listener.

use crate::host::HostRouter;
use crate::pipeline::{NavigationHandler, NotificationPipeline, Priority};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdapterState {
    Uninitialized,
    Installed,
}

/// Owns the notification pipeline and its install-once lifecycle.
pub struct HistoryAdapter {
    state: AdapterState,
    pipeline: NotificationPipeline,
}

impl Default for HistoryAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryAdapter {
    pub fn new() -> Self {
        Self {
            state: AdapterState::Uninitialized,
            pipeline: NotificationPipeline::new(),
        }
    }

    /// Install over the router's navigation substrate.
    ///
    /// Mock environments have no real navigation events, so installation is
    /// skipped entirely and the adapter stays uninitialized. Otherwise the
    /// router's registered handler moves into the pipeline's internal slot.
    ///
    /// Idempotent: a repeat call while installed only forwards a newly
    /// registered handler into the same single slot, so the handler runs
    /// exactly once per event no matter how often this is called.
    pub fn install_once(&mut self, router: &mut dyn HostRouter) {
        if router.is_mock() {
            tracing::debug!("mock environment, skipping history adapter install");
            return;
        }

        if let Some(handler) = router.take_url_change_handler() {
            self.pipeline.subscribe(Priority::Internal, handler);
        }

        if self.state == AdapterState::Uninitialized {
            self.state = AdapterState::Installed;
            tracing::info!("history adapter installed");
        }
    }

    /// Register an external listener, run after the internal handler.
    pub fn subscribe_external(&mut self, handler: NavigationHandler) {
        self.pipeline.subscribe(Priority::External, handler);
    }

    /// Entry point for environment navigation events.
    ///
    /// The router's handler (if registered) completes first; a never
    /// registered handler is a guarded no-op, not an error.
    pub fn notify(&mut self, url: &str) {
        self.pipeline.dispatch(url);
    }

    pub fn is_installed(&self) -> bool {
        self.state == AdapterState::Installed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::SharedLocation;
    use std::sync::{Arc, Mutex};

    struct FakeRouter {
        mock: bool,
        handler: Option<NavigationHandler>,
    }

    impl HostRouter for FakeRouter {
        fn is_mock(&self) -> bool {
            self.mock
        }
        fn current_url(&self) -> String {
            "http://example.com/".to_string()
        }
        fn take_url_change_handler(&mut self) -> Option<NavigationHandler> {
            self.handler.take()
        }
        fn force_hash_substrate(&mut self) {}
        fn attach_location(&mut self, _location: SharedLocation) {}
        fn set_link_rewriting(&mut self, _enabled: bool) {}
    }

    #[test]
    fn test_install_captures_handler() {
        let calls = Arc::new(Mutex::new(0));
        let c = calls.clone();
        let mut router = FakeRouter {
            mock: false,
            handler: Some(Box::new(move |_| *c.lock().unwrap() += 1)),
        };

        let mut adapter = HistoryAdapter::new();
        adapter.install_once(&mut router);
        assert!(adapter.is_installed());

        adapter.notify("http://example.com/a");
        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[test]
    fn test_mock_environment_skipped() {
        let mut router = FakeRouter {
            mock: true,
            handler: Some(Box::new(|_| panic!("must not be captured"))),
        };

        let mut adapter = HistoryAdapter::new();
        adapter.install_once(&mut router);
        assert!(!adapter.is_installed());

        // Dispatching is still safe, just empty.
        adapter.notify("http://example.com/a");
    }

    #[test]
    fn test_repeated_install_keeps_handler_single() {
        let calls = Arc::new(Mutex::new(0));
        let c = calls.clone();
        let mut router = FakeRouter {
            mock: false,
            handler: Some(Box::new(move |_| *c.lock().unwrap() += 1)),
        };

        let mut adapter = HistoryAdapter::new();
        adapter.install_once(&mut router);
        adapter.install_once(&mut router);
        adapter.install_once(&mut router);

        adapter.notify("http://example.com/a");
        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[test]
    fn test_notify_without_registered_handler() {
        let mut router = FakeRouter {
            mock: false,
            handler: None,
        };

        let mut adapter = HistoryAdapter::new();
        adapter.install_once(&mut router);
        assert!(adapter.is_installed());

        // No handler was ever registered; must not panic.
        adapter.notify("http://example.com/a");
    }
}
