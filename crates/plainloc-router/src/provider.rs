//! Router Integration Shim
//!
//! One-time wiring at application-startup configuration time: replaces the
//! host router's hashbang behavior with plain-URL behavior and puts the
//! history adapter over its navigation substrate.

use crate::adapter::HistoryAdapter;
use crate::host::{HashChangeDispatcher, HostRouter, SharedLocation};
use crate::location::LocationState;
use plainloc_url::MalformedUrlError;
use std::sync::{Arc, Mutex};

/// Configuration surface of the core: the plain-URL mode toggle, enabled by
/// default once the shim is loaded.
pub struct PlainLocationProvider {
    plain_mode: bool,
}

impl Default for PlainLocationProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PlainLocationProvider {
    pub fn new() -> Self {
        Self { plain_mode: true }
    }

    pub fn plain_mode(&self) -> bool {
        self.plain_mode
    }

    pub fn set_plain_mode(&mut self, enabled: bool) {
        self.plain_mode = enabled;
    }

    /// Wire plain-URL mode into the router.
    ///
    /// With `plain_mode` off this does nothing and returns `Ok(None)`; the
    /// router's default construction path stays untouched. With it on, the
    /// router is forced onto its hash substrate, the shared location state
    /// is created and seeded from the environment's current URL, link
    /// rewriting is disabled, the history adapter is installed, and the
    /// mobile framework's dispatcher is subscribed behind the router's own
    /// handler.
    ///
    /// A malformed current URL propagates as an error; no default is
    /// substituted.
    pub fn install<R, M>(
        &self,
        router: &mut R,
        adapter: &mut HistoryAdapter,
        mobile: Arc<Mutex<M>>,
    ) -> Result<Option<SharedLocation>, MalformedUrlError>
    where
        R: HostRouter,
        M: HashChangeDispatcher + 'static,
    {
        if !self.plain_mode {
            tracing::debug!("plain-URL mode disabled, leaving router untouched");
            return Ok(None);
        }

        router.force_hash_substrate();

        let location: SharedLocation = Arc::new(Mutex::new(LocationState::new()));
        {
            let mut state = location.lock().unwrap();
            state.apply_absolute_url(&router.current_url())?;
            state.disable_link_rewriting();
        }
        router.set_link_rewriting(false);
        router.attach_location(location.clone());

        // A test double has no real navigation events; the location service
        // still works, but no adapter wiring happens at all.
        if router.is_mock() {
            tracing::debug!("mock environment, skipping history adapter wiring");
        } else {
            adapter.install_once(router);
            adapter.subscribe_external(Box::new(move |url| {
                mobile.lock().unwrap().dispatch_hash_change(url);
            }));
        }

        tracing::info!(
            url = %location.lock().unwrap().absolute_url(),
            "plain-URL mode installed"
        );
        Ok(Some(location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::NavigationHandler;

    struct NullRouter;

    impl HostRouter for NullRouter {
        fn is_mock(&self) -> bool {
            false
        }
        fn current_url(&self) -> String {
            "http://example.com/start".to_string()
        }
        fn take_url_change_handler(&mut self) -> Option<NavigationHandler> {
            None
        }
        fn force_hash_substrate(&mut self) {}
        fn attach_location(&mut self, _location: SharedLocation) {}
        fn set_link_rewriting(&mut self, _enabled: bool) {}
    }

    struct NullMobile;

    impl HashChangeDispatcher for NullMobile {
        fn dispatch_hash_change(&mut self, _url: &str) {}
    }

    #[test]
    fn test_default_is_plain_mode() {
        assert!(PlainLocationProvider::new().plain_mode());
    }

    #[test]
    fn test_disabled_mode_is_a_no_op() {
        let mut provider = PlainLocationProvider::new();
        provider.set_plain_mode(false);

        let mut adapter = HistoryAdapter::new();
        let result = provider
            .install(&mut NullRouter, &mut adapter, Arc::new(Mutex::new(NullMobile)))
            .unwrap();
        assert!(result.is_none());
        assert!(!adapter.is_installed());
    }

    #[test]
    fn test_install_seeds_location() {
        let provider = PlainLocationProvider::new();
        let mut adapter = HistoryAdapter::new();
        let location = provider
            .install(&mut NullRouter, &mut adapter, Arc::new(Mutex::new(NullMobile)))
            .unwrap()
            .expect("plain mode produces a location");

        let state = location.lock().unwrap();
        assert_eq!(state.absolute_url(), "http://example.com/start");
        assert!(!state.link_rewriting_enabled());
    }

    #[test]
    fn test_malformed_initial_url_propagates() {
        struct BadUrlRouter;
        impl HostRouter for BadUrlRouter {
            fn is_mock(&self) -> bool {
                false
            }
            fn current_url(&self) -> String {
                "not a url".to_string()
            }
            fn take_url_change_handler(&mut self) -> Option<NavigationHandler> {
                None
            }
            fn force_hash_substrate(&mut self) {}
            fn attach_location(&mut self, _location: SharedLocation) {}
            fn set_link_rewriting(&mut self, _enabled: bool) {}
        }

        let provider = PlainLocationProvider::new();
        let mut adapter = HistoryAdapter::new();
        let result = provider.install(
            &mut BadUrlRouter,
            &mut adapter,
            Arc::new(Mutex::new(NullMobile)),
        );
        assert!(result.is_err());
    }
}
