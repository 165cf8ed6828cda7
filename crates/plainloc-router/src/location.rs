//! Location State
//!
//! The canonical decomposed URL for the running application. The host
//! router consults this instead of its own hashbang bookkeeping.

use plainloc_url::{
    MalformedUrlError, QueryMap, compose_origin, decode_query_string, encode_path,
    encode_query_string, parse_absolute_url, percent_decode,
};

/// Protocol, host, and port of the session, captured at the first parse and
/// static from then on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOrigin {
    pub protocol: String,
    pub host: String,
    pub port: Option<u16>,
}

/// Canonical location state: decoded path, query mapping, and fragment,
/// plus the cached absolute URL they compose to.
///
/// One instance per application scope, re-derived on every navigation
/// event. All operations are synchronous; notifying observers after a
/// change is the caller's job.
#[derive(Debug, Default)]
pub struct LocationState {
    origin: Option<SessionOrigin>,
    path: String,
    query: QueryMap,
    fragment: String,
    abs_url: String,
    link_rewriting_disabled: bool,
}

impl LocationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-derive the state from a raw absolute URL.
    ///
    /// Parse-then-commit: the parse completes before any field changes, so
    /// a malformed URL leaves the state exactly as it was. The first
    /// successful call captures the session origin.
    pub fn apply_absolute_url(&mut self, raw: &str) -> Result<(), MalformedUrlError> {
        let parsed = parse_absolute_url(raw)?;

        if self.origin.is_none() {
            self.origin = Some(SessionOrigin {
                protocol: parsed.protocol.clone(),
                host: parsed.host.clone(),
                port: parsed.port,
            });
        }

        self.path = percent_decode(&parsed.path);
        self.query = decode_query_string(&parsed.query);
        self.fragment = parsed.fragment.as_deref().map(percent_decode).unwrap_or_default();
        self.abs_url = self.compose_absolute_url();

        tracing::debug!(url = %self.abs_url, "location state updated");
        Ok(())
    }

    /// Compose the canonical absolute URL from the current state.
    ///
    /// Query and fragment parts appear only when non-empty; the port is
    /// omitted when it is the scheme default.
    pub fn compose_absolute_url(&self) -> String {
        let origin = match &self.origin {
            Some(o) => compose_origin(&o.protocol, &o.host, o.port),
            None => String::new(),
        };
        format!("{}{}", origin, self.local_url())
    }

    /// The path-query-fragment portion without the origin.
    pub fn local_url(&self) -> String {
        let mut url = encode_path(&self.path);
        let query = encode_query_string(&self.query);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
        if !self.fragment.is_empty() {
            url.push('#');
            url.push_str(&encode_path(&self.fragment));
        }
        url
    }

    /// Session origin, once captured.
    pub fn origin(&self) -> Option<&SessionOrigin> {
        self.origin.as_ref()
    }

    /// Decoded path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Decoded query mapping.
    pub fn query(&self) -> &QueryMap {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut QueryMap {
        &mut self.query
    }

    /// Decoded fragment, empty when absent.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Cached canonical absolute URL from the last apply.
    pub fn absolute_url(&self) -> &str {
        &self.abs_url
    }

    /// Suppress automatic rewriting of in-page link clicks into router
    /// navigations. Plain URLs are already valid targets.
    pub fn disable_link_rewriting(&mut self) {
        self.link_rewriting_disabled = true;
    }

    pub fn link_rewriting_enabled(&self) -> bool {
        !self.link_rewriting_disabled
    }
}
