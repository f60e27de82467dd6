//! Session state for one operator's dashboard usage.
//!
//! Responsibilities:
//! - Hold the operator credential, the active base URL and session-scoped cached envelopes.
//! - Gate data operations on authentication.
//!
//! Does NOT handle:
//! - Verifying credentials (see [`ApiKeyAuthenticator`]); `authenticate` is a pure store.
//! - Expiry. A stale key is only noticed when the backend rejects a request.
//!
//! Invariants:
//! - `is_authenticated()` is derived from the credential; there is no separate flag.
//! - The credential is a [`SecretString`] and never appears in `Debug` output.
//! - `logout()` restores the exact initial state, including the default base URL.
//! - Cached envelopes never outlive the credential they were fetched with.

use std::collections::HashMap;

use evaldash_config::Config;
use secrecy::{ExposeSecret, SecretString};
use tracing::info;

use crate::auth::{ApiKeyAuthenticator, normalize_base_url};
use crate::error::{ClientError, Result};
use crate::models::Envelope;

/// Which screen the front-end should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated,
}

/// One operator's authenticated context.
///
/// Owned by the front-end and lent by reference to every component that
/// needs it; nothing reads session data through a global.
#[derive(Debug, Clone)]
pub struct Session {
    credential: Option<SecretString>,
    base_url: String,
    default_base_url: String,
    cache: HashMap<String, Envelope>,
}

impl Session {
    /// Create an empty session whose base URL defaults to `default_base_url`.
    pub fn new(default_base_url: &str) -> Self {
        let default_base_url = normalize_base_url(default_base_url);
        Self {
            credential: None,
            base_url: default_base_url.clone(),
            default_base_url,
            cache: HashMap::new(),
        }
    }

    /// Create an empty session from the configured default base URL.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.connection.base_url)
    }

    /// True iff a non-empty credential is held.
    pub fn is_authenticated(&self) -> bool {
        self.credential
            .as_ref()
            .is_some_and(|c| !c.expose_secret().is_empty())
    }

    /// Current state of the session state machine.
    pub fn state(&self) -> SessionState {
        if self.is_authenticated() {
            SessionState::Authenticated
        } else {
            SessionState::Unauthenticated
        }
    }

    /// Store a credential and the base URL it was validated against.
    ///
    /// Performs no verification: call it only after
    /// [`ApiKeyAuthenticator::validate`] returned true for this exact pair,
    /// or use [`Session::login`]. Envelopes cached under a previous
    /// credential are dropped.
    pub fn authenticate(&mut self, credential: SecretString, base_url: &str) {
        self.cache.clear();
        self.credential = Some(credential);
        self.base_url = normalize_base_url(base_url);
        info!(base_url = %self.base_url, "Session authenticated");
    }

    /// Validate `credential` and store it on success.
    ///
    /// `base_url` overrides the configured default for this session; `None`
    /// keeps the current one. Every validation failure surfaces as the
    /// generic [`ClientError::InvalidCredentials`].
    pub async fn login(
        &mut self,
        authenticator: &ApiKeyAuthenticator,
        credential: SecretString,
        base_url: Option<&str>,
    ) -> Result<()> {
        let base_url = normalize_base_url(base_url.unwrap_or(&self.base_url));
        if authenticator.validate(&credential, &base_url).await {
            self.authenticate(credential, &base_url);
            Ok(())
        } else {
            Err(ClientError::InvalidCredentials)
        }
    }

    /// Clear every session-scoped value and return to the initial state.
    ///
    /// Idempotent.
    pub fn logout(&mut self) {
        let was_authenticated = self.is_authenticated();
        self.credential = None;
        self.base_url = self.default_base_url.clone();
        self.cache.clear();
        if was_authenticated {
            info!("Session logged out");
        }
    }

    /// Active base URL (normalized).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Base URL the session reverts to on logout.
    pub fn default_base_url(&self) -> &str {
        &self.default_base_url
    }

    /// Credential for an outbound request, or `NotAuthenticated`.
    pub(crate) fn require_credential(&self) -> Result<&SecretString> {
        match &self.credential {
            Some(credential) if !credential.expose_secret().is_empty() => Ok(credential),
            _ => Err(ClientError::NotAuthenticated),
        }
    }

    /// Keep a fetched envelope for the rest of this session.
    pub fn cache_envelope(&mut self, key: impl Into<String>, envelope: Envelope) {
        self.cache.insert(key.into(), envelope);
    }

    /// Previously cached envelope for `key`.
    pub fn cached_envelope(&self, key: &str) -> Option<&Envelope> {
        self.cache.get(key)
    }

    /// Drop every cached envelope while staying logged in.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Number of cached envelopes.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}
