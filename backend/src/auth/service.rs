//! Core session validation logic.
//!
//! The validator turns an optional session token into an optional identity by
//! asking the external authentication service. It fails open: any failure to get
//! a usable answer leaves the request anonymous rather than rejecting it.

use std::sync::Arc;

use adapters::{AdapterError, AuthService, AuthStatus};
use tracing::{debug, warn};

use super::models::{Identity, SessionOutcome};

#[derive(Clone)]
pub struct SessionValidator {
    auth: Arc<dyn AuthService>,
}

impl SessionValidator {
    pub fn new(auth: Arc<dyn AuthService>) -> Self {
        Self { auth }
    }

    /// Looks up `token` once, with no retry and no caching.
    pub async fn lookup(&self, token: Option<&str>) -> SessionOutcome {
        let Some(token) = token.filter(|token| !token.is_empty()) else {
            return SessionOutcome::Unauthenticated;
        };

        match self.auth.session_status(token).await {
            Ok(AuthStatus::Authenticated(identity)) => SessionOutcome::Verified(identity),
            Ok(AuthStatus::Unauthenticated) => SessionOutcome::Unauthenticated,
            Err(AdapterError::Status(code)) if is_rejection(code) => {
                SessionOutcome::Unauthenticated
            }
            Err(err) => SessionOutcome::TransportFailure(err.to_string()),
        }
    }

    /// Returns the identity for `token`, or `None` for anonymous access.
    ///
    /// Unauthenticated tokens and transport failures both resolve to `None`;
    /// nothing is propagated to the caller.
    pub async fn validate(&self, token: Option<&str>) -> Option<Identity> {
        match self.lookup(token).await {
            SessionOutcome::TransportFailure(reason) => {
                warn!(%reason, "session validation failed, continuing as anonymous");
                None
            }
            outcome => {
                debug!(verified = matches!(outcome, SessionOutcome::Verified(_)), "session looked up");
                outcome.into_identity()
            }
        }
    }
}

/// Statuses that mean the auth service looked at the session and refused it:
/// 401/403, or a redirect to its login page.
fn is_rejection(code: u16) -> bool {
    matches!(code, 401 | 403 | 300..=399)
}

#[cfg(test)]
mod tests {
    use super::*;
    use adapters::Role;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubAuth {
        answer: fn() -> Result<AuthStatus, AdapterError>,
        calls: AtomicUsize,
    }

    impl StubAuth {
        fn new(answer: fn() -> Result<AuthStatus, AdapterError>) -> Arc<Self> {
            Arc::new(Self {
                answer,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl AuthService for StubAuth {
        async fn session_status(&self, _token: &str) -> Result<AuthStatus, AdapterError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.answer)()
        }
    }

    fn student() -> Identity {
        Identity {
            user_id: "u1".into(),
            email: "u1@example.edu".into(),
            full_name: "Student One".into(),
            role: Some(Role::Student),
        }
    }

    #[tokio::test]
    async fn missing_token_skips_the_call() {
        let auth = StubAuth::new(|| Ok(AuthStatus::Authenticated(student())));
        let validator = SessionValidator::new(auth.clone());

        assert_eq!(validator.lookup(None).await, SessionOutcome::Unauthenticated);
        assert_eq!(validator.validate(Some("")).await, None);
        assert_eq!(auth.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn verified_token_returns_identity() {
        let auth = StubAuth::new(|| Ok(AuthStatus::Authenticated(student())));
        let validator = SessionValidator::new(auth.clone());

        assert_eq!(validator.validate(Some("abc")).await, Some(student()));
        assert_eq!(auth.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn rejected_status_is_unauthenticated() {
        let validator = SessionValidator::new(StubAuth::new(|| Err(AdapterError::Status(401))));
        assert_eq!(
            validator.lookup(Some("abc")).await,
            SessionOutcome::Unauthenticated
        );
    }

    #[tokio::test]
    async fn login_redirect_is_unauthenticated() {
        let validator = SessionValidator::new(StubAuth::new(|| Err(AdapterError::Status(302))));
        assert_eq!(
            validator.lookup(Some("expired")).await,
            SessionOutcome::Unauthenticated
        );
    }

    #[tokio::test]
    async fn failures_degrade_to_anonymous() {
        let answers: [fn() -> Result<AuthStatus, AdapterError>; 3] = [
            || Err(AdapterError::Transport("connection refused".into())),
            || Err(AdapterError::Decode("expected value".into())),
            || Err(AdapterError::Status(503)),
        ];

        for answer in answers {
            let validator = SessionValidator::new(StubAuth::new(answer));
            assert!(matches!(
                validator.lookup(Some("abc")).await,
                SessionOutcome::TransportFailure(_)
            ));
            assert_eq!(validator.validate(Some("abc")).await, None);
        }
    }
}
