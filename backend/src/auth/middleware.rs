//! Request extractor that resolves the caller's identity.
//!
//! Reads the session cookie from the request and runs it through the session
//! validator. Extraction never fails: a missing or unusable session yields an
//! anonymous caller and handlers decide what that means.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use super::models::Identity;
use crate::state::SharedState;

/// The validated identity of the caller, if any.
#[derive(Debug, Clone)]
pub struct CurrentIdentity(pub Option<Identity>);

impl CurrentIdentity {
    pub fn identity(&self) -> Option<&Identity> {
        self.0.as_ref()
    }
}

impl FromRequestParts<SharedState> for CurrentIdentity {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(&state.config.session_cookie)
            .map(|cookie| cookie.value().to_string());

        Ok(Self(state.validator.validate(token.as_deref()).await))
    }
}
