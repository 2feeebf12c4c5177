//! Role-based authorization for attendance reads and writes.
//!
//! The gate combines the identity produced by the session validator (if any)
//! with the role a request claims for itself. Both checks are pure: they hold
//! no state and make no calls.

use std::fmt;
use std::str::FromStr;

use super::models::{Decision, Identity, Role};

/// How listing endpoints treat callers without a verified identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadPolicy {
    /// Accept a caller-declared `user_role=Professor` when no verified identity
    /// exists. The declared role is never checked against anything, so any
    /// client can list records by sending it.
    #[default]
    TrustClaimedRole,
    /// Only a verified Professor identity may list records.
    VerifiedOnly,
}

impl FromStr for ReadPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "claimed-role" => Ok(ReadPolicy::TrustClaimedRole),
            "verified-only" => Ok(ReadPolicy::VerifiedOnly),
            other => Err(format!(
                "unknown read policy '{other}', expected 'claimed-role' or 'verified-only'"
            )),
        }
    }
}

impl fmt::Display for ReadPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadPolicy::TrustClaimedRole => f.write_str("claimed-role"),
            ReadPolicy::VerifiedOnly => f.write_str("verified-only"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AttendanceGate {
    read_policy: ReadPolicy,
}

impl AttendanceGate {
    pub fn new(read_policy: ReadPolicy) -> Self {
        Self { read_policy }
    }

    pub fn read_policy(&self) -> ReadPolicy {
        self.read_policy
    }

    /// Decides whether a record may be written with `claimed_role`, and whom
    /// to attribute it to.
    ///
    /// A verified Student may only write records under the Student role; the
    /// mismatch is rejected, never corrected. Any other verified identity is
    /// allowed and attributed. Anonymous callers are allowed without
    /// attribution.
    pub fn authorize_write(&self, identity: Option<&Identity>, claimed_role: &str) -> Decision {
        let Some(identity) = identity else {
            return Decision::Allow(None);
        };

        if identity.has_role(&Role::Student) && Role::from_name(claimed_role) != Role::Student {
            return Decision::Deny(format!(
                "students may not submit attendance as '{}'",
                claimed_role.trim()
            ));
        }

        Decision::Allow(Some(identity.user_id.clone()))
    }

    /// Decides whether the caller may list attendance records.
    ///
    /// A verified Professor always may. Otherwise the outcome depends on the
    /// read policy: under `TrustClaimedRole` a declared Professor role is
    /// enough, even with no identity at all.
    pub fn authorize_read(&self, identity: Option<&Identity>, declared_role: Option<&str>) -> bool {
        if identity.is_some_and(|identity| identity.has_role(&Role::Professor)) {
            return true;
        }

        match self.read_policy {
            ReadPolicy::TrustClaimedRole => {
                declared_role.is_some_and(|role| Role::from_name(role) == Role::Professor)
            }
            ReadPolicy::VerifiedOnly => false,
        }
    }
}
