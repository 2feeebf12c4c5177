//! Generic data models for the `adapters` crate.
//!
//! These models define the shapes exchanged with external collaborators: stored
//! documents and the filters used to find them, plus the identity reported by the
//! authentication service for a session token.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::errors::AdapterError;

/// A document as held by the document store: its id and its JSON fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub id: String,
    pub data: Map<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<String>, data: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }

    /// Deserializes the document fields into a typed model.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, AdapterError> {
        serde_json::from_value(Value::Object(self.data.clone())).map_err(|err| {
            AdapterError::Decode(format!("document {}: {}", self.id, err))
        })
    }
}

/// Comparison operators supported by `DocumentStore::query`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    NotEq,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl FilterOp {
    /// Evaluates `field <op> value`. Values of different JSON types never match.
    pub fn matches(self, field: &Value, value: &Value) -> bool {
        let Some(ordering) = compare_values(field, value) else {
            return false;
        };

        match self {
            FilterOp::Eq => ordering == Ordering::Equal,
            FilterOp::NotEq => ordering != Ordering::Equal,
            FilterOp::Lt => ordering == Ordering::Less,
            FilterOp::Lte => ordering != Ordering::Greater,
            FilterOp::Gt => ordering == Ordering::Greater,
            FilterOp::Gte => ordering != Ordering::Less,
        }
    }
}

/// Sort direction for `DocumentStore::query_ordered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Orders two JSON scalars of the same type. Returns `None` for mixed types,
/// arrays and objects.
pub fn compare_values(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Null, Value::Null) => Some(Ordering::Equal),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Number(a), Value::Number(b)) => a.as_f64()?.partial_cmp(&b.as_f64()?),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

/// A user's role as reported by the authentication service.
///
/// Role names compare case-insensitively: the auth service stores lowercase
/// names while forms submit capitalised ones.
#[derive(Debug, Clone)]
pub enum Role {
    Student,
    Professor,
    Other(String),
}

impl Role {
    pub fn from_name(name: &str) -> Self {
        let trimmed = name.trim();
        if trimmed.eq_ignore_ascii_case("student") {
            Role::Student
        } else if trimmed.eq_ignore_ascii_case("professor") {
            Role::Professor
        } else {
            Role::Other(trimmed.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Student => "Student",
            Role::Professor => "Professor",
            Role::Other(name) => name,
        }
    }
}

impl PartialEq for Role {
    fn eq(&self, other: &Self) -> bool {
        self.as_str().eq_ignore_ascii_case(other.as_str())
    }
}

impl Eq for Role {}

impl FromStr for Role {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Role::from_name(s))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Role::from_name(&raw))
    }
}

/// Verified user record for a session token. Never persisted locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub user_id: String,
    pub email: String,
    pub full_name: String,
    pub role: Option<Role>,
}

impl Identity {
    pub fn has_role(&self, role: &Role) -> bool {
        self.role.as_ref() == Some(role)
    }
}

/// Result of asking the authentication service about a session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStatus {
    Authenticated(Identity),
    Unauthenticated,
}

/// Body of `GET /api/auth/status`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatusResponse {
    #[serde(default)]
    pub authenticated: bool,
    pub user_id: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<Role>,
}

impl TryFrom<AuthStatusResponse> for AuthStatus {
    type Error = AdapterError;

    fn try_from(body: AuthStatusResponse) -> Result<Self, Self::Error> {
        if !body.authenticated {
            return Ok(AuthStatus::Unauthenticated);
        }

        let user_id = body
            .user_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AdapterError::Decode("authenticated status without userId".into()))?;

        Ok(AuthStatus::Authenticated(Identity {
            user_id,
            email: body.email.unwrap_or_default(),
            full_name: body.full_name.unwrap_or_default(),
            role: body.role,
        }))
    }
}
