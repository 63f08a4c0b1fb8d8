//! Session Model
//!
//! The identity provider hands over a user record with a free-form metadata
//! bag. It is parsed once into a [`Session`]; capabilities are computed at
//! that point and carried on the session.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Staff role within a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Operator,
    Cast,
    Admin,
}

impl Role {
    /// Whether this role may configure tables and seat guests
    pub fn can_manage_tables(self) -> bool {
        !matches!(self, Role::Cast)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Operator => "operator",
            Role::Cast => "cast",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "owner" => Ok(Role::Owner),
            "operator" => Ok(Role::Operator),
            "cast" => Ok(Role::Cast),
            "admin" => Ok(Role::Admin),
            other => Err(SessionError::UnknownRole(other.to_string())),
        }
    }
}

/// Metadata bag attached to the identity provider's user record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub store_id: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// User record as delivered by the identity provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserIdentity {
    pub email: String,
    #[serde(default, alias = "user_metadata")]
    pub metadata: UserMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Missing user metadata field: {0}")]
    MissingMetadata(&'static str),

    #[error("Session belongs to store {session_store}, not {requested_store}")]
    StoreMismatch {
        session_store: String,
        requested_store: String,
    },
}

/// Established session, built once at sign-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub store_id: String,
    pub role: Role,
    pub can_manage_tables: bool,
}

impl Session {
    pub fn new(email: impl Into<String>, store_id: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            store_id: store_id.into(),
            role,
            can_manage_tables: role.can_manage_tables(),
        }
    }

    /// Parse the identity provider's user record
    pub fn from_identity(identity: &UserIdentity) -> Result<Self, SessionError> {
        let store_id = identity
            .metadata
            .store_id
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or(SessionError::MissingMetadata("store_id"))?;
        let role: Role = identity
            .metadata
            .role
            .as_deref()
            .ok_or(SessionError::MissingMetadata("role"))?
            .parse()?;
        Ok(Self::new(identity.email.clone(), store_id, role))
    }

    /// Reject a session used against another store's subdomain
    pub fn ensure_store(&self, store_id: &str) -> Result<(), SessionError> {
        if self.store_id == store_id {
            Ok(())
        } else {
            Err(SessionError::StoreMismatch {
                session_store: self.store_id.clone(),
                requested_store: store_id.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(role: &str) -> UserIdentity {
        serde_json::from_value(serde_json::json!({
            "email": "mika@example.com",
            "user_metadata": { "store_id": "store-1", "role": role }
        }))
        .unwrap()
    }

    #[test]
    fn test_can_manage_tables_by_role() {
        assert!(Role::Owner.can_manage_tables());
        assert!(Role::Operator.can_manage_tables());
        assert!(Role::Admin.can_manage_tables());
        assert!(!Role::Cast.can_manage_tables());
    }

    #[test]
    fn test_session_from_identity() {
        let session = Session::from_identity(&identity("operator")).unwrap();
        assert_eq!(session.store_id, "store-1");
        assert_eq!(session.role, Role::Operator);
        assert!(session.can_manage_tables);

        let cast = Session::from_identity(&identity("cast")).unwrap();
        assert!(!cast.can_manage_tables);
    }

    #[test]
    fn test_session_rejects_unknown_role() {
        let err = Session::from_identity(&identity("manager")).unwrap_err();
        assert_eq!(err, SessionError::UnknownRole("manager".to_string()));
    }

    #[test]
    fn test_session_requires_store_id() {
        let identity = UserIdentity {
            email: "a@example.com".to_string(),
            metadata: UserMetadata {
                store_id: None,
                role: Some("owner".to_string()),
            },
        };
        assert_eq!(
            Session::from_identity(&identity).unwrap_err(),
            SessionError::MissingMetadata("store_id")
        );
    }

    #[test]
    fn test_ensure_store() {
        let session = Session::new("a@example.com", "store-1", Role::Owner);
        assert!(session.ensure_store("store-1").is_ok());
        assert!(matches!(
            session.ensure_store("store-2"),
            Err(SessionError::StoreMismatch { .. })
        ));
    }
}
