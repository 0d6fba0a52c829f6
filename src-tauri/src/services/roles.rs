//! Role gate
//!
//! Maps the signed-in principal to a role. The identity provider is an
//! external collaborator: the shell hands us an email-like principal
//! and this service only decides whether it is the allow-listed author.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::config::{DEFAULT_AUTHOR_EMAIL, SETTING_AUTHOR_EMAIL};
use crate::database::Repository;
use crate::error::{AppError, Result};

/// An authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    pub email: String,
}

/// Caller role derived from the principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Author,
    Viewer,
    Anonymous,
}

/// Service holding the session principal and the author allow-list.
#[derive(Clone)]
pub struct RoleService {
    repo: Repository,
    current: Arc<RwLock<Option<Principal>>>,
}

impl RoleService {
    pub fn new(repo: Repository) -> Self {
        Self {
            repo,
            current: Arc::new(RwLock::new(None)),
        }
    }

    /// Record the principal the identity provider reported.
    pub async fn sign_in(&self, email: String) -> Result<Role> {
        let email = email.trim().to_string();
        if email.is_empty() {
            return Err(AppError::Validation("email must not be empty".to_string()));
        }

        tracing::info!("Principal signed in: {}", email);
        *self.current.write().await = Some(Principal { email });

        self.role().await
    }

    pub async fn sign_out(&self) {
        tracing::info!("Principal signed out");
        *self.current.write().await = None;
    }

    pub async fn current_principal(&self) -> Option<Principal> {
        self.current.read().await.clone()
    }

    /// Role of the current caller. Author status is an exact match
    /// against the single allow-listed email.
    pub async fn role(&self) -> Result<Role> {
        let principal = match self.current_principal().await {
            Some(p) => p,
            None => return Ok(Role::Anonymous),
        };

        let author_email = self
            .repo
            .get_setting(SETTING_AUTHOR_EMAIL)
            .await?
            .unwrap_or_else(|| DEFAULT_AUTHOR_EMAIL.to_string());

        if principal.email == author_email {
            Ok(Role::Author)
        } else {
            Ok(Role::Viewer)
        }
    }

    /// Guard for authoring operations.
    pub async fn require_author(&self) -> Result<Principal> {
        match self.role().await? {
            Role::Author => Ok(self
                .current_principal()
                .await
                .ok_or_else(|| AppError::Forbidden("not signed in".to_string()))?),
            Role::Viewer => Err(AppError::Forbidden(
                "only the author can edit the notebook".to_string(),
            )),
            Role::Anonymous => Err(AppError::Forbidden("not signed in".to_string())),
        }
    }
}
