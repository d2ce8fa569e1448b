//! User record management: listing, lookup, creation, update and removal.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use userhub_auth::identity::Identity;
use userhub_auth::password::PasswordHasher;
use userhub_auth::permission::PermissionSet;
use userhub_core::config::BootstrapConfig;
use userhub_core::error::AppError;
use userhub_core::types::pagination::{PageRequest, PageResponse};
use userhub_database::{UserFilter, UserRepository};
use userhub_entity::{NewUser, User, UserPatch};

/// Handles user record operations.
///
/// Callers are expected to have passed the authorization gate already; the
/// [`Identity`] arguments are used for audit logging only.
#[derive(Clone)]
pub struct UserService {
    /// User repository.
    repo: Arc<dyn UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService").finish_non_exhaustive()
    }
}

/// Data for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserInput {
    /// Display name.
    pub name: String,
    /// Login; must be unique.
    pub login: String,
    /// Plaintext password.
    pub password: String,
    /// Email address.
    pub email: Option<String>,
    /// Comma-separated permission names.
    pub permissions: Option<String>,
}

/// Partial update of a user. `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserInput {
    /// New display name.
    pub name: Option<String>,
    /// New login.
    pub login: Option<String>,
    /// New plaintext password.
    pub password: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New comma-separated permission names.
    pub permissions: Option<String>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(repo: Arc<dyn UserRepository>, hasher: Arc<PasswordHasher>) -> Self {
        Self { repo, hasher }
    }

    /// Lists users matching `filter`.
    pub async fn list(
        &self,
        filter: &UserFilter,
        page: &PageRequest,
    ) -> Result<PageResponse<User>, AppError> {
        self.repo.find_all(filter, page).await
    }

    /// Fetches a single user.
    pub async fn get(&self, id: Uuid) -> Result<User, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Creates a user, hashing the password and normalizing permissions.
    pub async fn create(&self, actor: &Identity, input: CreateUserInput) -> Result<User, AppError> {
        let login = require_non_blank("Login", input.login)?;
        let name = require_non_blank("Name", input.name)?;
        if input.password.is_empty() {
            return Err(AppError::validation("Password cannot be empty"));
        }

        let password_hash = self.hash(input.password).await?;
        let permissions = PermissionSet::decode_opt(input.permissions.as_deref()).encode();

        let user = self
            .repo
            .create(NewUser {
                name,
                login,
                email: input.email,
                password_hash,
                permissions,
            })
            .await?;

        info!(
            actor = %actor.subject,
            user_id = %user.id,
            login = %user.login,
            "User created"
        );

        Ok(user)
    }

    /// Merges `input` into the stored user.
    pub async fn update(
        &self,
        actor: &Identity,
        id: Uuid,
        input: UpdateUserInput,
    ) -> Result<User, AppError> {
        let login = input
            .login
            .map(|l| require_non_blank("Login", l))
            .transpose()?;
        let name = input
            .name
            .map(|n| require_non_blank("Name", n))
            .transpose()?;

        let password_hash = match input.password {
            Some(p) if p.is_empty() => {
                return Err(AppError::validation("Password cannot be empty"));
            }
            Some(p) => Some(self.hash(p).await?),
            None => None,
        };

        let patch = UserPatch {
            name,
            login,
            email: input.email,
            password_hash,
            permissions: input
                .permissions
                .map(|p| PermissionSet::decode(&p).encode()),
        };

        let user = self
            .repo
            .update(id, patch)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        info!(actor = %actor.subject, user_id = %id, "User updated");
        Ok(user)
    }

    /// Removes a user.
    pub async fn delete(&self, actor: &Identity, id: Uuid) -> Result<(), AppError> {
        if !self.repo.delete(id).await? {
            return Err(AppError::not_found("User not found"));
        }

        info!(actor = %actor.subject, user_id = %id, "User deleted");
        Ok(())
    }

    /// Seeds the configured account unless its login already exists.
    ///
    /// Returns `true` if a user was inserted.
    pub async fn bootstrap(&self, config: &BootstrapConfig) -> Result<bool, AppError> {
        if self.repo.find_by_login(&config.login).await?.is_some() {
            return Ok(false);
        }

        let system = Identity {
            subject: "system".to_string(),
            permissions: PermissionSet::new(),
        };
        self.create(
            &system,
            CreateUserInput {
                name: config.name.clone(),
                login: config.login.clone(),
                password: config.password.clone(),
                email: None,
                permissions: Some(config.permissions.clone()),
            },
        )
        .await?;

        Ok(true)
    }

    async fn hash(&self, password: String) -> Result<String, AppError> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
    }
}

fn require_non_blank(field: &str, value: String) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{field} cannot be empty")));
    }
    Ok(trimmed.to_string())
}
