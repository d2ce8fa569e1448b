//! Credential issuance: password check followed by token signing.

use std::sync::Arc;

use tracing::info;

use userhub_auth::jwt::{IssuedToken, JwtEncoder};
use userhub_auth::password::PasswordHasher;
use userhub_auth::permission::PermissionSet;
use userhub_auth::AuthError;
use userhub_core::error::AppError;
use userhub_database::UserRepository;

/// Verifies login/password pairs and issues access tokens.
#[derive(Clone)]
pub struct AuthService {
    /// User lookup.
    user_repo: Arc<dyn UserRepository>,
    /// Password verifier.
    hasher: Arc<PasswordHasher>,
    /// Token issuer.
    encoder: Arc<JwtEncoder>,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("encoder", &self.encoder)
            .finish_non_exhaustive()
    }
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            encoder,
        }
    }

    /// Authenticates `login`/`password` and returns a signed token.
    ///
    /// An unknown login and a wrong password both fail with
    /// [`AuthError::InvalidCredentials`]; an unknown login still pays for a
    /// full hash verification. Hashing runs on the blocking pool.
    pub async fn login(&self, login: &str, password: &str) -> Result<IssuedToken, AppError> {
        let user = self.user_repo.find_by_login(login).await?;

        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();
        let stored_hash = user.as_ref().map(|u| u.password_hash.clone());

        let verified = tokio::task::spawn_blocking(move || match stored_hash {
            Some(hash) => hasher.verify(&password, &hash),
            None => hasher.verify_dummy(&password),
        })
        .await
        .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))?;

        let user = match user {
            Some(user) if verified => user,
            _ => {
                info!(login = %login, "Login rejected");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        let permissions = PermissionSet::decode(&user.permissions);
        let issued = self.encoder.issue(&user.login, &permissions)?;

        info!(
            login = %user.login,
            permissions = %permissions,
            expires_at = %issued.expires_at,
            "Login succeeded"
        );

        Ok(issued)
    }
}
