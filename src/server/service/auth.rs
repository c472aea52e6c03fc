//! Password authentication and first-admin setup.
//!
//! Passwords are stored as argon2 PHC strings with a random salt. Login failures share
//! one error so callers cannot tell an unknown username from a wrong password.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, internal::InternalError, AppError},
    model::user::{CreateUserParam, User},
    service::{admin::code::AdminCodeService, user::validate_new_user},
};

/// Hashes a password into an argon2 PHC string with a fresh random salt.
///
/// # Returns
/// - `Ok(String)` - PHC string suitable for `user.password_hash`
/// - `Err(AppError::InternalErr)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| InternalError::PasswordHash(e.to_string()))?
        .to_string();

    Ok(hash)
}

/// Checks a password against a stored PHC string.
///
/// A stored value that is not a valid PHC string never verifies; accounts created
/// without a password therefore cannot log in.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(password_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Parameters for creating the first admin with a setup code.
pub struct SetupAdminParam {
    pub code: String,
    pub username: String,
    pub display_name: String,
    pub password: String,
}

/// Service for credential checks and bootstrap of the first admin.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies a username and password.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AuthError::InvalidCredentials)` - Unknown username or wrong password
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_username(username.trim()).await? else {
            tracing::debug!("Login attempt for unknown user {}", username);
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Creates the first admin account if `param.code` matches the active setup code.
    ///
    /// The code is only consumed once the account fields have been validated, so a
    /// typo in the username does not burn the code.
    ///
    /// # Returns
    /// - `Ok(User)` - The created admin
    /// - `Err(AuthError::InvalidSetupCode)` - An admin already exists or the code is wrong or expired
    /// - `Err(AppError::BadRequest)` - Username, display name or password invalid
    pub async fn setup_admin(
        &self,
        admin_code_service: &AdminCodeService,
        param: SetupAdminParam,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.admin_exists().await? {
            return Err(AuthError::InvalidSetupCode.into());
        }

        let (username, display_name) =
            validate_new_user(&user_repo, &param.username, &param.display_name, &param.password)
                .await?;

        if !admin_code_service.validate_and_consume(&param.code).await {
            return Err(AuthError::InvalidSetupCode.into());
        }

        let user = user_repo
            .create(CreateUserParam {
                username,
                display_name,
                password_hash: hash_password(&param.password)?,
                admin: true,
            })
            .await?;

        tracing::info!("Created initial admin {}", user.username);

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_hashed_password() {
        let hash = hash_password("correct horse").unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("correct horse", &hash));
        assert!(!verify_password("wrong horse", &hash));
    }

    #[test]
    fn salts_each_hash() {
        let first = hash_password("same").unwrap();
        let second = hash_password("same").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn rejects_malformed_stored_hash() {
        assert!(!verify_password("anything", "unset"));
    }
}
