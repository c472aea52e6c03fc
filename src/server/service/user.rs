//! User service for business logic.
//!
//! This module provides the `UserService` used by the admin pages to list, create and
//! delete member accounts and to grant or revoke admin rights.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, PaginatedUsers, User},
    service::auth::hash_password,
};

/// Minimum accepted password length in characters.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum accepted username length in characters.
const MAX_USERNAME_LENGTH: usize = 32;

/// Parameters for creating a member account.
pub struct CreateUserRequest {
    pub username: String,
    pub display_name: String,
    pub password: String,
    pub admin: bool,
}

/// Validates the fields of a new account.
///
/// Usernames are trimmed, must be non-empty, at most 32 characters, contain no
/// whitespace and be unused. An empty display name defaults to the username.
///
/// # Returns
/// - `Ok((username, display_name))` - Normalized values to store
/// - `Err(AppError::BadRequest)` - A field is invalid or the username is taken
pub async fn validate_new_user(
    user_repo: &UserRepository<'_>,
    username: &str,
    display_name: &str,
    password: &str,
) -> Result<(String, String), AppError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(AppError::BadRequest("Username is required".to_string()));
    }
    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Username must be at most {} characters",
            MAX_USERNAME_LENGTH
        )));
    }
    if username.chars().any(char::is_whitespace) {
        return Err(AppError::BadRequest(
            "Username must not contain whitespace".to_string(),
        ));
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    if user_repo.find_by_username(username).await?.is_some() {
        return Err(AppError::BadRequest(format!(
            "Username {} is already taken",
            username
        )));
    }

    let display_name = match display_name.trim() {
        "" => username,
        name => name,
    };

    Ok((username.to_string(), display_name.to_string()))
}

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_user(&self, id: &str) -> Result<Option<User>, AppError> {
        let user = UserRepository::new(self.db).find_by_id(id).await?;
        Ok(user)
    }

    /// Retrieves all users with pagination, ordered by username.
    ///
    /// # Arguments
    /// - `page` - Zero-based page number
    /// - `per_page` - Number of users per page
    ///
    /// # Returns
    /// - `Ok(PaginatedUsers)` - Users for the requested page with pagination metadata
    /// - `Err(AppError::DbErr)` - Database error during pagination query
    pub async fn get_all_users(&self, page: u64, per_page: u64) -> Result<PaginatedUsers, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(PaginatedUsers {
            users,
            total,
            page,
            per_page,
        })
    }

    /// Creates a member account with a hashed password.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Invalid fields or duplicate username
    /// - `Err(AppError::InternalErr)` - Password hashing failed
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let (username, display_name) = validate_new_user(
            &user_repo,
            &request.username,
            &request.display_name,
            &request.password,
        )
        .await?;

        let user = user_repo
            .create(CreateUserParam {
                username,
                display_name,
                password_hash: hash_password(&request.password)?,
                admin: request.admin,
            })
            .await?;

        Ok(user)
    }

    /// Grants or revokes admin privileges.
    ///
    /// An admin cannot revoke their own privileges, which keeps at least one admin
    /// around.
    ///
    /// # Arguments
    /// - `acting_user_id` - Id of the admin performing the change
    /// - `id` - Id of the user to change
    /// - `admin` - New admin flag
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::BadRequest)` - Attempt to revoke your own admin flag
    /// - `Err(AppError::NotFound)` - User does not exist
    pub async fn set_admin(
        &self,
        acting_user_id: &str,
        id: &str,
        admin: bool,
    ) -> Result<User, AppError> {
        if acting_user_id == id && !admin {
            return Err(AppError::BadRequest(
                "You cannot revoke your own admin privileges".to_string(),
            ));
        }

        UserRepository::new(self.db)
            .set_admin(id, admin)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Deletes a user account. Their playlists, comments and gallery items cascade.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::BadRequest)` - Attempt to delete your own account
    /// - `Err(AppError::NotFound)` - User does not exist
    pub async fn delete_user(&self, acting_user_id: &str, id: &str) -> Result<(), AppError> {
        if acting_user_id == id {
            return Err(AppError::BadRequest(
                "You cannot delete your own account".to_string(),
            ));
        }

        if !UserRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }
}
