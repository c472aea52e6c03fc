//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{PaginatedUsersDto, UserDto},
    server::util::pagination::total_pages,
};

/// Application user with login credentials and permission flag.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    /// Unique login name.
    pub username: String,
    pub display_name: String,
    /// Argon2 PHC string. Never leaves the server.
    pub password_hash: String,
    /// Whether the user has admin privileges.
    pub admin: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses, dropping the hash.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            display_name: self.display_name,
            admin: self.admin,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            display_name: entity.display_name,
            password_hash: entity.password_hash,
            admin: entity.admin,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for inserting a new user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub display_name: String,
    pub password_hash: String,
    pub admin: bool,
}

/// One page of users ordered by username.
#[derive(Debug, Clone)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: total_pages(self.total, self.per_page),
        }
    }
}
