use axum::body::Bytes;

use crate::server::{model::upload::UploadedFile, model::user::User};

mod album;
mod playlist;
mod sync;

/// Converts a factory-created user into the domain model services expect.
fn as_user(model: entity::user::Model) -> User {
    User::from_entity(model)
}

fn upload(file_name: &str, content_type: Option<&str>, data: &'static [u8]) -> UploadedFile {
    UploadedFile {
        file_name: file_name.to_string(),
        content_type: content_type.map(str::to_string),
        data: Bytes::from_static(data),
    }
}
