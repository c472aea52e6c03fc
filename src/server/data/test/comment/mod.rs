use crate::server::{data::comment::CommentRepository, model::comment::CreateCommentParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_album;
mod update_body;
