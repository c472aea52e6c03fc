use crate::server::{
    data::album::AlbumRepository,
    model::album::{CreateAlbumParam, UpdateAlbumParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod update;
