use crate::server::{
    data::gallery::GalleryRepository,
    model::gallery::{CreateGalleryItemParam, GalleryKind},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
