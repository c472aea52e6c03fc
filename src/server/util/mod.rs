pub mod audio;
pub mod pagination;
