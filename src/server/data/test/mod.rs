mod album;
mod comment;
mod gallery;
mod playlist;
mod playlist_track;
mod track;
mod user;
