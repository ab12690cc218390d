//! # Tunebase Common Library
//!
//! Shared code for tunebase processes:
//! - Entity model (artists, albums, songs)
//! - Database initialization and schema
//! - Configuration and root folder resolution
//! - Common error type

pub mod config;
pub mod db;
pub mod error;

pub use db::models::{Album, Artist, NewAlbum, NewArtist, NewSong, Song};
pub use error::{Error, Result};
