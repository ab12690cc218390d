//! HTTP API handlers for tunebase-api

pub mod album;
pub mod artist;
pub mod health;
pub mod song;
pub mod validation;

pub use album::{create_album, get_albums};
pub use artist::{create_artist, get_artist};
pub use health::health_routes;
pub use song::{create_song, get_songs};
