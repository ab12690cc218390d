//! Entity model
//!
//! Relationships are plain foreign-key fields. Traversal (artist → albums,
//! artist → songs, album → songs) is always an explicit query in the
//! lookup layer; nothing here loads related rows.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length of any entity name, in characters
pub const MAX_NAME_LEN: usize = 64;

/// A performing artist. Names are unique across all artists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: i64,
    pub name: String,
}

/// An album owned by one artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: i64,
    pub name: Option<String>,
    pub artist_id: i64,
}

/// A song owned by one artist and one album
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: i64,
    pub name: String,
    pub artist_id: i64,
    pub album_id: i64,
}

/// Insert payload for an artist
#[derive(Debug, Clone)]
pub struct NewArtist {
    pub name: String,
}

/// Insert payload for an album
#[derive(Debug, Clone)]
pub struct NewAlbum {
    pub name: Option<String>,
    pub artist_id: i64,
}

/// Insert payload for a song
#[derive(Debug, Clone)]
pub struct NewSong {
    pub name: String,
    pub artist_id: i64,
    pub album_id: i64,
}

impl fmt::Display for Artist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "artist {} '{}'", self.id, self.name)
    }
}

impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "album {} '{}' by artist {}", self.id, name, self.artist_id),
            None => write!(f, "album {} (untitled) by artist {}", self.id, self.artist_id),
        }
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "song {} '{}' by artist {} on album {}",
            self.id, self.name, self.artist_id, self.album_id
        )
    }
}
