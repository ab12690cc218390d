//! Song resource
//!
//! `GET /song?artist_id=...&album_id=...` and `POST /song`

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::debug;
use tunebase_common::{NewSong, Song};

use super::validation::{require, require_name};
use crate::db;
use crate::error::ApiResult;
use crate::AppState;

/// Query parameters for song listing
#[derive(Debug, Deserialize)]
pub struct SongQuery {
    pub artist_id: Option<i64>,
    pub album_id: Option<i64>,
    /// Accepted for compatibility; results are not filtered by it
    pub name: Option<String>,
}

/// Request body for song creation
#[derive(Debug, Deserialize)]
pub struct CreateSongRequest {
    pub name: Option<String>,
    pub artist_id: Option<i64>,
    pub album_id: Option<i64>,
}

/// GET /song?artist_id=ID&album_id=ID[&name=NAME]
///
/// 404 if either parent is missing or no song matches both.
pub async fn get_songs(
    State(state): State<AppState>,
    query: Result<Query<SongQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Song>>> {
    let Query(query) = query?;
    let artist_id = require(query.artist_id, "artist_id")?;
    let album_id = require(query.album_id, "album_id")?;
    if let Some(name) = &query.name {
        debug!(name = %name, "Ignoring song name filter");
    }

    let mut conn = state.db.acquire().await?;
    let (artist, album) = db::require_song_parents(&mut conn, artist_id, album_id).await?;
    let songs = db::find_songs_by_artist_and_album(&mut *conn, artist.id, album.id).await?;
    Ok(Json(songs))
}

/// POST /song
///
/// Creates a song (201), or 404 if the artist or album does not exist.
pub async fn create_song(
    State(state): State<AppState>,
    body: Result<Json<CreateSongRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Song>)> {
    let Json(body) = body?;
    let new_song = NewSong {
        name: require_name(body.name, "name")?,
        artist_id: require(body.artist_id, "artist_id")?,
        album_id: require(body.album_id, "album_id")?,
    };

    let song = db::create_song(&state.db, &new_song).await?;
    Ok((StatusCode::CREATED, Json(song)))
}
