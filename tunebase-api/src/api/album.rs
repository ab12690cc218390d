//! Album resource
//!
//! `GET /album?artist_id=...` and `POST /album`

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tunebase_common::{Album, NewAlbum};

use super::validation::{optional_name, require};
use crate::db;
use crate::error::ApiResult;
use crate::AppState;

/// Query parameters for album listing
#[derive(Debug, Deserialize)]
pub struct AlbumQuery {
    pub artist_id: Option<i64>,
}

/// Request body for album creation
#[derive(Debug, Deserialize)]
pub struct CreateAlbumRequest {
    pub name: Option<String>,
    pub artist_id: Option<i64>,
}

/// GET /album?artist_id=ID
///
/// 404 if the artist does not exist or owns no albums.
pub async fn get_albums(
    State(state): State<AppState>,
    query: Result<Query<AlbumQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Album>>> {
    let Query(query) = query?;
    let artist_id = require(query.artist_id, "artist_id")?;

    let artist = db::find_artist_by_id(&state.db, artist_id).await?;
    let albums = db::find_albums_by_artist(&state.db, artist.id).await?;
    Ok(Json(albums))
}

/// POST /album
///
/// Creates an album (201), or 404 if the artist does not exist.
pub async fn create_album(
    State(state): State<AppState>,
    body: Result<Json<CreateAlbumRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Album>)> {
    let Json(body) = body?;
    let new_album = NewAlbum {
        name: optional_name(body.name, "name")?,
        artist_id: require(body.artist_id, "artist_id")?,
    };

    let album = db::create_album(&state.db, &new_album).await?;
    Ok((StatusCode::CREATED, Json(album)))
}
