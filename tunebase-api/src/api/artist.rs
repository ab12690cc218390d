//! Artist resource
//!
//! `GET /artist?name=...` and `POST /artist`

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tunebase_common::{Artist, NewArtist};

use super::validation::require_name;
use crate::db;
use crate::error::ApiResult;
use crate::AppState;

/// Query parameters for artist lookup
#[derive(Debug, Deserialize)]
pub struct ArtistQuery {
    pub name: Option<String>,
}

/// Request body for artist creation
#[derive(Debug, Deserialize)]
pub struct CreateArtistRequest {
    pub name: Option<String>,
}

/// GET /artist?name=NAME
///
/// Returns the artist with exactly this name, or 404.
pub async fn get_artist(
    State(state): State<AppState>,
    query: Result<Query<ArtistQuery>, QueryRejection>,
) -> ApiResult<Json<Artist>> {
    let Query(query) = query?;
    let name = require_name(query.name, "name")?;

    let artist = db::find_artist_by_name(&state.db, &name).await?;
    Ok(Json(artist))
}

/// POST /artist
///
/// Creates an artist (201), or 409 if the name is taken.
pub async fn create_artist(
    State(state): State<AppState>,
    body: Result<Json<CreateArtistRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Artist>)> {
    let Json(body) = body?;
    let new_artist = NewArtist {
        name: require_name(body.name, "name")?,
    };

    let artist = db::create_artist(&state.db, &new_artist).await?;
    Ok((StatusCode::CREATED, Json(artist)))
}
