//! Album lookups and creation

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteExecutor, SqlitePool};
use tracing::{debug, info};
use tunebase_common::{Album, Error, NewAlbum, Result};

use super::artists::find_artist_by_id;

fn album_from_row(row: &SqliteRow) -> Album {
    Album {
        id: row.get("id"),
        name: row.get("name"),
        artist_id: row.get("artist_id"),
    }
}

/// Load album by id
pub async fn find_album_by_id<'e, E>(executor: E, id: i64) -> Result<Album>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query("SELECT id, name, artist_id FROM album WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await?;

    match row {
        Some(row) => Ok(album_from_row(&row)),
        None => {
            debug!(album_id = id, "Album lookup by id missed");
            Err(Error::NotFound(format!("Album ID {} does not exist", id)))
        }
    }
}

/// Load every album owned by an artist, in creation order
///
/// An artist with no albums is `NotFound`, never an empty list.
pub async fn find_albums_by_artist<'e, E>(executor: E, artist_id: i64) -> Result<Vec<Album>>
where
    E: SqliteExecutor<'e>,
{
    let albums: Vec<Album> =
        sqlx::query("SELECT id, name, artist_id FROM album WHERE artist_id = ? ORDER BY id")
            .bind(artist_id)
            .fetch_all(executor)
            .await?
            .iter()
            .map(album_from_row)
            .collect();

    if albums.is_empty() {
        debug!(artist_id, "Artist has no albums");
        return Err(Error::NotFound(format!(
            "Could not find any albums for artist ID {}",
            artist_id
        )));
    }

    Ok(albums)
}

/// Create an album for an existing artist
///
/// The owning artist is re-fetched inside the insert transaction.
pub async fn create_album(pool: &SqlitePool, new_album: &NewAlbum) -> Result<Album> {
    let mut tx = super::begin_write(pool).await?;

    let artist = find_artist_by_id(&mut *tx, new_album.artist_id).await?;

    let result = sqlx::query("INSERT INTO album (name, artist_id) VALUES (?, ?)")
        .bind(&new_album.name)
        .bind(artist.id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            Error::from_constraint(
                e,
                "Album already exists",
                &format!("Artist ID {} does not exist", artist.id),
            )
        })?;

    tx.commit().await?;

    let album = Album {
        id: result.last_insert_rowid(),
        name: new_album.name.clone(),
        artist_id: artist.id,
    };
    info!("Created {}", album);

    Ok(album)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::artists::create_artist;
    use tunebase_common::db::init_memory_database;
    use tunebase_common::NewArtist;

    async fn seeded_pool() -> SqlitePool {
        let pool = init_memory_database().await.unwrap();
        create_artist(&pool, &NewArtist { name: "Aphex Twin".to_string() })
            .await
            .unwrap();
        pool
    }

    #[tokio::test]
    async fn test_create_album_keeps_artist_id() {
        let pool = seeded_pool().await;

        let album = create_album(
            &pool,
            &NewAlbum { name: Some("Drukqs".to_string()), artist_id: 1 },
        )
        .await
        .unwrap();

        assert_eq!(album.artist_id, 1);
        assert_eq!(album.name.as_deref(), Some("Drukqs"));
        assert_eq!(find_album_by_id(&pool, album.id).await.unwrap(), album);
    }

    #[tokio::test]
    async fn test_create_untitled_album() {
        let pool = seeded_pool().await;

        let album = create_album(&pool, &NewAlbum { name: None, artist_id: 1 })
            .await
            .unwrap();

        assert!(album.name.is_none());
        assert!(find_album_by_id(&pool, album.id).await.unwrap().name.is_none());
    }

    #[tokio::test]
    async fn test_create_album_missing_artist() {
        let pool = seeded_pool().await;

        let err = create_album(
            &pool,
            &NewAlbum { name: Some("Ghost".to_string()), artist_id: 99 },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Error::NotFound(_)), "got {:?}", err);

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM album")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0, "Nothing may be inserted for a missing artist");
    }

    #[tokio::test]
    async fn test_albums_by_artist() {
        let pool = seeded_pool().await;
        create_artist(&pool, &NewArtist { name: "Autechre".to_string() })
            .await
            .unwrap();

        for (name, artist_id) in [("Drukqs", 1), ("Confield", 2), ("Syro", 1)] {
            create_album(&pool, &NewAlbum { name: Some(name.to_string()), artist_id })
                .await
                .unwrap();
        }

        let albums = find_albums_by_artist(&pool, 1).await.unwrap();
        let names: Vec<_> = albums.iter().map(|a| a.name.as_deref().unwrap()).collect();
        assert_eq!(names, vec!["Drukqs", "Syro"]);
    }

    #[tokio::test]
    async fn test_artist_without_albums_is_not_found() {
        let pool = seeded_pool().await;

        let err = find_albums_by_artist(&pool, 1).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
