//! Song lookups and creation

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqliteExecutor, SqlitePool};
use tracing::{debug, info};
use tunebase_common::{Album, Artist, Error, NewSong, Result, Song};

use super::albums::find_album_by_id;
use super::artists::find_artist_by_id;

fn song_from_row(row: &SqliteRow) -> Song {
    Song {
        id: row.get("id"),
        name: row.get("name"),
        artist_id: row.get("artist_id"),
        album_id: row.get("album_id"),
    }
}

/// Resolve both parents of a song
///
/// Each parent is checked on its own; if either is missing the result is
/// `NotFound`, and the message names every missing parent.
pub async fn require_song_parents(
    conn: &mut SqliteConnection,
    artist_id: i64,
    album_id: i64,
) -> Result<(Artist, Album)> {
    let artist = find_artist_by_id(&mut *conn, artist_id).await;
    let album = find_album_by_id(&mut *conn, album_id).await;

    match (artist, album) {
        (Ok(artist), Ok(album)) => Ok((artist, album)),
        (Err(Error::NotFound(_)), Err(Error::NotFound(_))) => Err(Error::NotFound(format!(
            "Could not find artist ID {} or album ID {}",
            artist_id, album_id
        ))),
        (Err(e), _) | (_, Err(e)) => Err(e),
    }
}

/// Load songs matching both foreign keys, in creation order
///
/// No match is `NotFound`.
pub async fn find_songs_by_artist_and_album<'e, E>(
    executor: E,
    artist_id: i64,
    album_id: i64,
) -> Result<Vec<Song>>
where
    E: SqliteExecutor<'e>,
{
    let songs: Vec<Song> = sqlx::query(
        "SELECT id, name, artist_id, album_id FROM song WHERE artist_id = ? AND album_id = ? ORDER BY id",
    )
    .bind(artist_id)
    .bind(album_id)
    .fetch_all(executor)
    .await?
    .iter()
    .map(song_from_row)
    .collect();

    if songs.is_empty() {
        debug!(artist_id, album_id, "No songs for artist and album");
        return Err(Error::NotFound(format!(
            "Could not find songs for artist ID {} on album ID {}",
            artist_id, album_id
        )));
    }

    Ok(songs)
}

/// Load every song owned by an artist
pub async fn find_songs_by_artist<'e, E>(executor: E, artist_id: i64) -> Result<Vec<Song>>
where
    E: SqliteExecutor<'e>,
{
    let songs: Vec<Song> = sqlx::query(
        "SELECT id, name, artist_id, album_id FROM song WHERE artist_id = ? ORDER BY id",
    )
    .bind(artist_id)
    .fetch_all(executor)
    .await?
    .iter()
    .map(song_from_row)
    .collect();

    if songs.is_empty() {
        return Err(Error::NotFound(format!(
            "Could not find songs for artist ID {}",
            artist_id
        )));
    }

    Ok(songs)
}

/// Load every song on an album
pub async fn find_songs_by_album<'e, E>(executor: E, album_id: i64) -> Result<Vec<Song>>
where
    E: SqliteExecutor<'e>,
{
    let songs: Vec<Song> = sqlx::query(
        "SELECT id, name, artist_id, album_id FROM song WHERE album_id = ? ORDER BY id",
    )
    .bind(album_id)
    .fetch_all(executor)
    .await?
    .iter()
    .map(song_from_row)
    .collect();

    if songs.is_empty() {
        return Err(Error::NotFound(format!(
            "Could not find songs on album ID {}",
            album_id
        )));
    }

    Ok(songs)
}

/// Create a song for an existing artist and album
///
/// Both parents are re-fetched inside the insert transaction. The album's
/// own artist is not required to match `artist_id`.
pub async fn create_song(pool: &SqlitePool, new_song: &NewSong) -> Result<Song> {
    let mut tx = super::begin_write(pool).await?;

    let (artist, album) =
        require_song_parents(&mut tx, new_song.artist_id, new_song.album_id).await?;

    let result = sqlx::query("INSERT INTO song (name, artist_id, album_id) VALUES (?, ?, ?)")
        .bind(&new_song.name)
        .bind(artist.id)
        .bind(album.id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            Error::from_constraint(
                e,
                "Song already exists",
                &format!(
                    "Could not find artist ID {} or album ID {}",
                    artist.id, album.id
                ),
            )
        })?;

    tx.commit().await?;

    let song = Song {
        id: result.last_insert_rowid(),
        name: new_song.name.clone(),
        artist_id: artist.id,
        album_id: album.id,
    };
    info!("Created {}", song);

    Ok(song)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::albums::create_album;
    use crate::db::artists::create_artist;
    use tunebase_common::db::init_memory_database;
    use tunebase_common::{NewAlbum, NewArtist};

    /// Two artists, each with one album: (1, 1) and (2, 2)
    async fn seeded_pool() -> SqlitePool {
        let pool = init_memory_database().await.unwrap();
        for (artist, album) in [("Aphex Twin", "Drukqs"), ("Autechre", "Confield")] {
            let artist = create_artist(&pool, &NewArtist { name: artist.to_string() })
                .await
                .unwrap();
            create_album(
                &pool,
                &NewAlbum { name: Some(album.to_string()), artist_id: artist.id },
            )
            .await
            .unwrap();
        }
        pool
    }

    fn new_song(name: &str, artist_id: i64, album_id: i64) -> NewSong {
        NewSong { name: name.to_string(), artist_id, album_id }
    }

    async fn song_count(pool: &SqlitePool) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM song")
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_and_find_song() {
        let pool = seeded_pool().await;

        let song = create_song(&pool, &new_song("Avril 14th", 1, 1)).await.unwrap();
        assert_eq!(song.artist_id, 1);
        assert_eq!(song.album_id, 1);

        let found = find_songs_by_artist_and_album(&pool, 1, 1).await.unwrap();
        assert_eq!(found, vec![song]);
    }

    #[tokio::test]
    async fn test_missing_artist_only() {
        let pool = seeded_pool().await;

        let err = create_song(&pool, &new_song("Lost", 99, 1)).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(ref m) if m.contains("Artist ID 99")), "got {:?}", err);
        assert_eq!(song_count(&pool).await, 0);
    }

    #[tokio::test]
    async fn test_missing_album_only() {
        let pool = seeded_pool().await;

        let err = create_song(&pool, &new_song("Lost", 1, 99)).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(ref m) if m.contains("Album ID 99")), "got {:?}", err);
        assert_eq!(song_count(&pool).await, 0);
    }

    #[tokio::test]
    async fn test_missing_both_parents() {
        let pool = seeded_pool().await;

        let err = create_song(&pool, &new_song("Lost", 98, 99)).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert_eq!(song_count(&pool).await, 0);
    }

    #[tokio::test]
    async fn test_require_song_parents_on_pool_connection() {
        let pool = seeded_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let (artist, album) = require_song_parents(&mut conn, 2, 2).await.unwrap();
        assert_eq!(artist.name, "Autechre");
        assert_eq!(album.name.as_deref(), Some("Confield"));
    }

    #[tokio::test]
    async fn test_no_matching_songs_is_not_found() {
        let pool = seeded_pool().await;
        create_song(&pool, &new_song("Avril 14th", 1, 1)).await.unwrap();

        // Both parents exist but nothing pairs them
        let err = find_songs_by_artist_and_album(&pool, 2, 1).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_traversals() {
        let pool = seeded_pool().await;
        create_song(&pool, &new_song("Avril 14th", 1, 1)).await.unwrap();
        create_song(&pool, &new_song("Vordhosbn", 1, 1)).await.unwrap();
        create_song(&pool, &new_song("VI Scose Poise", 2, 2)).await.unwrap();
        // Cross-artist pairing is allowed
        create_song(&pool, &new_song("Guest Spot", 2, 1)).await.unwrap();

        let by_artist = find_songs_by_artist(&pool, 1).await.unwrap();
        assert_eq!(by_artist.len(), 2);

        let on_album: Vec<_> = find_songs_by_album(&pool, 1)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(on_album, vec!["Avril 14th", "Vordhosbn", "Guest Spot"]);

        assert!(matches!(
            find_songs_by_album(&pool, 3).await,
            Err(Error::NotFound(_))
        ));
    }
}
