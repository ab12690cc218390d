//! Artist lookups and creation

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteExecutor, SqlitePool};
use tracing::{debug, info};
use tunebase_common::{Artist, Error, NewArtist, Result};

fn artist_from_row(row: &SqliteRow) -> Artist {
    Artist {
        id: row.get("id"),
        name: row.get("name"),
    }
}

/// Load artist by exact name
pub async fn find_artist_by_name<'e, E>(executor: E, name: &str) -> Result<Artist>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query("SELECT id, name FROM artist WHERE name = ?")
        .bind(name)
        .fetch_optional(executor)
        .await?;

    match row {
        Some(row) => Ok(artist_from_row(&row)),
        None => {
            debug!(name, "Artist lookup by name missed");
            Err(Error::NotFound(format!("Could not find artist named '{}'", name)))
        }
    }
}

/// Load artist by id
pub async fn find_artist_by_id<'e, E>(executor: E, id: i64) -> Result<Artist>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query("SELECT id, name FROM artist WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await?;

    match row {
        Some(row) => Ok(artist_from_row(&row)),
        None => {
            debug!(artist_id = id, "Artist lookup by id missed");
            Err(Error::NotFound(format!("Artist ID {} does not exist", id)))
        }
    }
}

/// Whether an artist with this exact name exists
pub async fn artist_name_exists<'e, E>(executor: E, name: &str) -> Result<bool>
where
    E: SqliteExecutor<'e>,
{
    let exists: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM artist WHERE name = ?)")
        .bind(name)
        .fetch_one(executor)
        .await?;

    Ok(exists != 0)
}

/// Create an artist, rejecting duplicate names with `Conflict`
///
/// The uniqueness check and the insert share one transaction.
pub async fn create_artist(pool: &SqlitePool, new_artist: &NewArtist) -> Result<Artist> {
    let mut tx = super::begin_write(pool).await?;

    if artist_name_exists(&mut *tx, &new_artist.name).await? {
        return Err(Error::Conflict(format!(
            "Artist name '{}' already exists",
            new_artist.name
        )));
    }

    let result = sqlx::query("INSERT INTO artist (name) VALUES (?)")
        .bind(&new_artist.name)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            Error::from_constraint(
                e,
                &format!("Artist name '{}' already exists", new_artist.name),
                "Referenced entity does not exist",
            )
        })?;

    tx.commit().await?;

    let artist = Artist {
        id: result.last_insert_rowid(),
        name: new_artist.name.clone(),
    };
    info!("Created {}", artist);

    Ok(artist)
}
