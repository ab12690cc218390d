//! Lookup layer
//!
//! Read-only queries that resolve referenced entities, plus the create
//! operations that re-run those checks inside their own transaction
//! before inserting. Lookups accept any SQLite executor so the same
//! query serves both plain reads against the pool and the checks made
//! inside a create transaction.
//!
//! Create transactions start with `BEGIN IMMEDIATE`: the write lock is
//! taken before the existence checks run, so concurrent creates queue on
//! the busy timeout and each one validates against committed state.

pub mod albums;
pub mod artists;
pub mod songs;

pub use albums::{create_album, find_album_by_id, find_albums_by_artist};
pub use artists::{artist_name_exists, create_artist, find_artist_by_id, find_artist_by_name};
pub use songs::{
    create_song, find_songs_by_album, find_songs_by_artist, find_songs_by_artist_and_album,
    require_song_parents,
};

use sqlx::{Sqlite, SqlitePool, Transaction};
use tunebase_common::Result;

/// Open a transaction that holds the database write lock from its first statement
pub async fn begin_write(pool: &SqlitePool) -> Result<Transaction<'static, Sqlite>> {
    Ok(pool.begin_with("BEGIN IMMEDIATE").await?)
}
