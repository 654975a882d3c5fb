use chrono::{DateTime, Utc};
use showbill_core::{error::Result, types::*, ShowbillError};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use crate::{artists, venues};

fn show_from_row(row: &SqliteRow) -> Result<Show> {
    let start_secs: i64 = row.get("start_time");
    Ok(Show {
        id: row.get("id"),
        start_time: DateTime::from_timestamp(start_secs, 0)
            .ok_or_else(|| ShowbillError::storage("Invalid timestamp"))?,
        venue_id: row.get("venue_id"),
        artist_id: row.get("artist_id"),
        created_at: row.get("created_at"),
    })
}

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Show>> {
    let rows = sqlx::query(
        "SELECT id, start_time, venue_id, artist_id, created_at
         FROM shows
         ORDER BY start_time",
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(show_from_row).collect()
}

pub async fn get_by_id(pool: &SqlitePool, id: ShowId) -> Result<Option<Show>> {
    let row = sqlx::query(
        "SELECT id, start_time, venue_id, artist_id, created_at
         FROM shows
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(show_from_row).transpose()
}

/// Create a show. A venue or artist id that references no existing row is
/// rejected by the store's foreign keys.
pub async fn create(pool: &SqlitePool, show: CreateShow) -> Result<Show> {
    let result = sqlx::query(
        "INSERT INTO shows (venue_id, artist_id, start_time)
         VALUES (?, ?, ?)",
    )
    .bind(show.venue_id)
    .bind(show.artist_id)
    .bind(show.start_time.timestamp())
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| ShowbillError::storage("Failed to retrieve created show"))
}

pub async fn delete(pool: &SqlitePool, id: ShowId) -> Result<()> {
    let result = sqlx::query("DELETE FROM shows WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ShowbillError::ShowNotFound(id));
    }

    Ok(())
}

/// Shows at a venue that started strictly before `now`.
///
/// Comparisons are strict on both sides: a show starting exactly at `now`
/// is neither past nor upcoming. No ordering is applied.
pub async fn past_for_venue(
    pool: &SqlitePool,
    venue_id: VenueId,
    now: DateTime<Utc>,
) -> Result<Vec<Show>> {
    let rows = sqlx::query(
        "SELECT id, start_time, venue_id, artist_id, created_at
         FROM shows
         WHERE start_time < ? AND venue_id = ?",
    )
    .bind(now.timestamp())
    .bind(venue_id)
    .fetch_all(pool)
    .await?;

    rows.iter().map(show_from_row).collect()
}

/// Shows at a venue that start strictly after `now`.
pub async fn upcoming_for_venue(
    pool: &SqlitePool,
    venue_id: VenueId,
    now: DateTime<Utc>,
) -> Result<Vec<Show>> {
    let rows = sqlx::query(
        "SELECT id, start_time, venue_id, artist_id, created_at
         FROM shows
         WHERE start_time > ? AND venue_id = ?",
    )
    .bind(now.timestamp())
    .bind(venue_id)
    .fetch_all(pool)
    .await?;

    rows.iter().map(show_from_row).collect()
}

/// Shows by an artist that started strictly before `now`.
pub async fn past_for_artist(
    pool: &SqlitePool,
    artist_id: ArtistId,
    now: DateTime<Utc>,
) -> Result<Vec<Show>> {
    let rows = sqlx::query(
        "SELECT id, start_time, venue_id, artist_id, created_at
         FROM shows
         WHERE start_time < ? AND artist_id = ?",
    )
    .bind(now.timestamp())
    .bind(artist_id)
    .fetch_all(pool)
    .await?;

    rows.iter().map(show_from_row).collect()
}

/// Shows by an artist that start strictly after `now`.
pub async fn upcoming_for_artist(
    pool: &SqlitePool,
    artist_id: ArtistId,
    now: DateTime<Utc>,
) -> Result<Vec<Show>> {
    let rows = sqlx::query(
        "SELECT id, start_time, venue_id, artist_id, created_at
         FROM shows
         WHERE start_time > ? AND artist_id = ?",
    )
    .bind(now.timestamp())
    .bind(artist_id)
    .fetch_all(pool)
    .await?;

    rows.iter().map(show_from_row).collect()
}

/// Flattened view of `show` if it starts strictly after `now`, `None`
/// otherwise.
///
/// The venue and artist are looked up by id rather than joined; with
/// foreign keys enforced a missing counterpart means the row was tampered
/// with out-of-band, and surfaces as a not-found error.
pub async fn upcoming(
    pool: &SqlitePool,
    show: &Show,
    now: DateTime<Utc>,
) -> Result<Option<UpcomingShow>> {
    let venue = venues::get_by_id(pool, show.venue_id)
        .await?
        .ok_or(ShowbillError::VenueNotFound(show.venue_id))?;
    let artist = artists::get_by_id(pool, show.artist_id)
        .await?
        .ok_or(ShowbillError::ArtistNotFound(show.artist_id))?;

    if show.start_time > now {
        Ok(Some(UpcomingShow {
            venue_id: show.venue_id,
            venue_name: venue.name,
            artist_id: show.artist_id,
            artist_name: artist.name,
            artist_image_link: artist.image_link,
            start_time: show.display_start_time(),
        }))
    } else {
        Ok(None)
    }
}
