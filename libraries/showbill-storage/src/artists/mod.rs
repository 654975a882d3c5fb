use chrono::{DateTime, Utc};
use showbill_core::{error::Result, types::*, ShowbillError};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

// The genres column holds a JSON array, decoded back into the ordered list.
fn artist_from_row(row: &SqliteRow) -> Result<Artist> {
    let genres_json: String = row.get("genres");

    Ok(Artist {
        id: row.get("id"),
        name: row.get("name"),
        city: row.get("city"),
        state: row.get("state"),
        phone: row.get("phone"),
        genres: serde_json::from_str(&genres_json)?,
        image_link: row.get("image_link"),
        website: row.get("website"),
        facebook_link: row.get("facebook_link"),
        seeking_venue: row.get("seeking_venue"),
        seeking_description: row.get("seeking_description"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Artist>> {
    let rows = sqlx::query(
        "SELECT id, name, city, state, phone, genres, image_link, website, facebook_link,
                seeking_venue, seeking_description, created_at, updated_at
         FROM artists
         ORDER BY name",
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(artist_from_row).collect()
}

pub async fn get_by_id(pool: &SqlitePool, id: ArtistId) -> Result<Option<Artist>> {
    let row = sqlx::query(
        "SELECT id, name, city, state, phone, genres, image_link, website, facebook_link,
                seeking_venue, seeking_description, created_at, updated_at
         FROM artists
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(artist_from_row).transpose()
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Option<Artist>> {
    let row = sqlx::query(
        "SELECT id, name, city, state, phone, genres, image_link, website, facebook_link,
                seeking_venue, seeking_description, created_at, updated_at
         FROM artists
         WHERE name = ?",
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(artist_from_row).transpose()
}

/// Search artists by name substring (SQLite `LIKE`, case-insensitive for ASCII)
pub async fn search(pool: &SqlitePool, query: &str) -> Result<Vec<Artist>> {
    let search_pattern = format!("%{query}%");

    let rows = sqlx::query(
        "SELECT id, name, city, state, phone, genres, image_link, website, facebook_link,
                seeking_venue, seeking_description, created_at, updated_at
         FROM artists
         WHERE name LIKE ?
         ORDER BY name",
    )
    .bind(&search_pattern)
    .fetch_all(pool)
    .await?;

    rows.iter().map(artist_from_row).collect()
}

/// Create an artist. The genres list must not be empty.
pub async fn create(pool: &SqlitePool, artist: CreateArtist) -> Result<Artist> {
    if artist.genres.is_empty() {
        return Err(ShowbillError::invalid_input(
            "artist genres must not be empty",
        ));
    }

    let genres_json = serde_json::to_string(&artist.genres)?;

    let result = sqlx::query(
        "INSERT INTO artists (name, city, state, phone, genres, image_link, website,
                              facebook_link, seeking_venue, seeking_description)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&artist.name)
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(&genres_json)
    .bind(&artist.image_link)
    .bind(&artist.website)
    .bind(&artist.facebook_link)
    .bind(artist.seeking_venue)
    .bind(&artist.seeking_description)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| ShowbillError::storage("Failed to retrieve created artist"))
}

/// Partial update: only the fields set in `artist` are written.
pub async fn update(pool: &SqlitePool, id: ArtistId, artist: UpdateArtist) -> Result<Artist> {
    if let Some(genres) = &artist.genres {
        if genres.is_empty() {
            return Err(ShowbillError::invalid_input(
                "artist genres must not be empty",
            ));
        }
    }

    let mut query_parts = Vec::new();

    if artist.name.is_some() {
        query_parts.push("name = ?");
    }
    if artist.city.is_some() {
        query_parts.push("city = ?");
    }
    if artist.state.is_some() {
        query_parts.push("state = ?");
    }
    if artist.phone.is_some() {
        query_parts.push("phone = ?");
    }
    if artist.genres.is_some() {
        query_parts.push("genres = ?");
    }
    if artist.image_link.is_some() {
        query_parts.push("image_link = ?");
    }
    if artist.website.is_some() {
        query_parts.push("website = ?");
    }
    if artist.facebook_link.is_some() {
        query_parts.push("facebook_link = ?");
    }
    if artist.seeking_venue.is_some() {
        query_parts.push("seeking_venue = ?");
    }
    if artist.seeking_description.is_some() {
        query_parts.push("seeking_description = ?");
    }

    if query_parts.is_empty() {
        return get_by_id(pool, id)
            .await?
            .ok_or(ShowbillError::ArtistNotFound(id));
    }

    query_parts.push("updated_at = datetime('now')");

    let query_str = format!("UPDATE artists SET {} WHERE id = ?", query_parts.join(", "));

    let mut query = sqlx::query(&query_str);

    if let Some(name) = &artist.name {
        query = query.bind(name);
    }
    if let Some(city) = &artist.city {
        query = query.bind(city);
    }
    if let Some(state) = &artist.state {
        query = query.bind(state);
    }
    if let Some(phone) = &artist.phone {
        query = query.bind(phone);
    }
    if let Some(genres) = &artist.genres {
        query = query.bind(serde_json::to_string(genres)?);
    }
    if let Some(image_link) = &artist.image_link {
        query = query.bind(image_link);
    }
    if let Some(website) = &artist.website {
        query = query.bind(website);
    }
    if let Some(facebook_link) = &artist.facebook_link {
        query = query.bind(facebook_link);
    }
    if let Some(seeking_venue) = artist.seeking_venue {
        query = query.bind(seeking_venue);
    }
    if let Some(seeking_description) = &artist.seeking_description {
        query = query.bind(seeking_description);
    }

    query = query.bind(id);

    query.execute(pool).await?;

    get_by_id(pool, id)
        .await?
        .ok_or(ShowbillError::ArtistNotFound(id))
}

pub async fn delete(pool: &SqlitePool, id: ArtistId) -> Result<()> {
    let result = sqlx::query("DELETE FROM artists WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ShowbillError::ArtistNotFound(id));
    }

    Ok(())
}

/// Detail view: artist fields plus past/upcoming show lists and counts,
/// classified against `now`. Loads all matching shows, unpaginated.
pub async fn get_details(
    pool: &SqlitePool,
    id: ArtistId,
    now: DateTime<Utc>,
) -> Result<Option<ArtistDetails>> {
    let Some(artist) = get_by_id(pool, id).await? else {
        return Ok(None);
    };

    let past_shows = show_entries(pool, id, now, true).await?;
    let upcoming_shows = show_entries(pool, id, now, false).await?;

    Ok(Some(ArtistDetails {
        id: artist.id,
        name: artist.name,
        city: artist.city,
        state: artist.state,
        phone: artist.phone,
        genres: artist.genres,
        website: artist.website,
        facebook_link: artist.facebook_link,
        seeking_venue: artist.seeking_venue,
        seeking_description: artist.seeking_description,
        image_link: artist.image_link,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    }))
}

async fn show_entries(
    pool: &SqlitePool,
    artist_id: ArtistId,
    now: DateTime<Utc>,
    past: bool,
) -> Result<Vec<ArtistShowEntry>> {
    let sql = if past {
        "SELECT s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link, s.start_time
         FROM shows s
         INNER JOIN venues v ON s.venue_id = v.id
         WHERE s.artist_id = ? AND s.start_time < ?"
    } else {
        "SELECT s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link, s.start_time
         FROM shows s
         INNER JOIN venues v ON s.venue_id = v.id
         WHERE s.artist_id = ? AND s.start_time > ?"
    };

    let rows = sqlx::query(sql)
        .bind(artist_id)
        .bind(now.timestamp())
        .fetch_all(pool)
        .await?;

    rows.iter()
        .map(|row| {
            let start_secs: i64 = row.get("start_time");
            let start = DateTime::from_timestamp(start_secs, 0)
                .ok_or_else(|| ShowbillError::storage("Invalid timestamp"))?;

            Ok(ArtistShowEntry {
                venue_id: row.get("venue_id"),
                venue_name: row.get("venue_name"),
                venue_image_link: row.get("venue_image_link"),
                start_time: start.format(START_TIME_FORMAT).to_string(),
            })
        })
        .collect()
}
