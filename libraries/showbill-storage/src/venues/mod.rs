use chrono::{DateTime, Utc};
use showbill_core::{error::Result, types::*, ShowbillError};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

fn venue_from_row(row: &SqliteRow) -> Venue {
    Venue {
        id: row.get("id"),
        name: row.get("name"),
        city: row.get("city"),
        state: row.get("state"),
        address: row.get("address"),
        phone: row.get("phone"),
        image_link: row.get("image_link"),
        website: row.get("website"),
        facebook_link: row.get("facebook_link"),
        seeking_talent: row.get("seeking_talent"),
        seeking_description: row.get("seeking_description"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Venue>> {
    let rows = sqlx::query(
        "SELECT id, name, city, state, address, phone, image_link, website, facebook_link,
                seeking_talent, seeking_description, created_at, updated_at
         FROM venues
         ORDER BY name",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(venue_from_row).collect())
}

pub async fn get_by_id(pool: &SqlitePool, id: VenueId) -> Result<Option<Venue>> {
    let row = sqlx::query(
        "SELECT id, name, city, state, address, phone, image_link, website, facebook_link,
                seeking_talent, seeking_description, created_at, updated_at
         FROM venues
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(venue_from_row))
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Option<Venue>> {
    let row = sqlx::query(
        "SELECT id, name, city, state, address, phone, image_link, website, facebook_link,
                seeking_talent, seeking_description, created_at, updated_at
         FROM venues
         WHERE name = ?",
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(venue_from_row))
}

/// Search venues by name substring (SQLite `LIKE`, case-insensitive for ASCII)
pub async fn search(pool: &SqlitePool, query: &str) -> Result<Vec<Venue>> {
    let search_pattern = format!("%{query}%");

    let rows = sqlx::query(
        "SELECT id, name, city, state, address, phone, image_link, website, facebook_link,
                seeking_talent, seeking_description, created_at, updated_at
         FROM venues
         WHERE name LIKE ?
         ORDER BY name",
    )
    .bind(&search_pattern)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(venue_from_row).collect())
}

/// Create a venue. Duplicate names are rejected by the store's unique
/// constraint and surface as a database error.
pub async fn create(pool: &SqlitePool, venue: CreateVenue) -> Result<Venue> {
    if venue.name.is_empty() {
        return Err(ShowbillError::invalid_input("venue name must not be empty"));
    }

    let result = sqlx::query(
        "INSERT INTO venues (name, city, state, address, phone, image_link, website,
                             facebook_link, seeking_talent, seeking_description)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&venue.name)
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(&venue.image_link)
    .bind(&venue.website)
    .bind(&venue.facebook_link)
    .bind(venue.seeking_talent)
    .bind(&venue.seeking_description)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| ShowbillError::storage("Failed to retrieve created venue"))
}

/// Partial update: only the fields set in `venue` are written.
pub async fn update(pool: &SqlitePool, id: VenueId, venue: UpdateVenue) -> Result<Venue> {
    if let Some(name) = &venue.name {
        if name.is_empty() {
            return Err(ShowbillError::invalid_input("venue name must not be empty"));
        }
    }

    let mut query_parts = Vec::new();

    if venue.name.is_some() {
        query_parts.push("name = ?");
    }
    if venue.city.is_some() {
        query_parts.push("city = ?");
    }
    if venue.state.is_some() {
        query_parts.push("state = ?");
    }
    if venue.address.is_some() {
        query_parts.push("address = ?");
    }
    if venue.phone.is_some() {
        query_parts.push("phone = ?");
    }
    if venue.image_link.is_some() {
        query_parts.push("image_link = ?");
    }
    if venue.website.is_some() {
        query_parts.push("website = ?");
    }
    if venue.facebook_link.is_some() {
        query_parts.push("facebook_link = ?");
    }
    if venue.seeking_talent.is_some() {
        query_parts.push("seeking_talent = ?");
    }
    if venue.seeking_description.is_some() {
        query_parts.push("seeking_description = ?");
    }

    if query_parts.is_empty() {
        return get_by_id(pool, id)
            .await?
            .ok_or(ShowbillError::VenueNotFound(id));
    }

    query_parts.push("updated_at = datetime('now')");

    let query_str = format!("UPDATE venues SET {} WHERE id = ?", query_parts.join(", "));

    let mut query = sqlx::query(&query_str);

    if let Some(name) = &venue.name {
        query = query.bind(name);
    }
    if let Some(city) = &venue.city {
        query = query.bind(city);
    }
    if let Some(state) = &venue.state {
        query = query.bind(state);
    }
    if let Some(address) = &venue.address {
        query = query.bind(address);
    }
    if let Some(phone) = &venue.phone {
        query = query.bind(phone);
    }
    if let Some(image_link) = &venue.image_link {
        query = query.bind(image_link);
    }
    if let Some(website) = &venue.website {
        query = query.bind(website);
    }
    if let Some(facebook_link) = &venue.facebook_link {
        query = query.bind(facebook_link);
    }
    if let Some(seeking_talent) = venue.seeking_talent {
        query = query.bind(seeking_talent);
    }
    if let Some(seeking_description) = &venue.seeking_description {
        query = query.bind(seeking_description);
    }

    query = query.bind(id);

    query.execute(pool).await?;

    get_by_id(pool, id)
        .await?
        .ok_or(ShowbillError::VenueNotFound(id))
}

pub async fn delete(pool: &SqlitePool, id: VenueId) -> Result<()> {
    let result = sqlx::query("DELETE FROM venues WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ShowbillError::VenueNotFound(id));
    }

    Ok(())
}

/// Detail view: venue fields plus past/upcoming show lists and counts,
/// classified against `now`. Loads all matching shows, unpaginated.
pub async fn get_details(
    pool: &SqlitePool,
    id: VenueId,
    now: DateTime<Utc>,
) -> Result<Option<VenueDetails>> {
    let Some(venue) = get_by_id(pool, id).await? else {
        return Ok(None);
    };

    let past_shows = show_entries(pool, id, now, true).await?;
    let upcoming_shows = show_entries(pool, id, now, false).await?;

    Ok(Some(VenueDetails {
        id: venue.id,
        name: venue.name,
        address: venue.address,
        city: venue.city,
        state: venue.state,
        phone: venue.phone,
        website: venue.website,
        facebook_link: venue.facebook_link,
        seeking_talent: venue.seeking_talent,
        seeking_description: venue.seeking_description,
        image_link: venue.image_link,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    }))
}

async fn show_entries(
    pool: &SqlitePool,
    venue_id: VenueId,
    now: DateTime<Utc>,
    past: bool,
) -> Result<Vec<VenueShowEntry>> {
    let sql = if past {
        "SELECT s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link, s.start_time
         FROM shows s
         INNER JOIN artists a ON s.artist_id = a.id
         WHERE s.venue_id = ? AND s.start_time < ?"
    } else {
        "SELECT s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link, s.start_time
         FROM shows s
         INNER JOIN artists a ON s.artist_id = a.id
         WHERE s.venue_id = ? AND s.start_time > ?"
    };

    let rows = sqlx::query(sql)
        .bind(venue_id)
        .bind(now.timestamp())
        .fetch_all(pool)
        .await?;

    rows.iter()
        .map(|row| {
            let start_secs: i64 = row.get("start_time");
            let start = DateTime::from_timestamp(start_secs, 0)
                .ok_or_else(|| ShowbillError::storage("Invalid timestamp"))?;

            Ok(VenueShowEntry {
                artist_id: row.get("artist_id"),
                artist_name: row.get("artist_name"),
                artist_image_link: row.get("artist_image_link"),
                start_time: start.format(START_TIME_FORMAT).to_string(),
            })
        })
        .collect()
}
