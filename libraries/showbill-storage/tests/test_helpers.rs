//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using REAL SQLite files (NOT in-memory)
//! to match production behavior and properly test migrations, constraints, and
//! foreign keys.

use chrono::{DateTime, Utc};
use showbill_core::types::*;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let pool = showbill_storage::create_pool(&db_url)
            .await
            .expect("Failed to create pool");

        showbill_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            _temp_dir: temp_dir,
        }
    }

    /// Get the pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Test fixture: a venue create payload with the given name
pub fn venue_fixture(name: &str) -> CreateVenue {
    CreateVenue {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        address: "1015 Folsom Street".to_string(),
        phone: "123-123-1234".to_string(),
        image_link: "https://images.example.com/venue.jpg".to_string(),
        website: Some("https://venue.example.com".to_string()),
        facebook_link: Some("https://facebook.com/venue".to_string()),
        seeking_talent: true,
        seeking_description: Some("Looking for local acts".to_string()),
    }
}

/// Test fixture: an artist create payload with the given name
pub fn artist_fixture(name: &str) -> CreateArtist {
    CreateArtist {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: "326-123-5000".to_string(),
        genres: vec!["Rock".to_string(), "Jazz".to_string()],
        image_link: "https://images.example.com/artist.jpg".to_string(),
        website: None,
        facebook_link: None,
        seeking_venue: true,
        seeking_description: None,
    }
}

/// Test fixture: create a show for the given venue/artist pair
pub async fn create_test_show(
    pool: &SqlitePool,
    venue_id: VenueId,
    artist_id: ArtistId,
    start_time: DateTime<Utc>,
) -> ShowId {
    showbill_storage::shows::create(
        pool,
        CreateShow {
            venue_id,
            artist_id,
            start_time,
        },
    )
    .await
    .expect("Failed to create test show")
    .id
}

/// A timestamp `hours` from now, truncated to whole seconds so it round-trips
/// through the epoch-seconds column exactly
pub fn hours_from_now(hours: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(Utc::now().timestamp() + hours * 3600, 0)
        .expect("timestamp in range")
}
