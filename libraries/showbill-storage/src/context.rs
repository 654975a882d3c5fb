use crate::{artists, shows, venues};
use async_trait::async_trait;
use chrono::Utc;
use showbill_core::{error::Result, storage::StorageContext, types::*};
use sqlx::SqlitePool;

/// Local storage context using `SQLite`
///
/// Supplies the wall clock to the time-classified queries; everything else
/// delegates straight to the vertical slices.
pub struct LocalStorageContext {
    pool: SqlitePool,
}

impl LocalStorageContext {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl StorageContext for LocalStorageContext {
    // Venues
    async fn get_all_venues(&self) -> Result<Vec<Venue>> {
        venues::get_all(&self.pool).await
    }

    async fn get_venue_by_id(&self, id: VenueId) -> Result<Option<Venue>> {
        venues::get_by_id(&self.pool, id).await
    }

    async fn find_venue_by_name(&self, name: &str) -> Result<Option<Venue>> {
        venues::find_by_name(&self.pool, name).await
    }

    async fn search_venues(&self, query: &str) -> Result<Vec<Venue>> {
        venues::search(&self.pool, query).await
    }

    async fn create_venue(&self, venue: CreateVenue) -> Result<Venue> {
        venues::create(&self.pool, venue).await
    }

    async fn update_venue(&self, id: VenueId, venue: UpdateVenue) -> Result<Venue> {
        venues::update(&self.pool, id, venue).await
    }

    async fn delete_venue(&self, id: VenueId) -> Result<()> {
        venues::delete(&self.pool, id).await
    }

    async fn get_venue_details(&self, id: VenueId) -> Result<Option<VenueDetails>> {
        venues::get_details(&self.pool, id, Utc::now()).await
    }

    // Artists
    async fn get_all_artists(&self) -> Result<Vec<Artist>> {
        artists::get_all(&self.pool).await
    }

    async fn get_artist_by_id(&self, id: ArtistId) -> Result<Option<Artist>> {
        artists::get_by_id(&self.pool, id).await
    }

    async fn find_artist_by_name(&self, name: &str) -> Result<Option<Artist>> {
        artists::find_by_name(&self.pool, name).await
    }

    async fn search_artists(&self, query: &str) -> Result<Vec<Artist>> {
        artists::search(&self.pool, query).await
    }

    async fn create_artist(&self, artist: CreateArtist) -> Result<Artist> {
        artists::create(&self.pool, artist).await
    }

    async fn update_artist(&self, id: ArtistId, artist: UpdateArtist) -> Result<Artist> {
        artists::update(&self.pool, id, artist).await
    }

    async fn delete_artist(&self, id: ArtistId) -> Result<()> {
        artists::delete(&self.pool, id).await
    }

    async fn get_artist_details(&self, id: ArtistId) -> Result<Option<ArtistDetails>> {
        artists::get_details(&self.pool, id, Utc::now()).await
    }

    // Shows
    async fn get_all_shows(&self) -> Result<Vec<Show>> {
        shows::get_all(&self.pool).await
    }

    async fn get_show_by_id(&self, id: ShowId) -> Result<Option<Show>> {
        shows::get_by_id(&self.pool, id).await
    }

    async fn create_show(&self, show: CreateShow) -> Result<Show> {
        shows::create(&self.pool, show).await
    }

    async fn delete_show(&self, id: ShowId) -> Result<()> {
        shows::delete(&self.pool, id).await
    }

    async fn past_shows_for_venue(&self, venue_id: VenueId) -> Result<Vec<Show>> {
        shows::past_for_venue(&self.pool, venue_id, Utc::now()).await
    }

    async fn upcoming_shows_for_venue(&self, venue_id: VenueId) -> Result<Vec<Show>> {
        shows::upcoming_for_venue(&self.pool, venue_id, Utc::now()).await
    }

    async fn past_shows_for_artist(&self, artist_id: ArtistId) -> Result<Vec<Show>> {
        shows::past_for_artist(&self.pool, artist_id, Utc::now()).await
    }

    async fn upcoming_shows_for_artist(&self, artist_id: ArtistId) -> Result<Vec<Show>> {
        shows::upcoming_for_artist(&self.pool, artist_id, Utc::now()).await
    }

    async fn show_upcoming(&self, show: &Show) -> Result<Option<UpcomingShow>> {
        shows::upcoming(&self.pool, show, Utc::now()).await
    }
}
