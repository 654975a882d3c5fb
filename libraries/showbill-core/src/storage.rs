//! Storage trait for the booking directory

use crate::error::Result;
use crate::types::{
    Artist, ArtistDetails, ArtistId, CreateArtist, CreateShow, CreateVenue, Show, ShowId,
    UpcomingShow, UpdateArtist, UpdateVenue, Venue, VenueDetails, VenueId,
};
use async_trait::async_trait;

/// Storage context providing access to the directory's database operations
///
/// This trait abstracts storage operations so the presentation layer can sit
/// on either the local `SQLite` implementation or a remote one.
#[async_trait]
pub trait StorageContext: Send + Sync {
    // ========================================================================
    // Venues
    // ========================================================================

    /// Get all venues
    async fn get_all_venues(&self) -> Result<Vec<Venue>>;

    /// Get venue by ID
    async fn get_venue_by_id(&self, id: VenueId) -> Result<Option<Venue>>;

    /// Find venue by exact name
    async fn find_venue_by_name(&self, name: &str) -> Result<Option<Venue>>;

    /// Search venues by case-insensitive name substring
    async fn search_venues(&self, query: &str) -> Result<Vec<Venue>>;

    /// Create a new venue
    async fn create_venue(&self, venue: CreateVenue) -> Result<Venue>;

    /// Update a venue
    async fn update_venue(&self, id: VenueId, venue: UpdateVenue) -> Result<Venue>;

    /// Delete a venue (its shows go with it)
    async fn delete_venue(&self, id: VenueId) -> Result<()>;

    /// Detail view: venue fields plus past/upcoming show lists and counts
    async fn get_venue_details(&self, id: VenueId) -> Result<Option<VenueDetails>>;

    /// Convenience alias for `get_venue_by_id`
    async fn get_venue(&self, id: VenueId) -> Result<Option<Venue>> {
        self.get_venue_by_id(id).await
    }

    // ========================================================================
    // Artists
    // ========================================================================

    /// Get all artists
    async fn get_all_artists(&self) -> Result<Vec<Artist>>;

    /// Get artist by ID
    async fn get_artist_by_id(&self, id: ArtistId) -> Result<Option<Artist>>;

    /// Find artist by exact name
    async fn find_artist_by_name(&self, name: &str) -> Result<Option<Artist>>;

    /// Search artists by case-insensitive name substring
    async fn search_artists(&self, query: &str) -> Result<Vec<Artist>>;

    /// Create a new artist
    async fn create_artist(&self, artist: CreateArtist) -> Result<Artist>;

    /// Update an artist
    async fn update_artist(&self, id: ArtistId, artist: UpdateArtist) -> Result<Artist>;

    /// Delete an artist (its shows go with it)
    async fn delete_artist(&self, id: ArtistId) -> Result<()>;

    /// Detail view: artist fields plus past/upcoming show lists and counts
    async fn get_artist_details(&self, id: ArtistId) -> Result<Option<ArtistDetails>>;

    /// Convenience alias for `get_artist_by_id`
    async fn get_artist(&self, id: ArtistId) -> Result<Option<Artist>> {
        self.get_artist_by_id(id).await
    }

    // ========================================================================
    // Shows
    // ========================================================================

    /// Get all shows
    async fn get_all_shows(&self) -> Result<Vec<Show>>;

    /// Get show by ID
    async fn get_show_by_id(&self, id: ShowId) -> Result<Option<Show>>;

    /// Create a new show
    async fn create_show(&self, show: CreateShow) -> Result<Show>;

    /// Delete a show
    async fn delete_show(&self, id: ShowId) -> Result<()>;

    /// Shows at a venue that started before now
    async fn past_shows_for_venue(&self, venue_id: VenueId) -> Result<Vec<Show>>;

    /// Shows at a venue that start after now
    async fn upcoming_shows_for_venue(&self, venue_id: VenueId) -> Result<Vec<Show>>;

    /// Shows by an artist that started before now
    async fn past_shows_for_artist(&self, artist_id: ArtistId) -> Result<Vec<Show>>;

    /// Shows by an artist that start after now
    async fn upcoming_shows_for_artist(&self, artist_id: ArtistId) -> Result<Vec<Show>>;

    /// Flattened view of a show if it has not started yet, `None` otherwise
    async fn show_upcoming(&self, show: &Show) -> Result<Option<UpcomingShow>>;
}
