//! Show types
//!
//! A show joins one artist to one venue at a start time. Whether a show is
//! past or upcoming is derived from the start time at query time, never
//! stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ArtistId, VenueId};

/// Show identifier (surrogate key)
pub type ShowId = i64;

/// Display format for show start times
pub const START_TIME_FORMAT: &str = "%m/%d/%Y, %H:%M";

/// A scheduled appearance of one artist at one venue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Show {
    pub id: ShowId,
    pub start_time: DateTime<Utc>,
    pub venue_id: VenueId,
    pub artist_id: ArtistId,
    pub created_at: String,
}

impl Show {
    /// Start time rendered for display (`MM/DD/YYYY, HH:MM`)
    pub fn display_start_time(&self) -> String {
        self.start_time.format(START_TIME_FORMAT).to_string()
    }
}

/// Data for creating a new show
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShow {
    pub venue_id: VenueId,
    pub artist_id: ArtistId,
    pub start_time: DateTime<Utc>,
}

/// Flattened view of a show that has not started yet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpcomingShow {
    pub venue_id: VenueId,
    pub venue_name: String,
    pub artist_id: ArtistId,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: String,
}
