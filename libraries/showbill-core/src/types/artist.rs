//! Artist types

use serde::{Deserialize, Serialize};

use super::VenueId;

/// Artist identifier (surrogate key)
pub type ArtistId = i64;

/// A performer, seeking or not seeking venues
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: String,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Artist {
    /// Id/name projection used by listing pages
    pub fn summary(&self) -> ArtistSummary {
        ArtistSummary {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// Id/name pair for artist listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistSummary {
    pub id: ArtistId,
    pub name: String,
}

/// Data for creating a new artist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateArtist {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: String,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// Data for partially updating an artist (unset fields are left untouched)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateArtist {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub genres: Option<Vec<String>>,
    pub image_link: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: Option<bool>,
    pub seeking_description: Option<String>,
}

/// Artist detail view: static fields plus derived past/upcoming show lists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistDetails {
    pub id: ArtistId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: String,
    pub past_shows: Vec<ArtistShowEntry>,
    pub upcoming_shows: Vec<ArtistShowEntry>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// One show on an artist's detail page (venue-side fields, display-formatted time)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistShowEntry {
    pub venue_id: VenueId,
    pub venue_name: String,
    pub venue_image_link: String,
    pub start_time: String,
}
