//! Venue types

use serde::{Deserialize, Serialize};

use super::ArtistId;

/// Venue identifier (surrogate key)
pub type VenueId = i64;

/// A place that can host shows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Venue {
    /// City/state projection used to group the directory index
    pub fn city_and_state(&self) -> CityState {
        CityState {
            city: self.city.clone(),
            state: self.state.clone(),
        }
    }
}

/// A city/state pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CityState {
    pub city: String,
    pub state: String,
}

/// Data for creating a new venue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVenue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Data for partially updating a venue (unset fields are left untouched)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateVenue {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: Option<bool>,
    pub seeking_description: Option<String>,
}

/// Venue detail view: static fields plus derived past/upcoming show lists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueDetails {
    pub id: VenueId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: String,
    pub past_shows: Vec<VenueShowEntry>,
    pub upcoming_shows: Vec<VenueShowEntry>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// One show on a venue's detail page (artist-side fields, display-formatted time)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueShowEntry {
    pub artist_id: ArtistId,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: String,
}
