//! Showbill Core
//!
//! Platform-agnostic domain types, traits, and error handling for the
//! Showbill booking directory.
//!
//! This crate is the foundation shared by every storage backend and by the
//! presentation layers that sit on top of them.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Venue`, `Artist`, `Show` and their create/update
//!   inputs and display views
//! - **Storage Trait**: `StorageContext`, the seam a backend implements
//! - **Error Handling**: Unified `ShowbillError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use showbill_core::types::{CreateVenue, CreateShow};
//! use chrono::{TimeZone, Utc};
//!
//! let venue = CreateVenue {
//!     name: "The Dueling Pianos Bar".to_string(),
//!     city: "New York".to_string(),
//!     state: "NY".to_string(),
//!     address: "335 Delancey Street".to_string(),
//!     phone: "914-003-1132".to_string(),
//!     image_link: "https://images.example.com/dueling-pianos.jpg".to_string(),
//!     website: None,
//!     facebook_link: None,
//!     seeking_talent: true,
//!     seeking_description: None,
//! };
//!
//! let show = CreateShow {
//!     venue_id: 1,
//!     artist_id: 1,
//!     start_time: Utc.with_ymd_and_hms(2026, 9, 21, 21, 30, 0).unwrap(),
//! };
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{Result, ShowbillError};
pub use storage::StorageContext;

// Export all types
pub use types::{
    // Venue
    Venue, CreateVenue, UpdateVenue, VenueId, VenueDetails, VenueShowEntry, CityState,
    // Artist
    Artist, CreateArtist, UpdateArtist, ArtistId, ArtistDetails, ArtistShowEntry, ArtistSummary,
    // Show
    Show, CreateShow, ShowId, UpcomingShow,
};
