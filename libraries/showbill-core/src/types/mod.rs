mod artist;
mod show;
mod venue;

pub use artist::{Artist, ArtistDetails, ArtistId, ArtistShowEntry, ArtistSummary, CreateArtist, UpdateArtist};
pub use show::{CreateShow, Show, ShowId, UpcomingShow, START_TIME_FORMAT};
pub use venue::{CityState, CreateVenue, UpdateVenue, Venue, VenueDetails, VenueId, VenueShowEntry};
