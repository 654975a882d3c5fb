//! Integration tests for the artists vertical slice
//!
//! Covers artist CRUD, the non-empty genres invariant, and the detail view
//! with venue-side show entries.

mod test_helpers;

use chrono::Utc;
use showbill_core::types::*;
use showbill_core::ShowbillError;
use test_helpers::*;

#[tokio::test]
async fn test_create_and_reload_artist_roundtrip() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let created = showbill_storage::artists::create(
        pool,
        CreateArtist {
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "326-123-5000".to_string(),
            genres: vec![
                "Rock n Roll".to_string(),
                "Classical".to_string(),
                "Jazz".to_string(),
            ],
            image_link: "https://images.example.com/guns-n-petals.jpg".to_string(),
            website: Some("https://gunsnpetalsband.com".to_string()),
            facebook_link: None,
            seeking_venue: true,
            seeking_description: Some("Looking for shows to perform at".to_string()),
        },
    )
    .await
    .expect("Failed to create artist");

    let reloaded = showbill_storage::artists::get_by_id(pool, created.id)
        .await
        .expect("Failed to get artist")
        .expect("Artist not found");

    assert_eq!(reloaded.name, "Guns N Petals");
    assert_eq!(reloaded.phone, "326-123-5000");
    // Genre order survives the round-trip
    assert_eq!(reloaded.genres, vec!["Rock n Roll", "Classical", "Jazz"]);
    assert_eq!(
        reloaded.website,
        Some("https://gunsnpetalsband.com".to_string())
    );
    assert!(reloaded.seeking_venue);
}

#[tokio::test]
async fn test_empty_genres_rejected() {
    let test_db = TestDb::new().await;

    let mut artist = artist_fixture("Guns N Petals");
    artist.genres.clear();

    let result = showbill_storage::artists::create(test_db.pool(), artist).await;

    assert!(matches!(result, Err(ShowbillError::InvalidInput(_))));
}

#[tokio::test]
async fn test_get_artist_nonexistent_returns_none() {
    let test_db = TestDb::new().await;

    let artist = showbill_storage::artists::get_by_id(test_db.pool(), 9999)
        .await
        .expect("Query failed");

    assert!(artist.is_none());
}

#[tokio::test]
async fn test_artist_summary_projection() {
    let test_db = TestDb::new().await;

    let artist = showbill_storage::artists::create(test_db.pool(), artist_fixture("The Wild Sax Band"))
        .await
        .unwrap();

    assert_eq!(
        artist.summary(),
        ArtistSummary {
            id: artist.id,
            name: "The Wild Sax Band".to_string(),
        }
    );
}

#[tokio::test]
async fn test_search_artists_by_substring() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    showbill_storage::artists::create(pool, artist_fixture("The Wild Sax Band"))
        .await
        .unwrap();
    showbill_storage::artists::create(pool, artist_fixture("Matt Quevedo"))
        .await
        .unwrap();

    let hits = showbill_storage::artists::search(pool, "band")
        .await
        .expect("Search failed");

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "The Wild Sax Band");
}

#[tokio::test]
async fn test_update_artist_genres() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let artist = showbill_storage::artists::create(pool, artist_fixture("Matt Quevedo"))
        .await
        .unwrap();

    let updated = showbill_storage::artists::update(
        pool,
        artist.id,
        UpdateArtist {
            genres: Some(vec!["Folk".to_string()]),
            ..UpdateArtist::default()
        },
    )
    .await
    .expect("Failed to update artist");

    assert_eq!(updated.genres, vec!["Folk"]);
    assert_eq!(updated.name, "Matt Quevedo");
}

#[tokio::test]
async fn test_update_artist_empty_genres_rejected() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let artist = showbill_storage::artists::create(pool, artist_fixture("Matt Quevedo"))
        .await
        .unwrap();

    let result = showbill_storage::artists::update(
        pool,
        artist.id,
        UpdateArtist {
            genres: Some(Vec::new()),
            ..UpdateArtist::default()
        },
    )
    .await;

    assert!(matches!(result, Err(ShowbillError::InvalidInput(_))));
}

#[tokio::test]
async fn test_update_missing_artist_not_found() {
    let test_db = TestDb::new().await;

    let result = showbill_storage::artists::update(
        test_db.pool(),
        424242,
        UpdateArtist {
            city: Some("Oakland".to_string()),
            ..UpdateArtist::default()
        },
    )
    .await;

    assert!(matches!(result, Err(ShowbillError::ArtistNotFound(424242))));
}

#[tokio::test]
async fn test_delete_artist_cascades_to_shows() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let venue = showbill_storage::venues::create(pool, venue_fixture("The Musical Hop"))
        .await
        .unwrap();
    let artist = showbill_storage::artists::create(pool, artist_fixture("Matt Quevedo"))
        .await
        .unwrap();
    let show_id = create_test_show(pool, venue.id, artist.id, hours_from_now(24)).await;

    showbill_storage::artists::delete(pool, artist.id)
        .await
        .expect("Failed to delete artist");

    let show = showbill_storage::shows::get_by_id(pool, show_id)
        .await
        .expect("Query failed");
    assert!(show.is_none(), "Deleting an artist removes its shows");

    let venue = showbill_storage::venues::get_by_id(pool, venue.id)
        .await
        .expect("Query failed");
    assert!(venue.is_some());
}

#[tokio::test]
async fn test_artist_details_counts_and_entries() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let venue = showbill_storage::venues::create(pool, venue_fixture("Park Square Live Music & Coffee"))
        .await
        .unwrap();
    let artist = showbill_storage::artists::create(pool, artist_fixture("The Wild Sax Band"))
        .await
        .unwrap();

    create_test_show(pool, venue.id, artist.id, hours_from_now(-24)).await;
    create_test_show(pool, venue.id, artist.id, hours_from_now(48)).await;
    create_test_show(pool, venue.id, artist.id, hours_from_now(96)).await;

    let details = showbill_storage::artists::get_details(pool, artist.id, Utc::now())
        .await
        .expect("Failed to get details")
        .expect("Artist not found");

    assert_eq!(details.past_shows_count, 1);
    assert_eq!(details.upcoming_shows_count, 2);
    assert_eq!(details.genres, vec!["Rock", "Jazz"]);

    let entry = &details.past_shows[0];
    assert_eq!(entry.venue_id, venue.id);
    assert_eq!(entry.venue_name, "Park Square Live Music & Coffee");
    assert_eq!(entry.venue_image_link, "https://images.example.com/venue.jpg");
}

#[tokio::test]
async fn test_artist_details_nonexistent_returns_none() {
    let test_db = TestDb::new().await;

    let details = showbill_storage::artists::get_details(test_db.pool(), 9999, Utc::now())
        .await
        .expect("Query failed");

    assert!(details.is_none());
}
