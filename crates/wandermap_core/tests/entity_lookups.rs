mod common;

use common::{place, place_ids, trip, FixedClock, FROZEN_AT};
use wandermap_core::{
    Activity, ActivityDraft, ActivityService, EntityStore, Itinerary, ItineraryService,
    LatencyProfile, PlaceService, SeedData, TravelServices,
};

fn itinerary(id: &str, trip_id: &str) -> Itinerary {
    Itinerary {
        id: id.to_string(),
        trip_id: trip_id.to_string(),
        ..Itinerary::default()
    }
}

fn activity(id: &str, itinerary_id: &str, title: &str) -> Activity {
    Activity {
        id: id.to_string(),
        itinerary_id: itinerary_id.to_string(),
        title: title.to_string(),
        ..Activity::default()
    }
}

fn place_service() -> PlaceService<FixedClock> {
    PlaceService::new(EntityStore::new(
        vec![
            place("1", "Louvre", "Rue de Rivoli, Paris", "museum"),
            place("2", "Cafe de Flore", "172 Bd Saint-Germain, Paris", "restaurant"),
            place("3", "Tokyo National Museum", "13-9 Uenokoen, Tokyo", "museum"),
            place("4", "Sky Tree", "1-1-2 Oshiage, Sumida City", "Museum"),
        ],
        LatencyProfile::instant(),
        FixedClock::at(FROZEN_AT),
    ))
}

#[tokio::test]
async fn itineraries_are_found_by_trip_id_in_collection_order() {
    let service = ItineraryService::new(EntityStore::new(
        vec![
            itinerary("10", "1000"),
            itinerary("11", "2000"),
            itinerary("12", "1000"),
        ],
        LatencyProfile::instant(),
        FixedClock::at(FROZEN_AT),
    ));

    let found = service.get_by_trip_id("1000").await;
    let ids: Vec<&str> = found.iter().map(|itinerary| itinerary.id.as_str()).collect();
    assert_eq!(ids, ["10", "12"]);
    assert!(service.get_by_trip_id("3000").await.is_empty());
}

#[tokio::test]
async fn activities_are_found_by_itinerary_id() {
    let service = ActivityService::new(EntityStore::new(
        vec![
            activity("20", "10", "Louvre"),
            activity("21", "11", "Sushi"),
        ],
        LatencyProfile::instant(),
        FixedClock::at(FROZEN_AT),
    ));
    let created = service
        .create(ActivityDraft {
            itinerary_id: "10".to_string(),
            title: "Seine cruise".to_string(),
            ..ActivityDraft::default()
        })
        .await;

    let found = service.get_by_itinerary_id("10").await;
    let titles: Vec<&str> = found.iter().map(|activity| activity.title.as_str()).collect();
    assert_eq!(titles, ["Louvre", "Seine cruise"]);
    assert_eq!(found[1].id, created.id);
}

#[tokio::test]
async fn category_lookup_is_exact() {
    let service = place_service();
    assert_eq!(place_ids(&service.get_by_category("museum").await), ["1", "3"]);
    assert_eq!(place_ids(&service.get_by_category("Museum").await), ["4"]);
    assert!(service.get_by_category("muse").await.is_empty());
}

#[tokio::test]
async fn name_search_covers_name_and_address_ignoring_case() {
    let service = place_service();
    assert_eq!(place_ids(&service.search_by_name("PARIS").await), ["1", "2"]);
    assert_eq!(place_ids(&service.search_by_name("museum").await), ["3"]);
    assert_eq!(place_ids(&service.search_by_name("oshiage").await), ["4"]);
    assert_eq!(service.search_by_name("").await.len(), 4);
    assert!(service.search_by_name("berlin").await.is_empty());
}

#[tokio::test]
async fn lookup_results_are_copies() {
    let service = place_service();
    let mut found = service.get_by_category("museum").await;
    found[0].name = "Renamed".to_string();

    assert_eq!(service.get_by_id("1").await.unwrap().name, "Louvre");
}

#[tokio::test]
async fn deleting_a_trip_leaves_its_itineraries_orphaned() {
    let seed = SeedData {
        trips: vec![trip("1000", "Paris Trip", "Paris")],
        itineraries: vec![itinerary("10", "1000"), itinerary("11", "1000")],
        ..SeedData::default()
    };
    let services =
        TravelServices::from_seed(seed, LatencyProfile::instant(), FixedClock::at(FROZEN_AT));

    services.trips.delete("1000").await.unwrap();

    assert!(services.trips.get_by_id("1000").await.is_none());
    assert_eq!(services.itineraries.get_by_trip_id("1000").await.len(), 2);
}

#[tokio::test]
async fn foreign_keys_are_not_validated_on_create() {
    let services = TravelServices::from_seed(
        SeedData::default(),
        LatencyProfile::instant(),
        FixedClock::at(FROZEN_AT),
    );

    let orphan = services
        .activities
        .create(ActivityDraft {
            itinerary_id: "does-not-exist".to_string(),
            ..ActivityDraft::default()
        })
        .await;

    assert_eq!(
        services.activities.get_by_itinerary_id("does-not-exist").await,
        vec![orphan]
    );
}
