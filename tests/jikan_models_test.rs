//! Jikan wire-format deserialization tests.

use sagasu::modules::catalog::infrastructure::jikan::{
    JikanAnimeData, JikanAnimeListResponse,
};

#[test]
fn full_item_deserializes() {
    let json = r#"{
        "mal_id": 20,
        "title": "Naruto",
        "images": {
            "jpg": {
                "image_url": "https://cdn.myanimelist.net/images/anime/13/17405.jpg",
                "small_image_url": "https://cdn.myanimelist.net/images/anime/13/17405t.jpg",
                "large_image_url": "https://cdn.myanimelist.net/images/anime/13/17405l.jpg"
            },
            "webp": null
        },
        "episodes": 220,
        "status": "Finished Airing",
        "score": 8.01,
        "synopsis": "Moments prior to Naruto Uzumaki's birth...",
        "genres": [
            {"mal_id": 1, "type": "anime", "name": "Action"},
            {"mal_id": 2, "type": "anime", "name": "Adventure"}
        ]
    }"#;

    let anime: JikanAnimeData = serde_json::from_str(json).unwrap();
    assert_eq!(anime.mal_id, 20);
    assert_eq!(anime.title, "Naruto");
    assert_eq!(anime.episodes, Some(220));
    assert_eq!(anime.genres.len(), 2);
    assert_eq!(anime.genres[0].name, "Action");
}

#[test]
fn optional_fields_may_be_null() {
    let json = r#"{
        "mal_id": 21,
        "title": "Airing Show",
        "images": {"jpg": {"image_url": null, "small_image_url": null, "large_image_url": null}},
        "episodes": null,
        "status": null,
        "score": null,
        "synopsis": null,
        "genres": []
    }"#;

    let anime: JikanAnimeData = serde_json::from_str(json).unwrap();
    assert!(anime.episodes.is_none());
    assert!(anime.score.is_none());
    assert!(anime.synopsis.is_none());
    assert!(anime.images.jpg.image_url.is_none());
}

#[test]
fn missing_optional_keys_do_not_fail_the_item() {
    // Sparse payloads omit keys entirely rather than sending null.
    let json = r#"{
        "mal_id": 22,
        "title": "Sparse",
        "images": {"jpg": {}}
    }"#;

    let anime: JikanAnimeData = serde_json::from_str(json).unwrap();
    assert!(anime.episodes.is_none());
    assert!(anime.genres.is_empty());
}

#[test]
fn list_response_with_pagination() {
    let json = r#"{
        "data": [
            {"mal_id": 1, "title": "A", "images": {"jpg": {}}},
            {"mal_id": 2, "title": "B", "images": {"jpg": {}}}
        ],
        "pagination": {"current_page": 1, "has_next_page": true}
    }"#;

    let response: JikanAnimeListResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.data.len(), 2);
    let pagination = response.pagination.unwrap();
    assert_eq!(pagination.current_page, 1);
    assert!(pagination.has_next_page);
}

#[test]
fn list_response_without_pagination() {
    let json = r#"{"data": []}"#;
    let response: JikanAnimeListResponse = serde_json::from_str(json).unwrap();
    assert!(response.data.is_empty());
    assert!(response.pagination.is_none());
}

#[test]
fn extra_unknown_keys_are_ignored() {
    let json = r#"{
        "mal_id": 23,
        "title": "Future Proof",
        "images": {"jpg": {}},
        "rank": 12,
        "members": 100000,
        "broadcast": {"day": "Saturday"}
    }"#;

    let anime: JikanAnimeData = serde_json::from_str(json).unwrap();
    assert_eq!(anime.title, "Future Proof");
}

#[test]
fn wrong_types_are_rejected() {
    let json = r#"{"mal_id": "not a number", "title": "Bad", "images": {"jpg": {}}}"#;
    assert!(serde_json::from_str::<JikanAnimeData>(json).is_err());
}
