//! Handler tests without a server: input → `ApiResponse`.

use movies_api::handlers::{self, ListQuery};
use movies_api::{ApiError, ApiResponse, MovieStore};
use serde_json::json;

use crate::support::{ids, new_movie_body, store, DARK_KNIGHT, INCEPTION, SHAWSHANK};

fn genre(genre: &str) -> ListQuery {
    ListQuery {
        genre: Some(genre.to_string()),
    }
}

// ============================================================================
// list
// ============================================================================

#[test]
fn list_returns_everything_in_order() {
    let store = store();
    let resp = handlers::list::handle(&store, &ListQuery::default()).unwrap();
    assert_eq!(resp.status, 200);
    assert_eq!(ids(&resp.body), vec![SHAWSHANK, DARK_KNIGHT, INCEPTION]);
}

#[test]
fn list_filters_by_genre_ignoring_case() {
    let store = store();
    let resp = handlers::list::handle(&store, &genre("drama")).unwrap();
    assert_eq!(ids(&resp.body), vec![SHAWSHANK, DARK_KNIGHT]);

    let resp = handlers::list::handle(&store, &genre("SCI-FI")).unwrap();
    assert_eq!(ids(&resp.body), vec![INCEPTION]);
}

#[test]
fn list_unknown_genre_is_empty_success() {
    let store = store();
    let resp = handlers::list::handle(&store, &genre("western")).unwrap();
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, json!([]));
}

#[test]
fn list_empty_genre_means_no_filter() {
    let store = store();
    let resp = handlers::list::handle(&store, &genre("")).unwrap();
    assert_eq!(ids(&resp.body).len(), 3);
}

// ============================================================================
// get
// ============================================================================

#[test]
fn get_existing_movie() {
    let store = store();
    let resp = handlers::get::handle(&store, INCEPTION).unwrap();
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body["title"], "Inception");
    assert_eq!(resp.body["genre"], json!(["Action", "Adventure", "Sci-Fi"]));
}

#[test]
fn get_unknown_id_is_404_with_fixed_message() {
    let store = store();
    let err = handlers::get::handle(&store, "never-created").unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));

    let resp = ApiResponse::from(err);
    assert_eq!(resp.status, 404);
    assert_eq!(resp.body, json!({ "error": "Película no encontrada" }));
}

// ============================================================================
// create
// ============================================================================

#[test]
fn create_returns_201_with_generated_id() {
    let store = store();
    let resp = handlers::create::handle(&store, &new_movie_body()).unwrap();
    assert_eq!(resp.status, 201);

    let body = &resp.body;
    let id = body["id"].as_str().unwrap();
    assert!(!id.is_empty());
    assert_eq!(body["title"], "X");
    assert_eq!(body["year"], 2000);
    assert_eq!(body["director"], "D");
    assert_eq!(body["duration"].as_f64(), Some(90.0));
    assert_eq!(body["poster"], "http://a/b.jpg");
    assert_eq!(body["genre"], json!(["Drama"]));
    assert_eq!(body["rate"].as_f64(), Some(5.0));

    // Appended at the end.
    let last = store.list().unwrap().pop().unwrap();
    assert_eq!(last.id, id);
}

#[test]
fn create_ignores_client_id() {
    let store = store();
    let mut body = new_movie_body();
    body["id"] = json!(SHAWSHANK);

    let resp = handlers::create::handle(&store, &body).unwrap();
    assert_ne!(resp.body["id"], SHAWSHANK);
    assert_eq!(store.list().unwrap().len(), 4);
}

#[test]
fn create_with_empty_genre_is_400() {
    let store = store();
    let mut body = new_movie_body();
    body["genre"] = json!([]);

    let resp = ApiResponse::from(handlers::create::handle(&store, &body));
    assert_eq!(resp.status, 400);
    let errors = resp.body["error"].as_array().unwrap();
    assert!(errors
        .iter()
        .any(|e| e["field"] == "genre" && e["message"] == "Genre is required"));
    assert_eq!(store.list().unwrap().len(), 3);
}

#[test]
fn create_with_missing_fields_lists_each() {
    let store = store();
    let err = handlers::create::handle(&store, &json!({ "title": "Only" })).unwrap_err();
    let ApiError::Validation(errors) = err else {
        panic!("expected validation error");
    };
    for field in ["year", "director", "duration", "poster", "genre", "rate"] {
        assert!(errors.mentions(field), "missing error for {field}");
    }
    assert!(!errors.mentions("title"));
}

// ============================================================================
// update
// ============================================================================

#[test]
fn update_merges_present_fields_only() {
    let store = store();
    let before = store.find_by_id(DARK_KNIGHT).unwrap().unwrap();

    let resp =
        handlers::update::handle(&store, DARK_KNIGHT, &json!({ "director": "New Name" })).unwrap();
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body["director"], "New Name");
    assert_eq!(resp.body["title"], before.title);
    assert_eq!(resp.body["year"], before.year);
    assert_eq!(resp.body["id"], DARK_KNIGHT);

    let after = store.find_by_id(DARK_KNIGHT).unwrap().unwrap();
    assert_eq!(after.director, "New Name");
    assert_eq!(after.genre, before.genre);
    assert_eq!(after.rate, before.rate);
}

#[test]
fn update_cannot_change_id() {
    let store = store();
    let resp =
        handlers::update::handle(&store, INCEPTION, &json!({ "id": "hijacked", "rate": 9 }))
            .unwrap();
    assert_eq!(resp.body["id"], INCEPTION);
    assert!(store.find_by_id("hijacked").unwrap().is_none());
}

#[test]
fn update_invalid_body_on_unknown_id_is_400() {
    let store = store();
    let resp = ApiResponse::from(handlers::update::handle(
        &store,
        "nonexistent",
        &json!({ "year": "not-a-number" }),
    ));
    assert_eq!(resp.status, 400);
}

#[test]
fn update_valid_body_on_unknown_id_is_404() {
    let store = store();
    let resp = ApiResponse::from(handlers::update::handle(
        &store,
        "nonexistent",
        &json!({ "year": 2001 }),
    ));
    assert_eq!(resp.status, 404);
    assert_eq!(resp.body, json!({ "error": "Película no encontrada" }));
}

#[test]
fn update_invalid_body_leaves_record_untouched() {
    let store = store();
    let before = store.find_by_id(SHAWSHANK).unwrap().unwrap();
    let err =
        handlers::update::handle(&store, SHAWSHANK, &json!({ "rate": 11, "title": "Changed" }))
            .unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert_eq!(store.find_by_id(SHAWSHANK).unwrap().unwrap(), before);
}

// ============================================================================
// delete
// ============================================================================

#[test]
fn delete_then_get_is_404() {
    let store = store();
    let resp = handlers::delete::handle(&store, SHAWSHANK).unwrap();
    assert_eq!(resp, ApiResponse::success());
    assert_eq!(resp.body, json!({ "success": true }));

    let err = handlers::get::handle(&store, SHAWSHANK).unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[test]
fn delete_unknown_id_is_404() {
    let store = store();
    let err = handlers::delete::handle(&store, "missing").unwrap_err();
    assert_eq!(err.status_code(), 404);
    assert_eq!(store.list().unwrap().len(), 3);
}
