//! Store-level properties checked across many inputs.

use movies_api::handlers::{self, ListQuery};
use movies_api::{Genre, MovieStore};
use serde_json::json;

use crate::support::{new_movie_body, store, INCEPTION};

#[test]
fn created_ids_are_unique_and_retrievable() {
    let store = store();
    let mut created = Vec::new();
    for i in 0..50 {
        let mut body = new_movie_body();
        body["title"] = json!(format!("Movie {i}"));
        let resp = handlers::create::handle(&store, &body).unwrap();
        created.push(resp.body);
    }

    let mut ids: Vec<String> = store.list().unwrap().into_iter().map(|m| m.id).collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);

    for body in created {
        let id = body["id"].as_str().unwrap();
        let stored = handlers::get::handle(&store, id).unwrap();
        assert_eq!(stored.body, body);
    }
}

#[test]
fn genre_filter_is_exact_subset_and_idempotent() {
    let store = store();
    let all = store.list().unwrap();

    for genre in Genre::ALL {
        for query in [genre.as_str().to_string(), genre.as_str().to_lowercase()] {
            let filtered = store.filter_by_genre(&query).unwrap();
            let expected: Vec<_> = all
                .iter()
                .filter(|m| m.genre.contains(&genre))
                .cloned()
                .collect();
            assert_eq!(filtered, expected, "filter by {query}");

            // Filtering the filtered set again changes nothing.
            let again: Vec<_> = filtered
                .iter()
                .filter(|m| m.has_genre(&query))
                .cloned()
                .collect();
            assert_eq!(again, filtered);
        }
    }
}

#[test]
fn list_reflects_mutations_in_order() {
    let store = store();
    let created = handlers::create::handle(&store, &new_movie_body()).unwrap();
    let new_id = created.body["id"].as_str().unwrap().to_string();

    let first = store.list().unwrap()[0].id.clone();
    handlers::delete::handle(&store, &first).unwrap();

    let resp = handlers::list::handle(&store, &ListQuery::default()).unwrap();
    let listed: Vec<_> = store.list().unwrap().into_iter().map(|m| m.id).collect();
    assert_eq!(resp.body.as_array().unwrap().len(), listed.len());
    assert_eq!(listed.last(), Some(&new_id));
    assert!(!listed.contains(&first));
}

#[test]
fn every_single_field_patch_is_a_shallow_merge() {
    let patches = [
        json!({ "title": "T" }),
        json!({ "year": 1950 }),
        json!({ "director": "Dir" }),
        json!({ "duration": 61.5 }),
        json!({ "poster": "https://img.example.com/x.png" }),
        json!({ "genre": ["Horror", "Mystery"] }),
        json!({ "rate": 0 }),
    ];

    for patch in patches {
        let store = store();
        let before = handlers::list::handle(&store, &ListQuery::default()).unwrap().body[1].clone();
        let id = before["id"].as_str().unwrap();

        let after = handlers::update::handle(&store, id, &patch).unwrap().body;
        let (field, value) = patch.as_object().unwrap().iter().next().unwrap();
        for (key, old) in before.as_object().unwrap() {
            if key == field && value.is_number() {
                assert_eq!(after[key].as_f64(), value.as_f64());
            } else if key == field {
                assert_eq!(&after[key], value);
            } else {
                assert_eq!(&after[key], old, "{key} changed when patching {field}");
            }
        }
    }
}

#[test]
fn concurrent_patches_to_one_movie_keep_every_field() {
    let store = store();

    std::thread::scope(|scope| {
        scope.spawn(|| {
            for i in 0..2_000 {
                let patch = json!({ "rate": f64::from(i % 10) });
                handlers::update::handle(&store, INCEPTION, &patch).unwrap();
            }
        });
        scope.spawn(|| {
            for i in 0..2_000 {
                let director = format!("Director {i}");
                let patch = json!({ "director": director });
                handlers::update::handle(&store, INCEPTION, &patch).unwrap();
                let stored = store.find_by_id(INCEPTION).unwrap().unwrap();
                assert_eq!(stored.director, director, "director patch {i} was lost");
            }
        });
    });

    let stored = store.find_by_id(INCEPTION).unwrap().unwrap();
    assert_eq!(stored.director, "Director 1999");
    assert_eq!(stored.rate, 9.0);
}
