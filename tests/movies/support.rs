//! Shared fixtures: a small seeded store and request bodies.

use movies_api::{Genre, InMemoryMovieStore, Movie};
use serde_json::{json, Value};

pub const SHAWSHANK: &str = "dcdd0fad-a94c-4810-8acc-5f108d3b18c3";
pub const DARK_KNIGHT: &str = "c8a7d63f-3b04-44d3-9d95-8782fd7dcfaf";
pub const INCEPTION: &str = "5ad1a235-0d9c-410a-b32b-220d91689a08";

fn movie(id: &str, title: &str, year: i64, director: &str, genre: Vec<Genre>, rate: f64) -> Movie {
    Movie {
        id: id.to_string(),
        title: title.to_string(),
        year,
        director: director.to_string(),
        duration: 140.0,
        poster: format!("https://posters.example.com/{id}.jpg"),
        genre,
        rate,
    }
}

pub fn sample_movies() -> Vec<Movie> {
    vec![
        movie(SHAWSHANK, "The Shawshank Redemption", 1994, "Frank Darabont", vec![Genre::Drama], 9.3),
        movie(
            DARK_KNIGHT,
            "The Dark Knight",
            2008,
            "Christopher Nolan",
            vec![Genre::Action, Genre::Crime, Genre::Drama],
            9.0,
        ),
        movie(
            INCEPTION,
            "Inception",
            2010,
            "Christopher Nolan",
            vec![Genre::Action, Genre::Adventure, Genre::SciFi],
            8.8,
        ),
    ]
}

pub fn store() -> InMemoryMovieStore {
    InMemoryMovieStore::with_movies(sample_movies())
}

/// The create body used throughout the tests.
pub fn new_movie_body() -> Value {
    json!({
        "title": "X",
        "year": 2000,
        "director": "D",
        "duration": 90,
        "poster": "http://a/b.jpg",
        "genre": ["Drama"],
        "rate": 5
    })
}

pub fn ids(body: &Value) -> Vec<String> {
    body.as_array()
        .map(|movies| {
            movies
                .iter()
                .filter_map(|m| m["id"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
