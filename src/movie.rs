//! Movie records and the typed payloads produced by schema validation.
//!
//! `Movie` is what the store holds and what the API returns. `NewMovie` and
//! `MoviePatch` only ever come out of [`crate::schema`], so holding one means
//! the input already passed the field rules.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the fixed genre labels a movie can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Drama,
    Comedy,
    Horror,
    Romance,
    Animation,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Adventure,
    Biography,
    Crime,
    Mystery,
    Thriller,
    Fantasy,
}

impl Genre {
    /// Every genre, in schema order.
    pub const ALL: [Genre; 13] = [
        Genre::Action,
        Genre::Drama,
        Genre::Comedy,
        Genre::Horror,
        Genre::Romance,
        Genre::Animation,
        Genre::SciFi,
        Genre::Adventure,
        Genre::Biography,
        Genre::Crime,
        Genre::Mystery,
        Genre::Thriller,
        Genre::Fantasy,
    ];

    /// The label used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Drama => "Drama",
            Genre::Comedy => "Comedy",
            Genre::Horror => "Horror",
            Genre::Romance => "Romance",
            Genre::Animation => "Animation",
            Genre::SciFi => "Sci-Fi",
            Genre::Adventure => "Adventure",
            Genre::Biography => "Biography",
            Genre::Crime => "Crime",
            Genre::Mystery => "Mystery",
            Genre::Thriller => "Thriller",
            Genre::Fantasy => "Fantasy",
        }
    }

    /// Exact (case-sensitive) label lookup, as the schema requires.
    pub fn from_label(label: &str) -> Option<Genre> {
        Genre::ALL.into_iter().find(|g| g.as_str() == label)
    }

    /// Case-insensitive comparison used by genre filtering.
    pub fn matches(&self, query: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(query)
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub year: i64,
    pub director: String,
    pub duration: f64,
    pub poster: String,
    pub genre: Vec<Genre>,
    pub rate: f64,
}

impl Movie {
    /// Build a stored movie from a validated payload and a server-side id.
    pub fn from_new(id: impl Into<String>, new: NewMovie) -> Self {
        Self {
            id: id.into(),
            title: new.title,
            year: new.year,
            director: new.director,
            duration: new.duration,
            poster: new.poster,
            genre: new.genre,
            rate: new.rate,
        }
    }

    /// Shallow merge: every field present in `patch` overwrites ours, the
    /// rest stay as they were. `id` is never touched.
    pub fn merged(&self, patch: MoviePatch) -> Movie {
        let mut movie = self.clone();
        if let Some(title) = patch.title {
            movie.title = title;
        }
        if let Some(year) = patch.year {
            movie.year = year;
        }
        if let Some(director) = patch.director {
            movie.director = director;
        }
        if let Some(duration) = patch.duration {
            movie.duration = duration;
        }
        if let Some(poster) = patch.poster {
            movie.poster = poster;
        }
        if let Some(genre) = patch.genre {
            movie.genre = genre;
        }
        if let Some(rate) = patch.rate {
            movie.rate = rate;
        }
        movie
    }

    pub fn has_genre(&self, query: &str) -> bool {
        self.genre.iter().any(|g| g.matches(query))
    }
}

/// Fully validated create payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub year: i64,
    pub director: String,
    pub duration: f64,
    pub poster: String,
    pub genre: Vec<Genre>,
    pub rate: f64,
}

/// Validated partial update; `None` means "keep the current value".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub year: Option<i64>,
    pub director: Option<String>,
    pub duration: Option<f64>,
    pub poster: Option<String>,
    pub genre: Option<Vec<Genre>>,
    pub rate: Option<f64>,
}

impl MoviePatch {
    pub fn is_empty(&self) -> bool {
        *self == MoviePatch::default()
    }
}
