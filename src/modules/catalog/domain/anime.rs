use serde::{Deserialize, Serialize};

/// A single genre tag attached to an anime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub mal_id: i32,
    pub name: String,
}

/// One externally-sourced result item.
///
/// Immutable once received from the provider; the view layer consumes it and
/// never writes back. Every field beyond id and title is optional on the wire
/// and degrades to a placeholder at render time instead of failing the item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeSummary {
    pub mal_id: i32,
    pub title: String,
    pub image_url: Option<String>,
    pub large_image_url: Option<String>,
    pub score: Option<f32>,
    pub episodes: Option<i32>,
    pub status: Option<String>,
    pub synopsis: Option<String>,
    pub genres: Vec<Genre>,
}
