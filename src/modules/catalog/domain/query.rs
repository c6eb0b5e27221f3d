use chrono::Datelike;
use serde::{Deserialize, Serialize};

use super::season::Season;

/// The four category tabs. Free-text search is not a tab: submitting a
/// search deactivates whichever tab was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Top,
    Airing,
    Season,
    Genre,
}

impl Category {
    pub fn all() -> [Self; 4] {
        [Self::Top, Self::Airing, Self::Season, Self::Genre]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Airing => "airing",
            Self::Season => "season",
            Self::Genre => "genre",
        }
    }
}

/// Season/year picker state for the season tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonFilter {
    pub year: i32,
    pub season: Season,
}

impl SeasonFilter {
    /// Filter for the season we are currently in.
    pub fn current() -> Self {
        let now = chrono::Utc::now();
        Self {
            year: now.year(),
            // month() is always 1-12, so from_month cannot miss
            season: Season::from_month(now.month()).unwrap_or(Season::Winter),
        }
    }

    /// Selectable year range, oldest first. The lower bound matches the
    /// oldest season Jikan has meaningful data for in this app.
    pub fn year_range() -> std::ops::RangeInclusive<i32> {
        1990..=chrono::Utc::now().year()
    }
}

/// Genre picker state for the genre tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreFilter {
    pub mal_id: i32,
    pub name: String,
}

/// The fixed genre option list offered by the picker (MAL genre ids).
pub const GENRE_CATALOG: &[(i32, &str)] = &[
    (1, "Action"),
    (2, "Adventure"),
    (4, "Comedy"),
    (8, "Drama"),
    (10, "Fantasy"),
    (14, "Horror"),
    (7, "Mystery"),
    (22, "Romance"),
    (24, "Sci-Fi"),
    (36, "Slice of Life"),
    (30, "Sports"),
    (37, "Supernatural"),
    (41, "Suspense"),
];

impl GenreFilter {
    /// Look up a picker entry by name (case insensitive).
    pub fn by_name(name: &str) -> Option<Self> {
        GENRE_CATALOG
            .iter()
            .find(|(_, n)| n.eq_ignore_ascii_case(name.trim()))
            .map(|&(mal_id, n)| Self {
                mal_id,
                name: n.to_string(),
            })
    }

    /// First picker entry, used before the user touches the dropdown.
    pub fn first_in_catalog() -> Self {
        let (mal_id, name) = GENRE_CATALOG[0];
        Self {
            mal_id,
            name: name.to_string(),
        }
    }
}

/// The endpoint descriptor a user action resolves to. Exactly one of these
/// is produced per action and handed to the request sequencer.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogQuery {
    Search { text: String, page: u32 },
    Top,
    Airing,
    Season(SeasonFilter),
    Genre(GenreFilter),
}

impl CatalogQuery {
    /// Human-readable heading for the view this query populates.
    /// Free-text search results carry no heading.
    pub fn heading(&self) -> Option<String> {
        match self {
            Self::Search { .. } => None,
            Self::Top => Some("Top Anime on MAL".to_string()),
            Self::Airing => Some("Currently Airing Right Now".to_string()),
            Self::Season(filter) => Some(format!(
                "{} {}",
                filter.season.display_name().to_uppercase(),
                filter.year
            )),
            Self::Genre(filter) => Some(format!("{} Anime", filter.name)),
        }
    }

    /// Only free-text search responses come with pagination controls.
    pub fn is_paginated(&self) -> bool {
        matches!(self, Self::Search { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_per_query() {
        assert_eq!(
            CatalogQuery::Top.heading().as_deref(),
            Some("Top Anime on MAL")
        );
        assert_eq!(
            CatalogQuery::Airing.heading().as_deref(),
            Some("Currently Airing Right Now")
        );
        assert_eq!(
            CatalogQuery::Season(SeasonFilter {
                year: 2021,
                season: Season::Spring
            })
            .heading()
            .as_deref(),
            Some("SPRING 2021")
        );
        assert_eq!(
            CatalogQuery::Genre(GenreFilter {
                mal_id: 1,
                name: "Action".to_string()
            })
            .heading()
            .as_deref(),
            Some("Action Anime")
        );
        assert_eq!(
            CatalogQuery::Search {
                text: "naruto".to_string(),
                page: 1
            }
            .heading(),
            None
        );
    }

    #[test]
    fn genre_lookup_by_name() {
        let genre = GenreFilter::by_name("slice of life").unwrap();
        assert_eq!(genre.mal_id, 36);
        assert_eq!(genre.name, "Slice of Life");
        assert!(GenreFilter::by_name("isekai").is_none());
    }

    #[test]
    fn only_search_paginates() {
        assert!(CatalogQuery::Search {
            text: "x".to_string(),
            page: 1
        }
        .is_paginated());
        assert!(!CatalogQuery::Top.is_paginated());
        assert!(!CatalogQuery::Airing.is_paginated());
    }
}
