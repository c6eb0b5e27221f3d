pub mod anime;
pub mod pagination;
pub mod query;
pub mod season;

pub use anime::{AnimeSummary, Genre};
pub use pagination::PageInfo;
pub use query::{CatalogQuery, Category, GenreFilter, SeasonFilter, GENRE_CATALOG};
pub use season::Season;
