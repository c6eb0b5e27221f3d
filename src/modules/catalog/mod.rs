pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod view;

// Re-exports for easy external access
pub use application::{
    CatalogProvider, FetchOutcome, RequestSequencer, ResultSet, ViewController, ViewSink,
};
pub use domain::{AnimeSummary, CatalogQuery, Category, GenreFilter, Season, SeasonFilter};
pub use infrastructure::JikanClient;
