use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::outcome::ResultSet;
use crate::modules::catalog::domain::{CatalogQuery, Category};
use crate::modules::catalog::view::{DetailContent, PageControls, ResultCard};
use crate::shared::errors::AppResult;

/// Port (interface) over the remote catalog API.
/// The infrastructure layer provides the HTTP implementation; tests provide
/// scripted ones.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Execute one query and return the parsed payload.
    async fn fetch(&self, query: &CatalogQuery) -> AppResult<ResultSet>;
}

/// Port for everything the catalog renders into.
///
/// The controller and detail view mutate the UI only through this trait, so
/// the sequencing rules can be exercised headlessly. Implementations are
/// dumb sinks: no decisions, just display.
pub trait ViewSink: Send {
    fn show_loading(&mut self);
    fn hide_loading(&mut self);

    fn clear_results(&mut self);
    fn render_results(&mut self, cards: &[ResultCard]);

    fn clear_pagination(&mut self);
    fn render_pagination(&mut self, controls: &PageControls);

    fn set_heading(&mut self, heading: Option<&str>);

    fn show_empty(&mut self);
    fn show_error(&mut self, message: &str);

    fn set_active_tab(&mut self, tab: Option<Category>);
    fn update_filter_controls(&mut self, season_enabled: bool, genre_enabled: bool);

    fn render_detail(&mut self, content: &DetailContent);
    fn hide_detail(&mut self);
}

/// Shared handle to the sink. Locked only for synchronous bursts of display
/// calls, never across an await point.
pub type SharedSink = Arc<Mutex<dyn ViewSink>>;
