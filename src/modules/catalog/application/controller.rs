use std::sync::{Arc, Mutex};

use log::{debug, warn};

use super::outcome::FetchOutcome;
use super::ports::{CatalogProvider, SharedSink};
use super::sequencer::RequestSequencer;
use crate::modules::catalog::domain::{
    AnimeSummary, CatalogQuery, Category, GenreFilter, PageInfo, Season, SeasonFilter,
};
use crate::modules::catalog::view::{build_cards, PageControls, GRID_CAPACITY};
use crate::shared::utils::Validator;

/// User-visible message for a request that failed terminally.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch anime.";

/// Session state the controller owns. One instance per view; mutated only
/// inside short lock scopes on the controller's thread of execution.
#[derive(Debug, Clone)]
struct SessionState {
    query_text: String,
    page: u32,
    active_tab: Option<Category>,
    season: SeasonFilter,
    genre: GenreFilter,
    results: Vec<AnimeSummary>,
    page_info: Option<PageInfo>,
}

impl SessionState {
    fn new() -> Self {
        Self {
            query_text: String::new(),
            page: 1,
            active_tab: None,
            season: SeasonFilter::current(),
            genre: GenreFilter::first_in_catalog(),
            results: Vec::new(),
            page_info: None,
        }
    }
}

/// Orchestrates tab, filter, search and pagination actions.
///
/// Every action resolves to at most one `CatalogQuery`, which runs through
/// the request sequencer; only the most recently issued request may mutate
/// the sink. Methods return `None` when the action issued no request.
pub struct ViewController {
    provider: Arc<dyn CatalogProvider>,
    sink: SharedSink,
    sequencer: RequestSequencer,
    state: Mutex<SessionState>,
}

impl ViewController {
    pub fn new(provider: Arc<dyn CatalogProvider>, sink: SharedSink) -> Self {
        Self {
            provider,
            sink,
            sequencer: RequestSequencer::new(),
            state: Mutex::new(SessionState::new()),
        }
    }

    /// Activate a category tab and load it. Re-clicking the active tab is a
    /// no-op: zero requests, view untouched.
    pub async fn select_tab(&self, tab: Category) -> Option<FetchOutcome> {
        let query = {
            let mut state = self.state.lock().unwrap();
            if state.active_tab == Some(tab) {
                debug!("tab {} already active, ignoring re-click", tab.label());
                return None;
            }
            state.active_tab = Some(tab);
            Self::query_for_tab(&state, tab)
        };

        {
            let mut sink = self.sink.lock().unwrap();
            sink.set_active_tab(Some(tab));
            sink.update_filter_controls(tab == Category::Season, tab == Category::Genre);
        }

        Some(self.run_query(query).await)
    }

    /// Submit a free-text search. Blank or whitespace-only text is rejected
    /// with no request issued. A search deactivates tab state and resets the
    /// page to 1.
    pub async fn submit_search(&self, text: &str) -> Option<FetchOutcome> {
        let text = text.trim();
        if let Err(err) = Validator::validate_search_query(text) {
            debug!("search rejected: {}", err);
            return None;
        }

        let query = {
            let mut state = self.state.lock().unwrap();
            state.active_tab = None;
            state.query_text = text.to_string();
            state.page = 1;
            CatalogQuery::Search {
                text: text.to_string(),
                page: 1,
            }
        };

        {
            let mut sink = self.sink.lock().unwrap();
            sink.set_active_tab(None);
            sink.update_filter_controls(false, false);
        }

        Some(self.run_query(query).await)
    }

    /// Request a specific page of the current search. Reuses the stored
    /// query text verbatim; tab and filter state are left alone.
    pub async fn change_page(&self, page: u32) -> Option<FetchOutcome> {
        if Validator::validate_page(page).is_err() {
            return None;
        }

        let query = {
            let state = self.state.lock().unwrap();
            if state.query_text.is_empty() {
                return None;
            }
            CatalogQuery::Search {
                text: state.query_text.clone(),
                page,
            }
        };

        Some(self.run_query(query).await)
    }

    /// Follow the "next" pagination control, if the last response offered one.
    pub async fn next_page(&self) -> Option<FetchOutcome> {
        let target = {
            let state = self.state.lock().unwrap();
            state
                .page_info
                .as_ref()
                .filter(|info| info.has_next_page)
                .map(|info| info.current_page + 1)
        }?;
        self.change_page(target).await
    }

    /// Follow the "previous" pagination control, if there is one.
    pub async fn previous_page(&self) -> Option<FetchOutcome> {
        let target = {
            let state = self.state.lock().unwrap();
            state
                .page_info
                .as_ref()
                .filter(|info| info.current_page > 1)
                .map(|info| info.current_page - 1)
        }?;
        self.change_page(target).await
    }

    /// Change the season picker. Stored always; acted on only while the
    /// season tab is active.
    pub async fn set_season(&self, season: Season) -> Option<FetchOutcome> {
        let query = {
            let mut state = self.state.lock().unwrap();
            state.season.season = season;
            Self::season_query_if_active(&state)
        }?;
        Some(self.run_query(query).await)
    }

    /// Change the year picker. Stored always; acted on only while the
    /// season tab is active.
    pub async fn set_year(&self, year: i32) -> Option<FetchOutcome> {
        let max_year = *SeasonFilter::year_range().end();
        if let Err(err) = Validator::validate_season_year(year, max_year) {
            warn!("year rejected: {}", err);
            return None;
        }

        let query = {
            let mut state = self.state.lock().unwrap();
            state.season.year = year;
            Self::season_query_if_active(&state)
        }?;
        Some(self.run_query(query).await)
    }

    /// Change the genre picker. Stored always; acted on only while the
    /// genre tab is active.
    pub async fn set_genre(&self, genre: GenreFilter) -> Option<FetchOutcome> {
        let query = {
            let mut state = self.state.lock().unwrap();
            state.genre = genre;
            if state.active_tab == Some(Category::Genre) {
                Some(CatalogQuery::Genre(state.genre.clone()))
            } else {
                None
            }
        }?;
        Some(self.run_query(query).await)
    }

    /// Item backing a rendered card, for opening the detail view without a
    /// second network call.
    pub fn select_result(&self, index: usize) -> Option<AnimeSummary> {
        let state = self.state.lock().unwrap();
        state.results.iter().take(GRID_CAPACITY).nth(index).cloned()
    }

    pub fn current_query(&self) -> String {
        self.state.lock().unwrap().query_text.clone()
    }

    pub fn current_page(&self) -> u32 {
        self.state.lock().unwrap().page
    }

    pub fn active_tab(&self) -> Option<Category> {
        self.state.lock().unwrap().active_tab
    }

    pub fn season_filter(&self) -> SeasonFilter {
        self.state.lock().unwrap().season.clone()
    }

    pub fn genre_filter(&self) -> GenreFilter {
        self.state.lock().unwrap().genre.clone()
    }

    fn query_for_tab(state: &SessionState, tab: Category) -> CatalogQuery {
        match tab {
            Category::Top => CatalogQuery::Top,
            Category::Airing => CatalogQuery::Airing,
            Category::Season => CatalogQuery::Season(state.season.clone()),
            Category::Genre => CatalogQuery::Genre(state.genre.clone()),
        }
    }

    fn season_query_if_active(state: &SessionState) -> Option<CatalogQuery> {
        if state.active_tab == Some(Category::Season) {
            Some(CatalogQuery::Season(state.season.clone()))
        } else {
            None
        }
    }

    /// Issue one query through the sequencer and apply its outcome.
    ///
    /// Loading is shown and the previous results, pagination and heading are
    /// cleared synchronously at issue time. A stale completion changes
    /// nothing; a live completion clears loading exactly once.
    async fn run_query(&self, query: CatalogQuery) -> FetchOutcome {
        let request = self.sequencer.begin();
        debug!("request {} issued for {:?}", request.token(), query);

        {
            let mut sink = self.sink.lock().unwrap();
            sink.show_loading();
            sink.clear_results();
            sink.clear_pagination();
            sink.set_heading(None);
        }

        let result = self.provider.fetch(&query).await;
        let outcome = request.complete(result);

        match &outcome {
            FetchOutcome::Stale => {
                debug!("discarding stale response for {:?}", query);
            }
            FetchOutcome::Success(set) => {
                {
                    let mut state = self.state.lock().unwrap();
                    state.results = set.items.clone();
                    state.page_info = set.page_info.clone();
                    if let Some(info) = &set.page_info {
                        state.page = info.current_page;
                    }
                }

                let cards = build_cards(&set.items);
                let mut sink = self.sink.lock().unwrap();
                sink.hide_loading();
                sink.render_results(&cards);
                if let Some(info) = &set.page_info {
                    sink.render_pagination(&PageControls::from_info(info));
                }
                if let Some(heading) = query.heading() {
                    sink.set_heading(Some(&heading));
                }
            }
            FetchOutcome::Empty => {
                {
                    let mut state = self.state.lock().unwrap();
                    state.results.clear();
                    state.page_info = None;
                }
                let mut sink = self.sink.lock().unwrap();
                sink.hide_loading();
                sink.show_empty();
            }
            FetchOutcome::Failure(err) => {
                // Query context stays as it was; the failure is terminal for
                // this request only.
                warn!("request failed: {}", err);
                let mut sink = self.sink.lock().unwrap();
                sink.hide_loading();
                sink.show_error(FETCH_FAILED_MESSAGE);
            }
        }

        outcome
    }
}
