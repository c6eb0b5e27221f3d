use crate::modules::catalog::domain::{AnimeSummary, PageInfo};
use crate::shared::errors::AppError;

/// Parsed payload of a successful catalog response.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    pub items: Vec<AnimeSummary>,
    /// Present only for endpoints that paginate (free-text search).
    pub page_info: Option<PageInfo>,
}

impl ResultSet {
    pub fn new(items: Vec<AnimeSummary>, page_info: Option<PageInfo>) -> Self {
        Self { items, page_info }
    }
}

/// Terminal outcome of one issued request.
///
/// Staleness is a first-class outcome, not an error: a superseded request
/// resolves to `Stale` no matter how its network call ended, and must leave
/// the view untouched.
#[derive(Debug)]
pub enum FetchOutcome {
    Success(ResultSet),
    Empty,
    Failure(AppError),
    Stale,
}

impl FetchOutcome {
    pub fn is_stale(&self) -> bool {
        matches!(self, Self::Stale)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}
