use serde::{Deserialize, Serialize};

/// Pagination descriptor derived from a paginated API response.
///
/// Not retained beyond rendering the controls for the response it came with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    pub current_page: u32,
    pub has_next_page: bool,
}
