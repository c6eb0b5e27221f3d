use crate::modules::catalog::domain::PageInfo;

/// Navigation controls derived from one pagination descriptor.
///
/// "previous" exists only past page 1, "next" only when the response said
/// another page exists. The targets are baked in at render time so a click
/// re-requests with the stored query context, not whatever the input field
/// holds by then.
#[derive(Debug, Clone, PartialEq)]
pub struct PageControls {
    pub previous: Option<u32>,
    pub current: u32,
    pub next: Option<u32>,
}

impl PageControls {
    pub fn from_info(info: &PageInfo) -> Self {
        Self {
            previous: (info.current_page > 1).then(|| info.current_page - 1),
            current: info.current_page,
            next: info.has_next_page.then(|| info.current_page + 1),
        }
    }
}
