use crate::modules::catalog::application::ports::ViewSink;
use crate::modules::catalog::domain::AnimeSummary;

const SCORE_PLACEHOLDER: &str = "N/A";
const EPISODES_PLACEHOLDER: &str = "Unknown";
const STATUS_PLACEHOLDER: &str = "Unknown";
const SYNOPSIS_FALLBACK: &str = "No description available.";

/// Fully resolved display content for the detail view. Optional item fields
/// are already collapsed to their placeholders here.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailContent {
    pub title: String,
    pub image_url: Option<String>,
    pub score: String,
    pub episodes: String,
    pub status: String,
    pub synopsis: String,
    pub genres: Vec<String>,
}

impl DetailContent {
    pub fn from_item(item: &AnimeSummary) -> Self {
        Self {
            title: item.title.clone(),
            image_url: item.large_image_url.clone().or_else(|| item.image_url.clone()),
            score: item
                .score
                .map(|s| s.to_string())
                .unwrap_or_else(|| SCORE_PLACEHOLDER.to_string()),
            episodes: item
                .episodes
                .map(|e| e.to_string())
                .unwrap_or_else(|| EPISODES_PLACEHOLDER.to_string()),
            status: item
                .status
                .clone()
                .unwrap_or_else(|| STATUS_PLACEHOLDER.to_string()),
            synopsis: item
                .synopsis
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| SYNOPSIS_FALLBACK.to_string()),
            genres: item.genres.iter().map(|g| g.name.clone()).collect(),
        }
    }
}

/// Visibility phases of the detail view. `Closing` models the close
/// animation window: already committed to hiding, not yet fully hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Hidden,
    Open,
    Closing,
}

/// What caused a dismissal. All three funnel into the same close path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    CloseControl,
    Backdrop,
    CancelKey,
}

/// The detail modal state machine.
///
/// `close` is idempotent: once closing, further close calls change nothing,
/// and the pending transition always reaches `Hidden` via `finish_close`.
#[derive(Debug)]
pub struct DetailView {
    phase: ModalPhase,
    content: Option<DetailContent>,
}

impl Default for DetailView {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailView {
    pub fn new() -> Self {
        Self {
            phase: ModalPhase::Hidden,
            content: None,
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn content(&self) -> Option<&DetailContent> {
        self.content.as_ref()
    }

    /// Populate and show the view for one item. Opening while a close is
    /// pending supersedes the close.
    pub fn open(&mut self, item: &AnimeSummary, sink: &mut dyn ViewSink) {
        let content = DetailContent::from_item(item);
        sink.render_detail(&content);
        self.content = Some(content);
        self.phase = ModalPhase::Open;
    }

    /// Begin dismissing the view. Safe to call any number of times and in
    /// any phase. The embedding front end drives `finish_close` when its
    /// hide animation ends; fronts without animations call it immediately.
    pub fn close(&mut self) {
        match self.phase {
            ModalPhase::Open => self.phase = ModalPhase::Closing,
            // Already hidden, or a close is pending and must not restart.
            ModalPhase::Hidden | ModalPhase::Closing => {}
        }
    }

    /// Complete a pending close once the hide animation has run. No-op in
    /// any other phase.
    pub fn finish_close(&mut self, sink: &mut dyn ViewSink) {
        if self.phase == ModalPhase::Closing {
            self.phase = ModalPhase::Hidden;
            self.content = None;
            sink.hide_detail();
        }
    }

    pub fn dismiss(&mut self, _trigger: DismissTrigger) {
        self.close();
    }
}
