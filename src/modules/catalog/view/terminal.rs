use super::cards::ResultCard;
use super::detail::DetailContent;
use super::page_controls::PageControls;
use crate::modules::catalog::application::ports::ViewSink;
use crate::modules::catalog::domain::Category;

/// Plain-text sink for the interactive terminal front end.
///
/// Stateless apart from what it prints; every decision about what to show
/// is made upstream by the controller and detail view.
#[derive(Debug, Default)]
pub struct TerminalView;

impl TerminalView {
    pub fn new() -> Self {
        Self
    }
}

impl ViewSink for TerminalView {
    fn show_loading(&mut self) {
        println!("Loading...");
    }

    fn hide_loading(&mut self) {}

    fn clear_results(&mut self) {}

    fn render_results(&mut self, cards: &[ResultCard]) {
        println!();
        for card in cards {
            println!("  [{:>2}] {}", card.index + 1, card.title);
        }
        println!();
    }

    fn clear_pagination(&mut self) {}

    fn render_pagination(&mut self, controls: &PageControls) {
        let previous = match controls.previous {
            Some(page) => format!("<prev ({})", page),
            None => String::new(),
        };
        let next = match controls.next {
            Some(page) => format!("next ({})>", page),
            None => String::new(),
        };
        println!("  {} Page {} {}", previous, controls.current, next);
    }

    fn set_heading(&mut self, heading: Option<&str>) {
        if let Some(heading) = heading {
            println!("== {} ==", heading);
        }
    }

    fn show_empty(&mut self) {
        println!("No anime found.");
    }

    fn show_error(&mut self, message: &str) {
        println!("{}", message);
    }

    fn set_active_tab(&mut self, tab: Option<Category>) {
        if let Some(tab) = tab {
            println!("[tab] {}", tab.label());
        }
    }

    fn update_filter_controls(&mut self, season_enabled: bool, genre_enabled: bool) {
        if season_enabled {
            println!("(season/year pickers enabled)");
        }
        if genre_enabled {
            println!("(genre picker enabled)");
        }
    }

    fn render_detail(&mut self, content: &DetailContent) {
        println!();
        println!("=== {} ===", content.title);
        println!("  Score:    {}", content.score);
        println!("  Episodes: {}", content.episodes);
        println!("  Status:   {}", content.status);
        if !content.genres.is_empty() {
            println!("  Genres:   {}", content.genres.join(", "));
        }
        println!();
        println!("  {}", content.synopsis);
        println!();
    }

    fn hide_detail(&mut self) {
        println!("(closed)");
    }
}
