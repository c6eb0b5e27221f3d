#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use sagasu::modules::catalog::application::ViewSink;
use sagasu::modules::catalog::domain::{AnimeSummary, Category, Genre};
use sagasu::modules::catalog::view::{DetailContent, PageControls, ResultCard};

/// Everything a sink can be asked to display, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    ShowLoading,
    HideLoading,
    ClearResults,
    RenderResults(Vec<String>),
    ClearPagination,
    RenderPagination(PageControls),
    Heading(Option<String>),
    Empty,
    Error(String),
    ActiveTab(Option<Category>),
    FilterControls { season: bool, genre: bool },
    RenderDetail(String),
    HideDetail,
}

/// Sink that records every display call for later assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<SinkEvent>>>,
}

impl RecordingSink {
    pub fn new() -> (Self, Arc<Mutex<Vec<SinkEvent>>>) {
        let sink = Self::default();
        let events = Arc::clone(&sink.events);
        (sink, events)
    }

    fn push(&self, event: SinkEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl ViewSink for RecordingSink {
    fn show_loading(&mut self) {
        self.push(SinkEvent::ShowLoading);
    }

    fn hide_loading(&mut self) {
        self.push(SinkEvent::HideLoading);
    }

    fn clear_results(&mut self) {
        self.push(SinkEvent::ClearResults);
    }

    fn render_results(&mut self, cards: &[ResultCard]) {
        self.push(SinkEvent::RenderResults(
            cards.iter().map(|c| c.title.clone()).collect(),
        ));
    }

    fn clear_pagination(&mut self) {
        self.push(SinkEvent::ClearPagination);
    }

    fn render_pagination(&mut self, controls: &PageControls) {
        self.push(SinkEvent::RenderPagination(controls.clone()));
    }

    fn set_heading(&mut self, heading: Option<&str>) {
        self.push(SinkEvent::Heading(heading.map(str::to_string)));
    }

    fn show_empty(&mut self) {
        self.push(SinkEvent::Empty);
    }

    fn show_error(&mut self, message: &str) {
        self.push(SinkEvent::Error(message.to_string()));
    }

    fn set_active_tab(&mut self, tab: Option<Category>) {
        self.push(SinkEvent::ActiveTab(tab));
    }

    fn update_filter_controls(&mut self, season_enabled: bool, genre_enabled: bool) {
        self.push(SinkEvent::FilterControls {
            season: season_enabled,
            genre: genre_enabled,
        });
    }

    fn render_detail(&mut self, content: &DetailContent) {
        self.push(SinkEvent::RenderDetail(content.title.clone()));
    }

    fn hide_detail(&mut self) {
        self.push(SinkEvent::HideDetail);
    }
}

/// Build `count` result items titled "<prefix> 0", "<prefix> 1", ...
pub fn items(count: usize, prefix: &str) -> Vec<AnimeSummary> {
    (0..count)
        .map(|i| AnimeSummary {
            mal_id: i as i32 + 1,
            title: format!("{} {}", prefix, i),
            image_url: Some(format!("https://cdn.example/{}-{}.jpg", prefix, i)),
            large_image_url: None,
            score: Some(7.5),
            episodes: Some(12),
            status: Some("Finished Airing".to_string()),
            synopsis: Some("A story.".to_string()),
            genres: vec![Genre {
                mal_id: 1,
                name: "Action".to_string(),
            }],
        })
        .collect()
}
