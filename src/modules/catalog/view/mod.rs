pub mod cards;
pub mod detail;
pub mod page_controls;
pub mod terminal;

pub use cards::{build_cards, ResultCard, GRID_CAPACITY};
pub use detail::{DetailContent, DetailView, DismissTrigger, ModalPhase};
pub use page_controls::PageControls;
pub use terminal::TerminalView;
