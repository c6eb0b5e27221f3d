pub mod controller;
pub mod outcome;
pub mod ports;
pub mod sequencer;

pub use controller::{ViewController, FETCH_FAILED_MESSAGE};
pub use outcome::{FetchOutcome, ResultSet};
pub use ports::{CatalogProvider, SharedSink, ViewSink};
pub use sequencer::{PendingRequest, RequestSequencer};
