use std::sync::atomic::{AtomicU64, Ordering};

use super::outcome::{FetchOutcome, ResultSet};
use crate::shared::errors::AppResult;

/// Mints monotonically increasing request tokens and classifies completions.
///
/// The newest token is recorded as live at mint time, before the network
/// call goes out. A completion may touch the view only if its token still
/// equals the live token; everything else resolves to `Stale` regardless of
/// arrival order or how the call ended.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    live: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint the next token and record it as live.
    pub fn begin(&self) -> PendingRequest<'_> {
        let token = self.live.fetch_add(1, Ordering::SeqCst) + 1;
        PendingRequest {
            sequencer: self,
            token,
        }
    }

    pub fn live_token(&self) -> u64 {
        self.live.load(Ordering::SeqCst)
    }

    pub fn is_live(&self, token: u64) -> bool {
        self.live_token() == token
    }
}

/// One issued request, tied to the token it was minted with.
#[derive(Debug)]
pub struct PendingRequest<'a> {
    sequencer: &'a RequestSequencer,
    token: u64,
}

impl PendingRequest<'_> {
    pub fn token(&self) -> u64 {
        self.token
    }

    pub fn is_live(&self) -> bool {
        self.sequencer.is_live(self.token)
    }

    /// Classify the completed call.
    ///
    /// The staleness check comes first: a superseded request is `Stale` even
    /// when its call errored, so a cancelled transport never surfaces as a
    /// user-visible failure.
    pub fn complete(self, result: AppResult<ResultSet>) -> FetchOutcome {
        if !self.is_live() {
            return FetchOutcome::Stale;
        }

        match result {
            Err(err) => FetchOutcome::Failure(err),
            Ok(set) if set.items.is_empty() => FetchOutcome::Empty,
            Ok(set) => FetchOutcome::Success(set),
        }
    }
}
