//! State behind the "who's that Pokémon?" page.
//!
//! Each randomize starts a new request generation. Only the completion
//! carrying the latest [`FetchTicket`] is applied, so a slow response from an
//! earlier click can never overwrite a newer one.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::catalog::CatalogItem;
use crate::error::FetchError;

/// Proof of which request generation a completion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RevealPhase {
    Loading,
    Ready(Arc<CatalogItem>),
    Failed(FetchError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealFlow {
    generation: u64,
    phase: RevealPhase,
    revealed: bool,
}

impl RevealFlow {
    /// Starts in `Loading`: the page kicks off its first fetch on mount.
    pub fn new() -> Self {
        Self {
            generation: 0,
            phase: RevealPhase::Loading,
            revealed: false,
        }
    }

    /// Randomize: forget the current item and wait for a new one.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.phase = RevealPhase::Loading;
        self.revealed = false;
        debug!(generation = self.generation, "catalog fetch started");
        FetchTicket(self.generation)
    }

    /// Apply a finished fetch. Returns `false` when the ticket is stale and
    /// the result was dropped.
    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<CatalogItem, FetchError>,
    ) -> bool {
        if !self.is_current(ticket) {
            debug!(
                stale = ticket.0,
                current = self.generation,
                "dropping stale catalog response"
            );
            return false;
        }

        self.revealed = false;
        self.phase = match result {
            Ok(item) => RevealPhase::Ready(Arc::new(item)),
            Err(e) => {
                warn!(error = %e, "catalog fetch failed");
                RevealPhase::Failed(e)
            }
        };
        true
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Show the current item. Only meaningful once an item is loaded; returns
    /// whether anything changed, so a second call is a no-op.
    pub fn reveal(&mut self) -> bool {
        if self.revealed || !matches!(self.phase, RevealPhase::Ready(_)) {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn phase(&self) -> &RevealPhase {
        &self.phase
    }

    pub fn item(&self) -> Option<&Arc<CatalogItem>> {
        match &self.phase {
            RevealPhase::Ready(item) => Some(item),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.phase {
            RevealPhase::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, RevealPhase::Loading)
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

impl Default for RevealFlow {
    fn default() -> Self {
        Self::new()
    }
}
