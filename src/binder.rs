//! Autocomplete binder
//!
//! Connects one input field to one suggestion list through an endpoint.
//! Every value change issues a lookup for the trimmed text; completed lookups
//! are applied to the list when the owner calls [`AutocompleteBinder::poll`].
//!
//! Overlapping lookups are resolved by [`ResponseOrdering`]:
//! - `LatestIssued`: a new lookup cancels the previous one and only the most
//!   recently issued lookup may render.
//! - `LastResolved`: every lookup renders as it completes, so a slow, older
//!   lookup can overwrite a newer one.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

pub use crate::config::ResponseOrdering;
use crate::suggestion::{SuggestionList, render_into};
use crate::worker::{FetchRequest, SuggestionResponse, WorkerHandle};

/// Association of a field, its suggestion list, and an endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding {
    pub field_id: String,
    pub list_id: String,
    /// Path segment after `/autocomplete/`
    pub endpoint: String,
    pub label: String,
}

impl FieldBinding {
    pub fn new(
        field_id: impl Into<String>,
        list_id: impl Into<String>,
        endpoint: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            field_id: field_id.into(),
            list_id: list_id.into(),
            endpoint: endpoint.into(),
            label: label.into(),
        }
    }
}

/// What one call to `poll` did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollOutcome {
    /// Responses rendered into the list
    pub applied: usize,
    /// Failed lookups (logged, list untouched)
    pub failed: usize,
    /// Stale or cancelled lookups
    pub discarded: usize,
}

impl PollOutcome {
    fn merge(&mut self, other: PollOutcome) {
        self.applied += other.applied;
        self.failed += other.failed;
        self.discarded += other.discarded;
    }
}

/// Live autocomplete wiring for one field
pub struct AutocompleteBinder {
    binding: FieldBinding,
    worker: WorkerHandle,
    ordering: ResponseOrdering,
    top_n: Option<usize>,
    response_tx: Sender<SuggestionResponse>,
    response_rx: Receiver<SuggestionResponse>,
    /// Id of the most recently issued lookup (0 = none yet)
    request_id: u64,
    /// Lookups submitted but not yet answered
    outstanding: usize,
    /// Cancellation for the latest lookup (`LatestIssued` only)
    in_flight: Option<CancellationToken>,
}

impl AutocompleteBinder {
    /// Bind a field to its endpoint, using `worker` for lookups
    pub fn bind(binding: FieldBinding, worker: &WorkerHandle, ordering: ResponseOrdering) -> Self {
        let (response_tx, response_rx) = mpsc::channel();
        log::debug!(
            "Bound field '{}' to /autocomplete/{} ({:?})",
            binding.field_id,
            binding.endpoint,
            ordering
        );
        Self {
            binding,
            worker: worker.clone(),
            ordering,
            top_n: None,
            response_tx,
            response_rx,
            request_id: 0,
            outstanding: 0,
            in_flight: None,
        }
    }

    /// Ask the server for at most `top_n` suggestions
    pub fn with_top_n(mut self, top_n: Option<usize>) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn binding(&self) -> &FieldBinding {
        &self.binding
    }

    pub fn ordering(&self) -> ResponseOrdering {
        self.ordering
    }

    /// Id of the most recently issued lookup, 0 if none
    pub fn last_request_id(&self) -> u64 {
        self.request_id
    }

    pub fn is_pending(&self) -> bool {
        self.outstanding > 0
    }

    /// Handle a value change of the bound field
    ///
    /// Returns the id of the issued lookup, or `None` when the trimmed value
    /// is empty (nothing is issued and the list keeps what it shows).
    pub fn on_input(&mut self, value: &str) -> Option<u64> {
        let prefix = value.trim();
        if prefix.is_empty() {
            return None;
        }

        if self.ordering == ResponseOrdering::LatestIssued
            && let Some(token) = self.in_flight.take()
        {
            token.cancel();
        }

        let request_id = self.request_id.wrapping_add(1);
        let cancel = CancellationToken::new();
        let request = FetchRequest {
            request_id,
            endpoint: self.binding.endpoint.clone(),
            prefix: prefix.to_string(),
            top_n: self.top_n,
            cancel: cancel.clone(),
            reply: self.response_tx.clone(),
        };

        if !self.worker.submit(request) {
            log::error!(
                "Suggestion worker is not running; dropped lookup for field '{}'",
                self.binding.field_id
            );
            return None;
        }

        self.request_id = request_id;
        self.outstanding += 1;
        if self.ordering == ResponseOrdering::LatestIssued {
            self.in_flight = Some(cancel);
        }
        Some(request_id)
    }

    /// Apply every completed lookup to `list` without blocking
    pub fn poll<L: SuggestionList + ?Sized>(&mut self, list: &mut L) -> PollOutcome {
        let mut outcome = PollOutcome::default();
        while let Ok(response) = self.response_rx.try_recv() {
            outcome.merge(self.apply(response, list));
        }
        outcome
    }

    /// Block until no lookup is outstanding or `timeout` elapses
    pub fn poll_blocking<L: SuggestionList + ?Sized>(
        &mut self,
        list: &mut L,
        timeout: Duration,
    ) -> PollOutcome {
        let deadline = Instant::now() + timeout;
        let mut outcome = PollOutcome::default();

        while self.is_pending() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.response_rx.recv_timeout(remaining) {
                Ok(response) => outcome.merge(self.apply(response, list)),
                Err(RecvTimeoutError::Timeout) => {
                    log::warn!(
                        "Timed out waiting for {} lookup(s) on field '{}'",
                        self.outstanding,
                        self.binding.field_id
                    );
                    break;
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        outcome
    }

    fn accepts(&self, request_id: u64) -> bool {
        match self.ordering {
            ResponseOrdering::LatestIssued => request_id == self.request_id,
            ResponseOrdering::LastResolved => true,
        }
    }

    fn apply<L: SuggestionList + ?Sized>(
        &mut self,
        response: SuggestionResponse,
        list: &mut L,
    ) -> PollOutcome {
        self.outstanding = self.outstanding.saturating_sub(1);
        let request_id = response.request_id();
        if request_id == self.request_id {
            self.in_flight = None;
        }

        let mut outcome = PollOutcome::default();
        match response {
            SuggestionResponse::Ready { request_id, items } => {
                if self.accepts(request_id) {
                    render_into(list, &items);
                    outcome.applied += 1;
                } else {
                    log::debug!(
                        "Discarding stale lookup {} (latest: {})",
                        request_id,
                        self.request_id
                    );
                    outcome.discarded += 1;
                }
            }
            SuggestionResponse::Failed { request_id, error } => {
                if self.accepts(request_id) {
                    log::error!("Error fetching autocomplete suggestions: {}", error);
                } else {
                    log::debug!("Stale lookup {} failed: {}", request_id, error);
                }
                outcome.failed += 1;
            }
            SuggestionResponse::Cancelled { request_id } => {
                log::debug!("Lookup {} cancelled", request_id);
                outcome.discarded += 1;
            }
        }
        outcome
    }
}

#[cfg(test)]
#[path = "binder_tests.rs"]
mod binder_tests;
