//! Suggestion Worker Thread
//!
//! Runs suggestion fetches in a background thread so the UI never blocks on
//! the network. Each request becomes its own task on the worker's runtime;
//! tasks are not ordered relative to each other.

use std::sync::Arc;
use std::sync::mpsc::Sender;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio_util::sync::CancellationToken;

use crate::source::{FetchError, SuggestionSource};
use crate::suggestion::SuggestionItem;

/// One lookup submitted by a binder
#[derive(Debug)]
pub struct FetchRequest {
    pub request_id: u64,
    pub endpoint: String,
    pub prefix: String,
    pub top_n: Option<usize>,
    pub cancel: CancellationToken,
    /// Where the outcome is delivered
    pub reply: Sender<SuggestionResponse>,
}

/// Outcome of one lookup
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionResponse {
    Ready {
        request_id: u64,
        items: Vec<SuggestionItem>,
    },
    Failed {
        request_id: u64,
        error: FetchError,
    },
    Cancelled {
        request_id: u64,
    },
}

impl SuggestionResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            SuggestionResponse::Ready { request_id, .. }
            | SuggestionResponse::Failed { request_id, .. }
            | SuggestionResponse::Cancelled { request_id } => *request_id,
        }
    }
}

/// Cloneable handle for submitting requests to the worker
///
/// The worker shuts down once every handle is dropped.
#[derive(Debug, Clone)]
pub struct WorkerHandle {
    request_tx: UnboundedSender<FetchRequest>,
}

impl WorkerHandle {
    /// Queue a request; returns false if the worker is gone
    pub fn submit(&self, request: FetchRequest) -> bool {
        self.request_tx.send(request).is_ok()
    }

    /// A handle whose worker has already shut down
    #[cfg(test)]
    pub(crate) fn disconnected() -> Self {
        let (request_tx, _) = unbounded_channel();
        WorkerHandle { request_tx }
    }
}

/// Spawn the suggestion worker thread
pub fn spawn_worker(source: SuggestionSource) -> WorkerHandle {
    let (request_tx, request_rx) = unbounded_channel();
    let source = Arc::new(source);

    std::thread::spawn(move || {
        worker_loop(source, request_rx);
    });

    WorkerHandle { request_tx }
}

/// Main worker loop - processes requests until every handle is dropped
fn worker_loop(source: Arc<SuggestionSource>, mut request_rx: UnboundedReceiver<FetchRequest>) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            log::error!("Could not start suggestion runtime: {}", e);
            return;
        }
    };

    runtime.block_on(async move {
        while let Some(request) = request_rx.recv().await {
            tokio::spawn(handle_request(Arc::clone(&source), request));
        }
    });

    log::debug!("Suggestion worker shutting down");
}

/// Fetch one request, racing it against its cancellation token
async fn handle_request(source: Arc<SuggestionSource>, request: FetchRequest) {
    let FetchRequest {
        request_id,
        endpoint,
        prefix,
        top_n,
        cancel,
        reply,
    } = request;

    let response = if cancel.is_cancelled() {
        SuggestionResponse::Cancelled { request_id }
    } else {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => SuggestionResponse::Cancelled { request_id },
            result = source.fetch(&endpoint, &prefix, top_n) => match result {
                Ok(items) => SuggestionResponse::Ready { request_id, items },
                Err(error) => SuggestionResponse::Failed { request_id, error },
            },
        }
    };

    if reply.send(response).is_err() {
        log::debug!("Binder dropped before request {} completed", request_id);
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
