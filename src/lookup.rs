//! One-shot lookup without the terminal UI

use std::sync::mpsc;

use tokio_util::sync::CancellationToken;

use crate::source::FetchError;
use crate::suggestion::{RenderedOption, render_into};
use crate::worker::{FetchRequest, SuggestionResponse, WorkerHandle};

const WORKER_GONE: &str = "suggestion worker is not running";

/// Fetch and render suggestions for one prefix, blocking until done
///
/// A blank prefix returns no options without issuing a request, the same
/// way a field ignores blank input.
pub fn lookup(
    worker: &WorkerHandle,
    endpoint: &str,
    prefix: &str,
    top_n: Option<usize>,
) -> Result<Vec<RenderedOption>, FetchError> {
    let prefix = prefix.trim();
    if prefix.is_empty() {
        return Ok(Vec::new());
    }

    let (reply, response_rx) = mpsc::channel();
    let request = FetchRequest {
        request_id: 1,
        endpoint: endpoint.to_string(),
        prefix: prefix.to_string(),
        top_n,
        cancel: CancellationToken::new(),
        reply,
    };
    if !worker.submit(request) {
        return Err(FetchError::Network(WORKER_GONE.to_string()));
    }

    match response_rx.recv() {
        Ok(SuggestionResponse::Ready { items, .. }) => {
            let mut options = Vec::with_capacity(items.len());
            render_into(&mut options, &items);
            Ok(options)
        }
        Ok(SuggestionResponse::Failed { error, .. }) => Err(error),
        Ok(SuggestionResponse::Cancelled { .. }) => Err(FetchError::Cancelled),
        Err(_) => Err(FetchError::Network(WORKER_GONE.to_string())),
    }
}

/// Tab-separated `value<TAB>text` line for one option
pub fn format_option(option: &RenderedOption) -> String {
    format!("{}\t{}", option.value, option.text)
}

#[cfg(test)]
#[path = "lookup_tests.rs"]
mod lookup_tests;
