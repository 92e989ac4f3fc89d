//! One batch request: worker sizing, dispatch, fan-in.
//!
//! A dispatcher task hands normalized URLs one at a time to a fixed pool of
//! worker tasks through a capacity-1 queue, so it is never more than one URL
//! ahead of the pool. Results come back in completion order. Once every URL
//! has produced a result the pool is told to stop; workers are not joined.

use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};
use tokio_util::sync::CancellationToken;

use super::normalize::normalize_url;
use super::{BatchEngine, IconLookupResult};
use crate::Error;

/// Upper bound on workers for a single job.
pub const MAX_WORKERS: usize = 8;

/// Number of workers for a job of `n` URLs.
///
/// One per URL below 8, half the URLs below 16, otherwise [`MAX_WORKERS`].
pub fn worker_count(n: usize) -> usize {
    if n < 8 {
        n
    } else if n < 16 {
        n / 2
    } else {
        MAX_WORKERS
    }
}

type UrlQueue = Arc<Mutex<mpsc::Receiver<String>>>;

/// State of a single batch request.
#[derive(Debug)]
pub struct BatchJob {
    urls: Vec<String>,
    with_title: bool,
    worker_count: usize,
    results: Vec<IconLookupResult>,
}

impl BatchJob {
    pub fn new(urls: Vec<String>, with_title: bool) -> Self {
        let worker_count = worker_count(urls.len());
        Self { results: Vec::with_capacity(urls.len()), urls, with_title, worker_count }
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Run the job to completion on `engine`.
    ///
    /// Returns exactly one result per input URL, in completion order.
    ///
    /// # Errors
    ///
    /// Returns `Error::BatchIncomplete` if every worker exited before all
    /// results were collected.
    pub async fn run(mut self, engine: &BatchEngine) -> Result<Vec<IconLookupResult>, Error> {
        let expected = self.urls.len();
        if expected == 0 {
            return Ok(self.results);
        }

        let (url_tx, url_rx) = mpsc::channel::<String>(1);
        let queue: UrlQueue = Arc::new(Mutex::new(url_rx));
        let (result_tx, mut result_rx) = mpsc::channel::<IconLookupResult>(self.worker_count);
        let stop = CancellationToken::new();

        tracing::debug!(urls = expected, workers = self.worker_count, with_title = self.with_title, "starting batch job");

        for id in 0..self.worker_count {
            tokio::spawn(worker(
                id,
                engine.clone(),
                self.with_title,
                Arc::clone(&queue),
                result_tx.clone(),
                stop.clone(),
            ));
        }
        drop(queue);
        drop(result_tx);

        tokio::spawn(dispatch(std::mem::take(&mut self.urls), url_tx));

        while let Some(result) = result_rx.recv().await {
            self.results.push(result);
            if self.results.len() == expected {
                break;
            }
        }

        stop.cancel();

        let received = self.results.len();
        if received < expected {
            tracing::error!(expected, received, "batch workers exited early");
            return Err(Error::BatchIncomplete { expected, received });
        }

        Ok(self.results)
    }
}

async fn dispatch(urls: Vec<String>, queue: mpsc::Sender<String>) {
    for raw in urls {
        if queue.send(normalize_url(&raw)).await.is_err() {
            tracing::debug!("no workers left, dispatcher stopping");
            return;
        }
    }
}

async fn worker(
    id: usize, engine: BatchEngine, with_title: bool, queue: UrlQueue, results: mpsc::Sender<IconLookupResult>,
    stop: CancellationToken,
) {
    loop {
        let url = tokio::select! {
            _ = stop.cancelled() => break,
            next = next_url(&queue) => match next {
                Some(url) => url,
                None => break,
            },
        };

        let result = engine.lookup(url, with_title).await;
        if results.send(result).await.is_err() {
            break;
        }
    }

    tracing::trace!(worker = id, "batch worker stopped");
}

async fn next_url(queue: &Mutex<mpsc::Receiver<String>>) -> Option<String> {
    queue.lock().await.recv().await
}
