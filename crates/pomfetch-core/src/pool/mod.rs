//! Fallback fetcher pool.
//!
//! A fixed number of worker threads drain one bounded job queue (capacity =
//! worker count). Each job is either tried against its pinned repository once,
//! or walked across the [`RepositoryList`] in order until a repository answers.
//! Submitting blocks while the queue is full. Every job gets exactly one
//! [`FetchOutcome`] on its own channel.

mod job;
mod process;


use crossbeam_channel::{self as channel, Sender};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::config::PomfetchConfig;
use crate::fetch::{CurlTransport, FailureReporter, TracingReporter, Transport};
use crate::repository::RepositoryList;

pub use job::{FetchOutcome, FetcherJob, JobHandle};
use process::Fetcher;

/// Errors from pool construction and submission.
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error("fetcher pool is shut down")]
    Closed,
    #[error("failed to spawn fetch worker: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Fixed-size set of fetch workers sharing one bounded queue.
pub struct FetcherPool {
    limit: usize,
    queue: Option<Sender<FetcherJob>>,
    workers: Vec<JoinHandle<()>>,
}

impl FetcherPool {
    /// Starts `workers` threads (at least one) over `repositories`.
    pub fn new(
        workers: usize,
        repositories: RepositoryList,
        transport: Arc<dyn Transport>,
        reporter: Arc<dyn FailureReporter>,
    ) -> Result<Self, PoolError> {
        let limit = workers.max(1);
        let (tx, rx) = channel::bounded::<FetcherJob>(limit);
        let fetcher = Arc::new(Fetcher {
            repositories,
            transport,
            reporter,
        });

        let mut pool = FetcherPool {
            limit,
            queue: Some(tx),
            workers: Vec::with_capacity(limit),
        };
        for i in 0..limit {
            let rx = rx.clone();
            let fetcher = Arc::clone(&fetcher);
            let handle = thread::Builder::new()
                .name(format!("pomfetch-worker-{}", i))
                .spawn(move || {
                    for job in rx.iter() {
                        let path = job.path().to_string();
                        // A panicking transport drops the job's sender; the
                        // submitter then reads NotFound and the worker keeps going.
                        if panic::catch_unwind(AssertUnwindSafe(|| fetcher.process(job))).is_err()
                        {
                            tracing::error!("fetch worker panicked while fetching {}", path);
                        }
                    }
                    tracing::debug!("fetch worker {} exiting", i);
                })?;
            pool.workers.push(handle);
        }
        tracing::debug!("started fetcher pool with {} workers", limit);
        Ok(pool)
    }

    /// Pool over the config's repositories using libcurl and log-and-continue reporting.
    pub fn from_config(cfg: &PomfetchConfig) -> anyhow::Result<Self> {
        let repositories = cfg.repository_list()?;
        let pool = Self::new(
            cfg.workers,
            repositories,
            Arc::new(CurlTransport::from_config(cfg)),
            Arc::new(TracingReporter),
        )?;
        Ok(pool)
    }

    /// Number of workers, which is also the queue capacity.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Enqueues a job, blocking while the queue is full.
    pub fn submit(&self, job: FetcherJob) -> Result<(), PoolError> {
        let queue = self.queue.as_ref().ok_or(PoolError::Closed)?;
        queue.send(job).map_err(|_| PoolError::Closed)
    }

    /// Builds a job for `path`, submits it, and returns the handle to wait on.
    pub fn fetch(&self, path: &str, repo: Option<&str>) -> Result<JobHandle, PoolError> {
        let (job, handle) = FetcherJob::new(path, repo);
        self.submit(job)?;
        Ok(handle)
    }

    /// Closes the queue and joins the workers. Jobs already queued still run.
    pub fn shutdown(&mut self) {
        self.queue.take();
        for handle in self.workers.drain(..) {
            if handle.join().is_err() {
                tracing::error!("fetch worker thread panicked");
            }
        }
    }
}

impl Drop for FetcherPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for FetcherPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetcherPool")
            .field("limit", &self.limit)
            .field("open", &self.queue.is_some())
            .field("workers", &self.workers.len())
            .finish()
    }
}
